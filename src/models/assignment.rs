//! Assignment (schedule output) model.
//!
//! An assignment records the outcome of matching one vehicle request to a
//! bay: either a planned service window with its waiting cost, or a
//! rejection when no compatible bay type exists. A full run produces a
//! [`ScheduleLog`] — one assignment per input request, in processing order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{CargoClass, Priority, VehicleRequest};

/// Outcome classification for a single assignment.
///
/// Derived from the wait, never set directly — except `Rejected`, which
/// overrides everything when no compatible bay type is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    /// Service starts at the estimated arrival (zero wait).
    OnTime,
    /// Wait under 30 minutes.
    MinorDelay,
    /// Wait of 30 minutes or more.
    Critical,
    /// No bay of a compatible type exists in the configuration.
    Rejected,
}

impl ServiceStatus {
    /// Derives the status from a wait in minutes.
    pub fn from_wait(wait_min: i64) -> Self {
        if wait_min == 0 {
            ServiceStatus::OnTime
        } else if wait_min < 30 {
            ServiceStatus::MinorDelay
        } else {
            ServiceStatus::Critical
        }
    }
}

/// Result of matching one request to a bay, or a rejection.
///
/// Request fields are denormalized into the record so the collaborator can
/// render the log without joining back to the input set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Source request id.
    pub request_id: String,
    /// Cargo description, echoed from the request.
    pub cargo_label: String,
    /// Cargo classification, echoed from the request.
    pub cargo_class: CargoClass,
    /// Priority, echoed from the request.
    pub priority: Priority,
    /// Assigned bay id. `None` ⇒ rejected.
    pub bay_id: Option<u32>,
    /// Estimated arrival, echoed from the request.
    pub estimated_arrival: NaiveDateTime,
    /// Planned service start. `None` if rejected.
    pub planned_start: Option<NaiveDateTime>,
    /// Planned service end. `None` if rejected.
    pub planned_end: Option<NaiveDateTime>,
    /// Service duration in minutes, echoed from the request.
    pub service_duration_min: i64,
    /// Wait in whole minutes (start − arrival, never negative; 0 if rejected).
    pub wait_min: i64,
    /// Demurrage cost for the wait (0 if rejected).
    pub demurrage_cost: f64,
    /// Outcome classification.
    pub status: ServiceStatus,
}

impl Assignment {
    /// Creates a scheduled assignment, deriving wait, cost, and status.
    ///
    /// `planned_start` must already satisfy the scheduler's lower bounds
    /// (arrival, bay free time, shift start); the wait is truncated to
    /// whole minutes and clamped at zero.
    pub fn scheduled(
        request: &VehicleRequest,
        bay_id: u32,
        planned_start: NaiveDateTime,
        planned_end: NaiveDateTime,
        demurrage_rate_per_hour: f64,
    ) -> Self {
        let wait_min = (planned_start - request.estimated_arrival)
            .num_minutes()
            .max(0);
        let demurrage_cost = (wait_min as f64 / 60.0) * demurrage_rate_per_hour;
        Self {
            request_id: request.id.clone(),
            cargo_label: request.cargo_label.clone(),
            cargo_class: request.cargo_class,
            priority: request.priority,
            bay_id: Some(bay_id),
            estimated_arrival: request.estimated_arrival,
            planned_start: Some(planned_start),
            planned_end: Some(planned_end),
            service_duration_min: request.service_duration_min,
            wait_min,
            demurrage_cost,
            status: ServiceStatus::from_wait(wait_min),
        }
    }

    /// Creates a rejection: no compatible bay, no timestamps, zero wait and cost.
    pub fn rejected(request: &VehicleRequest) -> Self {
        Self {
            request_id: request.id.clone(),
            cargo_label: request.cargo_label.clone(),
            cargo_class: request.cargo_class,
            priority: request.priority,
            bay_id: None,
            estimated_arrival: request.estimated_arrival,
            planned_start: None,
            planned_end: None,
            service_duration_min: request.service_duration_min,
            wait_min: 0,
            demurrage_cost: 0.0,
            status: ServiceStatus::Rejected,
        }
    }

    /// Whether this record is a rejection.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.status == ServiceStatus::Rejected
    }
}

/// A complete scheduling run output.
///
/// Assignments appear in processing order (descending ranking score), one
/// per input request, rejections included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleLog {
    /// Assignments in processing order.
    pub assignments: Vec<Assignment>,
    /// Sum of demurrage costs over all non-rejected assignments.
    pub total_demurrage: f64,
}

impl ScheduleLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment, accumulating its demurrage cost.
    pub fn push(&mut self, assignment: Assignment) {
        self.total_demurrage += assignment.demurrage_cost;
        self.assignments.push(assignment);
    }

    /// Finds the assignment for a given request.
    pub fn assignment_for_request(&self, request_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.request_id == request_id)
    }

    /// Returns all assignments placed on a given bay.
    pub fn assignments_for_bay(&self, bay_id: u32) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.bay_id == Some(bay_id))
            .collect()
    }

    /// Number of rejected assignments.
    pub fn rejected_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_rejected()).count()
    }

    /// Latest planned end across all scheduled assignments.
    pub fn end_of_operations(&self) -> Option<NaiveDateTime> {
        self.assignments.iter().filter_map(|a| a.planned_end).max()
    }

    /// Number of assignments (rejections included).
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn request(id: &str, arrival: NaiveDateTime, duration_min: i64) -> VehicleRequest {
        VehicleRequest::new(id, arrival, duration_min)
    }

    #[test]
    fn test_status_from_wait() {
        assert_eq!(ServiceStatus::from_wait(0), ServiceStatus::OnTime);
        assert_eq!(ServiceStatus::from_wait(1), ServiceStatus::MinorDelay);
        assert_eq!(ServiceStatus::from_wait(29), ServiceStatus::MinorDelay);
        assert_eq!(ServiceStatus::from_wait(30), ServiceStatus::Critical);
        assert_eq!(ServiceStatus::from_wait(480), ServiceStatus::Critical);
    }

    #[test]
    fn test_scheduled_derives_wait_and_cost() {
        let req = request("TRK-1", at(8, 0), 30);
        let start = at(9, 30);
        let a = Assignment::scheduled(&req, 1, start, start + Duration::minutes(30), 150.0);

        assert_eq!(a.bay_id, Some(1));
        assert_eq!(a.wait_min, 90);
        assert!((a.demurrage_cost - 225.0).abs() < 1e-10);
        assert_eq!(a.status, ServiceStatus::Critical);
        assert_eq!(a.planned_end, Some(at(10, 0)));
    }

    #[test]
    fn test_scheduled_on_time() {
        let req = request("TRK-1", at(8, 30), 60);
        let a = Assignment::scheduled(&req, 2, at(8, 30), at(9, 30), 150.0);
        assert_eq!(a.wait_min, 0);
        assert_eq!(a.demurrage_cost, 0.0);
        assert_eq!(a.status, ServiceStatus::OnTime);
    }

    #[test]
    fn test_rejected() {
        let req = request("TRK-9", at(10, 0), 45).with_label("Chilled Foods");
        let a = Assignment::rejected(&req);
        assert!(a.is_rejected());
        assert_eq!(a.bay_id, None);
        assert_eq!(a.planned_start, None);
        assert_eq!(a.planned_end, None);
        assert_eq!(a.wait_min, 0);
        assert_eq!(a.demurrage_cost, 0.0);
        assert_eq!(a.service_duration_min, 45);
    }

    #[test]
    fn test_log_accumulates_cost() {
        let mut log = ScheduleLog::new();
        let r1 = request("TRK-1", at(8, 0), 30);
        let r2 = request("TRK-2", at(8, 0), 30);
        log.push(Assignment::scheduled(&r1, 1, at(9, 0), at(9, 30), 150.0)); // wait 60 → $150
        log.push(Assignment::scheduled(&r2, 1, at(9, 30), at(10, 0), 150.0)); // wait 90 → $225
        log.push(Assignment::rejected(&request("TRK-3", at(8, 0), 30)));

        assert_eq!(log.len(), 3);
        assert_eq!(log.rejected_count(), 1);
        assert!((log.total_demurrage - 375.0).abs() < 1e-10);
        assert_eq!(log.end_of_operations(), Some(at(10, 0)));
    }

    #[test]
    fn test_log_queries() {
        let mut log = ScheduleLog::new();
        let r1 = request("TRK-1", at(8, 0), 30);
        let r2 = request("TRK-2", at(8, 0), 30);
        log.push(Assignment::scheduled(&r1, 1, at(8, 0), at(8, 30), 150.0));
        log.push(Assignment::scheduled(&r2, 2, at(8, 0), at(8, 30), 150.0));

        assert_eq!(
            log.assignment_for_request("TRK-2").unwrap().bay_id,
            Some(2)
        );
        assert!(log.assignment_for_request("TRK-9").is_none());
        assert_eq!(log.assignments_for_bay(1).len(), 1);
        assert_eq!(log.assignments_for_bay(3).len(), 0);
    }

    #[test]
    fn test_empty_log() {
        let log = ScheduleLog::new();
        assert!(log.is_empty());
        assert_eq!(log.end_of_operations(), None);
        assert_eq!(log.total_demurrage, 0.0);
    }
}
