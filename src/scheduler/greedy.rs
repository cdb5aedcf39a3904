//! Greedy priority-driven dock scheduler.
//!
//! # Algorithm
//!
//! 1. Validate the batch and bay configuration (fail fast, before any
//!    assignment).
//! 2. Rank requests by a scalar score: priority class dominates, arrival
//!    time breaks ties within a class.
//! 3. For each request in ranked order, filter bays by type compatibility;
//!    no compatible bay ⇒ emit a rejection and continue.
//! 4. Assign to the compatible bay that frees up earliest (smallest bay id
//!    on ties) and advance that bay's availability. No backtracking.
//!
//! # Complexity
//! O(n log n + n·m) where n=requests, m=bays.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};
use log::debug;

use crate::models::{Assignment, DockConfig, ScheduleLog, VehicleRequest};
use crate::validation::{validate_input, ValidationError};

/// Default demurrage rate: 150 currency units per hour of waiting.
pub const DEMURRAGE_RATE_PER_HOUR: f64 = 150.0;

/// Multiplier keeping priority class dominant over arrival time in the
/// ranking score. Must exceed any realistic minutes-since-shift-start
/// spread (10_000 min ≈ a week).
const PRIORITY_SPREAD: i64 = 10_000;

/// Greedy priority-driven dock scheduler.
///
/// A pure, stateless batch computation: each call rebuilds bay availability
/// from the shift start, so the same snapshot and configuration always
/// produce the same log. Safe to invoke concurrently for independent
/// snapshots.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dock_schedule::models::{BayType, CargoClass, DockConfig, Priority, VehicleRequest};
/// use dock_schedule::scheduler::DockScheduler;
///
/// let shift_start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let config = DockConfig::new(shift_start).with_bay(1, BayType::Dry);
/// let requests = vec![
///     VehicleRequest::new("TRK-1", shift_start, 60).with_priority(Priority::High),
/// ];
///
/// let log = DockScheduler::new().schedule(&requests, &config).unwrap();
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.assignments[0].bay_id, Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DockScheduler {
    demurrage_rate_per_hour: f64,
}

impl DockScheduler {
    /// Creates a scheduler with the default demurrage rate.
    pub fn new() -> Self {
        Self {
            demurrage_rate_per_hour: DEMURRAGE_RATE_PER_HOUR,
        }
    }

    /// Sets the demurrage rate (currency units per hour of waiting).
    pub fn with_demurrage_rate(mut self, rate_per_hour: f64) -> Self {
        self.demurrage_rate_per_hour = rate_per_hour;
        self
    }

    /// Schedules a frozen snapshot of requests onto the configured bays.
    ///
    /// Returns one assignment per request — rejections included — in
    /// processing order, plus the accumulated demurrage cost. Validation
    /// problems fail the entire run before any assignment is made.
    pub fn schedule(
        &self,
        requests: &[VehicleRequest],
        config: &DockConfig,
    ) -> Result<ScheduleLog, Vec<ValidationError>> {
        validate_input(requests, config)?;

        let mut log = ScheduleLog::new();
        if requests.is_empty() {
            return Ok(log);
        }

        // Per-run availability arena: every bay frees up at shift start.
        let mut available_from: HashMap<u32, NaiveDateTime> = config
            .bays
            .iter()
            .map(|b| (b.id, config.shift_start))
            .collect();

        let order = ranked_order(requests, config.shift_start);
        debug!(
            "scheduling {} requests over {} bays",
            requests.len(),
            config.bay_count()
        );

        for &idx in &order {
            let request = &requests[idx];

            let compatible = config.compatible_bays(request.cargo_class);
            if compatible.is_empty() {
                debug!(
                    "request '{}': no {:?}-compatible bay, rejecting",
                    request.id, request.cargo_class
                );
                log.push(Assignment::rejected(request));
                continue;
            }

            // Earliest-free bay; smallest id on ties, for determinism.
            let bay_id = compatible
                .iter()
                .copied()
                .min_by_key(|id| (available_from[id], *id))
                .expect("compatible bay set is non-empty");
            let free_from = available_from[&bay_id];

            let planned_start = request
                .estimated_arrival
                .max(free_from)
                .max(config.shift_start);
            let planned_end = planned_start + Duration::minutes(request.service_duration_min);

            log.push(Assignment::scheduled(
                request,
                bay_id,
                planned_start,
                planned_end,
                self.demurrage_rate_per_hour,
            ));
            available_from.insert(bay_id, planned_end);
        }

        Ok(log)
    }
}

impl Default for DockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Ranking score: priority class dominates, earlier arrivals win within a
/// class (larger score ⇒ processed first).
fn priority_score(request: &VehicleRequest, shift_start: NaiveDateTime) -> i64 {
    let minutes_since_start = (request.estimated_arrival - shift_start).num_minutes();
    request.priority.weight() * PRIORITY_SPREAD - minutes_since_start
}

/// Returns request indices in descending score order.
///
/// The sort is stable, so requests with identical priority and arrival
/// minute keep their input order.
fn ranked_order(requests: &[VehicleRequest], shift_start: NaiveDateTime) -> Vec<usize> {
    let scores: Vec<i64> = requests
        .iter()
        .map(|r| priority_score(r, shift_start))
        .collect();
    let mut indices: Vec<usize> = (0..requests.len()).collect();
    indices.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BayType, CargoClass, Priority, ServiceStatus};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn one_dry_bay() -> DockConfig {
        DockConfig::new(at(8, 0)).with_bay(1, BayType::Dry)
    }

    fn request(id: &str, arrival: NaiveDateTime, duration_min: i64) -> VehicleRequest {
        VehicleRequest::new(id, arrival, duration_min)
    }

    #[test]
    fn test_priority_outranks_earlier_arrival() {
        // A: High, arrives 08:30, 60 min. B: Medium, arrives 08:00, 30 min.
        // A is ranked first despite arriving later; B then waits behind it.
        let requests = vec![
            request("B", at(8, 0), 30).with_priority(Priority::Medium),
            request("A", at(8, 30), 60).with_priority(Priority::High),
        ];
        let log = DockScheduler::new()
            .schedule(&requests, &one_dry_bay())
            .unwrap();

        let a = log.assignment_for_request("A").unwrap();
        assert_eq!(a.planned_start, Some(at(8, 30)));
        assert_eq!(a.planned_end, Some(at(9, 30)));
        assert_eq!(a.wait_min, 0);
        assert_eq!(a.status, ServiceStatus::OnTime);

        let b = log.assignment_for_request("B").unwrap();
        assert_eq!(b.planned_start, Some(at(9, 30)));
        assert_eq!(b.planned_end, Some(at(10, 0)));
        assert_eq!(b.wait_min, 90);
        assert!((b.demurrage_cost - 225.0).abs() < 1e-10);
        assert_eq!(b.status, ServiceStatus::Critical);

        // Processing order follows the ranking
        assert_eq!(log.assignments[0].request_id, "A");
        assert!((log.total_demurrage - 225.0).abs() < 1e-10);
    }

    #[test]
    fn test_earlier_arrival_wins_within_priority_class() {
        let requests = vec![
            request("late", at(10, 0), 30).with_priority(Priority::High),
            request("early", at(8, 15), 30).with_priority(Priority::High),
        ];
        let log = DockScheduler::new()
            .schedule(&requests, &one_dry_bay())
            .unwrap();
        assert_eq!(log.assignments[0].request_id, "early");
    }

    #[test]
    fn test_identical_score_keeps_input_order() {
        let requests = vec![
            request("first", at(9, 0), 30),
            request("second", at(9, 0), 30),
        ];
        let log = DockScheduler::new()
            .schedule(&requests, &one_dry_bay())
            .unwrap();
        assert_eq!(log.assignments[0].request_id, "first");
        assert_eq!(log.assignments[1].request_id, "second");
    }

    #[test]
    fn test_refrigerated_without_cold_bay_is_rejected() {
        let requests = vec![request("TRK-R", at(9, 0), 45)
            .with_cargo_class(CargoClass::Refrigerated)
            .with_priority(Priority::High)];
        let log = DockScheduler::new()
            .schedule(&requests, &one_dry_bay())
            .unwrap();

        assert_eq!(log.len(), 1);
        let a = &log.assignments[0];
        assert_eq!(a.status, ServiceStatus::Rejected);
        assert_eq!(a.bay_id, None);
        assert_eq!(a.wait_min, 0);
        assert_eq!(a.demurrage_cost, 0.0);
        assert_eq!(log.total_demurrage, 0.0);
    }

    #[test]
    fn test_rejection_consumes_no_bay_time() {
        // The rejected refrigerated truck must not delay the dry one.
        let requests = vec![
            request("cold", at(8, 0), 120)
                .with_cargo_class(CargoClass::Refrigerated)
                .with_priority(Priority::High),
            request("dry", at(8, 0), 30),
        ];
        let log = DockScheduler::new()
            .schedule(&requests, &one_dry_bay())
            .unwrap();
        let dry = log.assignment_for_request("dry").unwrap();
        assert_eq!(dry.planned_start, Some(at(8, 0)));
        assert_eq!(dry.wait_min, 0);
    }

    #[test]
    fn test_compatibility_routing() {
        let config = DockConfig::new(at(8, 0))
            .with_bay(1, BayType::Dry)
            .with_bay(2, BayType::Cold);
        let requests = vec![
            request("dry", at(8, 0), 60),
            request("cold", at(8, 0), 60).with_cargo_class(CargoClass::Refrigerated),
        ];
        let log = DockScheduler::new().schedule(&requests, &config).unwrap();
        assert_eq!(log.assignment_for_request("dry").unwrap().bay_id, Some(1));
        assert_eq!(log.assignment_for_request("cold").unwrap().bay_id, Some(2));
        // Different bay types → both run in parallel from shift start
        assert_eq!(
            log.assignment_for_request("cold").unwrap().planned_start,
            Some(at(8, 0))
        );
    }

    #[test]
    fn test_earliest_free_bay_tie_breaks_by_id() {
        let config = DockConfig::new(at(8, 0))
            .with_bay(2, BayType::Dry)
            .with_bay(1, BayType::Dry);
        let requests = vec![request("TRK-1", at(8, 0), 30)];
        let log = DockScheduler::new().schedule(&requests, &config).unwrap();
        // Both bays free at shift start → smallest id wins
        assert_eq!(log.assignments[0].bay_id, Some(1));
    }

    #[test]
    fn test_arrival_before_shift_start_clamped() {
        let requests = vec![request("early-bird", at(6, 45), 30)];
        let log = DockScheduler::new()
            .schedule(&requests, &one_dry_bay())
            .unwrap();
        let a = &log.assignments[0];
        assert_eq!(a.planned_start, Some(at(8, 0)));
        // Waiting from 06:45 to 08:00 counts as demurrage
        assert_eq!(a.wait_min, 75);
        assert_eq!(a.status, ServiceStatus::Critical);
    }

    #[test]
    fn test_no_overlap_per_bay() {
        let config = DockConfig::new(at(8, 0))
            .with_bay(1, BayType::Dry)
            .with_bay(2, BayType::Dry);
        let requests: Vec<VehicleRequest> = (0..8u32)
            .map(|i| {
                request(format!("TRK-{i}").as_str(), at(8, (i * 7) % 60), 45).with_priority(
                    match i % 3 {
                        0 => Priority::High,
                        1 => Priority::Medium,
                        _ => Priority::Low,
                    },
                )
            })
            .collect();
        let log = DockScheduler::new().schedule(&requests, &config).unwrap();
        assert_eq!(log.len(), requests.len());

        for bay_id in [1, 2] {
            let mut windows: Vec<(NaiveDateTime, NaiveDateTime)> = log
                .assignments_for_bay(bay_id)
                .iter()
                .map(|a| (a.planned_start.unwrap(), a.planned_end.unwrap()))
                .collect();
            windows.sort();
            for pair in windows.windows(2) {
                assert!(pair[0].1 <= pair[1].0, "overlap on bay {bay_id}");
            }
        }
    }

    #[test]
    fn test_wait_non_negative_and_cost_linear() {
        let requests = vec![
            request("a", at(8, 0), 60).with_priority(Priority::High),
            request("b", at(8, 0), 60),
            request("c", at(8, 0), 60),
        ];
        let log = DockScheduler::new()
            .schedule(&requests, &one_dry_bay())
            .unwrap();
        for a in &log.assignments {
            assert!(a.wait_min >= 0);
            let expected = (a.wait_min as f64 / 60.0) * DEMURRAGE_RATE_PER_HOUR;
            assert!((a.demurrage_cost - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_custom_demurrage_rate() {
        let requests = vec![
            request("a", at(8, 0), 60).with_priority(Priority::High),
            request("b", at(8, 0), 60),
        ];
        let log = DockScheduler::new()
            .with_demurrage_rate(60.0)
            .schedule(&requests, &one_dry_bay())
            .unwrap();
        let b = log.assignment_for_request("b").unwrap();
        assert_eq!(b.wait_min, 60);
        assert!((b.demurrage_cost - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_idempotence() {
        let config = DockConfig::new(at(8, 0))
            .with_bay(1, BayType::Dry)
            .with_bay(2, BayType::Cold);
        let requests = vec![
            request("a", at(8, 40), 45).with_priority(Priority::Medium),
            request("b", at(8, 10), 90).with_cargo_class(CargoClass::Refrigerated),
            request("c", at(8, 40), 45).with_priority(Priority::Medium),
        ];
        let scheduler = DockScheduler::new();
        let first = scheduler.schedule(&requests, &config).unwrap();
        let second = scheduler.schedule(&requests, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_batch() {
        let log = DockScheduler::new().schedule(&[], &one_dry_bay()).unwrap();
        assert!(log.is_empty());
        assert_eq!(log.total_demurrage, 0.0);
    }

    #[test]
    fn test_zero_bays_rejects_everything() {
        let config = DockConfig::new(at(8, 0));
        let requests = vec![
            request("a", at(8, 0), 30),
            request("b", at(8, 0), 30).with_cargo_class(CargoClass::Refrigerated),
        ];
        let log = DockScheduler::new().schedule(&requests, &config).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.rejected_count(), 2);
    }

    #[test]
    fn test_invalid_input_fails_whole_run() {
        let requests = vec![
            request("ok", at(8, 0), 30),
            request("bad", at(8, 0), 0), // non-positive duration
        ];
        let errors = DockScheduler::new()
            .schedule(&requests, &one_dry_bay())
            .unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_ranking_scores() {
        let shift_start = at(8, 0);
        let high_late = request("h", at(9, 0), 30).with_priority(Priority::High);
        let medium_early = request("m", at(8, 0), 30).with_priority(Priority::Medium);
        // High at +60 min: 3*10000 - 60 = 29940; Medium at +0: 2*10000 = 20000
        assert_eq!(priority_score(&high_late, shift_start), 29_940);
        assert_eq!(priority_score(&medium_early, shift_start), 20_000);
    }
}
