//! Schedule quality metrics (KPIs).
//!
//! Computes the aggregate indicators the collaborator renders next to the
//! assignment log.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Success Rate | Fraction of loads serviced with zero wait |
//! | Avg / Max Wait | Over all records (rejections count as zero wait) |
//! | Total Demurrage | Sum of waiting costs |
//! | Cost per Load | Total demurrage / total loads |
//! | Operational Efficiency | Σ duration / Σ (duration + wait) |
//! | End of Operations | Latest planned service end |

use chrono::NaiveDateTime;

use crate::models::{ScheduleLog, ServiceStatus};

/// Aggregate performance indicators for one scheduling run.
///
/// Rates and the efficiency are fractions in `0.0..=1.0`; waits are in
/// minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct DockKpi {
    /// Total loads in the run (rejections included).
    pub total_loads: usize,
    /// Loads serviced with zero wait.
    pub on_time_count: usize,
    /// Loads with no compatible bay.
    pub rejected_count: usize,
    /// On-time fraction of all loads.
    pub success_rate: f64,
    /// Mean wait across all records in minutes.
    pub avg_wait_min: f64,
    /// Largest single wait in minutes.
    pub max_wait_min: i64,
    /// Total demurrage cost.
    pub total_demurrage: f64,
    /// Demurrage cost per load.
    pub cost_per_load: f64,
    /// Service time as a fraction of service plus waiting time.
    pub operational_efficiency: f64,
    /// Latest planned service end, if anything was scheduled.
    pub end_of_operations: Option<NaiveDateTime>,
}

impl DockKpi {
    /// Computes KPIs from a schedule log.
    ///
    /// Sums run over every record: rejected loads contribute their service
    /// duration and a zero wait, matching how the log itself accounts for
    /// them.
    pub fn calculate(log: &ScheduleLog) -> Self {
        let total_loads = log.len();
        let mut on_time_count = 0usize;
        let mut rejected_count = 0usize;
        let mut total_wait: i64 = 0;
        let mut max_wait: i64 = 0;
        let mut total_duration: i64 = 0;

        for a in &log.assignments {
            match a.status {
                ServiceStatus::OnTime => on_time_count += 1,
                ServiceStatus::Rejected => rejected_count += 1,
                _ => {}
            }
            total_wait += a.wait_min;
            max_wait = max_wait.max(a.wait_min);
            total_duration += a.service_duration_min;
        }

        let success_rate = if total_loads == 0 {
            0.0
        } else {
            on_time_count as f64 / total_loads as f64
        };

        let avg_wait_min = if total_loads == 0 {
            0.0
        } else {
            total_wait as f64 / total_loads as f64
        };

        let cost_per_load = if total_loads == 0 {
            0.0
        } else {
            log.total_demurrage / total_loads as f64
        };

        let busy_plus_wait = total_duration + total_wait;
        let operational_efficiency = if busy_plus_wait <= 0 {
            1.0
        } else {
            total_duration as f64 / busy_plus_wait as f64
        };

        Self {
            total_loads,
            on_time_count,
            rejected_count,
            success_rate,
            avg_wait_min,
            max_wait_min: max_wait,
            total_demurrage: log.total_demurrage,
            cost_per_load,
            operational_efficiency,
            end_of_operations: log.end_of_operations(),
        }
    }
}
