//! Greedy dock scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! [`DockScheduler`] uses a greedy, priority-driven, earliest-free-bay
//! heuristic with hard type-compatibility constraints. It is not optimal,
//! but it is deterministic and fast enough to re-run on every edit.
//!
//! # KPI
//!
//! [`DockKpi`] computes the run-level metrics the collaborator displays:
//! success rate, waits, demurrage totals, and operational efficiency.
//!
//! # Reference
//!
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod greedy;
mod kpi;

pub use greedy::{DockScheduler, DEMURRAGE_RATE_PER_HOUR};
pub use kpi::DockKpi;
