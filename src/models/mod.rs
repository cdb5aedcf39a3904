//! Dock scheduling domain models.
//!
//! Core data types for representing dock scheduling problems and their
//! solutions: vehicle requests, typed service bays, and assignment logs.
//!
//! # Domain Mapping
//!
//! | dock-schedule | Scheduling theory |
//! |---------------|-------------------|
//! | VehicleRequest | Job with release time |
//! | Bay | Machine with eligibility constraint |
//! | ScheduleLog | Single-machine-per-job schedule |

mod assignment;
mod bay;
mod request;

pub use assignment::{Assignment, ScheduleLog, ServiceStatus};
pub use bay::{Bay, BayType, DockConfig};
pub use request::{CargoClass, Priority, VehicleRequest};
