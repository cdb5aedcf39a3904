//! Dock yard scheduling library.
//!
//! Assigns arriving vehicles to typed service bays: a greedy,
//! priority-driven list scheduler with hard type-compatibility constraints
//! and demurrage (waiting-cost) accounting. Each scheduling run is a pure,
//! one-shot batch computation over a frozen snapshot of requests — no
//! state survives between runs.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `VehicleRequest`, `Bay`, `DockConfig`,
//!   `Assignment`, `ScheduleLog`, `ServiceStatus`
//! - **`scheduler`**: `DockScheduler` (ranking + greedy assignment) and
//!   `DockKpi` (run-level statistics)
//! - **`validation`**: Batch/configuration integrity checks, fail-fast
//! - **`generator`**: Random scenario synthesis for demos and experiments
//! - **`repository`**: CRUD working set feeding snapshots to the scheduler
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use dock_schedule::models::{BayType, CargoClass, DockConfig, Priority, VehicleRequest};
//! use dock_schedule::scheduler::{DockKpi, DockScheduler};
//!
//! let shift_start = NaiveDate::from_ymd_opt(2024, 3, 1)
//!     .unwrap()
//!     .and_hms_opt(8, 0, 0)
//!     .unwrap();
//! let config = DockConfig::new(shift_start)
//!     .with_bay(1, BayType::Dry)
//!     .with_bay(2, BayType::Cold);
//!
//! let requests = vec![
//!     VehicleRequest::new("TRK-1", shift_start, 60)
//!         .with_label("Pharmaceuticals")
//!         .with_cargo_class(CargoClass::Refrigerated)
//!         .with_priority(Priority::High),
//!     VehicleRequest::new("TRK-2", shift_start, 45).with_label("Paper"),
//! ];
//!
//! let log = DockScheduler::new().schedule(&requests, &config).unwrap();
//! assert_eq!(log.len(), 2);
//!
//! let kpi = DockKpi::calculate(&log);
//! assert_eq!(kpi.total_loads, 2);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod generator;
pub mod models;
pub mod repository;
pub mod scheduler;
pub mod validation;
