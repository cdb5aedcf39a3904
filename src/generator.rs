//! Random scenario synthesis.
//!
//! Produces plausible vehicle batches for demos and load experiments:
//! arrivals spread over the early shift, durations from the common slot
//! sizes, priorities skewed towards High (busy yards are mostly urgent),
//! and cargo drawn from a small catalog with a refrigerated minority.
//!
//! The caller supplies the [`Rng`], so a seeded generator yields the same
//! batch every time.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};
use log::debug;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{CargoClass, Priority, VehicleRequest};

/// Cargo catalog: label and classification.
const CARGO_CATALOG: &[(&str, CargoClass)] = &[
    ("Electronics", CargoClass::Dry),
    ("Paper", CargoClass::Dry),
    ("Textiles", CargoClass::Dry),
    ("Chilled Foods", CargoClass::Refrigerated),
    ("Pharmaceuticals", CargoClass::Refrigerated),
    ("Automotive", CargoClass::Dry),
    ("Chemicals", CargoClass::Dry),
];

/// Common service slot sizes in minutes.
const DURATIONS_MIN: &[i64] = &[30, 45, 60, 90, 120];

/// Priority pool, weighted towards High.
const PRIORITY_POOL: &[Priority] = &[
    Priority::High,
    Priority::High,
    Priority::Medium,
    Priority::Medium,
    Priority::Low,
];

/// Random batch generator.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dock_schedule::generator::ScenarioGenerator;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let shift_start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let mut rng = SmallRng::seed_from_u64(7);
/// let batch = ScenarioGenerator::new().generate(&mut rng, shift_start);
/// assert_eq!(batch.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioGenerator {
    truck_count: usize,
    arrival_window_min: i64,
}

impl ScenarioGenerator {
    /// Creates a generator with the default shape: 10 trucks arriving
    /// within the first 6 hours of the shift.
    pub fn new() -> Self {
        Self {
            truck_count: 10,
            arrival_window_min: 360,
        }
    }

    /// Sets the number of trucks per batch.
    pub fn with_truck_count(mut self, count: usize) -> Self {
        self.truck_count = count;
        self
    }

    /// Sets the arrival window (minutes after shift start).
    pub fn with_arrival_window_min(mut self, window_min: i64) -> Self {
        self.arrival_window_min = window_min.max(0);
        self
    }

    /// Generates a batch of requests with unique ids.
    pub fn generate<R: Rng>(&self, rng: &mut R, shift_start: NaiveDateTime) -> Vec<VehicleRequest> {
        let mut used_ids = HashSet::new();
        let mut batch = Vec::with_capacity(self.truck_count);

        for _ in 0..self.truck_count {
            let id = loop {
                let candidate = format!("TRK-{}", rng.random_range(1000..10_000));
                if used_ids.insert(candidate.clone()) {
                    break candidate;
                }
            };

            let arrival =
                shift_start + Duration::minutes(rng.random_range(0..=self.arrival_window_min));
            let duration = *DURATIONS_MIN.choose(rng).expect("non-empty duration set");
            let priority = *PRIORITY_POOL.choose(rng).expect("non-empty priority pool");
            let (label, cargo_class) = *CARGO_CATALOG.choose(rng).expect("non-empty catalog");

            batch.push(
                VehicleRequest::new(id, arrival, duration)
                    .with_label(label)
                    .with_cargo_class(cargo_class)
                    .with_priority(priority),
            );
        }

        debug!("generated scenario with {} trucks", batch.len());
        batch
    }
}

impl Default for ScenarioGenerator {
    fn default() -> Self {
        Self::new()
    }
}
