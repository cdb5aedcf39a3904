//! Vehicle service request model.
//!
//! A request represents one truck waiting to be serviced at a dock bay:
//! what it carries, how urgent it is, when it is expected, and how long
//! unloading takes. Requests are immutable once handed to a scheduling
//! run — the collaborator edits its own copy between runs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Cargo classification driving bay compatibility.
///
/// Only refrigerated cargo requires a cold bay; every other cargo kind
/// (electronics, paper, chemicals, ...) is dry for scheduling purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CargoClass {
    /// Ambient-temperature cargo.
    Dry,
    /// Temperature-controlled cargo, requires a cold bay.
    Refrigerated,
}

/// Scheduling priority class.
///
/// Priority dominates processing order: any High request outranks any
/// Medium request regardless of arrival time (see the scheduler's score
/// construction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Numeric weight used in the ranking score (High=3, Medium=2, Low=1).
    #[inline]
    pub fn weight(&self) -> i64 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Parses a free-text priority label, case-insensitively.
    ///
    /// Unrecognized values degrade to `Low` instead of erroring, so a batch
    /// with partial or legacy priority data still schedules.
    pub fn parse_lossy(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Low
    }
}

/// Deserializes through [`Priority::parse_lossy`]: unknown priority values
/// on the wire become `Low` instead of failing the batch.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Priority::parse_lossy(&label))
    }
}

/// One truck's service request.
///
/// # Time Representation
/// Arrival is a wall-clock timestamp; the service duration is in whole
/// minutes and must be positive (enforced by [`crate::validation`], not
/// by construction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRequest {
    /// Identifier, unique within a batch (e.g., "TRK-4821").
    pub id: String,
    /// Free-text cargo description. Display only, no scheduling effect.
    pub cargo_label: String,
    /// Cargo classification (drives bay compatibility).
    pub cargo_class: CargoClass,
    /// Scheduling priority.
    pub priority: Priority,
    /// Estimated arrival at the yard.
    pub estimated_arrival: NaiveDateTime,
    /// Service (unloading) duration in minutes.
    pub service_duration_min: i64,
}

impl VehicleRequest {
    /// Creates a dry, low-priority request with the given arrival and duration.
    pub fn new(id: impl Into<String>, estimated_arrival: NaiveDateTime, duration_min: i64) -> Self {
        Self {
            id: id.into(),
            cargo_label: String::new(),
            cargo_class: CargoClass::Dry,
            priority: Priority::Low,
            estimated_arrival,
            service_duration_min: duration_min,
        }
    }

    /// Sets the cargo description.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.cargo_label = label.into();
        self
    }

    /// Sets the cargo classification.
    pub fn with_cargo_class(mut self, cargo_class: CargoClass) -> Self {
        self.cargo_class = cargo_class;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
