//! Service bay and dock configuration models.
//!
//! A bay is a physical slot that services one vehicle at a time. Bays are
//! typed: refrigerated cargo can only be serviced at a cold bay, everything
//! else goes to a dry bay. The bay records here are immutable configuration;
//! per-run availability is scheduler state (rebuilt fresh each run).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::CargoClass;

/// Bay type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BayType {
    /// Ambient-temperature bay.
    Dry,
    /// Refrigerated bay.
    Cold,
}

impl BayType {
    /// Whether a bay of this type can service the given cargo class.
    ///
    /// Refrigerated cargo maps to cold bays only; everything else maps to
    /// dry bays only.
    #[inline]
    pub fn accepts(&self, cargo_class: CargoClass) -> bool {
        match cargo_class {
            CargoClass::Refrigerated => *self == BayType::Cold,
            CargoClass::Dry => *self == BayType::Dry,
        }
    }
}

/// A schedulable service bay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bay {
    /// Bay number, 1..N, unique within a dock configuration.
    pub id: u32,
    /// Bay type classification.
    pub bay_type: BayType,
}

impl Bay {
    /// Creates a bay.
    pub fn new(id: u32, bay_type: BayType) -> Self {
        Self { id, bay_type }
    }
}

/// Dock configuration: the fixed bay set and the shift start.
///
/// At the start of each scheduling run every bay becomes free at
/// `shift_start`; nothing is ever scheduled before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    /// Configured bays.
    pub bays: Vec<Bay>,
    /// Start of the operating shift.
    pub shift_start: NaiveDateTime,
}

impl DockConfig {
    /// Creates an empty configuration with the given shift start.
    pub fn new(shift_start: NaiveDateTime) -> Self {
        Self {
            bays: Vec::new(),
            shift_start,
        }
    }

    /// Adds a bay.
    pub fn with_bay(mut self, id: u32, bay_type: BayType) -> Self {
        self.bays.push(Bay::new(id, bay_type));
        self
    }

    /// Number of configured bays.
    pub fn bay_count(&self) -> usize {
        self.bays.len()
    }

    /// Looks up a bay by id.
    pub fn bay(&self, id: u32) -> Option<&Bay> {
        self.bays.iter().find(|b| b.id == id)
    }

    /// Whether any configured bay can service the given cargo class.
    pub fn has_compatible_bay(&self, cargo_class: CargoClass) -> bool {
        self.bays.iter().any(|b| b.bay_type.accepts(cargo_class))
    }

    /// Bay ids compatible with the given cargo class, in configuration order.
    pub fn compatible_bays(&self, cargo_class: CargoClass) -> Vec<u32> {
        self.bays
            .iter()
            .filter(|b| b.bay_type.accepts(cargo_class))
            .map(|b| b.id)
            .collect()
    }
}
