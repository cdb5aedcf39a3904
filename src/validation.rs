//! Input validation for scheduling runs.
//!
//! Checks structural integrity of the request batch and the dock
//! configuration before any assignment is made. Detects:
//! - Missing request ids
//! - Duplicate request ids within a batch
//! - Non-positive service durations
//! - Duplicate or out-of-range bay ids
//!
//! A failed validation rejects the entire run — the scheduler never
//! partially applies a malformed batch. Type incompatibility is *not* a
//! validation concern; it surfaces as a `Rejected` assignment.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{DockConfig, VehicleRequest};

/// Validation result: all detected problems, or nothing.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A structural problem in the batch or dock configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A request has an empty id.
    #[error("request has an empty id")]
    EmptyRequestId,
    /// Two requests in the batch share an id.
    #[error("duplicate request id '{0}' in batch")]
    DuplicateRequestId(String),
    /// A request's service duration is zero or negative.
    #[error("request '{id}': service duration must be positive, got {minutes} min")]
    NonPositiveDuration {
        /// Offending request id.
        id: String,
        /// The rejected duration value.
        minutes: i64,
    },
    /// Two bays in the configuration share an id.
    #[error("duplicate bay id {0} in dock configuration")]
    DuplicateBayId(u32),
    /// A bay id outside the 1..N numbering scheme.
    #[error("bay id must be 1 or greater, got {0}")]
    InvalidBayId(u32),
}

/// Validates a request batch and dock configuration.
///
/// Collects every detected problem rather than stopping at the first, so
/// the caller can report them all at once.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` otherwise.
pub fn validate_input(requests: &[VehicleRequest], config: &DockConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let mut request_ids = HashSet::new();
    for request in requests {
        if request.id.trim().is_empty() {
            errors.push(ValidationError::EmptyRequestId);
        } else if !request_ids.insert(request.id.as_str()) {
            errors.push(ValidationError::DuplicateRequestId(request.id.clone()));
        }

        if request.service_duration_min <= 0 {
            errors.push(ValidationError::NonPositiveDuration {
                id: request.id.clone(),
                minutes: request.service_duration_min,
            });
        }
    }

    let mut bay_ids = HashSet::new();
    for bay in &config.bays {
        if bay.id == 0 {
            errors.push(ValidationError::InvalidBayId(bay.id));
        }
        if !bay_ids.insert(bay.id) {
            errors.push(ValidationError::DuplicateBayId(bay.id));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
