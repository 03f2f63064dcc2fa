//! Destination validation
//!
//! One traversal checks a destination's shape; what happens on a violation
//! is chosen by the caller through [`ViolationMode`] (or a custom closure via
//! [`validate_one`]). Shape problems are distinct from lookup failures, which
//! [`require_destination`] reports.

use std::fmt;

use crate::domain::entities::{Destination, DestinationSet};
use crate::domain::ports::Reporter;
use crate::error::{ShipyardError, ShipyardResult};

/// A structural problem with one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationViolation {
    MissingPath { destination: String },
    MissingProvider { destination: String },
}

impl fmt::Display for DestinationViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath { destination } => {
                write!(f, "Destination {} invalid: No path present", destination)
            }
            Self::MissingProvider { destination } => {
                write!(f, "Destination {} invalid: No provider present", destination)
            }
        }
    }
}

/// How a violation is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationMode {
    /// Report through the reporter and keep going
    #[default]
    Warn,
    /// Fail on the first violation
    Strict,
}

/// Check `destination`, handing each violation to `on_violation`.
///
/// Path is always checked before provider. An error returned by the
/// callback stops the traversal and is propagated.
pub fn validate_one<F>(destination: &Destination, mut on_violation: F) -> ShipyardResult<()>
where
    F: FnMut(DestinationViolation) -> ShipyardResult<()>,
{
    if destination.path().is_none() {
        on_violation(DestinationViolation::MissingPath {
            destination: destination.name().to_string(),
        })?;
    }
    if destination.provider().is_none() {
        on_violation(DestinationViolation::MissingProvider {
            destination: destination.name().to_string(),
        })?;
    }
    Ok(())
}

/// Check one destination in the given mode.
pub fn check_destination(
    destination: &Destination,
    mode: ViolationMode,
    reporter: &mut dyn Reporter,
) -> ShipyardResult<()> {
    validate_one(destination, |violation| match mode {
        ViolationMode::Warn => {
            reporter.warn(&violation.to_string());
            Ok(())
        }
        ViolationMode::Strict => Err(ShipyardError::InvalidDestination(violation)),
    })
}

/// Fail on the first violation without reporting anything.
pub fn ensure_valid(destination: &Destination) -> ShipyardResult<()> {
    validate_one(destination, |violation| {
        Err(ShipyardError::InvalidDestination(violation))
    })
}

/// Warn about every incomplete destination; fail only if there are none.
pub fn validate_all(destinations: &DestinationSet, reporter: &mut dyn Reporter) -> ShipyardResult<()> {
    if destinations.is_empty() {
        return Err(ShipyardError::NoDestinations);
    }

    for destination in destinations.iter() {
        check_destination(destination, ViolationMode::Warn, reporter)?;
    }
    Ok(())
}

/// Lookup check: the active destination must have resolved to an entry.
pub fn require_destination<'a>(
    active_name: &str,
    resolved: Option<&'a Destination>,
) -> ShipyardResult<&'a Destination> {
    resolved.ok_or_else(|| ShipyardError::DestinationNotFound {
        name: active_name.to_string(),
    })
}
