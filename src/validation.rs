//! Input validation for planning runs.
//!
//! Structural integrity checks over the loaded records before planning:
//! - Duplicate IDs within each entity family
//! - Availability rows referencing unknown teams
//! - Non-positive capacities and request areas
//!
//! Validation is advisory: the planners tolerate all of these conditions
//! (degrading to skipped records or an empty plan), so callers decide
//! whether findings block a run.

use std::collections::HashSet;

use crate::planner::PlanningInputs;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same family share an ID.
    DuplicateId,
    /// An availability row references a team that doesn't exist.
    UnknownTeamReference,
    /// A daily limit caps zero or negative area.
    NonPositiveCapacity,
    /// A burn request covers zero or negative area.
    NonPositiveArea,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates planning inputs.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_inputs(inputs: &PlanningInputs) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique(
        inputs.requests.iter().map(|r| r.id),
        "burn request",
        &mut errors,
    );
    check_unique(inputs.zones.iter().map(|z| z.id), "zone", &mut errors);
    check_unique(
        inputs.limits.iter().map(|l| l.id),
        "daily burn limit",
        &mut errors,
    );
    check_unique(
        inputs.forecasts.iter().map(|f| f.id),
        "weather forecast",
        &mut errors,
    );
    check_unique(inputs.teams.iter().map(|t| t.id), "team", &mut errors);

    let team_ids: HashSet<_> = inputs.teams.iter().map(|t| t.id).collect();
    for record in &inputs.availability {
        if !team_ids.contains(&record.team_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTeamReference,
                format!(
                    "availability on {} references unknown team {}",
                    record.work_date, record.team_id
                ),
            ));
        }
    }

    for limit in &inputs.limits {
        if limit.max_area_rai <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveCapacity,
                format!(
                    "daily burn limit {} caps non-positive area {}",
                    limit.id, limit.max_area_rai
                ),
            ));
        }
    }

    for request in &inputs.requests {
        if request.area_rai <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveArea,
                format!(
                    "burn request {} has non-positive area {}",
                    request.id, request.area_rai
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique(
    ids: impl Iterator<Item = u32>,
    family: &str,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate {family} ID: {id}"),
            ));
        }
    }
}
