//! Crew team and availability models.
//!
//! Teams are day-granular resources: a team either works a given date or
//! it does not, and on a working date it is bound to a single zone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::TeamId;

/// A crew team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: TeamId,
    /// Human-readable team name.
    pub name: String,
    /// Whether the team participates in planning.
    pub status: TeamStatus,
}

/// Team participation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    /// Schedulable.
    Active,
    /// Excluded from planning.
    Inactive,
}

/// A per-date availability record for one team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamAvailability {
    /// The team this record refers to.
    pub team_id: TeamId,
    /// The date this record refers to.
    pub work_date: NaiveDate,
    /// Whether the team can be scheduled on that date.
    pub is_available: bool,
}

impl Team {
    /// Creates an active team.
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: TeamStatus::Active,
        }
    }

    /// Sets the status.
    pub fn with_status(mut self, status: TeamStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the team participates in planning.
    pub fn is_active(&self) -> bool {
        self.status == TeamStatus::Active
    }
}

impl TeamAvailability {
    /// Creates an availability record.
    pub fn new(team_id: TeamId, work_date: NaiveDate, is_available: bool) -> Self {
        Self {
            team_id,
            work_date,
            is_available,
        }
    }
}

/// Schedulable teams grouped by date.
///
/// Built by joining availability records against active teams: a team
/// appears under a date only if it is active and marked available there.
/// Per-date order follows the availability record order.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    by_date: HashMap<NaiveDate, Vec<TeamId>>,
}

impl TeamRoster {
    /// Builds a roster from teams and their availability records.
    pub fn build(teams: &[Team], availability: &[TeamAvailability]) -> Self {
        let active: HashMap<TeamId, ()> = teams
            .iter()
            .filter(|t| t.is_active())
            .map(|t| (t.id, ()))
            .collect();

        let mut by_date: HashMap<NaiveDate, Vec<TeamId>> = HashMap::new();
        for record in availability {
            if record.is_available && active.contains_key(&record.team_id) {
                by_date.entry(record.work_date).or_default().push(record.team_id);
            }
        }

        Self { by_date }
    }

    /// Teams schedulable on a date (empty slice if none).
    pub fn teams_on(&self, date: NaiveDate) -> &[TeamId] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any team is schedulable on a date.
    pub fn has_teams_on(&self, date: NaiveDate) -> bool {
        !self.teams_on(date).is_empty()
    }

    /// Dates with at least one schedulable team, in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.by_date.keys().copied().collect();
        dates.sort();
        dates
    }

    /// Whether no date has any schedulable team.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
