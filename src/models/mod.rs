//! Burn-scheduling domain models.
//!
//! Record types for the entities a burn plan is built from, and the
//! plan/assignment types a planner produces. All records are loaded
//! read-only at the start of an optimization run; only the resource
//! ledger mutates during planning.
//!
//! # Entities
//!
//! | Type | Meaning |
//! |------|---------|
//! | `BurnRequest` | A landholder's request to burn a polygonal area |
//! | `Zone` | Management region; one team works one zone per day |
//! | `DailyBurnLimit` | Capacity cap (max total rai) for a polygon on a date |
//! | `WeatherForecast` | Polygon/date cell flagged burnable or not |
//! | `Team` / `TeamAvailability` | Crew teams and their per-date availability |
//! | `Assignment` / `BurnPlan` | Planner output |

mod boundary;
mod limit;
mod plan;
mod request;
mod team;
mod weather;
mod zone;

pub use boundary::Boundary;
pub use limit::DailyBurnLimit;
pub use plan::{Assignment, BurnPlan, DayPlan, DaySummary, PlannedBurn};
pub use request::BurnRequest;
pub use team::{Team, TeamAvailability, TeamRoster, TeamStatus};
pub use weather::WeatherForecast;
pub use zone::Zone;

/// Burn request identifier.
pub type RequestId = u32;
/// Management zone identifier.
pub type ZoneId = u32;
/// Daily burn limit identifier.
pub type LimitId = u32;
/// Weather forecast cell identifier.
pub type ForecastId = u32;
/// Crew team identifier.
pub type TeamId = u32;
