//! Burn request model.

use serde::{Deserialize, Serialize};

use super::{Boundary, RequestId};

/// A landholder's request to schedule an open burn on a polygonal area.
///
/// Immutable once loaded into an optimization run; a request receives at
/// most one assignment in any valid plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnRequest {
    /// Unique request identifier.
    pub id: RequestId,
    /// Area boundary polygon.
    pub boundary: Boundary,
    /// Requested burn area in rai.
    pub area_rai: f64,
    /// Display name of the area (optional).
    pub area_name: Option<String>,
    /// Name of the landholder (optional).
    pub owner_name: Option<String>,
}

impl BurnRequest {
    /// Creates a new burn request.
    pub fn new(id: RequestId, boundary: impl Into<Boundary>, area_rai: f64) -> Self {
        Self {
            id,
            boundary: boundary.into(),
            area_rai,
            area_name: None,
            owner_name: None,
        }
    }

    /// Sets the area display name.
    pub fn with_area_name(mut self, name: impl Into<String>) -> Self {
        self.area_name = Some(name.into());
        self
    }

    /// Sets the owner name.
    pub fn with_owner_name(mut self, name: impl Into<String>) -> Self {
        self.owner_name = Some(name.into());
        self
    }

    /// Whether the request carries usable geometry.
    pub fn is_usable(&self) -> bool {
        !self.boundary.is_blank()
    }
}
