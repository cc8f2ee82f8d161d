//! Typed filter criteria for close-approach queries.
//!
//! Every field is optional and an absent field imposes no constraint. A close
//! approach matches when it satisfies every present field. Bounds are
//! inclusive, and a lower and upper bound on the same attribute form a closed
//! interval.
//!
//! ```rust
//! use neodb::Filters;
//!
//! let filters = Filters::new()
//!     .with_distance_max(0.1)
//!     .with_hazardous(false);
//! assert!(!filters.is_empty());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CloseApproach, NearEarthObject};

/// Query criteria. Unrecognized keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_distance_min(mut self, au: f64) -> Self {
        self.distance_min = Some(au);
        self
    }

    pub fn with_distance_max(mut self, au: f64) -> Self {
        self.distance_max = Some(au);
        self
    }

    pub fn with_velocity_min(mut self, km_s: f64) -> Self {
        self.velocity_min = Some(km_s);
        self
    }

    pub fn with_velocity_max(mut self, km_s: f64) -> Self {
        self.velocity_max = Some(km_s);
        self
    }

    pub fn with_diameter_min(mut self, km: f64) -> Self {
        self.diameter_min = Some(km);
        self
    }

    pub fn with_diameter_max(mut self, km: f64) -> Self {
        self.diameter_max = Some(km);
        self
    }

    pub fn with_hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = Some(hazardous);
        self
    }

    /// Parse criteria from a JSON object, ignoring unknown keys.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// True when no criterion is set, i.e. every approach matches.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether any criterion reads attributes of the linked object.
    pub fn constrains_neo(&self) -> bool {
        self.diameter_min.is_some() || self.diameter_max.is_some() || self.hazardous.is_some()
    }

    /// Evaluate the criteria against one approach and its linked object.
    ///
    /// `neo` is `None` for an unlinked approach; such an approach fails every
    /// diameter and hazard criterion.
    pub fn matches(&self, approach: &CloseApproach, neo: Option<&NearEarthObject>) -> bool {
        self.matches_approach(approach) && self.matches_neo(neo)
    }

    fn matches_approach(&self, approach: &CloseApproach) -> bool {
        let date = approach.time.date();

        if self.date.is_some_and(|d| date != d) {
            return false;
        }

        in_range(&date, self.start_date.as_ref(), self.end_date.as_ref())
            && in_range(&approach.distance, self.distance_min.as_ref(), self.distance_max.as_ref())
            && in_range(&approach.velocity, self.velocity_min.as_ref(), self.velocity_max.as_ref())
    }

    fn matches_neo(&self, neo: Option<&NearEarthObject>) -> bool {
        if !self.constrains_neo() {
            return true;
        }
        let Some(neo) = neo else {
            return false;
        };

        if self.diameter_min.is_some() || self.diameter_max.is_some() {
            if neo.diameter.is_nan() {
                return false;
            }
            if !in_range(&neo.diameter, self.diameter_min.as_ref(), self.diameter_max.as_ref()) {
                return false;
            }
        }

        self.hazardous.is_none_or(|h| neo.hazardous == h)
    }
}

/// Inclusive range check with independently optional bounds.
///
/// Comparisons against `NaN` are false, so a `NaN` value never satisfies a
/// present bound.
fn in_range<T: PartialOrd>(value: &T, min: Option<&T>, max: Option<&T>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}
