//! Record types for near-Earth objects and their close approaches.
//!
//! Both types are created unlinked by a loader. Links are arena handles into
//! the owning [`Catalog`](crate::Catalog) and are only ever set during catalog
//! construction.

use chrono::NaiveDateTime;
use smallvec::SmallVec;
use std::fmt;

use crate::helpers::datetime_to_str;

/// Handle of a [`NearEarthObject`] inside a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeoId(pub(crate) usize);

impl NeoId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle of a [`CloseApproach`] inside a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApproachId(pub(crate) usize);

impl ApproachId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A near-Earth object.
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    /// Primary designation, unique across a catalog.
    pub designation: String,
    /// IAU name; `None` and `Some("")` both mean unnamed.
    pub name: Option<String>,
    /// Diameter in kilometers, `NaN` when unknown.
    pub diameter: f64,
    /// Whether the object is potentially hazardous.
    pub hazardous: bool,
    pub(crate) approaches: SmallVec<[ApproachId; 4]>,
}

impl NearEarthObject {
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name,
            diameter,
            hazardous,
            approaches: SmallVec::new(),
        }
    }

    /// The object's name, or `None` if it is unnamed.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn has_known_diameter(&self) -> bool {
        !self.diameter.is_nan()
    }

    /// Handles of this object's close approaches, in catalog order.
    pub fn approach_ids(&self) -> &[ApproachId] {
        &self.approaches
    }

    /// `designation (name)` for named objects, otherwise the designation.
    pub fn fullname(&self) -> String {
        match self.name() {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {}", self.fullname())?;
        if self.has_known_diameter() {
            write!(f, " has a diameter of {:.3} km", self.diameter)?;
        } else {
            write!(f, " has an unknown diameter")?;
        }
        if self.hazardous {
            write!(f, " and is potentially hazardous.")
        } else {
            write!(f, " and is not potentially hazardous.")
        }
    }
}

/// A close approach of a near-Earth object to Earth.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    /// Designation of the approaching object, as supplied by the loader.
    pub designation: String,
    pub time: NaiveDateTime,
    /// Nominal approach distance in astronomical units.
    pub distance: f64,
    /// Relative approach velocity in km/s.
    pub velocity: f64,
    pub(crate) neo: Option<NeoId>,
}

impl CloseApproach {
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Handle of the linked object; `None` before linking or when unresolved.
    pub fn neo_id(&self) -> Option<NeoId> {
        self.neo
    }

    pub fn time_str(&self) -> String {
        datetime_to_str(&self.time)
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.designation,
            self.distance,
            self.velocity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_name_is_unnamed() {
        let neo = NearEarthObject::new("2020 AB", Some(String::new()), f64::NAN, false);
        assert_eq!(neo.name(), None);
        assert_eq!(neo.fullname(), "2020 AB");
    }

    #[test]
    fn test_fullname_with_name() {
        let neo = NearEarthObject::new("433", Some("Eros".into()), 16.84, false);
        assert_eq!(neo.fullname(), "433 (Eros)");
        assert_eq!(
            neo.to_string(),
            "NEO 433 (Eros) has a diameter of 16.840 km and is not potentially hazardous."
        );
    }

    #[test]
    fn test_unknown_diameter() {
        let neo = NearEarthObject::new("2020 AB", None, f64::NAN, true);
        assert!(!neo.has_known_diameter());
        assert!(neo.to_string().contains("unknown diameter"));
    }

    #[test]
    fn test_new_approach_is_unlinked() {
        let time = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let approach = CloseApproach::new("433", time, 0.25, 5.5);
        assert!(approach.neo_id().is_none());
        assert_eq!(approach.time_str(), "2020-01-01 12:30");
    }
}
