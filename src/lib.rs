//! In-memory catalog of near-Earth objects and their close approaches to Earth.
//!
//! A [`Catalog`] links two record collections, objects and close approaches,
//! by designation, offers exact lookups by designation and name, and answers
//! lazily evaluated [`Filters`] queries over the approaches.
//!
//! ```rust
//! use neodb::{Catalog, CloseApproach, Filters, NearEarthObject};
//! use chrono::NaiveDate;
//!
//! let time = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let neos = vec![
//!     NearEarthObject::new("A", None, 1.2, false),
//!     NearEarthObject::new("B", None, f64::NAN, true),
//! ];
//! let approaches = vec![
//!     CloseApproach::new("A", time, 0.05, 10.0),
//!     CloseApproach::new("B", time, 0.01, 12.0),
//! ];
//! let catalog = Catalog::new(neos, approaches)?;
//!
//! let filters = Filters::new().with_distance_max(0.1).with_hazardous(false);
//! let hits: Vec<_> = catalog.query(&filters).collect();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].designation, "A");
//! # Ok::<(), neodb::NeoError>(())
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod filters;
pub mod helpers;
pub mod models;
pub mod query;
pub mod write;

pub use builder::CatalogBuilder;
pub use catalog::{Catalog, CatalogStats};
pub use config::{Config, LinkPolicy};
pub use error::{NeoError, Result};
pub use filters::Filters;
pub use models::{ApproachId, CloseApproach, NearEarthObject, NeoId};
pub use query::Query;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Catalog, CatalogBuilder, NeoError, Result};

    pub use crate::{CloseApproach, NearEarthObject};

    pub use crate::{Config, Filters, LinkPolicy};

    pub use crate::extract::{load_approaches, load_neos};
    pub use crate::helpers::limit;
    pub use crate::write::{write_to_csv, write_to_json};

    pub use chrono::{NaiveDate, NaiveDateTime};
}
