//! The linked catalog of near-Earth objects and close approaches.
//!
//! A [`Catalog`] takes ownership of two unlinked record collections and links
//! them once, at construction. Each close approach is attached to the object
//! whose designation it names, and each object collects its approaches in
//! their original order. After construction the catalog is read-only, so any
//! number of lookups and queries may share it.
//!
//! ```rust
//! use neodb::{Catalog, CloseApproach, Filters, NearEarthObject};
//! use chrono::NaiveDate;
//!
//! let time = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let neos = vec![NearEarthObject::new("433", Some("Eros".into()), 16.84, false)];
//! let approaches = vec![CloseApproach::new("433", time, 0.15, 5.0)];
//!
//! let catalog = Catalog::new(neos, approaches)?;
//! let eros = catalog.get_neo_by_name("Eros").unwrap();
//! assert_eq!(catalog.approaches_for(eros).count(), 1);
//! assert_eq!(catalog.query(&Filters::new().with_distance_max(0.2)).count(), 1);
//! # Ok::<(), neodb::NeoError>(())
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::iter::Take;

use crate::config::{Config, LinkPolicy};
use crate::error::{NeoError, Result};
use crate::filters::Filters;
use crate::helpers::limit;
use crate::models::{ApproachId, CloseApproach, NearEarthObject, NeoId};
use crate::query::Query;

/// Counts describing a built catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub neo_count: usize,
    pub named_neo_count: usize,
    pub approach_count: usize,
    /// Approaches left unlinked under [`LinkPolicy::Lenient`].
    pub unlinked_approach_count: usize,
}

/// Immutable, cross-linked collection of objects and their close approaches.
#[derive(Debug, Clone)]
pub struct Catalog {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: FxHashMap<String, NeoId>,
    by_name: FxHashMap<String, NeoId>,
    unlinked: usize,
    config: Config,
}

impl Catalog {
    /// Link the collections with the default (strict) configuration.
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> Result<Self> {
        Self::with_config(neos, approaches, Config::default())
    }

    /// Link the collections.
    ///
    /// Fails with [`NeoError::UnknownDesignation`] when an approach names an
    /// unknown object and the policy is [`LinkPolicy::Strict`].
    pub fn with_config(
        mut neos: Vec<NearEarthObject>,
        mut approaches: Vec<CloseApproach>,
        config: Config,
    ) -> Result<Self> {
        config.validate()?;

        // Records cloned out of another catalog still carry its links.
        for neo in &mut neos {
            neo.approaches.clear();
        }

        let mut by_designation =
            FxHashMap::with_capacity_and_hasher(neos.len(), Default::default());
        let mut by_name = FxHashMap::default();
        for (idx, neo) in neos.iter().enumerate() {
            let id = NeoId(idx);
            if by_designation.contains_key(&neo.designation) {
                log::warn!(
                    "Duplicate designation '{}' at position {}; keeping the first occurrence",
                    neo.designation,
                    idx
                );
            } else {
                by_designation.insert(neo.designation.clone(), id);
            }
            if let Some(name) = neo.name() {
                by_name.entry(name.to_string()).or_insert(id);
            }
        }

        let mut unlinked = 0;
        for (idx, approach) in approaches.iter_mut().enumerate() {
            match by_designation.get(&approach.designation) {
                Some(&id) => {
                    approach.neo = Some(id);
                    neos[id.0].approaches.push(ApproachId(idx));
                }
                None => {
                    approach.neo = None;
                    match config.link_policy {
                        LinkPolicy::Strict => {
                            return Err(NeoError::UnknownDesignation {
                                designation: approach.designation.clone(),
                            });
                        }
                        LinkPolicy::Lenient => {
                            log::warn!(
                                "Close approach at {} references unknown designation '{}'",
                                approach.time_str(),
                                approach.designation
                            );
                            unlinked += 1;
                        }
                    }
                }
            }
        }

        log::debug!(
            "Linked {} close approaches to {} objects ({} unlinked, {} named)",
            approaches.len() - unlinked,
            neos.len(),
            unlinked,
            by_name.len()
        );

        Ok(Self {
            neos,
            approaches,
            by_designation,
            by_name,
            unlinked,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All objects, in load order.
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All close approaches, in load order.
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.0)
    }

    /// Find an object by its exact primary designation.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .and_then(|&id| self.neo(id))
    }

    /// Find an object by its exact name. Unnamed objects are never returned.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        if name.is_empty() {
            return None;
        }
        self.by_name.get(name).and_then(|&id| self.neo(id))
    }

    /// The object an approach is linked to, if any.
    ///
    /// Links are handles into the catalog that built them. An approach taken
    /// from a different catalog resolves only if the handle lands on an
    /// object with the same designation; otherwise this returns `None`.
    pub fn neo_for(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach
            .neo
            .and_then(|id| self.neo(id))
            .filter(|neo| neo.designation == approach.designation)
    }

    /// An object's close approaches, in load order.
    ///
    /// As with [`Catalog::neo_for`], handles that resolve to an approach for
    /// a different designation are skipped.
    pub fn approaches_for<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        neo.approaches
            .iter()
            .filter_map(move |&id| self.approach(id))
            .filter(move |approach| approach.designation == neo.designation)
    }

    /// Lazily stream the close approaches matching `filters`.
    pub fn query(&self, filters: &Filters) -> Query<'_> {
        Query::new(self, filters.clone())
    }

    /// Like [`Catalog::query`], capped at the configured default limit.
    pub fn query_limited(&self, filters: &Filters) -> Take<Query<'_>> {
        limit(self.query(filters), self.config.default_limit)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            neo_count: self.neos.len(),
            named_neo_count: self.by_name.len(),
            approach_count: self.approaches.len(),
            unlinked_approach_count: self.unlinked,
        }
    }
}
