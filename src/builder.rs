//! Catalog builder for loading and linking in one step
//!
//! Sources can be given as file paths, read through [`crate::extract`], or as
//! records that were already loaded by the caller.

use crate::catalog::Catalog;
use crate::config::{Config, LinkPolicy};
use crate::error::Result;
use crate::extract::{load_approaches, load_neos};
use crate::models::{CloseApproach, NearEarthObject};
use std::path::PathBuf;

#[derive(Debug)]
enum Source<T> {
    Empty,
    Path(PathBuf),
    Records(Vec<T>),
}

impl<T> Source<T> {
    fn load(self, loader: impl FnOnce(PathBuf) -> Result<Vec<T>>) -> Result<Vec<T>> {
        match self {
            Source::Empty => Ok(Vec::new()),
            Source::Path(path) => loader(path),
            Source::Records(records) => Ok(records),
        }
    }
}

/// Builder for a [`Catalog`] with custom sources and settings.
#[derive(Debug)]
pub struct CatalogBuilder {
    neos: Source<NearEarthObject>,
    approaches: Source<CloseApproach>,
    config: Config,
}

impl CatalogBuilder {
    /// Create a builder with no sources and the default configuration.
    pub fn new() -> Self {
        Self {
            neos: Source::Empty,
            approaches: Source::Empty,
            config: Config::default(),
        }
    }

    /// Load objects from a NEO CSV file at build time.
    pub fn neos_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.neos = Source::Path(path.into());
        self
    }

    /// Load close approaches from a JSON file at build time.
    pub fn approaches_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.approaches = Source::Path(path.into());
        self
    }

    pub fn neos(mut self, neos: Vec<NearEarthObject>) -> Self {
        self.neos = Source::Records(neos);
        self
    }

    pub fn approaches(mut self, approaches: Vec<CloseApproach>) -> Self {
        self.approaches = Source::Records(approaches);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn link_policy(mut self, policy: LinkPolicy) -> Self {
        self.config = self.config.with_link_policy(policy);
        self
    }

    /// Load any file sources and link everything into a catalog.
    pub fn build(self) -> Result<Catalog> {
        let neos = self.neos.load(load_neos)?;
        let approaches = self.approaches.load(load_approaches)?;
        Catalog::with_config(neos, approaches, self.config)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
