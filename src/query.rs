//! Lazy evaluation of [`Filters`] over a catalog's close approaches.

use std::iter::FusedIterator;
use std::slice;

use crate::catalog::Catalog;
use crate::filters::Filters;
use crate::models::CloseApproach;

/// Forward-only stream of the close approaches matching a set of filters.
///
/// Results borrow from the catalog and come out in catalog storage order. A
/// `Query` is consumed by iteration; run [`Catalog::query`] again for another
/// pass.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    catalog: &'a Catalog,
    filters: Filters,
    remaining: slice::Iter<'a, CloseApproach>,
}

impl<'a> Query<'a> {
    pub(crate) fn new(catalog: &'a Catalog, filters: Filters) -> Self {
        Self {
            catalog,
            filters,
            remaining: catalog.approaches().iter(),
        }
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }
}

impl<'a> Iterator for Query<'a> {
    type Item = &'a CloseApproach;

    fn next(&mut self) -> Option<Self::Item> {
        let catalog = self.catalog;
        let filters = &self.filters;
        self.remaining
            .by_ref()
            .find(|approach| filters.matches(approach, catalog.neo_for(approach)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining.len()))
    }
}

impl FusedIterator for Query<'_> {}
