//! CB-008: Shared catalog handle for concurrent callers.
//!
//! Insertions hold the write lock across the whole check-then-commit
//! sequence; summaries and lookups share the read lock.

use super::catalog::Catalog;
use super::error::CatalogError;
use super::types::{Amount, Item, RequiredItem, Summary};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to one catalog.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    // A panicking writer never leaves a half-inserted item behind, so the
    // data under a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert_ingredient(&self, name: &str, cook_time: Amount) -> Result<(), CatalogError> {
        self.write().insert_ingredient(name, cook_time)
    }

    pub fn insert_recipe<I>(&self, name: &str, required: I) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = RequiredItem>,
    {
        self.write().insert_recipe(name, required)
    }

    pub fn summarize(&self, name: &str) -> Result<Summary, CatalogError> {
        self.read().summarize(name)
    }

    /// Owned copy of an item.
    pub fn lookup(&self, name: &str) -> Option<Item> {
        self.read().lookup(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
