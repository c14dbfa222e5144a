//! Cookbook — a catalog of ingredients and recipes.
//!
//! Recipes compose other items by name. Insertions that would close a cycle
//! are rejected; any recipe can be flattened into a quantity-scaled list of
//! base ingredients and a total cook time.

pub mod cli;
pub mod core;
pub mod logging;

pub use crate::core::catalog::Catalog;
pub use crate::core::error::CatalogError;
pub use crate::core::shared::SharedCatalog;
pub use crate::core::types::{Amount, Item, RequiredItem, Summary};
