//! CB-002: Catalog error taxonomy.

use super::types::Amount;
use thiserror::Error;

/// Every way an insertion or summary can be rejected.
///
/// All variants are terminal: the catalog is unchanged and no partial
/// summary is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("entry names must be unique: '{0}' already exists")]
    DuplicateName(String),

    #[error("recipe '{0}' cannot require itself")]
    SelfReference(String),

    #[error("a cycle would be formed if '{required}' is part of '{recipe}'")]
    CycleDetected { recipe: String, required: String },

    #[error("quantity of '{required}' in recipe '{recipe}' must be greater than 0, got {quantity}")]
    InvalidQuantity {
        recipe: String,
        required: String,
        quantity: Amount,
    },

    #[error("'{0}' not found in the cookbook")]
    NotFound(String),

    #[error("'{0}' is not a recipe")]
    NotARecipe(String),

    #[error("recipe '{recipe}' requires '{missing}', which is not in the cookbook")]
    DanglingReference { recipe: String, missing: String },
}

impl CatalogError {
    /// Stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => "duplicate_name",
            Self::SelfReference(_) => "self_reference",
            Self::CycleDetected { .. } => "cycle_detected",
            Self::InvalidQuantity { .. } => "invalid_quantity",
            Self::NotFound(_) => "not_found",
            Self::NotARecipe(_) => "not_a_recipe",
            Self::DanglingReference { .. } => "dangling_reference",
        }
    }
}
