//! CB-001: Catalog types — items, amounts, cookbook files, summaries.
//!
//! Items are stored by name. Recipes hold required-item *names*, never direct
//! references, so the composition graph is implicit in name-indexed adjacency.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

// ============================================================================
// Amounts
// ============================================================================

/// Largest magnitude at which every integer is exactly representable in f64.
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// A cook time or quantity, integer or real.
///
/// Integral values serialize as integers so `6` stays `6` rather than `6.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Amount(pub f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);
    pub const ONE: Amount = Amount(1.0);

    /// Valid as a required-item quantity (strictly positive, not NaN).
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// Valid as an ingredient cook time (finite, non-negative).
    pub fn is_valid_cook_time(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    fn as_exact_int(self) -> Option<i64> {
        if self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() <= EXACT_INT_LIMIT {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<i64> for Amount {
    fn from(v: i64) -> Self {
        Self(v as f64)
    }
}

impl Add for Amount {
    type Output = Amount;
    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Mul for Amount {
    type Output = Amount;
    fn mul(self, rhs: Amount) -> Amount {
        Amount(self.0 * rhs.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_exact_int() {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_exact_int() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Amount)
    }
}

// ============================================================================
// Catalog items
// ============================================================================

/// An atomic ingredient with a fixed preparation cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub cook_time: Amount,
}

/// A recipe composed of other items. At most one entry per required name.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub required_items: IndexMap<String, Amount>,
}

/// Anything stored in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(i) => &i.name,
            Self::Recipe(r) => &r.name,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Ingredient(_) => ItemKind::Ingredient,
            Self::Recipe(_) => ItemKind::Recipe,
        }
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Recipe(r) => Some(r),
            Self::Ingredient(_) => None,
        }
    }
}

/// Item variant tag, as written in cookbook files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Ingredient,
    Recipe,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ingredient => write!(f, "ingredient"),
            Self::Recipe => write!(f, "recipe"),
        }
    }
}

// ============================================================================
// Cookbook file
// ============================================================================

/// Root of a cookbook.yaml. Entries are applied in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookbookConfig {
    /// Schema version (must be "1.0")
    pub version: String,

    /// Human-readable cookbook name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Entries, inserted top to bottom
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// One insertion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    Ingredient {
        name: String,
        #[serde(rename = "cookTime")]
        cook_time: Amount,
    },
    Recipe {
        name: String,
        #[serde(rename = "requiredItems", default)]
        required_items: Vec<RequiredItem>,
    },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient { name, .. } | Self::Recipe { name, .. } => name,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Ingredient { .. } => ItemKind::Ingredient,
            Self::Recipe { .. } => ItemKind::Recipe,
        }
    }
}

/// A (name, quantity) requirement of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: Amount,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: impl Into<Amount>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Flattened view of one unit of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub name: String,
    #[serde(rename = "cookTime")]
    pub cook_time: Amount,
    pub ingredients: Vec<ManifestEntry>,
}

impl Summary {
    /// Quantity of a base ingredient in the manifest, if present.
    pub fn quantity_of(&self, name: &str) -> Option<Amount> {
        self.ingredients
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.quantity)
    }
}

/// A base ingredient and its aggregated quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub quantity: Amount,
}
