//! CB-004: The catalog, a uniqueness-enforcing, append-only item store.
//!
//! Names are unique across ingredients and recipes combined. There is no
//! update or remove. A recipe is committed only after every required item
//! passes validation, so a rejected insertion leaves the catalog untouched.

use super::error::CatalogError;
use super::guard::would_create_cycle;
use super::resolver;
use super::types::{Amount, Ingredient, Item, ItemKind, Recipe, RequiredItem, Summary};
use indexmap::IndexMap;

/// Name → item, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: IndexMap<String, Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Read-only lookup. Never fails.
    pub fn lookup(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of items of the given kind.
    pub fn count(&self, kind: ItemKind) -> usize {
        self.items.values().filter(|i| i.kind() == kind).count()
    }

    /// Store an already-validated item under its own name.
    fn insert(&mut self, item: Item) -> Result<(), CatalogError> {
        let name = item.name().to_string();
        if self.items.contains_key(&name) {
            return Err(CatalogError::DuplicateName(name));
        }
        self.items.insert(name, item);
        Ok(())
    }

    /// Add an ingredient. The cook time is assumed already range-checked.
    pub fn insert_ingredient(&mut self, name: &str, cook_time: Amount) -> Result<(), CatalogError> {
        self.insert(Item::Ingredient(Ingredient {
            name: name.to_string(),
            cook_time,
        }))?;
        tracing::debug!(name, %cook_time, "inserted ingredient");
        Ok(())
    }

    /// Add a recipe after checking each requirement against the current graph.
    ///
    /// A later requirement with the same name replaces an earlier one.
    pub fn insert_recipe<I>(&mut self, name: &str, required: I) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = RequiredItem>,
    {
        if self.contains(name) {
            return Err(CatalogError::DuplicateName(name.to_string()));
        }

        let mut required_items = IndexMap::new();
        for item in required {
            self.check_requirement(name, &item)?;
            required_items.insert(item.name, item.quantity);
        }

        let edges = required_items.len();
        self.insert(Item::Recipe(Recipe {
            name: name.to_string(),
            required_items,
        }))?;
        tracing::debug!(name, edges, "inserted recipe");
        Ok(())
    }

    fn check_requirement(&self, recipe: &str, item: &RequiredItem) -> Result<(), CatalogError> {
        if item.name == recipe {
            return Err(CatalogError::SelfReference(recipe.to_string()));
        }
        if self.contains(&item.name) && would_create_cycle(self, &item.name, recipe) {
            return Err(CatalogError::CycleDetected {
                recipe: recipe.to_string(),
                required: item.name.clone(),
            });
        }
        if !item.quantity.is_positive() {
            return Err(CatalogError::InvalidQuantity {
                recipe: recipe.to_string(),
                required: item.name.clone(),
                quantity: item.quantity,
            });
        }
        Ok(())
    }

    /// Flatten a recipe into base ingredients and total cook time.
    pub fn summarize(&self, name: &str) -> Result<Summary, CatalogError> {
        resolver::summarize(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakfast() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert_ingredient("egg", Amount(5.0)).unwrap();
        catalog.insert_ingredient("flour", Amount(2.0)).unwrap();
        catalog
            .insert_recipe(
                "batter",
                vec![RequiredItem::new("egg", 2i64), RequiredItem::new("flour", 1i64)],
            )
            .unwrap();
        catalog
            .insert_recipe("pancake", vec![RequiredItem::new("batter", 3i64)])
            .unwrap();
        catalog
    }

    #[test]
    fn test_cb004_insert_and_lookup() {
        let catalog = breakfast();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.count(ItemKind::Ingredient), 2);
        assert_eq!(catalog.count(ItemKind::Recipe), 2);
        let batter = catalog.lookup("batter").unwrap().as_recipe().unwrap();
        assert_eq!(batter.required_items["egg"], Amount(2.0));
        assert!(catalog.lookup("waffle").is_none());
    }

    #[test]
    fn test_cb004_duplicate_ingredient() {
        let mut catalog = breakfast();
        let err = catalog.insert_ingredient("egg", Amount(1.0)).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("egg".to_string()));
        match catalog.lookup("egg") {
            Some(Item::Ingredient(i)) => assert_eq!(i.cook_time, Amount(5.0)),
            other => panic!("egg changed: {:?}", other),
        }
    }

    #[test]
    fn test_cb004_recipe_named_like_ingredient() {
        let mut catalog = breakfast();
        let err = catalog
            .insert_recipe("egg", vec![RequiredItem::new("flour", 1i64)])
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("egg".to_string()));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_cb004_ingredient_named_like_recipe() {
        let mut catalog = breakfast();
        let err = catalog.insert_ingredient("pancake", Amount(0.0)).unwrap_err();
        assert_eq!(err.kind(), "duplicate_name");
    }

    #[test]
    fn test_cb004_self_reference() {
        let mut catalog = Catalog::new();
        let err = catalog
            .insert_recipe("soup", vec![RequiredItem::new("soup", 1i64)])
            .unwrap_err();
        assert_eq!(err, CatalogError::SelfReference("soup".to_string()));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_cb004_cycle_rejected_and_not_committed() {
        let mut catalog = Catalog::new();
        catalog
            .insert_recipe("x", vec![RequiredItem::new("y", 1i64)])
            .unwrap();
        let err = catalog
            .insert_recipe("y", vec![RequiredItem::new("x", 1i64)])
            .unwrap_err();
        assert_eq!(err.kind(), "cycle_detected");
        assert!(!catalog.contains("y"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_cb004_invalid_quantity() {
        let mut catalog = breakfast();
        for q in [0.0, -1.0, f64::NAN] {
            let err = catalog
                .insert_recipe("crepe", vec![RequiredItem::new("egg", q)])
                .unwrap_err();
            assert_eq!(err.kind(), "invalid_quantity");
        }
        assert!(!catalog.contains("crepe"));
    }

    #[test]
    fn test_cb004_partial_failure_commits_nothing() {
        let mut catalog = breakfast();
        let err = catalog
            .insert_recipe(
                "crepe",
                vec![RequiredItem::new("egg", 1i64), RequiredItem::new("flour", 0i64)],
            )
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_quantity");
        assert!(!catalog.contains("crepe"));
    }

    #[test]
    fn test_cb004_self_reference_checked_before_quantity() {
        let mut catalog = Catalog::new();
        let err = catalog
            .insert_recipe("soup", vec![RequiredItem::new("soup", -1i64)])
            .unwrap_err();
        assert_eq!(err.kind(), "self_reference");
    }

    #[test]
    fn test_cb004_dangling_reference_accepted() {
        let mut catalog = Catalog::new();
        catalog
            .insert_recipe("stew", vec![RequiredItem::new("unicorn", 1i64)])
            .unwrap();
        assert!(catalog.contains("stew"));
    }

    #[test]
    fn test_cb004_duplicate_requirement_last_wins() {
        let mut catalog = breakfast();
        catalog
            .insert_recipe(
                "omelette",
                vec![
                    RequiredItem::new("egg", 2i64),
                    RequiredItem::new("flour", 1i64),
                    RequiredItem::new("egg", 3i64),
                ],
            )
            .unwrap();
        let omelette = catalog.lookup("omelette").unwrap().as_recipe().unwrap();
        assert_eq!(omelette.required_items.len(), 2);
        assert_eq!(omelette.required_items["egg"], Amount(3.0));
        let keys: Vec<_> = omelette.required_items.keys().collect();
        assert_eq!(keys, vec!["egg", "flour"]);
    }

    #[test]
    fn test_cb004_insertion_order_preserved() {
        let catalog = breakfast();
        let names: Vec<_> = catalog.items().map(|i| i.name()).collect();
        assert_eq!(names, vec!["egg", "flour", "batter", "pancake"]);
    }

    #[test]
    fn test_cb004_public_mutations_keep_graph_acyclic() {
        let mut catalog = Catalog::new();
        catalog
            .insert_recipe("x", vec![RequiredItem::new("y", 1i64)])
            .unwrap();
        let back_edge = catalog.insert_recipe("y", vec![RequiredItem::new("x", -3i64)]);
        assert_eq!(back_edge.unwrap_err().kind(), "cycle_detected");
        let self_loop = catalog.insert_recipe("s", vec![RequiredItem::new("s", 1i64)]);
        assert_eq!(self_loop.unwrap_err().kind(), "self_reference");
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.contains("y"));
        assert!(!catalog.contains("s"));
        assert_eq!(
            catalog.summarize("x").unwrap_err(),
            CatalogError::DanglingReference {
                recipe: "x".to_string(),
                missing: "y".to_string()
            }
        );
    }
}
