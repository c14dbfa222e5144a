//! CB-003: Cycle guard for recipe insertion.
//!
//! Before recipe `R` may require `X`, the existing composition graph must not
//! already contain a path `X → … → R`. Ingredients have no outgoing edges and
//! names absent from the catalog are not expanded.

use super::catalog::Catalog;
use super::types::Item;
use rustc_hash::FxHashSet;

/// Whether adding the edge `new_recipe → candidate` would close a cycle.
///
/// `candidate` is expected to be present in the catalog; an absent name
/// cannot lie on a cycle and yields `false`.
pub fn would_create_cycle(catalog: &Catalog, candidate: &str, new_recipe: &str) -> bool {
    let start = match catalog.lookup(candidate) {
        Some(Item::Recipe(r)) => r,
        Some(Item::Ingredient(_)) | None => return false,
    };

    let mut visited: FxHashSet<&str> = FxHashSet::default();
    visited.insert(start.name.as_str());
    let mut stack = vec![start];

    while let Some(recipe) = stack.pop() {
        for required in recipe.required_items.keys() {
            if required == new_recipe {
                return true;
            }
            if let Some(Item::Recipe(next)) = catalog.lookup(required) {
                if visited.insert(next.name.as_str()) {
                    stack.push(next);
                }
            }
        }
    }

    false
}
