//! CB-005: Recipe flattening — manifest and total cook time.
//!
//! Two passes over the sub-graph reachable from the root:
//! 1. Discover every reachable item, rejecting dangling references and
//!    counting in-degrees along the way.
//! 2. Walk the sub-graph in topological order (Kahn's algorithm with
//!    alphabetical tie-breaking), pushing each node's multiplier into its
//!    children. A node is expanded only once all of its parents have been,
//!    so shared sub-recipes see every contribution before they propagate.

use super::catalog::Catalog;
use super::error::CatalogError;
use super::types::{Amount, Item, ManifestEntry, Recipe, Summary};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Summarize one unit of the recipe `root`.
///
/// Fails with `NotFound`, `NotARecipe`, or `DanglingReference`. The catalog
/// only admits acyclic insertions, so every reachable node gets ordered.
pub fn summarize(catalog: &Catalog, root: &str) -> Result<Summary, CatalogError> {
    let recipe = match catalog.lookup(root) {
        Some(Item::Recipe(r)) => r,
        Some(Item::Ingredient(_)) => return Err(CatalogError::NotARecipe(root.to_string())),
        None => return Err(CatalogError::NotFound(root.to_string())),
    };

    let in_degree = discover(catalog, recipe)?;
    let order = topological_order(catalog, root, in_degree);

    let mut tally: FxHashMap<&str, Amount> = FxHashMap::default();
    tally.insert(root, Amount::ONE);
    let mut ingredients = Vec::new();
    let mut cook_time = Amount::ZERO;

    for name in order {
        let multiplier = tally.get(name).copied().unwrap_or_default();
        match catalog.lookup(name) {
            Some(Item::Recipe(r)) => {
                for (child, quantity) in &r.required_items {
                    *tally.entry(child.as_str()).or_default() += *quantity * multiplier;
                }
            }
            Some(Item::Ingredient(i)) => {
                cook_time += multiplier * i.cook_time;
                ingredients.push(ManifestEntry {
                    name: name.to_string(),
                    quantity: multiplier,
                });
            }
            None => {}
        }
    }

    tracing::debug!(root, ingredients = ingredients.len(), %cook_time, "summarized recipe");
    Ok(Summary {
        name: root.to_string(),
        cook_time,
        ingredients,
    })
}

/// Reachable items from `root`, each with its in-degree inside the sub-graph.
fn discover<'a>(
    catalog: &'a Catalog,
    root: &'a Recipe,
) -> Result<FxHashMap<&'a str, usize>, CatalogError> {
    let mut in_degree: FxHashMap<&str, usize> = FxHashMap::default();
    in_degree.insert(root.name.as_str(), 0);
    let mut stack = vec![root];

    while let Some(recipe) = stack.pop() {
        for child in recipe.required_items.keys() {
            let item = catalog
                .lookup(child)
                .ok_or_else(|| CatalogError::DanglingReference {
                    recipe: recipe.name.clone(),
                    missing: child.clone(),
                })?;
            let degree = in_degree.entry(child.as_str()).or_insert(0);
            *degree += 1;
            if *degree == 1 {
                if let Item::Recipe(r) = item {
                    stack.push(r);
                }
            }
        }
    }

    Ok(in_degree)
}

/// Kahn's algorithm over the discovered sub-graph.
fn topological_order<'a>(
    catalog: &'a Catalog,
    root: &'a str,
    mut in_degree: FxHashMap<&'a str, usize>,
) -> Vec<&'a str> {
    let total = in_degree.len();
    let mut queue: VecDeque<&str> = VecDeque::from([root]);
    let mut order = Vec::with_capacity(total);

    while let Some(current) = queue.pop_front() {
        order.push(current);

        let mut next_ready: Vec<&str> = Vec::new();
        if let Some(Item::Recipe(r)) = catalog.lookup(current) {
            for child in r.required_items.keys() {
                if let Some(degree) = in_degree.get_mut(child.as_str()) {
                    *degree -= 1;
                    if *degree == 0 {
                        next_ready.push(child.as_str());
                    }
                }
            }
        }
        next_ready.sort_unstable();
        queue.extend(next_ready);
    }

    debug_assert_eq!(order.len(), total, "composition graph under '{}' is cyclic", root);
    order
}
