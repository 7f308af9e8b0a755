//! # Grocery-List Build Pipeline
//!
//! Wires the engine together for one build request: split each selected
//! recipe's ingredient payload into lines, parse every line, and accumulate
//! the results — scaled by the recipe's resolved factor — into a fresh
//! per-build aggregate, then hand the entries to the assembler.
//!
//! The pipeline is synchronous and pure: it performs no I/O and holds no
//! state between builds. Callers fetch recipe records up front (see
//! `client`); a recipe whose fetch failed is simply absent from the input
//! slice and therefore from the list.

use crate::aggregator::{AggregateEntry, GroceryAggregate};
use crate::assembler::{assemble, GroceryList};
use crate::line_parser::parse_ingredient_line;
use crate::line_splitter::split_ingredients;
use crate::recipe_model::Recipe;
use log::{debug, info};
use std::collections::HashMap;

/// Aggregate ingredient lines across recipes into unsorted entries
///
/// Only recipes present in both `recipes` and `factors` contribute; lines
/// are processed in recipe order, then line order. Unparseable lines
/// degrade to unquantified items rather than failing the build.
pub fn aggregate_recipes(recipes: &[Recipe], factors: &HashMap<String, f64>) -> Vec<AggregateEntry> {
    let mut aggregate = GroceryAggregate::new();

    for recipe in recipes {
        let factor = match factors.get(&recipe.id) {
            Some(factor) => *factor,
            None => {
                debug!("Recipe '{}' has no demand; skipping", recipe.id);
                continue;
            }
        };

        let lines = split_ingredients(&recipe.ingredients);
        debug!(
            "Aggregating {} lines from recipe '{}' at factor {}",
            lines.len(),
            recipe.id,
            factor
        );

        for line in &lines {
            let parsed = parse_ingredient_line(line);
            aggregate.add(&parsed, factor);
        }
    }

    aggregate.into_entries()
}

/// Build a complete, ordered grocery list for one request
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use grocery::builder::build_grocery_list;
/// use grocery::recipe_model::{IngredientText, Recipe};
///
/// let recipes = vec![Recipe::new(
///     "1",
///     "Bread",
///     IngredientText::Lines(vec!["2 cups flour".to_string()]),
/// )];
/// let factors = HashMap::from([("1".to_string(), 2.0)]);
///
/// let list = build_grocery_list(&recipes, &factors, false);
/// assert_eq!(list.len(), 1);
/// ```
pub fn build_grocery_list(
    recipes: &[Recipe],
    factors: &HashMap<String, f64>,
    grouped: bool,
) -> GroceryList {
    let entries = aggregate_recipes(recipes, factors);
    info!(
        "Built grocery list with {} unique items from {} recipes",
        entries.len(),
        recipes.len()
    );
    assemble(entries, grouped)
}
