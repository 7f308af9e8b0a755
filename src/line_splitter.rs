//! # Ingredient Line Splitter
//!
//! Turns a recipe's raw ingredient payload into an ordered sequence of
//! trimmed, non-empty lines. Payloads arrive either as a list of strings or
//! as one blob delimited by newlines or bullet characters (`•`), depending
//! on how the recipe was imported.
//!
//! No deduplication happens here; order is preserved so later stages see
//! lines exactly as the recipe author wrote them.

use crate::recipe_model::IngredientText;
use log::trace;

/// Split a raw ingredient payload into trimmed, non-empty lines
///
/// # Examples
///
/// ```rust
/// use grocery::line_splitter::split_ingredients;
/// use grocery::recipe_model::IngredientText;
///
/// let blob = IngredientText::Block("2 cups flour\n• 1 tsp salt\n\n".to_string());
/// let lines = split_ingredients(&blob);
/// assert_eq!(lines, vec!["2 cups flour", "1 tsp salt"]);
/// ```
pub fn split_ingredients(raw: &IngredientText) -> Vec<String> {
    let lines: Vec<String> = match raw {
        IngredientText::Lines(items) => items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect(),
        IngredientText::Block(text) => text
            .split(|c: char| c == '\n' || c == '\u{2022}')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect(),
    };

    trace!("Split ingredient payload into {} lines", lines.len());
    lines
}
