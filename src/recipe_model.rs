//! # Recipe and Meal-Plan Data Model
//!
//! This module defines the records the aggregation engine consumes: recipes
//! with their free-text ingredient payload and meal-plan occurrences with
//! their servings. The shapes mirror the JSON served by the recipe API.
//!
//! ## Core Concepts
//!
//! - **Recipe**: an id, a title and an ingredient payload
//! - **IngredientText**: the payload, either an ordered list of lines or one
//!   newline/bullet-delimited blob
//! - **MealOccurrence**: one planned meal referencing a recipe, dated and
//!   assigned to a person, with a servings count

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recipe record as fetched from the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identifier (the API uses string ids)
    pub id: String,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Raw ingredient payload
    #[serde(default)]
    pub ingredients: IngredientText,
}

/// Raw ingredient payload: the API serves either a list of lines or one blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientText {
    /// Ordered list of ingredient lines
    Lines(Vec<String>),
    /// Single newline/bullet-delimited string
    Block(String),
}

impl Default for IngredientText {
    fn default() -> Self {
        IngredientText::Lines(Vec::new())
    }
}

/// One planned meal within a date range, contributing demand for a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealOccurrence {
    /// The recipe this meal is cooked from
    pub recipe_id: String,

    /// Day the meal is planned for
    pub date: NaiveDate,

    /// Person the meal is planned for
    #[serde(default)]
    pub person: String,

    /// Servings for this occurrence (clamped by the scaling resolver)
    #[serde(default = "default_servings")]
    pub servings: f64,
}

fn default_servings() -> f64 {
    1.0
}

impl Recipe {
    /// Create a recipe from parts (mostly useful in tests)
    pub fn new(id: &str, title: &str, ingredients: IngredientText) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_text_deserializes_from_list() {
        let json = r#"{"id":"1","title":"Pancakes","ingredients":["2 cups flour","1 egg"]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(
            recipe.ingredients,
            IngredientText::Lines(vec!["2 cups flour".to_string(), "1 egg".to_string()])
        );
    }

    #[test]
    fn test_ingredient_text_deserializes_from_blob() {
        let json = r#"{"id":"1","title":"Pancakes","ingredients":"2 cups flour\n1 egg"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(
            recipe.ingredients,
            IngredientText::Block("2 cups flour\n1 egg".to_string())
        );
    }

    #[test]
    fn test_meal_occurrence_defaults() {
        let json = r#"{"recipe_id":"7","date":"2026-01-05"}"#;
        let meal: MealOccurrence = serde_json::from_str(json).unwrap();
        assert_eq!(meal.servings, 1.0);
        assert_eq!(meal.person, "");
    }
}
