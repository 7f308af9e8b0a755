//! # Scale-Factor Resolution
//!
//! Computes each recipe's effective scale factor from the two independent
//! sources of demand that can coexist for the same recipe:
//!
//! - **Meal-plan occurrences**: each planned meal contributes its servings
//!   count, individually clamped, summed across the selected window.
//! - **Manual picks**: a user-chosen multiplier per recipe (default 1).
//!
//! The per-recipe subtotal (meal sum + manual factor) is multiplied by one
//! global multiplier. Every number that enters the computation is clamped
//! into `[0.01, 100]`; non-finite or non-positive inputs clamp to 1. A
//! recipe with neither source of demand is absent from the result entirely.

use crate::recipe_model::MealOccurrence;
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

/// Smallest accepted scale factor
pub const MIN_FACTOR: f64 = 0.01;
/// Largest accepted scale factor
pub const MAX_FACTOR: f64 = 100.0;

/// Clamp a scale input into `[0.01, 100]`
///
/// Non-finite or non-positive inputs clamp to 1 rather than being rejected:
/// a garbled multiplier should never sink the whole build.
///
/// # Examples
///
/// ```rust
/// use grocery::scaling::clamp_factor;
///
/// assert_eq!(clamp_factor(2.0), 2.0);
/// assert_eq!(clamp_factor(0.0), 1.0);
/// assert_eq!(clamp_factor(-3.0), 1.0);
/// assert_eq!(clamp_factor(f64::NAN), 1.0);
/// assert_eq!(clamp_factor(1e6), 100.0);
/// ```
pub fn clamp_factor(input: f64) -> f64 {
    if !input.is_finite() || input <= 0.0 {
        return 1.0;
    }
    input.clamp(MIN_FACTOR, MAX_FACTOR)
}

/// Date-range and person filter for meal-plan occurrences
#[derive(Debug, Clone, PartialEq)]
pub struct PlanWindow {
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
    /// Restrict to one person; `None` keeps everyone
    pub person: Option<String>,
}

impl PlanWindow {
    /// Whether an occurrence falls inside this window
    pub fn contains(&self, meal: &MealOccurrence) -> bool {
        if meal.date < self.start || meal.date > self.end {
            return false;
        }
        match &self.person {
            Some(person) => meal.person == *person,
            None => true,
        }
    }
}

/// Accumulates demand per recipe and resolves effective scale factors
///
/// One resolver is built per grocery-list request and discarded with it.
#[derive(Debug, Default)]
pub struct ScalingResolver {
    meal_servings: HashMap<String, f64>,
    manual_factors: HashMap<String, f64>,
}

impl ScalingResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Add meal-plan occurrences, keeping only those inside `window`
    ///
    /// Each occurrence's servings count is clamped on its own before being
    /// summed into the recipe's meal demand.
    pub fn add_meals(&mut self, meals: &[MealOccurrence], window: Option<&PlanWindow>) {
        for meal in meals {
            if let Some(window) = window {
                if !window.contains(meal) {
                    continue;
                }
            }
            let servings = clamp_factor(meal.servings);
            *self
                .meal_servings
                .entry(meal.recipe_id.clone())
                .or_insert(0.0) += servings;
        }
        debug!(
            "Resolver now tracks meal demand for {} recipes",
            self.meal_servings.len()
        );
    }

    /// Add a manually picked recipe with an explicit multiplier
    ///
    /// Picking the same recipe again replaces the previous multiplier.
    pub fn add_manual(&mut self, recipe_id: &str, factor: f64) {
        self.manual_factors
            .insert(recipe_id.to_string(), clamp_factor(factor));
    }

    /// Add a manually picked recipe with the default multiplier of 1
    pub fn add_pick(&mut self, recipe_id: &str) {
        self.add_manual(recipe_id, 1.0);
    }

    /// Resolve final factors: `(meal sum + manual factor) × global multiplier`
    ///
    /// Recipes with no demand from either source do not appear in the map.
    pub fn resolve(&self, global_multiplier: f64) -> HashMap<String, f64> {
        let global = clamp_factor(global_multiplier);
        let mut factors: HashMap<String, f64> = HashMap::new();

        for (id, servings) in &self.meal_servings {
            *factors.entry(id.clone()).or_insert(0.0) += servings;
        }
        for (id, factor) in &self.manual_factors {
            *factors.entry(id.clone()).or_insert(0.0) += factor;
        }

        for factor in factors.values_mut() {
            *factor *= global;
        }

        debug!(
            "Resolved scale factors for {} recipes (global multiplier {})",
            factors.len(),
            global
        );
        factors
    }
}
