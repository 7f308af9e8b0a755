//! # Quantity Aggregator
//!
//! Folds parsed, scaled ingredient lines from every selected recipe into one
//! mapping keyed by `(normalized name, unit)`. Different unit strings for
//! the same substance are never merged; "2 cups flour" and "250 g flour"
//! stay separate entries on purpose.
//!
//! One `GroceryAggregate` is constructed per build request, threaded through
//! the pipeline, and discarded once the entries are handed to the assembler.
//! Nothing is shared across builds.
//!
//! ## Merge rule
//!
//! Quantities are summed only when BOTH the existing entry and the incoming
//! line carry one. Otherwise the existing value stands — including the case
//! where the entry was first seen without a quantity and a later line has
//! one. This asymmetry is preserved for compatibility with the established
//! list behavior; see DESIGN.md before changing it.

use crate::category::classify;
use crate::line_parser::ParsedIngredient;
use log::{debug, trace};
use std::collections::HashMap;

/// One merged, post-scaling grocery-list line item
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateEntry {
    /// Name as first seen for this key; never revised by later merges
    pub display_name: String,
    /// Unit string, possibly empty; part of the identity
    pub unit: String,
    /// Merged quantity; `None` when never quantified
    pub quantity: Option<f64>,
    /// Grocery category, fixed at first insertion
    pub category: String,
}

/// Per-build aggregation map keyed by `normalized_key + "__" + unit`
///
/// Insertion order is tracked so the assembled output is deterministic even
/// where the sort key ties (same category and display name, different unit).
#[derive(Debug, Default)]
pub struct GroceryAggregate {
    entries: HashMap<String, AggregateEntry>,
    order: Vec<String>,
}

impl GroceryAggregate {
    /// Create an empty aggregate for one build
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one parsed line, scaled by the recipe's factor
    pub fn add(&mut self, parsed: &ParsedIngredient, factor: f64) {
        let scaled = parsed.quantity.map(|q| q * factor);
        let key = format!("{}__{}", parsed.normalized_key, parsed.unit);

        match self.entries.get_mut(&key) {
            None => {
                trace!("New aggregate entry '{}' (qty {:?})", key, scaled);
                self.order.push(key.clone());
                self.entries.insert(
                    key,
                    AggregateEntry {
                        display_name: parsed.name.clone(),
                        unit: parsed.unit.clone(),
                        quantity: scaled,
                        category: classify(&parsed.name).to_string(),
                    },
                );
            }
            Some(existing) => {
                if let (Some(current), Some(incoming)) = (existing.quantity, scaled) {
                    existing.quantity = Some(current + incoming);
                    trace!("Merged '{}' -> qty {:?}", key, existing.quantity);
                }
                // Either side missing: the existing value stands.
            }
        }
    }

    /// Number of distinct entries so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been accumulated
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the aggregate and hand its entries to the assembler
    ///
    /// Entries come out in first-insertion order; the assembler's stable
    /// sort keeps that order wherever its own key ties.
    pub fn into_entries(mut self) -> Vec<AggregateEntry> {
        debug!("Aggregation finished with {} unique entries", self.entries.len());
        self.order
            .into_iter()
            .filter_map(|key| self.entries.remove(&key))
            .collect()
    }
}
