//! # Grocery
//!
//! Grocery-list aggregation engine for a recipe manager: parses free-text
//! ingredient lines into structured quantity/unit/name triples, merges
//! quantities across recipes that reference the same ingredient, scales by
//! meal-plan servings and manual multipliers, and produces an ordered,
//! optionally category-grouped shopping list.
//!
//! The engine is a pure, synchronous pipeline; the `client` module is the
//! only part that talks to the network, fetching recipe records and
//! meal-plan occurrences before a build starts.

pub mod aggregator;
pub mod assembler;
pub mod builder;
pub mod category;
pub mod client;
pub mod line_parser;
pub mod line_splitter;
pub mod name_normalizer;
pub mod recipe_model;
pub mod scaling;
