//! # Grocery List
//!
//! Shopping-list consolidation for a recipe manager: merges the ingredient
//! lists of the selected recipes into one deduplicated, unit-bucketed list
//! that remembers which recipes asked for each item, and manages that list
//! while the user shops.

pub mod amount_aggregator;
pub mod amount_format;
pub mod cart;
pub mod cli;
pub mod consolidation;
pub mod grocery_model;
pub mod provenance;
pub mod shopping_config;
pub mod shopping_errors;
pub mod shopping_input;
pub mod shopping_list;
pub mod unit_key;
