//! # Shopping Input Module
//!
//! Snapshot of the recipes selected for shopping and their ingredients, as
//! handed over by the recipe data source once fully fetched. Units and
//! categories are validated while decoding, so everything past this point
//! works on clean values.
//!
//! ## Format
//!
//! ```json
//! {
//!   "recipes": [{ "id": "r1", "title": "Pizza" }],
//!   "ingredients": [
//!     { "id": "i1", "recipeId": "r1", "name": "Basil", "amount": 1, "unit": "cup", "category": "Produce" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::grocery_model::{Ingredient, RecipeRef};
use crate::shopping_errors::ShoppingError;

/// Recipes in scope plus the ingredients to consolidate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingInput {
    #[serde(default)]
    pub recipes: Vec<RecipeRef>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl ShoppingInput {
    /// Decode a JSON snapshot
    pub fn from_json_str(json: &str) -> Result<Self, ShoppingError> {
        let input: ShoppingInput = serde_json::from_str(json)?;
        Ok(input)
    }
}

/// Read and decode a JSON snapshot from disk
pub fn load_shopping_input(path: &Path) -> Result<ShoppingInput> {
    info!("Loading shopping input from {}", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read shopping input {}", path.display()))?;

    let input = ShoppingInput::from_json_str(&content)
        .with_context(|| format!("Failed to decode shopping input {}", path.display()))?;

    info!(
        "Loaded {} recipes and {} ingredients",
        input.recipes.len(),
        input.ingredients.len()
    );

    Ok(input)
}
