//! # Consolidation Engine Module
//!
//! Turns the raw ingredient lists of the selected recipes into one
//! deduplicated shopping list: ingredients are grouped by normalized
//! `(name, unit)`, their amounts summed per unit and the contributing recipes
//! recorded.
//!
//! ## Scope
//!
//! Only ingredients whose recipe is part of the `recipes` argument take part.
//! An out-of-scope ingredient contributes neither amount nor provenance.
//!
//! ## Determinism
//!
//! A pass has no side effects and its output depends only on its inputs and
//! their order: groups come out in discovery order and units inside a group in
//! first-encounter order. Running the same pass twice gives identical results.
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::consolidation::consolidate;
//! use grocery_list::grocery_model::{Ingredient, RecipeRef, Unit};
//!
//! let cup = Unit::parse("cup").unwrap();
//! let ingredients = vec![
//!     Ingredient::new("r1", "Basil", 1.0, cup.clone()),
//!     Ingredient::new("r2", "basil", 0.5, cup),
//! ];
//! let recipes = vec![RecipeRef::new("r1", "Pizza"), RecipeRef::new("r2", "Salad")];
//!
//! let items = consolidate(&ingredients, &recipes);
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].amounts[0].amount, 1.5);
//! assert_eq!(items[0].recipes.len(), 2);
//! ```

use log::{debug, info, warn};
use std::collections::HashMap;

use crate::amount_aggregator::aggregate_amounts;
use crate::grocery_model::{ConsolidatedItem, GroceryCategory, Ingredient, RecipeRef};
use crate::provenance::{track_provenance, RecipeIndex};
use crate::shopping_config::{CategoryTieBreak, ConsolidationConfig};
use crate::unit_key::normalize;

/// Counters describing one consolidation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsolidationReport {
    /// Ingredients whose recipe was in scope
    pub in_scope: usize,
    /// Ingredients dropped because their recipe was not in scope
    pub skipped_out_of_scope: usize,
    /// Number of consolidated items produced
    pub groups: usize,
    /// Groups whose members disagreed on category
    pub category_conflicts: usize,
}

/// Ingredients sharing one aggregation key, in input order
struct Group<'a> {
    members: Vec<&'a Ingredient>,
}

/// Consolidation engine with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct ConsolidationEngine {
    config: ConsolidationConfig,
}

impl ConsolidationEngine {
    pub fn new(config: ConsolidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    /// Consolidate `ingredients` restricted to `recipes`
    pub fn consolidate(&self, ingredients: &[Ingredient], recipes: &[RecipeRef]) -> Vec<ConsolidatedItem> {
        self.consolidate_with_report(ingredients, recipes).0
    }

    /// Consolidate and also return counters about the pass
    pub fn consolidate_with_report(
        &self,
        ingredients: &[Ingredient],
        recipes: &[RecipeRef],
    ) -> (Vec<ConsolidatedItem>, ConsolidationReport) {
        info!(
            "Consolidating {} ingredients across {} recipes",
            ingredients.len(),
            recipes.len()
        );

        let index = RecipeIndex::new(recipes);
        let mut report = ConsolidationReport::default();

        let mut groups: Vec<Group<'_>> = Vec::new();
        let mut group_index: HashMap<String, usize> = HashMap::new();

        for ingredient in ingredients {
            if !index.contains(&ingredient.recipe_id) {
                debug!(
                    "Skipping '{}': recipe '{}' is not in scope",
                    ingredient.name, ingredient.recipe_id
                );
                report.skipped_out_of_scope += 1;
                continue;
            }
            report.in_scope += 1;

            let key = normalize(&ingredient.name, ingredient.unit.as_str());
            match group_index.get(&key) {
                Some(&position) => groups[position].members.push(ingredient),
                None => {
                    group_index.insert(key, groups.len());
                    groups.push(Group {
                        members: vec![ingredient],
                    });
                }
            }
        }

        let items: Vec<ConsolidatedItem> = groups
            .iter()
            .map(|group| {
                let (category, conflicted) = self.pick_category(&group.members);
                if conflicted {
                    report.category_conflicts += 1;
                }
                build_item(group, category, &index)
            })
            .collect();

        report.groups = items.len();
        info!(
            "Consolidated into {} items ({} skipped out of scope, {} category conflicts)",
            report.groups, report.skipped_out_of_scope, report.category_conflicts
        );

        (items, report)
    }

    /// Choose the category of a group; the flag tells whether members disagreed
    fn pick_category(&self, members: &[&Ingredient]) -> (GroceryCategory, bool) {
        // Groups are never empty: each is created with its first member.
        let first = members[0].category;

        let mut counts: Vec<(GroceryCategory, usize)> = Vec::new();
        for member in members {
            match counts.iter_mut().find(|(category, _)| *category == member.category) {
                Some((_, count)) => *count += 1,
                None => counts.push((member.category, 1)),
            }
        }

        if counts.len() == 1 {
            return (first, false);
        }

        let chosen = match self.config.category_tie_break {
            CategoryTieBreak::FirstEncountered => first,
            CategoryTieBreak::MostCommon => {
                let mut best = counts[0];
                for &candidate in &counts[1..] {
                    if candidate.1 > best.1 {
                        best = candidate;
                    }
                }
                best.0
            }
        };

        warn!(
            "Ingredient '{}' is filed under {} categories, using {} ({:?})",
            members[0].name,
            counts.len(),
            chosen,
            self.config.category_tie_break
        );

        (chosen, true)
    }
}

fn build_item(group: &Group<'_>, category: GroceryCategory, index: &RecipeIndex) -> ConsolidatedItem {
    let amounts = aggregate_amounts(group.members.iter().map(|i| (i.amount, &i.unit)));
    let recipes = track_provenance(group.members.iter().map(|i| i.recipe_id.as_str()), index);

    ConsolidatedItem {
        name: group.members[0].name.clone(),
        category,
        amounts,
        recipes,
    }
}

/// Consolidate with the default configuration (first encountered category wins)
pub fn consolidate(ingredients: &[Ingredient], recipes: &[RecipeRef]) -> Vec<ConsolidatedItem> {
    ConsolidationEngine::default().consolidate(ingredients, recipes)
}
