//! # Provenance Tracker Module
//!
//! Keeps track of which recipes contributed to a consolidated shopping entry.
//! The result is an ordered set: first contributor first, each recipe once.

use log::debug;
use std::collections::{HashMap, HashSet};

use crate::grocery_model::RecipeRef;

/// Lookup from recipe id to the recipe in scope for a consolidation pass
#[derive(Debug, Clone, Default)]
pub struct RecipeIndex {
    recipes: HashMap<String, RecipeRef>,
}

impl RecipeIndex {
    /// Index `recipes` by id. If an id is listed twice the first entry is kept.
    pub fn new(recipes: &[RecipeRef]) -> Self {
        let mut index = HashMap::with_capacity(recipes.len());
        for recipe in recipes {
            index.entry(recipe.id.clone()).or_insert_with(|| recipe.clone());
        }
        Self { recipes: index }
    }

    pub fn get(&self, recipe_id: &str) -> Option<&RecipeRef> {
        self.recipes.get(recipe_id)
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.recipes.contains_key(recipe_id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Incremental collector of distinct contributing recipes
#[derive(Debug, Clone, Default)]
pub struct ProvenanceTracker {
    seen: HashSet<String>,
    recipes: Vec<RecipeRef>,
}

impl ProvenanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of the aggregation target.
    ///
    /// Occurrences whose recipe is not in `index` are left out of provenance;
    /// a recipe may have left the selection after its ingredients were captured.
    pub fn record(&mut self, recipe_id: &str, index: &RecipeIndex) {
        if self.seen.contains(recipe_id) {
            return;
        }
        match index.get(recipe_id) {
            Some(recipe) => {
                self.seen.insert(recipe_id.to_string());
                self.recipes.push(recipe.clone());
            }
            None => debug!("Recipe '{recipe_id}' is not in scope, left out of provenance"),
        }
    }

    pub fn recipes(&self) -> &[RecipeRef] {
        &self.recipes
    }

    pub fn into_recipes(self) -> Vec<RecipeRef> {
        self.recipes
    }
}

/// Collect the distinct in-scope recipes behind a set of occurrences
pub fn track_provenance<'a, I>(recipe_ids: I, index: &RecipeIndex) -> Vec<RecipeRef>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tracker = ProvenanceTracker::new();
    for recipe_id in recipe_ids {
        tracker.record(recipe_id, index);
    }
    tracker.into_recipes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> RecipeIndex {
        RecipeIndex::new(&[
            RecipeRef::new("r1", "Pizza"),
            RecipeRef::new("r2", "Salad"),
            RecipeRef::new("r3", "Soup"),
        ])
    }

    #[test]
    fn test_dedup_and_first_seen_order() {
        let recipes = track_provenance(["r2", "r1", "r2", "r1", "r3"], &index());
        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Salad", "Pizza", "Soup"]);
    }

    #[test]
    fn test_out_of_scope_recipe_is_excluded() {
        let recipes = track_provenance(["r9", "r1", "r9"], &index());
        assert_eq!(recipes, vec![RecipeRef::new("r1", "Pizza")]);
    }

    #[test]
    fn test_no_occurrences() {
        assert!(track_provenance(std::iter::empty(), &index()).is_empty());
    }

    #[test]
    fn test_index_keeps_first_duplicate() {
        let index = RecipeIndex::new(&[
            RecipeRef::new("r1", "Pizza"),
            RecipeRef::new("r1", "Renamed Pizza"),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("r1").unwrap().title, "Pizza");
        assert!(!index.contains("r2"));
    }

    #[test]
    fn test_tracker_incremental() {
        let index = index();
        let mut tracker = ProvenanceTracker::new();
        tracker.record("r3", &index);
        tracker.record("r3", &index);
        assert_eq!(tracker.recipes().len(), 1);
        tracker.record("r1", &index);
        assert_eq!(tracker.into_recipes().len(), 2);
    }
}
