//! # Shopping List Store Module
//!
//! The live, mutable shopping list. It has a single owner that passes it (or a
//! reference to it) to whatever needs it, and it only changes through the
//! commands below. Every command applies fully or not at all; commands that
//! name a missing item or carry an unusable name are ignored, not errors.
//!
//! ## Item lifecycle
//!
//! ```text
//! add / populate ──► Active(unchecked) ◄──toggle──► Active(checked)
//!                          │                             │
//!                        delete                   delete / checkout
//!                          ▼                             ▼
//!                       Removed                       Removed
//! ```
//!
//! Items come from two sources kept apart by [`ItemOrigin`]: manual entries
//! typed by the user, and entries derived from a consolidation pass. A new
//! pass replaces the consolidated entries and leaves manual ones untouched.

use chrono::Utc;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::amount_format::format_amounts_with;
use crate::cart::Cart;
use crate::grocery_model::{ConsolidatedItem, GroceryCategory, ItemOrigin, ShoppingItem};
use crate::shopping_config::ShoppingListConfig;

/// Counts shown under the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListSummary {
    pub total: usize,
    pub completed: usize,
}

/// Live shopping list
#[derive(Debug, Clone)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    next_id: u64,
    config: ShoppingListConfig,
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::new(ShoppingListConfig::default())
    }
}

impl ShoppingList {
    pub fn new(config: ShoppingListConfig) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            config,
        }
    }

    /// Create a list populated from a consolidation pass
    pub fn from_consolidation(items: &[ConsolidatedItem], config: ShoppingListConfig) -> Self {
        let mut list = Self::new(config);
        list.populate_from_consolidation(items);
        list
    }

    fn fresh_id(&mut self) -> String {
        let id = format!("item-{}", self.next_id);
        self.next_id += 1;
        id
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip the checked state of `id`. Returns `false` if no such item exists.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                debug!(item_id = id, checked = item.checked, "Toggled shopping item");
                true
            }
            None => {
                debug!(item_id = id, "Toggle ignored, no such item");
                false
            }
        }
    }

    /// Remove `id`. Returns `false` if it was already gone.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(item_id = id, "Deleted shopping item");
        } else {
            debug!(item_id = id, "Delete ignored, no such item");
        }
        removed
    }

    /// Add a manual item filed under `Other`.
    ///
    /// Returns the new item's id, or `None` when the name is blank.
    pub fn add(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected blank manual shopping item");
            return None;
        }
        let name = name.to_string();

        let id = self.fresh_id();
        self.items.push(ShoppingItem {
            id: id.clone(),
            name,
            category: GroceryCategory::Other,
            checked: false,
            origin: ItemOrigin::Manual,
            recipe: None,
            recipes: Vec::new(),
            amounts: Vec::new(),
            total_amount: None,
            added_at: Utc::now(),
        });
        debug!(item_id = %id, "Added manual shopping item");

        Some(id)
    }

    /// Replace the consolidated part of the list with a new consolidation result.
    ///
    /// Manual items stay where they are; previous consolidated items are
    /// dropped and one unchecked item per `ConsolidatedItem` is appended.
    pub fn populate_from_consolidation(&mut self, consolidated: &[ConsolidatedItem]) {
        let before = self.items.len();
        self.items.retain(ShoppingItem::is_manual);
        let replaced = before - self.items.len();

        let added_at = Utc::now();
        for item in consolidated {
            let id = self.fresh_id();
            let total_amount = format_amounts_with(&item.amounts, &self.config.format);
            self.items.push(ShoppingItem {
                id,
                name: item.name.clone(),
                category: item.category,
                checked: false,
                origin: ItemOrigin::Consolidated,
                recipe: item.recipes.first().cloned(),
                recipes: item.recipes.clone(),
                amounts: item.amounts.clone(),
                total_amount: Some(total_amount),
                added_at,
            });
        }

        info!(
            replaced,
            added = consolidated.len(),
            kept_manual = self.items.len() - consolidated.len(),
            "Populated shopping list from consolidation"
        );
    }

    /// Items grouped by category in aisle order, list order inside each group
    pub fn group_by_category(&self) -> BTreeMap<GroceryCategory, Vec<&ShoppingItem>> {
        let mut groups: BTreeMap<GroceryCategory, Vec<&ShoppingItem>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.category).or_default().push(item);
        }
        groups
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary {
            total: self.items.len(),
            completed: self.items.iter().filter(|item| item.checked).count(),
        }
    }

    /// Remove and return every checked item, keeping the rest in order
    pub fn take_checked(&mut self) -> Vec<ShoppingItem> {
        let (checked, remaining): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.items).into_iter().partition(|item| item.checked);
        self.items = remaining;
        checked
    }

    /// Move every checked item into `cart`. Returns how many moved.
    pub fn checkout_into(&mut self, cart: &mut Cart) -> usize {
        let checked = self.take_checked();
        let moved = checked.len();
        cart.receive(checked);
        info!(moved, remaining = self.items.len(), "Moved checked items to cart");
        moved
    }
}
