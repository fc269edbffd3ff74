//! Cart holding the items confirmed in the shopping list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::grocery_model::ShoppingItem;

/// Shopping item that has been moved into the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub item: ShoppingItem,
    pub carted_at: DateTime<Utc>,
}

/// Items picked up during a shopping trip
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `items` in the given order
    pub fn receive(&mut self, items: Vec<ShoppingItem>) {
        let carted_at = Utc::now();
        self.items
            .extend(items.into_iter().map(|item| CartItem { item, carted_at }));
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take `id` back out of the cart. Returns `false` if it is not there.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|entry| entry.item.id != id);
        let removed = self.items.len() != before;
        debug!(item_id = id, removed, "Remove from cart");
        removed
    }

    /// Finish the trip: empty the cart and hand back what was in it
    pub fn complete_shopping(&mut self) -> Vec<CartItem> {
        let done = std::mem::take(&mut self.items);
        info!(items = done.len(), "Completed shopping");
        done
    }
}
