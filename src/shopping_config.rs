//! # Shopping Configuration Module
//!
//! Configuration structures for consolidation, amount formatting and the
//! shopping list store, with defaults and loading from environment variables.

use anyhow::Result;
use log::info;
use std::env;
use std::str::FromStr;

use crate::shopping_errors::ShoppingError;

// Constants for shopping-list configuration
pub const DEFAULT_AMOUNT_SEPARATOR: &str = " + ";

pub const ENV_CATEGORY_TIE_BREAK: &str = "GROCERY_CATEGORY_TIE_BREAK";
pub const ENV_AMOUNT_SEPARATOR: &str = "GROCERY_AMOUNT_SEPARATOR";

/// Rule used when members of one consolidation group disagree on category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryTieBreak {
    /// Category of the first in-scope occurrence
    #[default]
    FirstEncountered,
    /// Most frequent category in the group; equal counts go to the one seen first
    MostCommon,
}

impl FromStr for CategoryTieBreak {
    type Err = ShoppingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "first_encountered" => Ok(CategoryTieBreak::FirstEncountered),
            "most_common" | "majority" => Ok(CategoryTieBreak::MostCommon),
            other => Err(ShoppingError::Config(format!(
                "{ENV_CATEGORY_TIE_BREAK} must be 'first' or 'most_common', got '{other}'"
            ))),
        }
    }
}

/// Configuration for the consolidation engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsolidationConfig {
    /// How a group's category is chosen when its members disagree
    pub category_tie_break: CategoryTieBreak,
}

/// Configuration for rendering consolidated amounts
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    /// Placed between the unit buckets of one item
    pub separator: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_AMOUNT_SEPARATOR.to_string(),
        }
    }
}

/// Configuration for the shopping list store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingListConfig {
    /// Formatting used for the `total_amount` of consolidated items
    pub format: FormatConfig,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingConfig {
    pub consolidation: ConsolidationConfig,
    pub list: ShoppingListConfig,
}

impl ShoppingConfig {
    /// Build a configuration from environment variables.
    ///
    /// Unset variables keep their defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShoppingConfig::default();

        if let Some(raw) = lookup(ENV_CATEGORY_TIE_BREAK) {
            config.consolidation.category_tie_break = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_AMOUNT_SEPARATOR) {
            config.list.format.separator = raw;
        }

        info!(
            "Shopping configuration: tie-break {:?}, separator {:?}",
            config.consolidation.category_tie_break, config.list.format.separator
        );

        Ok(config)
    }
}
