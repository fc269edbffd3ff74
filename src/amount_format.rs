//! # Amount Formatter Module
//!
//! Renders the unit buckets of a consolidated item as one display string,
//! e.g. `"1.5 cups + 2 leaves"`.

use crate::grocery_model::{ConsolidatedAmount, RecipeRef};
use crate::shopping_config::FormatConfig;

/// Pluralize `unit` for `amount`.
///
/// Appends `s` when the amount is not exactly one, unless the unit is empty or
/// already ends in `s` ("leaves", "lbs"). Abbreviations are not recognized and
/// get the suffix like any other unit: `250 g` renders as `250 gs`, `2 tbsp`
/// as `2 tbsps`.
pub fn pluralize_unit(unit: &str, amount: f64) -> String {
    let already_plural = unit
        .chars()
        .last()
        .map(|c| c.eq_ignore_ascii_case(&'s'))
        .unwrap_or(true);

    if amount != 1.0 && !already_plural {
        format!("{unit}s")
    } else {
        unit.to_string()
    }
}

/// Render a single bucket: `"<amount> <unit>"`, or just the amount for plain counts
pub fn format_amount(amount: &ConsolidatedAmount) -> String {
    if amount.unit.is_empty() {
        return amount.amount.to_string();
    }
    format!("{} {}", amount.amount, pluralize_unit(amount.unit.as_str(), amount.amount))
}

/// Render all buckets of one item with an explicit configuration
pub fn format_amounts_with(amounts: &[ConsolidatedAmount], config: &FormatConfig) -> String {
    amounts
        .iter()
        .map(format_amount)
        .collect::<Vec<_>>()
        .join(&config.separator)
}

/// Render all buckets of one item joined by `" + "`. Empty input gives `""`.
///
/// # Examples
///
/// ```rust
/// use grocery_list::amount_format::format_amounts;
/// use grocery_list::grocery_model::{ConsolidatedAmount, Unit};
///
/// let amounts = vec![
///     ConsolidatedAmount { amount: 1.0, unit: Unit::parse("cup").unwrap() },
///     ConsolidatedAmount { amount: 2.0, unit: Unit::parse("leaves").unwrap() },
/// ];
/// assert_eq!(format_amounts(&amounts), "1 cup + 2 leaves");
/// ```
pub fn format_amounts(amounts: &[ConsolidatedAmount]) -> String {
    format_amounts_with(amounts, &FormatConfig::default())
}

/// Titles of the contributing recipes for the "From:" line
pub fn format_recipe_sources(recipes: &[RecipeRef]) -> String {
    recipes
        .iter()
        .map(|r| r.title.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
