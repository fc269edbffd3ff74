//! # Grocery Data Model
//!
//! Data structures shared by the consolidation engine and the shopping list:
//! structured ingredients as authored in recipes, the minimal recipe projection
//! used for provenance, and the consolidated and live shopping entries derived
//! from them.
//!
//! ## Core Concepts
//!
//! - **Ingredient**: one structured ingredient line of one recipe
//! - **RecipeRef**: `(id, title)` of a recipe, used only to show where an item came from
//! - **Unit**: validated unit string (`"cup"`, `"g"`, `""` for plain counts)
//! - **GroceryCategory**: closed set of aisle groupings used for display
//! - **ConsolidatedItem**: one deduplicated, summed shopping entry
//! - **ShoppingItem**: one live entry in the user's shopping list
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::grocery_model::{GroceryCategory, Ingredient, Unit};
//!
//! let basil = Ingredient::new("r1", "Basil", 1.0, Unit::parse("cup").unwrap())
//!     .with_id("i1")
//!     .with_category(GroceryCategory::Produce);
//! assert_eq!(basil.unit.as_str(), "cup");
//! ```

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shopping_errors::ShoppingError;
use crate::unit_key::normalize_unit;

/// Maximum number of characters accepted in a unit string
pub const MAX_UNIT_LENGTH: usize = 32;

lazy_static! {
    static ref UNIT_PATTERN: Regex =
        Regex::new(r"^[\p{L}\p{N} .&/'-]*$").expect("Unit pattern should be valid");
}

/// Closed set of display groupings for shopping items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroceryCategory {
    Produce,
    Meat,
    Dairy,
    Bakery,
    Pantry,
    Frozen,
    Beverages,
    Snacks,
    Household,
    Other,
}

impl GroceryCategory {
    /// All categories in aisle order
    pub const ALL: [GroceryCategory; 10] = [
        GroceryCategory::Produce,
        GroceryCategory::Meat,
        GroceryCategory::Dairy,
        GroceryCategory::Bakery,
        GroceryCategory::Pantry,
        GroceryCategory::Frozen,
        GroceryCategory::Beverages,
        GroceryCategory::Snacks,
        GroceryCategory::Household,
        GroceryCategory::Other,
    ];

    /// Human-readable label shown as a section title
    pub fn label(&self) -> &'static str {
        match self {
            GroceryCategory::Produce => "Produce",
            GroceryCategory::Meat => "Meat & Seafood",
            GroceryCategory::Dairy => "Dairy & Eggs",
            GroceryCategory::Bakery => "Bakery",
            GroceryCategory::Pantry => "Pantry",
            GroceryCategory::Frozen => "Frozen",
            GroceryCategory::Beverages => "Beverages",
            GroceryCategory::Snacks => "Snacks",
            GroceryCategory::Household => "Household",
            GroceryCategory::Other => "Other",
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            GroceryCategory::Produce => "produce",
            GroceryCategory::Meat => "meat",
            GroceryCategory::Dairy => "dairy",
            GroceryCategory::Bakery => "bakery",
            GroceryCategory::Pantry => "pantry",
            GroceryCategory::Frozen => "frozen",
            GroceryCategory::Beverages => "beverages",
            GroceryCategory::Snacks => "snacks",
            GroceryCategory::Household => "household",
            GroceryCategory::Other => "other",
        }
    }

    /// Map any label to a category, falling back to `Other` for unknown values
    pub fn from_label_lenient(label: &str) -> Self {
        match label.parse() {
            Ok(category) => category,
            Err(_) => {
                warn!("Unrecognized grocery category '{label}', filing under Other");
                GroceryCategory::Other
            }
        }
    }
}

impl FromStr for GroceryCategory {
    type Err = ShoppingError;

    /// Accepts a display label ("Dairy & Eggs") or a variant name ("dairy"),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GroceryCategory::ALL
            .iter()
            .copied()
            .find(|c| {
                c.label().eq_ignore_ascii_case(wanted) || c.variant_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ShoppingError::UnknownCategory(s.to_string()))
    }
}

impl From<String> for GroceryCategory {
    fn from(label: String) -> Self {
        GroceryCategory::from_label_lenient(&label)
    }
}

impl From<GroceryCategory> for String {
    fn from(category: GroceryCategory) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Validated unit string.
///
/// Units are kept as written (trimmed) so the shopping list can show them back
/// to the user; [`Unit::normalized`] gives the folded form used for grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Unit(String);

impl Unit {
    /// Validate and build a unit
    pub fn parse(raw: &str) -> Result<Self, ShoppingError> {
        let trimmed = raw.trim();

        if trimmed.chars().count() > MAX_UNIT_LENGTH {
            return Err(ShoppingError::InvalidUnit(format!(
                "'{trimmed}' is longer than {MAX_UNIT_LENGTH} characters"
            )));
        }

        if !UNIT_PATTERN.is_match(trimmed) {
            return Err(ShoppingError::InvalidUnit(format!(
                "'{trimmed}' contains unsupported characters"
            )));
        }

        Ok(Unit(trimmed.to_string()))
    }

    /// Unit for plain counts ("3 eggs")
    pub fn none() -> Self {
        Unit(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lower-cased, whitespace-folded form of this unit
    pub fn normalized(&self) -> Unit {
        Unit(normalize_unit(&self.0))
    }
}

impl FromStr for Unit {
    type Err = ShoppingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s)
    }
}

impl TryFrom<String> for Unit {
    type Error = ShoppingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Unit::parse(&value)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured ingredient of one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Ingredient identity
    #[serde(default)]
    pub id: String,

    /// Recipe that owns this ingredient
    pub recipe_id: String,

    /// Display name (e.g., "Fresh Basil")
    pub name: String,

    /// Quantity in `unit`; not validated, passed through as authored
    pub amount: f64,

    /// Unit of `amount`
    #[serde(default = "Unit::none")]
    pub unit: Unit,

    /// Aisle grouping
    #[serde(default = "default_category")]
    pub category: GroceryCategory,
}

fn default_category() -> GroceryCategory {
    GroceryCategory::Other
}

impl Ingredient {
    /// Create an ingredient of `recipe_id`, filed under `Other` until a category is set
    pub fn new(recipe_id: &str, name: &str, amount: f64, unit: Unit) -> Self {
        Self {
            id: String::new(),
            recipe_id: recipe_id.to_string(),
            name: name.to_string(),
            amount,
            unit,
            category: GroceryCategory::Other,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_category(mut self, category: GroceryCategory) -> Self {
        self.category = category;
        self
    }
}

/// Minimal projection of a recipe used for provenance display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeRef {
    pub id: String,
    pub title: String,
}

impl RecipeRef {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }
}

/// Summed quantity of one normalized unit bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedAmount {
    pub amount: f64,
    pub unit: Unit,
}

/// One deduplicated shopping entry produced by a consolidation pass.
///
/// Invariant: no two entries of `amounts` share the same normalized unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedItem {
    pub name: String,
    pub category: GroceryCategory,
    pub amounts: Vec<ConsolidatedAmount>,
    pub recipes: Vec<RecipeRef>,
}

/// How a shopping item entered the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrigin {
    /// Typed in by the user
    Manual,
    /// Derived from a consolidation pass
    Consolidated,
}

/// Live entry of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub category: GroceryCategory,
    pub checked: bool,
    pub origin: ItemOrigin,
    /// Originating recipe shown next to the item (first contributor)
    pub recipe: Option<RecipeRef>,
    /// Every recipe that contributed to the item
    pub recipes: Vec<RecipeRef>,
    pub amounts: Vec<ConsolidatedAmount>,
    /// Rendered amounts, e.g. "1.5 cups + 2 leaves"
    pub total_amount: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl ShoppingItem {
    pub fn is_manual(&self) -> bool {
        self.origin == ItemOrigin::Manual
    }
}
