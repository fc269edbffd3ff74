//! # Consolidation Integration Tests
//!
//! End-to-end checks of the consolidation engine against the properties the
//! shopping list relies on: idempotence, conservation of quantity, scope
//! exclusion, provenance deduplication and stable ordering.

use std::collections::{HashMap, HashSet};

use grocery_list::amount_format::format_amounts;
use grocery_list::consolidation::{consolidate, ConsolidationEngine};
use grocery_list::grocery_model::{GroceryCategory, Ingredient, RecipeRef, Unit};
use grocery_list::unit_key::normalize;

fn unit(raw: &str) -> Unit {
    Unit::parse(raw).unwrap()
}

fn weekly_recipes() -> Vec<RecipeRef> {
    vec![
        RecipeRef::new("r1", "Pizza"),
        RecipeRef::new("r2", "Salad"),
        RecipeRef::new("r3", "Crêpes"),
    ]
}

fn weekly_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new("r1", "Flour", 2.0, unit("cup")).with_category(GroceryCategory::Pantry),
        Ingredient::new("r1", "Mozzarella", 200.0, unit("g")).with_category(GroceryCategory::Dairy),
        Ingredient::new("r1", "Tomato", 3.0, Unit::none()).with_category(GroceryCategory::Produce),
        Ingredient::new("r2", "tomato", 2.0, Unit::none()).with_category(GroceryCategory::Produce),
        Ingredient::new("r2", "Olive Oil", 2.0, unit("tbsp")).with_category(GroceryCategory::Pantry),
        Ingredient::new("r3", "flour", 125.0, unit("g")).with_category(GroceryCategory::Pantry),
        Ingredient::new("r3", "Eggs", 2.0, Unit::none()).with_category(GroceryCategory::Dairy),
        Ingredient::new("r3", "Milk", 0.5, unit("l")).with_category(GroceryCategory::Dairy),
        Ingredient::new("r1", "olive oil", 1.0, unit("Tbsp")).with_category(GroceryCategory::Pantry),
        Ingredient::new("r4", "Tomato", 10.0, Unit::none()).with_category(GroceryCategory::Produce),
        Ingredient::new("r3", "FLOUR", 0.5, unit("Cup")).with_category(GroceryCategory::Pantry),
    ]
}

#[test]
fn test_basil_example() {
    let ingredients = vec![
        Ingredient::new("r1", "Basil", 1.0, unit("cup")),
        Ingredient::new("r1", "basil", 0.5, unit("Cup")),
        Ingredient::new("r2", "Basil", 2.0, unit("leaves")),
    ];
    let recipes = vec![RecipeRef::new("r1", "Pizza"), RecipeRef::new("r2", "Salad")];

    let items = consolidate(&ingredients, &recipes);

    assert_eq!(items.len(), 2);

    assert_eq!(items[0].name, "Basil");
    assert_eq!(items[0].amounts.len(), 1);
    assert_eq!(items[0].amounts[0].amount, 1.5);
    assert_eq!(items[0].amounts[0].unit.as_str(), "cup");
    assert_eq!(items[0].recipes, vec![RecipeRef::new("r1", "Pizza")]);

    assert_eq!(items[1].name, "Basil");
    assert_eq!(items[1].amounts[0].amount, 2.0);
    assert_eq!(items[1].amounts[0].unit.as_str(), "leaves");
    assert_eq!(items[1].recipes, vec![RecipeRef::new("r2", "Salad")]);

    assert_eq!(format_amounts(&items[0].amounts), "1.5 cups");
    assert_eq!(format_amounts(&items[1].amounts), "2 leaves");
}

#[test]
fn test_idempotence() {
    let ingredients = weekly_ingredients();
    let recipes = weekly_recipes();
    let engine = ConsolidationEngine::default();

    let first = engine.consolidate(&ingredients, &recipes);
    let second = engine.consolidate(&ingredients, &recipes);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_conservation_of_quantity() {
    let ingredients = weekly_ingredients();
    let recipes = weekly_recipes();
    let in_scope: HashSet<&str> = recipes.iter().map(|r| r.id.as_str()).collect();

    let mut expected: HashMap<String, f64> = HashMap::new();
    for ingredient in ingredients.iter().filter(|i| in_scope.contains(i.recipe_id.as_str())) {
        *expected
            .entry(normalize(&ingredient.name, ingredient.unit.as_str()))
            .or_insert(0.0) += ingredient.amount;
    }

    let items = consolidate(&ingredients, &recipes);

    let mut actual: HashMap<String, f64> = HashMap::new();
    for item in &items {
        for amount in &item.amounts {
            *actual
                .entry(normalize(&item.name, amount.unit.as_str()))
                .or_insert(0.0) += amount.amount;
        }
    }

    assert_eq!(actual, expected);
}

#[test]
fn test_scope_exclusion() {
    let ingredients = weekly_ingredients();
    let items = consolidate(&ingredients, &weekly_recipes());

    let tomato = items.iter().find(|i| i.name == "Tomato").unwrap();
    assert_eq!(tomato.amounts[0].amount, 5.0);
    assert!(tomato.recipes.iter().all(|r| r.id != "r4"));

    // Dropping Salad from the selection removes its contributions entirely
    let without_salad = vec![RecipeRef::new("r1", "Pizza"), RecipeRef::new("r3", "Crêpes")];
    let items = consolidate(&ingredients, &without_salad);
    let tomato = items.iter().find(|i| i.name == "Tomato").unwrap();
    assert_eq!(tomato.amounts[0].amount, 3.0);
    assert_eq!(tomato.recipes, vec![RecipeRef::new("r1", "Pizza")]);
    assert!(items
        .iter()
        .any(|i| i.name.eq_ignore_ascii_case("olive oil") && i.amounts[0].amount == 1.0));
}

#[test]
fn test_provenance_never_repeats_a_recipe() {
    let ingredients = vec![
        Ingredient::new("r1", "Garlic", 2.0, unit("clove")),
        Ingredient::new("r1", "garlic", 1.0, unit("clove")),
        Ingredient::new("r2", "Garlic", 1.0, unit("clove")),
        Ingredient::new("r1", "GARLIC", 3.0, unit("clove")),
    ];

    let items = consolidate(&ingredients, &weekly_recipes());
    assert_eq!(items.len(), 1);

    let ids: Vec<&str> = items[0].recipes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);
    assert_eq!(items[0].amounts[0].amount, 7.0);
}

#[test]
fn test_order_is_deterministic() {
    let items = consolidate(&weekly_ingredients(), &weekly_recipes());

    let names: Vec<(&str, &str)> = items
        .iter()
        .map(|i| (i.name.as_str(), i.amounts[0].unit.as_str()))
        .collect();

    assert_eq!(
        names,
        vec![
            ("Flour", "cup"),
            ("Mozzarella", "g"),
            ("Tomato", ""),
            ("Olive Oil", "tbsp"),
            ("flour", "g"),
            ("Eggs", ""),
            ("Milk", "l"),
        ]
    );

    let flour = &items[0];
    assert_eq!(flour.amounts[0].amount, 2.5);
    assert_eq!(flour.recipes.len(), 2);
}

#[test]
fn test_no_two_amounts_share_a_unit() {
    for item in consolidate(&weekly_ingredients(), &weekly_recipes()) {
        let units: HashSet<&str> = item.amounts.iter().map(|a| a.unit.as_str()).collect();
        assert_eq!(units.len(), item.amounts.len(), "duplicate unit in {}", item.name);
    }
}
