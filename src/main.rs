use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use grocery_list::amount_format::format_recipe_sources;
use grocery_list::cli::parse_args;
use grocery_list::consolidation::ConsolidationEngine;
use grocery_list::shopping_config::ShoppingConfig;
use grocery_list::shopping_input::load_shopping_input;
use grocery_list::shopping_list::ShoppingList;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting grocery list consolidation");

    let args = parse_args();
    let config = ShoppingConfig::from_env()?;

    let input = load_shopping_input(&args.input)?;

    let engine = ConsolidationEngine::new(config.consolidation.clone());
    let (consolidated, report) = engine.consolidate_with_report(&input.ingredients, &input.recipes);
    info!(
        in_scope = report.in_scope,
        skipped = report.skipped_out_of_scope,
        conflicts = report.category_conflicts,
        "Consolidation finished"
    );

    let list = ShoppingList::from_consolidation(&consolidated, config.list.clone());

    for (category, items) in list.group_by_category() {
        println!("{category}");
        for item in items {
            match item.total_amount.as_deref() {
                Some(amount) if !amount.is_empty() => println!("  [ ] {} ({amount})", item.name),
                _ => println!("  [ ] {}", item.name),
            }
            if !item.recipes.is_empty() {
                println!("      From: {}", format_recipe_sources(&item.recipes));
            }
        }
    }

    let summary = list.summary();
    println!();
    println!("Total items: {}  Completed: {}", summary.total, summary.completed);

    Ok(())
}
