use anyhow::{Context, Result};
use chrono::{Duration, Local};
use grocery::assembler::{format_qty, GroceryList};
use grocery::builder::build_grocery_list;
use grocery::client::RecipeApiClient;
use grocery::scaling::{PlanWindow, ScalingResolver};
use log::info;
use std::env;

/// Render one entry the way the list page does: "5 cups — flour"
fn render_entry(entry: &grocery::aggregator::AggregateEntry) -> String {
    let qty = format!("{} {}", format_qty(entry.quantity), entry.unit);
    let qty = qty.trim();
    if qty.is_empty() {
        entry.display_name.clone()
    } else {
        format!("{} — {}", qty, entry.display_name)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let base_url =
        env::var("GROCERY_API_BASE_URL").context("GROCERY_API_BASE_URL must be set")?;
    let recipe_ids = env::var("GROCERY_RECIPE_IDS").unwrap_or_default();
    let person = env::var("GROCERY_PERSON").ok();
    let global_multiplier: f64 = env::var("GROCERY_MULTIPLIER")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1.0);
    let grouped = env::var("GROCERY_GROUPED").map(|v| v == "1").unwrap_or(true);

    info!("Building grocery list from API at {}", base_url);

    let client = RecipeApiClient::new(&base_url)?;

    // Default window: today plus six days, like the list page
    let today = Local::now().date_naive();
    let window = PlanWindow {
        start: today,
        end: today + Duration::days(6),
        person,
    };

    let mut resolver = ScalingResolver::new();

    let meals = client.get_meals(&window).await?;
    info!("Loaded {} planned meals", meals.len());
    resolver.add_meals(&meals, Some(&window));

    for id in recipe_ids.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        resolver.add_pick(id);
    }

    let factors = resolver.resolve(global_multiplier);
    if factors.is_empty() {
        println!("Nothing selected. Plan some meals or set GROCERY_RECIPE_IDS.");
        return Ok(());
    }

    let mut ids: Vec<String> = factors.keys().cloned().collect();
    ids.sort();
    let recipes = client.get_recipes(&ids).await;

    let list = build_grocery_list(&recipes, &factors, grouped);
    if list.is_empty() {
        println!("No ingredients found.");
        return Ok(());
    }

    match &list {
        GroceryList::Flat(items) => {
            for entry in items {
                println!("- {}", render_entry(entry));
            }
        }
        GroceryList::Grouped(sections) => {
            for section in sections {
                println!("{}", section.category);
                for entry in &section.items {
                    println!("  - {}", render_entry(entry));
                }
                println!();
            }
        }
    }

    info!("Done — {} unique items", list.len());
    Ok(())
}
