//! Offline demonstration of the grocery-list pipeline: two recipes, one of
//! them doubled, aggregated into a grouped shopping list.
//!
//! Run with: `cargo run --example grocery_list`

use grocery::assembler::{format_qty, GroceryList};
use grocery::builder::build_grocery_list;
use grocery::recipe_model::{IngredientText, Recipe};
use grocery::scaling::ScalingResolver;

fn main() {
    env_logger::init();

    let recipes = vec![
        Recipe::new(
            "bread",
            "Simple Bread",
            IngredientText::Lines(vec![
                "2 cups flour".to_string(),
                "1 tsp salt".to_string(),
                "1 1/2 cups warm water".to_string(),
            ]),
        ),
        Recipe::new(
            "pancakes",
            "Pancakes",
            IngredientText::Block("1 cup flour\n2 eggs\n1 cup milk\nsalt to taste".to_string()),
        ),
    ];

    let mut resolver = ScalingResolver::new();
    resolver.add_manual("bread", 2.0);
    resolver.add_pick("pancakes");
    let factors = resolver.resolve(1.0);

    let list = build_grocery_list(&recipes, &factors, true);

    match list {
        GroceryList::Grouped(sections) => {
            for section in sections {
                println!("{}", section.category);
                for entry in section.items {
                    let qty = format!("{} {}", format_qty(entry.quantity), entry.unit);
                    let qty = qty.trim();
                    if qty.is_empty() {
                        println!("  - {}", entry.display_name);
                    } else {
                        println!("  - {} — {}", qty, entry.display_name);
                    }
                }
                println!();
            }
        }
        GroceryList::Flat(_) => unreachable!("grouped build requested"),
    }
}
