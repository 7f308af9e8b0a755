//! # Grocery Category Classifier
//!
//! Assigns a grocery-aisle category to an ingredient display name using an
//! ordered table of keyword rules. Matching is case-insensitive on whole
//! words, and the first rule that matches wins, so table order carries
//! meaning: "chicken broth" classifies as Meat & Seafood because that rule
//! is checked before Pantry (which also knows "broth").
//!
//! Names that match no rule fall into the `"Other"` category.

use lazy_static::lazy_static;
use regex::Regex;

/// Fallback category for names no rule matches
pub const OTHER_CATEGORY: &str = "Other";

/// One (label, keywords) rule in the classification table
struct CategoryRule {
    label: &'static str,
    keywords: Regex,
}

fn keyword_rule(label: &'static str, keywords: &[&str]) -> CategoryRule {
    let pattern = format!(r"(?i)\b(?:{})\b", keywords.join("|"));
    CategoryRule {
        label,
        keywords: Regex::new(&pattern).expect("Category keyword pattern should be valid"),
    }
}

lazy_static! {
    /// Ordered classification table; order is precedence
    static ref CATEGORY_RULES: Vec<CategoryRule> = vec![
        keyword_rule(
            "Produce",
            &[
                "onion", "garlic", "tomato", "lettuce", "spinach", "pepper", "carrot",
                "celery", "broccoli", "lime", "lemon", "apple", "banana", "mushroom",
                "potato", "sweet potato", "cucumber", "avocado",
            ],
        ),
        keyword_rule(
            "Meat & Seafood",
            &[
                "chicken", "beef", "pork", "turkey", "bacon", "sausage", "salmon",
                "tuna", "shrimp", "cod",
            ],
        ),
        keyword_rule(
            "Dairy",
            &[
                "milk", "butter", "cheese", "yogurt", "cream", "sour cream",
                "parmesan", "mozzarella", "cheddar",
            ],
        ),
        keyword_rule(
            "Pantry",
            &[
                "rice", "pasta", "flour", "sugar", "salt", "pepper", "oil",
                "olive oil", "vinegar", "soy sauce", "broth", "stock", "beans",
                "lentils", "tomato paste", "canned",
            ],
        ),
        keyword_rule(
            "Spices",
            &[
                "paprika", "cumin", "chili", "oregano", "basil", "thyme", "cinnamon",
                "nutmeg", "garam", "curry",
            ],
        ),
        keyword_rule("Bakery", &["bread", "bun", "tortilla", "pita"]),
    ];
}

/// Classify an ingredient display name into a grocery category
///
/// # Examples
///
/// ```rust
/// use grocery::category::classify;
///
/// assert_eq!(classify("yellow onion"), "Produce");
/// assert_eq!(classify("chicken broth"), "Meat & Seafood");
/// assert_eq!(classify("saffron"), "Other");
/// ```
pub fn classify(display_name: &str) -> &'static str {
    for rule in CATEGORY_RULES.iter() {
        if rule.keywords.is_match(display_name) {
            return rule.label;
        }
    }
    OTHER_CATEGORY
}
