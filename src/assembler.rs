//! # Grocery List Assembler
//!
//! Orders the aggregated entries for output and optionally partitions them
//! into labeled category sections. Sorting is always by category label then
//! display name, lexicographically, whether or not grouping is requested;
//! grouped output simply slices the same ordering into sections in the
//! order each category first appears.
//!
//! Also home to `format_qty`, the quantity renderer used by presentation
//! callers: two decimal places with trailing fractional zeros stripped.

use crate::aggregator::AggregateEntry;
use log::debug;

/// One labeled category section of a grouped list
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    /// Category label shown as the section header
    pub category: String,
    /// Entries in this category, sorted by display name
    pub items: Vec<AggregateEntry>,
}

/// Assembled output, flat or partitioned into category sections
#[derive(Debug, Clone, PartialEq)]
pub enum GroceryList {
    /// Flat sequence sorted by (category, display name)
    Flat(Vec<AggregateEntry>),
    /// Category sections in first-appearance order under the same sort
    Grouped(Vec<CategorySection>),
}

impl GroceryList {
    /// Total number of entries across the whole list
    pub fn len(&self) -> usize {
        match self {
            GroceryList::Flat(items) => items.len(),
            GroceryList::Grouped(sections) => sections.iter().map(|s| s.items.len()).sum(),
        }
    }

    /// Whether the list holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Render an optional quantity for display
///
/// `None` renders as the empty string. Values are rounded to two decimal
/// places (half away from zero) and trailing fractional zeros are stripped.
///
/// # Examples
///
/// ```rust
/// use grocery::assembler::format_qty;
///
/// assert_eq!(format_qty(Some(2.0)), "2");
/// assert_eq!(format_qty(Some(2.5)), "2.5");
/// assert_eq!(format_qty(Some(2.25)), "2.25");
/// assert_eq!(format_qty(Some(2.004)), "2");
/// assert_eq!(format_qty(None), "");
/// ```
pub fn format_qty(quantity: Option<f64>) -> String {
    let q = match quantity {
        Some(q) => q,
        None => return String::new(),
    };

    let rounded = (q * 100.0).round() / 100.0;
    let mut text = format!("{:.2}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Sort aggregated entries and assemble the final list
///
/// The sort key is (category label, display name), both lexicographic. With
/// `grouped` set, the sorted sequence is partitioned into `CategorySection`s
/// in the order categories first appear.
pub fn assemble(mut entries: Vec<AggregateEntry>, grouped: bool) -> GroceryList {
    entries.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });

    debug!(
        "Assembling {} entries (grouped: {})",
        entries.len(),
        grouped
    );

    if !grouped {
        return GroceryList::Flat(entries);
    }

    let mut sections: Vec<CategorySection> = Vec::new();
    for entry in entries {
        match sections.last_mut() {
            Some(section) if section.category == entry.category => {
                section.items.push(entry);
            }
            _ => sections.push(CategorySection {
                category: entry.category.clone(),
                items: vec![entry],
            }),
        }
    }

    GroceryList::Grouped(sections)
}
