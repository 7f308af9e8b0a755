//! # Ingredient Name Normalizer
//!
//! Derives the canonical grouping key for an ingredient display name. Two
//! lines that normalize to the same key (and share a unit) are merged into
//! one grocery-list entry. The key is only ever used for grouping; display
//! always uses the name as first seen.

/// Normalize an ingredient name into its grouping key
///
/// Lower-cases, replaces each balanced parenthetical substring with a
/// space, treats commas and semicolons as spaces, collapses whitespace
/// runs and trims. A `(` with no matching `)` passes through unchanged.
///
/// # Examples
///
/// ```rust
/// use grocery::name_normalizer::normalize;
///
/// assert_eq!(normalize("Flour (all-purpose)"), "flour");
/// assert_eq!(normalize("onion, diced"), "onion diced");
/// ```
pub fn normalize(name: &str) -> String {
    // Each balanced (...) becomes one space so the words around it never
    // fuse together; text after an unmatched ( is kept as-is.
    let mut stripped = String::with_capacity(name.len());
    let mut rest = name;
    while let Some(open) = rest.find('(') {
        stripped.push_str(&rest[..open]);
        match rest[open..].find(')') {
            Some(close) => {
                stripped.push(' ');
                rest = &rest[open + close + 1..];
            }
            None => {
                stripped.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    stripped.push_str(rest);

    let lowered = stripped.to_lowercase();
    lowered
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}
