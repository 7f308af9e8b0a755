//! # Ingredient Line Parser
//!
//! Parses one free-text ingredient line into a structured
//! quantity/unit/name triple. The grammar is deliberately small:
//!
//! ```text
//! line := [quantity [fraction]] [unit] name
//! ```
//!
//! - `quantity` is an integer (`2`), a decimal (`2.5`) or a simple fraction
//!   (`1/2`) at the very start of the line
//! - a second fraction token forms a mixed number (`2 1/2` = 2.5)
//! - `unit` is a single alphabetic token, lower-cased
//! - everything left over, trimmed, is the ingredient name
//!
//! ## Fallback rules
//!
//! - When the remainder is empty (the line was consumed by quantity and
//!   unit, e.g. `"2 eggs"`), the name falls back to the original full line
//!   with its original casing. Deliberate: the "unit" was really the
//!   ingredient, and the full line reads better on the list.
//! - When no leading quantity is found (`"salt to taste"`), the whole line
//!   is the name and the quantity is `None`.
//! - A malformed fraction (`"1/0 cups flour"`) yields a `None` quantity but
//!   unit and name extraction still proceed.
//!
//! Parsing is a pure function of the line; the parser is an explicit
//! tokenizer so each rule is independently testable.

use crate::name_normalizer::normalize;
use log::trace;

/// A parsed ingredient line
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIngredient {
    /// Scaled-ready quantity; `None` when absent or malformed
    pub quantity: Option<f64>,
    /// Lower-cased unit token, possibly empty
    pub unit: String,
    /// Display name (original casing)
    pub name: String,
    /// Grouping key derived from the name
    pub normalized_key: String,
}

/// One token captured from the head of an ingredient line
#[derive(Debug, Clone, PartialEq)]
enum NumberToken {
    /// Integer or decimal value
    Plain(f64),
    /// `a/b` fraction; a zero denominator makes the value non-finite
    Fraction { numerator: f64, denominator: f64 },
}

impl NumberToken {
    fn value(&self) -> f64 {
        match self {
            NumberToken::Plain(v) => *v,
            NumberToken::Fraction {
                numerator,
                denominator,
            } => numerator / denominator,
        }
    }
}

/// Parse a single ingredient line
///
/// # Examples
///
/// ```rust
/// use grocery::line_parser::parse_ingredient_line;
///
/// let parsed = parse_ingredient_line("2 1/2 cups sugar");
/// assert_eq!(parsed.quantity, Some(2.5));
/// assert_eq!(parsed.unit, "cups");
/// assert_eq!(parsed.name, "sugar");
/// ```
pub fn parse_ingredient_line(line: &str) -> ParsedIngredient {
    let original = line.trim();

    let mut cursor = Tokenizer::new(original);

    let quantity = match cursor.read_number() {
        Some(first) => {
            cursor.skip_spaces();
            let second = cursor.read_fraction();
            let total = first.value() + second.as_ref().map_or(0.0, NumberToken::value);
            if total.is_finite() {
                Some(total)
            } else {
                None
            }
        }
        None => {
            // No leading quantity: the whole line is the name.
            trace!("No leading quantity in line: '{}'", original);
            return ParsedIngredient {
                quantity: None,
                unit: String::new(),
                name: original.to_string(),
                normalized_key: normalize(original),
            };
        }
    };

    cursor.skip_spaces();
    let unit = cursor.read_alpha_token().to_lowercase();
    cursor.skip_spaces();
    let rest = cursor.rest().trim();

    let name = if rest.is_empty() {
        original.to_string()
    } else {
        rest.to_string()
    };

    trace!(
        "Parsed line '{}' -> qty={:?} unit='{}' name='{}'",
        original,
        quantity,
        unit,
        name
    );

    ParsedIngredient {
        normalized_key: normalize(&name),
        quantity,
        unit,
        name,
    }
}

/// Cursor over the head of an ingredient line
struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_spaces(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn read_digits(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    /// Read a leading integer, decimal, or `a/b` fraction token
    fn read_number(&mut self) -> Option<NumberToken> {
        let start = self.pos;
        let whole = self.read_digits();
        if whole.is_empty() {
            return None;
        }

        if self.rest().starts_with('/') {
            self.pos += 1;
            let denom = self.read_digits();
            if denom.is_empty() {
                // "2/" is not a fraction; give the slash back.
                self.pos = start + whole.len();
                return Some(NumberToken::Plain(whole.parse().unwrap_or(f64::NAN)));
            }
            return Some(NumberToken::Fraction {
                numerator: whole.parse().unwrap_or(f64::NAN),
                denominator: denom.parse().unwrap_or(f64::NAN),
            });
        }

        if self.rest().starts_with('.') {
            self.pos += 1;
            let frac = self.read_digits();
            if frac.is_empty() {
                self.pos = start + whole.len();
                return Some(NumberToken::Plain(whole.parse().unwrap_or(f64::NAN)));
            }
            let text = &self.input[start..self.pos];
            return Some(NumberToken::Plain(text.parse().unwrap_or(f64::NAN)));
        }

        Some(NumberToken::Plain(whole.parse().unwrap_or(f64::NAN)))
    }

    /// Read a strict `a/b` fraction, or nothing (never a plain number)
    fn read_fraction(&mut self) -> Option<NumberToken> {
        let start = self.pos;
        let num = self.read_digits();
        if num.is_empty() || !self.rest().starts_with('/') {
            self.pos = start;
            return None;
        }
        self.pos += 1;
        let denom = self.read_digits();
        if denom.is_empty() {
            self.pos = start;
            return None;
        }
        Some(NumberToken::Fraction {
            numerator: num.parse().unwrap_or(f64::NAN),
            denominator: denom.parse().unwrap_or(f64::NAN),
        })
    }

    fn read_alpha_token(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }
}
