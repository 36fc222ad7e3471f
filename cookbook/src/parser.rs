//! Free-text ingredient and step parsing
//!
//! Ingredient input is one ingredient per line in the form `name, amount, unit`.
//! Fields past the third are ignored. Lines that do not carry at least a name,
//! an amount and a unit are skipped; a line whose amount is not a number stops
//! parsing and names the ingredient so the caller can point at it.

use tracing::{debug, warn};

use crate::domain::Ingredient;
use crate::error::ParseError;

/// Parse ingredient lines, failing on the first bad amount
pub fn parse_ingredient_lines(text: &str) -> Result<Vec<Ingredient>, ParseError> {
    let mut ingredients = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 3 || fields[0].is_empty() {
            debug!(line, "Skipping malformed ingredient line");
            continue;
        }

        let (name, amount, unit) = (fields[0], fields[1], fields[2]);
        let amount = parse_amount(name, amount)?;
        ingredients.push(Ingredient::new(name, amount, unit));
    }

    Ok(ingredients)
}

fn parse_amount(name: &str, raw: &str) -> Result<f64, ParseError> {
    let amount = match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(ingredient = name, value = raw, "Ingredient amount is not a number");
            return Err(ParseError::InvalidAmount {
                ingredient: name.to_string(),
                value: raw.to_string(),
            });
        }
    };

    if amount < 0.0 {
        warn!(ingredient = name, amount, "Ingredient amount is negative");
        return Err(ParseError::NegativeAmount {
            ingredient: name.to_string(),
            amount,
        });
    }

    Ok(amount)
}

/// Split preparation text into steps, one per non-blank line
pub fn parse_steps(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
