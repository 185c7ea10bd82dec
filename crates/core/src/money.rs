//! Money formatting

use std::str::FromStr;

use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};

/// What non-numeric amounts display as.
pub const ZERO_DISPLAY: &str = "0";

/// An amount as the API sends it: a number, numeric text, or nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// JSON number
    Number(f64),

    /// JSON string, possibly numeric
    Text(String),

    /// Missing or null
    #[default]
    Missing,
}

impl RawAmount {
    /// Numeric value, if this amount is a number.
    ///
    /// Blank text counts as zero, the same way an empty price input does.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Decimal::from_f64(*value),
            Self::Text(text) => {
                let text = text.trim();

                if text.is_empty() {
                    return Some(Decimal::ZERO);
                }

                Decimal::from_str(text)
                    .or_else(|_err| Decimal::from_scientific(text))
                    .ok()
            }
            Self::Missing => None,
        }
    }

    /// Value as a float, if this amount is a number. Blank text counts as zero.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => {
                let text = text.trim();

                if text.is_empty() {
                    return Some(0.0);
                }

                text.parse().ok()
            }
            Self::Missing => None,
        }
    }

    /// Text for a price input holding this amount.
    pub fn to_input_text(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
            Self::Missing => String::new(),
        }
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Format an amount as Vietnamese đồng.
///
/// Anything that is not a number formats as [`ZERO_DISPLAY`] instead of failing.
pub fn format_money(amount: impl Into<RawAmount>) -> String {
    let amount = amount.into();

    let Some(number) = amount.to_f64().filter(|number| !number.is_nan()) else {
        return ZERO_DISPLAY.to_string();
    };

    match amount.to_decimal() {
        Some(value) => Money::from_decimal(value.round_dp(0), iso::VND).to_string(),
        None => format_unbounded(number),
    }
}

/// Infinite amounts and amounts past `Decimal`'s range, in the layout `Money` uses.
fn format_unbounded(number: f64) -> String {
    let magnitude = if number.is_infinite() {
        "∞".to_string()
    } else {
        group_thousands(&format!("{:.0}", number.abs()))
    };

    let layout = Money::from_decimal(Decimal::ZERO, iso::VND).to_string();
    let sign = if number.is_sign_negative() { "-" } else { "" };

    format!("{sign}{}", layout.replacen('0', &magnitude, 1))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }

        grouped.push(digit);
    }

    grouped
}
