use shared::models::{Cents, RawValue};
use shared::utils::group_thousands;
use std::str::FromStr;

/// Anything a caller may hand over as an amount cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountInput<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

impl<'a> From<&'a str> for AmountInput<'a> {
    fn from(value: &'a str) -> Self {
        AmountInput::Text(value)
    }
}

impl<'a> From<&'a String> for AmountInput<'a> {
    fn from(value: &'a String) -> Self {
        AmountInput::Text(value.as_str())
    }
}

impl From<f64> for AmountInput<'_> {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl<'a> From<&'a RawValue> for AmountInput<'a> {
    fn from(value: &'a RawValue) -> Self {
        match value {
            RawValue::Number(n) => AmountInput::Number(*n),
            RawValue::Text(s) => AmountInput::Text(s),
        }
    }
}

impl<'a, T> From<Option<T>> for AmountInput<'a>
where
    T: Into<AmountInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(AmountInput::Missing, Into::into)
    }
}

// Parses decimals like "1.234,56" or "123,45" into f64.
// Missing, empty or unparseable input is 0; the result is always finite.
pub fn parse_amount<'a>(input: impl Into<AmountInput<'a>>) -> f64 {
    match input.into() {
        AmountInput::Missing => 0.0,
        AmountInput::Number(n) => finite_or_zero(n),
        AmountInput::Text(s) => parse_decimal_text(s),
    }
}

/// Same as [`parse_amount`] but rounded to whole centavos.
pub fn parse_cents<'a>(input: impl Into<AmountInput<'a>>) -> Cents {
    Cents::from_reais(parse_amount(input))
}

fn parse_decimal_text(s: &str) -> f64 {
    let normalized = s
        .trim()
        .replace('.', "") // Remove thousand separators
        .replacen(',', ".", 1); // Only the first comma is the decimal mark

    if normalized.is_empty() {
        return 0.0;
    }
    f64::from_str(&normalized).map_or(0.0, finite_or_zero)
}

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Formats centavos as pt-BR money text: `123456` -> `"1.234,56"`.
/// Negative values get a leading `-`.
pub fn format_cents(value: Cents) -> String {
    let minor = value.minor_units();
    let abs = minor.unsigned_abs();
    let integer = group_thousands(&(abs / 100).to_string());
    let sign = if minor < 0 { "-" } else { "" };
    format!("{}{},{:02}", sign, integer, abs % 100)
}

/// Canonical pt-BR text for an amount in reais, rounded to centavos.
pub fn money_text(value: f64) -> String {
    format_cents(Cents::from_reais(value))
}
