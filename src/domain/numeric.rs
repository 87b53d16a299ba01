//! Fixed-point helpers shared by the normalization code.
//!
//! Prices and amounts are `rust_decimal::Decimal`. The exchange reports
//! numbers either as JSON numbers or as numeric strings, so the serde
//! helpers here accept both. On-chain amounts use 18-decimal base units.

use std::str::FromStr;

use alloy::primitives::U256;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, de};

use super::error::DomainError;

/// Decimal places of an on-chain wad amount.
pub const WAD_DECIMALS: u32 = 18;

/// Divide, rejecting a zero divisor instead of panicking.
pub fn checked_div(
    numerator: Decimal,
    denominator: Decimal,
    context: &'static str,
) -> Result<Decimal, DomainError> {
    if denominator.is_zero() {
        return Err(DomainError::DivisionByZero { context });
    }
    numerator
        .checked_div(denominator)
        .ok_or(DomainError::Overflow { context })
}

/// Multiply, rejecting results outside the decimal range.
pub fn checked_mul(
    lhs: Decimal,
    rhs: Decimal,
    context: &'static str,
) -> Result<Decimal, DomainError> {
    lhs.checked_mul(rhs).ok_or(DomainError::Overflow { context })
}

/// Convert a non-negative decimal amount to 18-decimal base units.
///
/// Digits beyond the 18th decimal place are truncated.
pub fn to_wad(amount: Decimal) -> Result<U256, DomainError> {
    let invalid = || DomainError::InvalidAmount {
        value: amount.to_string(),
    };

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(invalid());
    }

    let scale = Decimal::from(10u64.pow(WAD_DECIMALS));
    let scaled = amount.checked_mul(scale).ok_or_else(invalid)?;
    let units = scaled.trunc().to_u128().ok_or_else(invalid)?;

    Ok(U256::from(units))
}

fn wad_unit() -> U256 {
    U256::from(10u64).pow(U256::from(WAD_DECIMALS))
}

/// Wad division `a / b`, truncating below the 18th decimal place.
pub fn wad_div(a: U256, b: U256, context: &'static str) -> Result<U256, DomainError> {
    if b.is_zero() {
        return Err(DomainError::DivisionByZero { context });
    }
    let scaled = a
        .checked_mul(wad_unit())
        .ok_or(DomainError::Overflow { context })?;
    Ok(scaled / b)
}

/// Wad multiplication `a * b`, truncating below the 18th decimal place.
pub fn wad_mul(a: U256, b: U256, context: &'static str) -> Result<U256, DomainError> {
    let product = a.checked_mul(b).ok_or(DomainError::Overflow { context })?;
    Ok(product / wad_unit())
}

/// Decimal text of a wad value, without trailing fractional zeros.
pub fn format_wad(value: U256) -> String {
    let unit = wad_unit();
    let whole = value / unit;
    let fraction = format!("{:0>18}", (value % unit).to_string());
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Parse a decimal from its textual form, accepting scientific notation.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    String(String),
}

impl NumberOrString {
    fn text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
        }
    }
}

/// Deserialize a `Decimal` from a JSON number or numeric string.
pub fn decimal_from_any<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumberOrString::deserialize(deserializer)?;
    let text = raw.text();
    parse_decimal(&text).ok_or_else(|| de::Error::custom(format!("invalid decimal: {text}")))
}

/// Deserialize an `i64` from a JSON integer or integer string.
pub fn int_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumberOrString::deserialize(deserializer)?;
    match &raw {
        NumberOrString::Number(n) if n.is_i64() => n
            .as_i64()
            .ok_or_else(|| de::Error::custom("integer out of range")),
        _ => {
            let text = raw.text();
            text.trim()
                .parse::<i64>()
                .map_err(|_| de::Error::custom(format!("invalid integer: {text}")))
        }
    }
}
