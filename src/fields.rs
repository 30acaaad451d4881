//! Parse rules for interactively entered fields.
//!
//! Each rule takes the raw prompt input and either returns the parsed value
//! or says why it was rejected. Re-prompting on rejection is the caller's
//! job (`terminal::field`), so already-accepted fields stay accepted.

use rust_decimal::Decimal;

use crate::error::FieldError;
use crate::record::Region;

pub fn parse_amount(raw: &str) -> Result<Decimal, FieldError> {
    let amount: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| FieldError::NotANumber(raw.to_string()))?;
    if amount > Decimal::ZERO {
        Ok(amount)
    } else {
        Err(FieldError::NonPositiveAmount)
    }
}

pub fn parse_year(raw: &str) -> Result<i32, FieldError> {
    parse_int_in_range(raw, "year", 2000, 2999)
}

pub fn parse_month(raw: &str) -> Result<u32, FieldError> {
    Ok(parse_int_in_range(raw, "month", 1, 12)? as u32)
}

// The day bound is a flat 28 on purpose, so any accepted day exists in any
// accepted month.
pub fn parse_day(raw: &str) -> Result<u32, FieldError> {
    Ok(parse_int_in_range(raw, "day", 1, 28)? as u32)
}

/// Region input must be exactly one of the four codes, nothing more.
pub fn parse_region(raw: &str) -> Result<Region, FieldError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => Region::from_code(code),
        _ => None,
    }
    .ok_or_else(|| FieldError::UnknownRegion(raw.to_string()))
}

fn parse_int_in_range(
    raw: &str,
    field: &'static str,
    min: i32,
    max: i32,
) -> Result<i32, FieldError> {
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| FieldError::NotAnInteger(raw.to_string()))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(FieldError::OutOfRange { field, min, max })
    }
}
