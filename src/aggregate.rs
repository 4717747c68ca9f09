//! Sums and shares over a sequence of records.
//!
//! All functions are pure and take the working set as a slice of borrowed records.

use rust_decimal::{
    Decimal,
    prelude::ToPrimitive,
};

use crate::{
    error::QueryError,
    record::{Domain, POVERTY_KEY, Record},
};

/// Sum of the 2014 population over `records`. Zero for an empty slice.
pub fn total_population(records: &[&Record]) -> u64 {
    records.iter().map(|r| r.population).sum()
}

/// Number of people falling under `key` in `domain`.
///
/// Records that do not carry `key` contribute nothing.
pub fn subpopulation(records: &[&Record], domain: Domain, key: &str) -> f64 {
    records
        .iter()
        .filter_map(|r| r.figure(domain, key).map(|pct| r.population as f64 * pct / 100.0))
        .sum()
}

/// Share of the total population falling under `key`, rounded to two decimals.
///
/// # Errors
///
/// [`QueryError::DivisionByZero`] when the total population of `records` is zero.
pub fn percentage(records: &[&Record], domain: Domain, key: &str) -> Result<f64, QueryError> {
    let total = total_population(records);
    if total == 0 {
        return Err(QueryError::DivisionByZero);
    }
    let share = subpopulation(records, domain, key) / total as f64 * 100.0;
    Ok(round_percent(share))
}

pub fn below_poverty_subpopulation(records: &[&Record]) -> f64 {
    subpopulation(records, Domain::Income, POVERTY_KEY)
}

pub fn below_poverty_percentage(records: &[&Record]) -> Result<f64, QueryError> {
    percentage(records, Domain::Income, POVERTY_KEY)
}

/// Round half to even at two decimal places, on the exact binary value
fn round_percent(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(2))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
