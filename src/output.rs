//! Text rendering for interpreter results.
//!
//! Every function returns the message without a trailing newline; the
//! interpreter writes one message per line (display output spans several).
//!
//! # Examples
//!
//! ```
//! use county_query::output::state_filter_summary;
//!
//! assert_eq!(state_filter_summary("CA", 58), "[FILTER] State -> CA (Entries: 58)");
//! ```

use crate::{
    ast::{Category, Comparison, Measure},
    record::{Domain, POVERTY_KEY, Record},
};

pub fn banner(records: usize) -> String {
    format!("{} records loaded.", records)
}

pub fn state_filter_summary(code: &str, entries: usize) -> String {
    format!("[FILTER] State -> {} (Entries: {})", code, entries)
}

/// Summary of a threshold filter. The threshold is always shown with a
/// fractional part (`50.0`).
pub fn threshold_filter_summary(
    category: &Category,
    comparison: Comparison,
    threshold: f64,
    entries: usize,
) -> String {
    format!(
        "[FILTER] {} -> {}, {} {:?} ({} entries)",
        category.domain,
        category.key,
        comparison.label(),
        threshold,
        entries
    )
}

pub fn population_total(total: u64) -> String {
    format!("2014 Population: {}", total)
}

pub fn measure_result(measure: Measure, key: &str, value: f64) -> String {
    match measure {
        Measure::Population => format!("2014 {} {}: {:.2}", measure.label(), key, value),
        Measure::Percent => format!("2014 {} {}: {:.2}%", measure.label(), key, value),
    }
}

pub fn line_error(line_number: usize, raw: &str) -> String {
    format!("An Error occurred. (@ line {}: {})", line_number, raw.trim_end())
}

/// Nested dump of every category map of every record.
///
/// Figures are shown with a fractional part (`40.0%`). An empty slice
/// yields an empty string.
pub fn display(records: &[&Record]) -> String {
    records
        .iter()
        .map(|record| render_record(record))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_record(record: &Record) -> String {
    let mut lines = vec![
        format!("[{}, {}]", record.region_id, record.state_code),
        format!("\tPOPULATION: {}", record.population),
    ];

    for domain in [Domain::Age, Domain::Education, Domain::Ethnicities, Domain::Income] {
        lines.push(format!("\t{}", domain.label().to_uppercase()));
        for (label, value) in record.category(domain) {
            // Dollar figures share the income map with the poverty percentage
            let unit = if domain != Domain::Income || label == POVERTY_KEY {
                "%"
            } else {
                ""
            };
            lines.push(format!("\t\t{}: {:?}{}", label, value, unit));
        }
    }
    lines.join("\n")
}
