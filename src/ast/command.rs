use std::fmt;

use crate::{error::ParseError, record::Domain};

/// Operation label echoed in result lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Sub-population count (`population:`)
    Population,
    /// Sub-population share of the total (`percent:`)
    Percent,
}

impl Measure {
    pub fn label(&self) -> &'static str {
        match self {
            Measure::Population => "population",
            Measure::Percent => "percent",
        }
    }
}

/// Strict comparison used by threshold filters. Equality never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    GreaterThan,
    LessThan,
}

impl Comparison {
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::GreaterThan => value > threshold,
            Comparison::LessThan => value < threshold,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Comparison::GreaterThan => "gt",
            Comparison::LessThan => "lt",
        }
    }
}

/// A validated domain/key pair, e.g. `Education.High School or Higher`.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub domain: Domain,
    pub key: String,
}

impl Category {
    pub fn new(domain: Domain, key: impl Into<String>) -> Self {
        Category {
            domain,
            key: key.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.domain, self.key)
    }
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `population-total`
    PopulationTotal,

    /// `display`
    Display,

    /// `population:<Domain>.<key>` or `percent:<Domain>.<key>`
    Measure { measure: Measure, category: Category },

    /// `filter-state:<code>`
    FilterState(String),

    /// `filter-gt:<Domain>.<key>:<threshold>` or `filter-lt:...`
    FilterThreshold {
        category: Category,
        comparison: Comparison,
        threshold: f64,
    },

    /// A line that does not match the grammar, kept with its raw text
    Malformed { line: String, error: ParseError },
}

impl Command {
    pub fn is_filter(&self) -> bool {
        matches!(self, Command::FilterState(_) | Command::FilterThreshold { .. })
    }

    /// Operation keyword, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Command::PopulationTotal => "population-total",
            Command::Display => "display",
            Command::Measure {
                measure: Measure::Population,
                ..
            } => "population-by",
            Command::Measure {
                measure: Measure::Percent,
                ..
            } => "percent-by",
            Command::FilterState(_) => "filter-state",
            Command::FilterThreshold {
                comparison: Comparison::GreaterThan,
                ..
            } => "filter-gt",
            Command::FilterThreshold {
                comparison: Comparison::LessThan,
                ..
            } => "filter-lt",
            Command::Malformed { .. } => "malformed",
        }
    }
}
