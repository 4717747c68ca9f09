//! # Script Syntax
//!
//! A query script is a sequence of lines, each holding exactly one command.
//! Commands are built from colon- and dot-delimited segments:
//!
//! ```text
//! population-total
//! display
//! population:Education.Bachelor's Degree or Higher
//! percent:Persons Below Poverty Level
//! filter-state:CA
//! filter-gt:Ethnicities.Hispanic or Latino:25
//! filter-lt:Income.Persons Below Poverty Level:12.5   # annotations start with '#'
//! ```
//!
//! - **[tokens]** - Tokens produced by the line lexer
//! - **[command]** - The typed command a line parses into
//!
//! ## Domains
//!
//! The segment before the first `.` of a payload names the category map:
//! `Age`, `Education`, `Ethnicities` or `Income`. The poverty key may be given
//! without a domain since it only exists under `Income`.
pub mod command;
pub mod tokens;

pub use command::{Category, Command, Comparison, Measure};
pub use tokens::Token;
