pub mod aggregate;
pub mod ast;
pub mod cli;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod loader;
pub mod output;
pub mod parser;
pub mod predicate;
pub mod record;

pub use ast::{Category, Command, Comparison, Measure, Token};
pub use error::{ErrorKind, ParseError, QueryError, StoreError};
pub use interpreter::{Interpreter, RunSummary};
pub use lexer::Lexer;
pub use parser::{Parser, parse_line};
pub use record::{Domain, POVERTY_KEY, Record, RecordStore};
