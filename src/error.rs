use std::io;

use thiserror::Error;

use crate::record::Domain;

/// Why a script line could not be turned into a command.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("blank line")]
    Blank,

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("operation '{0}' requires an operand")]
    MissingOperand(String),

    #[error("operation '{0}' takes no operand")]
    UnexpectedOperand(String),

    #[error("no domain given for key '{0}'")]
    MissingDomain(String),

    #[error("unknown domain '{0}'")]
    UnknownDomain(String),

    #[error("'{key}' is not a recognized {domain} key")]
    UnknownKey { domain: Domain, key: String },

    #[error("invalid state code '{0}'")]
    InvalidStateCode(String),

    #[error("missing threshold")]
    MissingThreshold,

    #[error("invalid threshold '{0}'")]
    InvalidThreshold(String),

    #[error("unexpected '{0}'")]
    UnexpectedToken(String),
}

/// Error class of a failed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedCommand,
    InvalidOperand,
    DivisionByZero,
    Io,
}

/// Failure of a single script line. Recovered by the interpreter at line granularity.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("malformed command: {0}")]
    Malformed(ParseError),

    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    #[error("division by zero: the working set is empty")]
    DivisionByZero,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::Malformed(_) => ErrorKind::MalformedCommand,
            QueryError::InvalidOperand(_) => ErrorKind::InvalidOperand,
            QueryError::DivisionByZero => ErrorKind::DivisionByZero,
            QueryError::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<ParseError> for QueryError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::InvalidThreshold(raw) => QueryError::InvalidOperand(raw),
            other => QueryError::Malformed(other),
        }
    }
}

/// Errors raised while loading the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid record data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record '{0}' has no 'Persons Below Poverty Level' figure")]
    MissingPovertyRate(String),
}
