use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::{
    ast::{Category, Command, Comparison, Measure, Token},
    error::ParseError,
    lexer::Lexer,
    record::{Domain, POVERTY_KEY},
};

static STATE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("state code pattern is valid"));

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
        }
    }

    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.current_token) == std::mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(self.unexpected());
        }
        self.advance();
        Ok(())
    }

    fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedToken(self.current_token.as_source().to_string())
    }

    /// Take the current text segment, or an empty string if the current token is a delimiter
    fn take_text(&mut self) -> String {
        match std::mem::replace(&mut self.current_token, Token::Eof) {
            Token::Text(s) => {
                self.advance();
                s
            }
            other => {
                self.current_token = other;
                String::new()
            }
        }
    }

    /// Rejoin text and dots up to the next colon or end of line
    fn take_joined(&mut self) -> String {
        let mut result = String::new();
        while matches!(self.current_token, Token::Text(_) | Token::Dot) {
            result.push_str(self.current_token.as_source());
            self.advance();
        }
        result
    }

    /// Parse one complete line
    pub fn parse_command(&mut self) -> Result<Command, ParseError> {
        let operation = self.take_text();
        if operation.is_empty() {
            return match self.current_token {
                Token::Eof => Err(ParseError::Blank),
                _ => Err(self.unexpected()),
            };
        }

        let command = if self.check(&Token::Eof) {
            self.parse_bare(&operation)?
        } else {
            self.expect(Token::Colon)
                .map_err(|_| ParseError::UnknownOperation(operation.clone()))?;
            self.parse_with_operand(&operation)?
        };

        self.expect(Token::Eof)?;
        trace!(kind = command.kind(), "parsed command");
        Ok(command)
    }

    fn parse_bare(&mut self, operation: &str) -> Result<Command, ParseError> {
        match operation {
            "population-total" => Ok(Command::PopulationTotal),
            "display" => Ok(Command::Display),
            "population" | "percent" | "filter-state" | "filter-gt" | "filter-lt" => {
                Err(ParseError::MissingOperand(operation.to_string()))
            }
            _ => Err(ParseError::UnknownOperation(operation.to_string())),
        }
    }

    fn parse_with_operand(&mut self, operation: &str) -> Result<Command, ParseError> {
        if self.check(&Token::Eof) {
            // Trailing colon: "population:" lacks its operand, "display:" has a stray one
            self.parse_bare(operation)?;
            return Err(ParseError::UnexpectedOperand(operation.to_string()));
        }

        match operation {
            "population" => Ok(Command::Measure {
                measure: Measure::Population,
                category: self.parse_category()?,
            }),
            "percent" => Ok(Command::Measure {
                measure: Measure::Percent,
                category: self.parse_category()?,
            }),
            "filter-state" => self.parse_state_code().map(Command::FilterState),
            "filter-gt" => self.parse_threshold_filter(Comparison::GreaterThan),
            "filter-lt" => self.parse_threshold_filter(Comparison::LessThan),
            "population-total" | "display" => {
                Err(ParseError::UnexpectedOperand(operation.to_string()))
            }
            _ => Err(ParseError::UnknownOperation(operation.to_string())),
        }
    }

    /// `<Domain>.<key>`, or the bare poverty key
    fn parse_category(&mut self) -> Result<Category, ParseError> {
        let head = self.take_text();

        if !self.check(&Token::Dot) {
            if head.is_empty() {
                return Err(self.unexpected());
            }
            if head == POVERTY_KEY {
                return Ok(Category::new(Domain::Income, head));
            }
            return Err(ParseError::MissingDomain(head));
        }
        self.advance();

        let domain = Domain::from_label(&head).ok_or(ParseError::UnknownDomain(head))?;
        let key = self.take_joined();
        if !domain.recognizes(&key) {
            return Err(ParseError::UnknownKey { domain, key });
        }
        Ok(Category::new(domain, key))
    }

    fn parse_state_code(&mut self) -> Result<String, ParseError> {
        let code = self.take_joined();
        if !STATE_CODE.is_match(&code) {
            return Err(ParseError::InvalidStateCode(code));
        }
        Ok(code)
    }

    fn parse_threshold_filter(&mut self, comparison: Comparison) -> Result<Command, ParseError> {
        let category = self.parse_category()?;
        self.expect(Token::Colon)
            .map_err(|_| ParseError::MissingThreshold)?;

        let raw = self.take_joined();
        if raw.is_empty() {
            return Err(ParseError::MissingThreshold);
        }
        let threshold = raw
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite())
            .ok_or(ParseError::InvalidThreshold(raw))?;

        Ok(Command::FilterThreshold {
            category,
            comparison,
            threshold,
        })
    }
}

/// Parse a raw script line. Never fails: a line that does not match the
/// grammar becomes [`Command::Malformed`] carrying the offending text.
pub fn parse_line(line: &str) -> Command {
    let mut parser = Parser::new(Lexer::new(line));
    parser.parse_command().unwrap_or_else(|error| Command::Malformed {
        line: line.trim_end().to_string(),
        error,
    })
}
