#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Run of characters between delimiters, surrounding whitespace trimmed
    ///
    /// # Examples
    /// ```text
    /// filter-gt
    /// Bachelor's Degree or Higher
    /// 12
    /// ```
    Text(String),

    /// Separates the operation from its payload, and the payload from a threshold
    Colon,

    /// Separates a domain from its key
    ///
    /// Also appears inside decimal thresholds (`12.5` lexes as `12`, `.`, `5`).
    Dot,

    /// End of line, or start of a `#` annotation
    Eof,
}

impl Token {
    /// Source text of the token, used to rebuild keys and numbers
    pub fn as_source(&self) -> &str {
        match self {
            Token::Text(s) => s,
            Token::Colon => ":",
            Token::Dot => ".",
            Token::Eof => "",
        }
    }
}
