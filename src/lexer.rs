use crate::ast::Token;

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn is_delimiter(ch: char) -> bool {
        matches!(ch, ':' | '.' | '#')
    }

    fn read_text(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if Self::is_delimiter(ch) {
                break;
            }
            result.push(ch);
            self.advance();
        }
        // Inner spaces belong to keys ("High School or Higher"), trailing ones don't
        result.truncate(result.trim_end().len());
        result
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        match self.current_char() {
            None | Some('#') => {
                // Annotation runs to end of line
                self.position = self.input.len();
                Token::Eof
            }
            Some(':') => {
                self.advance();
                Token::Colon
            }
            Some('.') => {
                self.advance();
                Token::Dot
            }
            Some(_) => Token::Text(self.read_text()),
        }
    }

    /// Drain the remaining tokens, ending with [`Token::Eof`]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }
}

#[test]
fn test_filter_line() {
    let mut lexer = Lexer::new("filter-gt:Education.Bachelor's Degree or Higher:50");
    assert_eq!(lexer.next_token(), Token::Text("filter-gt".to_string()));
    assert_eq!(lexer.next_token(), Token::Colon);
    assert_eq!(lexer.next_token(), Token::Text("Education".to_string()));
    assert_eq!(lexer.next_token(), Token::Dot);
    assert_eq!(
        lexer.next_token(),
        Token::Text("Bachelor's Degree or Higher".to_string())
    );
    assert_eq!(lexer.next_token(), Token::Colon);
    assert_eq!(lexer.next_token(), Token::Text("50".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_annotation() {
    let mut lexer = Lexer::new("display   # dump everything");
    assert_eq!(lexer.next_token(), Token::Text("display".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}
