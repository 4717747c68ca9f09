// tests/lexer_tests.rs

use county_query::ast::Token;
use county_query::lexer::Lexer;

fn text(s: &str) -> Token {
    Token::Text(s.to_string())
}

// ============================================================================
// Delimiters
// ============================================================================

#[test]
fn test_delimiters() {
    let test_cases = vec![(":", Token::Colon), (".", Token::Dot)];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

#[test]
fn test_empty_and_blank() {
    for input in ["", "   ", "\t", "# only an annotation"] {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), Token::Eof, "Failed for input: {:?}", input);
    }
}

// ============================================================================
// Text segments
// ============================================================================

#[test]
fn test_bare_keyword() {
    let mut lexer = Lexer::new("population-total");
    assert_eq!(lexer.tokenize(), vec![text("population-total"), Token::Eof]);
}

#[test]
fn test_inner_spaces_are_kept() {
    let mut lexer = Lexer::new("population:Education.High School or Higher");
    assert_eq!(
        lexer.tokenize(),
        vec![
            text("population"),
            Token::Colon,
            text("Education"),
            Token::Dot,
            text("High School or Higher"),
            Token::Eof,
        ]
    );
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let mut lexer = Lexer::new("  filter-state :  CA  \n");
    assert_eq!(
        lexer.tokenize(),
        vec![text("filter-state"), Token::Colon, text("CA"), Token::Eof]
    );
}

#[test]
fn test_punctuation_inside_text() {
    let mut lexer = Lexer::new("Ethnicities.White Alone, not Hispanic or Latino");
    assert_eq!(
        lexer.tokenize(),
        vec![
            text("Ethnicities"),
            Token::Dot,
            text("White Alone, not Hispanic or Latino"),
            Token::Eof,
        ]
    );
}

#[test]
fn test_decimal_threshold_splits_on_dot() {
    let mut lexer = Lexer::new("filter-lt:Persons Below Poverty Level:12.5");
    assert_eq!(
        lexer.tokenize(),
        vec![
            text("filter-lt"),
            Token::Colon,
            text("Persons Below Poverty Level"),
            Token::Colon,
            text("12"),
            Token::Dot,
            text("5"),
            Token::Eof,
        ]
    );
}

#[test]
fn test_annotation_ends_line() {
    let mut lexer = Lexer::new("percent:Persons Below Poverty Level # poverty share: all");
    assert_eq!(
        lexer.tokenize(),
        vec![
            text("percent"),
            Token::Colon,
            text("Persons Below Poverty Level"),
            Token::Eof,
        ]
    );
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("display");
    lexer.next_token();
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}
