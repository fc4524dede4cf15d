//! Integration tests for end-to-end lexical analysis.
//!
//! These tests drive the public library API over whole PL/0 programs and
//! check the token stream, the listing output, and the statistics.

use pl0_lexer::{
    get_line_text,
    lexer::{lexer::tokenize, tokens::TokenKind},
    write_token_listing, Statistics,
};

const SQUARES_PROGRAM: &str = "\
program squares;
const limit = 10;
var i, squ;

procedure square;
begin
  squ := i * i
end;

begin
  i := 1;
  while i <= limit do
  begin
    call square;
    write(squ);
    i := i + 1
  end
end";

#[test]
fn test_lex_complete_program() {
    let items = tokenize(SQUARES_PROGRAM.to_string(), Some("squares.pl0".to_string()));

    assert!(items.iter().all(|item| item.is_ok()));

    let tokens: Vec<_> = items.into_iter().map(|item| item.unwrap()).collect();

    assert_eq!(tokens[0].kind, TokenKind::Program);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "squares");
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[3].kind, TokenKind::Const);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "limit");
    assert_eq!(tokens[5].kind, TokenKind::Equals);
    assert_eq!(tokens[6].kind, TokenKind::Integer);
    assert_eq!(tokens[6].value, "10");

    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_complete_program_positions_round_trip() {
    let items = tokenize(SQUARES_PROGRAM.to_string(), Some("squares.pl0".to_string()));

    for item in items {
        let token = item.unwrap();
        if token.kind == TokenKind::EOF {
            continue;
        }

        let line = get_line_text(SQUARES_PROGRAM, token.span.start.line).unwrap();
        let start = (token.span.start.column - 1) as usize;
        assert_eq!(&line[start..start + token.value.len()], token.value);
    }
}

#[test]
fn test_complete_program_statistics() {
    let items = tokenize(SQUARES_PROGRAM.to_string(), Some("squares.pl0".to_string()));
    let stats = Statistics::collect(&items);

    assert_eq!(stats.errors, 0);
    // program, const, var, procedure, begin x3, end x3, while, do, call, write
    assert_eq!(stats.keywords, 14);
    assert_eq!(stats.integers, 3);
    assert_eq!(
        stats.total_tokens,
        stats.keywords + stats.identifiers + stats.integers + stats.operators + stats.delimiters
    );
}

#[test]
fn test_listing_output_for_clean_program() {
    let items = tokenize("x := 5;".to_string(), Some("test.pl0".to_string()));

    let mut out = Vec::new();
    write_token_listing(&items, &mut out).unwrap();
    let listing = String::from_utf8(out).unwrap();

    assert!(listing.contains("PL/0 Lexical Analysis Results"));
    assert!(listing.contains("Index"));
    assert!(listing.contains("Identifier"));
    assert!(listing.contains("Assignment"));
    assert!(listing.contains("Lexical analysis completed, no errors."));
    // The EOF token gets no row: 4 rows for x, :=, 5, ;
    assert!(listing.contains("4      1      7      Semicolon"));
    assert!(!listing.contains("EOF"));
}

#[test]
fn test_listing_output_reports_errors() {
    let items = tokenize("a : b\n123abc".to_string(), Some("test.pl0".to_string()));

    let mut out = Vec::new();
    write_token_listing(&items, &mut out).unwrap();
    let listing = String::from_utf8(out).unwrap();

    assert!(listing.contains("Error List:"));
    assert!(listing.contains("Lexical error (line 1, column 3): standalone ':', expected \":=\""));
    assert!(listing.contains(
        "Lexical error (line 2, column 1): letter cannot directly follow a number: \"123abc\""
    ));
    assert!(listing.contains("Found 2 errors in total."));
}

#[test]
fn test_listing_rows_interleave_errors_at_their_positions() {
    let items = tokenize("a : b".to_string(), Some("test.pl0".to_string()));

    let mut out = Vec::new();
    write_token_listing(&items, &mut out).unwrap();
    let listing = String::from_utf8(out).unwrap();

    let a_row = listing.find("1      1      1      Identifier      a").unwrap();
    let error_row = listing.find("2      1      3      Error           :").unwrap();
    let b_row = listing.find("3      1      5      Identifier      b").unwrap();

    assert!(a_row < error_row);
    assert!(error_row < b_row);
}

#[test]
fn test_lex_program_with_comment_and_error() {
    let source = "begin { comment }\n  x := 3y\nend";
    let items = tokenize(source.to_string(), Some("test.pl0".to_string()));

    assert_eq!(items[0].as_ref().unwrap().kind, TokenKind::Begin);
    assert_eq!(items[1].as_ref().unwrap().kind, TokenKind::Identifier);
    assert_eq!(items[2].as_ref().unwrap().kind, TokenKind::Assignment);

    let error = items[3].as_ref().unwrap_err();
    assert_eq!(error.get_error_name(), "DigitFollowedByLetter");
    assert_eq!(error.get_offending_text(), "3y");
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 8);

    assert_eq!(items[4].as_ref().unwrap().kind, TokenKind::End);
    assert_eq!(items[5].as_ref().unwrap().kind, TokenKind::EOF);
}
