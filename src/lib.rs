#![allow(clippy::module_inception)]

use std::{io::{self, Write}, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};

pub mod errors;
pub mod lexer;
pub mod macros;

#[derive(Debug, Clone)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn null() -> Self {
        Position {
            line: 1,
            column: 1,
            offset: 0,
            file: Rc::new(String::from("<null>")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of a 1-based source line, without its line ending.
pub fn get_line_text(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: StandaloneColon (A lone `:` is not valid, did you mean `:=`?)
        -> program.pl0
           |
        20 | a : b;
           | --^
    */

    let position = error.get_position();
    let line_text = get_line_text(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = position.column as usize - removed_whitespace;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

/// Renders the scan result as a tabular listing: one row per token or error
/// in source order, followed by the error list and summary statistics.
pub fn write_token_listing(items: &[Result<Token, Error>], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "PL/0 Lexical Analysis Results")?;
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out)?;

    writeln!(out, "{:<6} {:<6} {:<6} {:<15} {:<20}", "Index", "Line", "Column", "Type", "Value")?;
    writeln!(out, "{}", "-".repeat(80))?;

    let mut index = 0;
    for item in items {
        match item {
            Ok(token) if token.kind == TokenKind::EOF => {}
            Ok(token) => {
                index += 1;
                writeln!(
                    out,
                    "{:<6} {:<6} {:<6} {:<15} {:<20}",
                    index,
                    token.span.start.line,
                    token.span.start.column,
                    token.kind.to_string(),
                    token.value
                )?;
            }
            Err(error) => {
                index += 1;
                let position = error.get_position();
                writeln!(
                    out,
                    "{:<6} {:<6} {:<6} {:<15} {:<20}",
                    index,
                    position.line,
                    position.column,
                    "Error",
                    error.get_offending_text()
                )?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(80))?;

    let lex_errors: Vec<&Error> = items.iter().filter_map(|item| item.as_ref().err()).collect();

    if lex_errors.is_empty() {
        writeln!(out, "\nLexical analysis completed, no errors.")?;
    } else {
        writeln!(out, "\nError List:")?;
        writeln!(out, "{}", "-".repeat(80))?;

        for error in &lex_errors {
            let position = error.get_position();
            writeln!(
                out,
                "Lexical error (line {}, column {}): {}",
                position.line, position.column, error
            )?;
        }

        writeln!(out, "\nFound {} errors in total.", lex_errors.len())?;
    }

    let stats = Statistics::collect(items);
    writeln!(
        out,
        "\nStatistics: {} tokens ({} keywords, {} identifiers, {} integers, {} operators, {} delimiters), {} errors",
        stats.total_tokens,
        stats.keywords,
        stats.identifiers,
        stats.integers,
        stats.operators,
        stats.delimiters,
        stats.errors
    )?;

    writeln!(out, "\n{}", "=".repeat(80))?;

    Ok(())
}

/// Category counts over a finished scan. The `EOF` token is not counted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_tokens: usize,
    pub keywords: usize,
    pub identifiers: usize,
    pub integers: usize,
    pub operators: usize,
    pub delimiters: usize,
    pub errors: usize,
}

impl Statistics {
    pub fn collect(items: &[Result<Token, Error>]) -> Statistics {
        let mut stats = Statistics::default();

        for item in items {
            match item {
                Ok(token) => {
                    if token.kind == TokenKind::EOF {
                        continue;
                    }

                    stats.total_tokens += 1;

                    if token.kind.is_keyword() {
                        stats.keywords += 1;
                    } else if token.kind == TokenKind::Identifier {
                        stats.identifiers += 1;
                    } else if token.kind == TokenKind::Integer {
                        stats.integers += 1;
                    } else if token.kind.is_operator() {
                        stats.operators += 1;
                    } else if token.kind.is_delimiter() {
                        stats.delimiters += 1;
                    }
                }
                Err(_) => stats.errors += 1,
            }
        }

        stats
    }
}
