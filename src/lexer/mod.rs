//! Lexical analysis module.
//!
//! This module contains the scanner that converts PL/0 source code into a
//! stream of tokens. It handles:
//!
//! - A forward-only character cursor with line/column bookkeeping
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Maximal-munch disambiguation of two-character operators
//! - Comments and whitespace handling
//! - Lexical errors reported in-stream without aborting the scan

pub mod cursor;
pub mod lexer;
pub mod tokens;
