//! Error types and error handling for the lexical analyzer.
//!
//! This module defines the closed set of lexical error kinds. It includes:
//!
//! - An error structure carrying the source position of the offending text
//! - One variant per lexical error condition (there are exactly four)
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
