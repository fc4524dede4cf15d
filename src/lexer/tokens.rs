use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("program", TokenKind::Program);
        map.insert("const", TokenKind::Const);
        map.insert("var", TokenKind::Var);
        map.insert("procedure", TokenKind::Procedure);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("call", TokenKind::Call);
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map.insert("odd", TokenKind::Odd);
        map
    };

    pub static ref OPERATOR_LOOKUP: HashMap<char, OperatorRule> = {
        let mut map = HashMap::new();
        map.insert('+', OperatorRule { single: Some(TokenKind::Plus), extensions: &[] });
        map.insert('-', OperatorRule { single: Some(TokenKind::Minus), extensions: &[] });
        map.insert('*', OperatorRule { single: Some(TokenKind::Star), extensions: &[] });
        map.insert('/', OperatorRule { single: Some(TokenKind::Slash), extensions: &[] });
        map.insert('=', OperatorRule { single: Some(TokenKind::Equals), extensions: &[] });
        map.insert('<', OperatorRule {
            single: Some(TokenKind::Less),
            extensions: &[('=', TokenKind::LessEquals), ('>', TokenKind::NotEquals)],
        });
        map.insert('>', OperatorRule {
            single: Some(TokenKind::Greater),
            extensions: &[('=', TokenKind::GreaterEquals)],
        });
        map.insert('(', OperatorRule { single: Some(TokenKind::OpenParen), extensions: &[] });
        map.insert(')', OperatorRule { single: Some(TokenKind::CloseParen), extensions: &[] });
        map.insert(';', OperatorRule { single: Some(TokenKind::Semicolon), extensions: &[] });
        map.insert(',', OperatorRule { single: Some(TokenKind::Comma), extensions: &[] });
        map.insert(':', OperatorRule {
            single: None,
            extensions: &[('=', TokenKind::Assignment)],
        });
        map
    };
}

/// Recognition rule for an operator or delimiter, keyed by its first
/// character. `extensions` lists the second characters that extend it to a
/// two-character lexeme; `single` is the kind when none of them follows, or
/// `None` when the character is not a lexeme on its own (only `:`).
#[derive(Debug, Clone, Copy)]
pub struct OperatorRule {
    pub single: Option<TokenKind>,
    pub extensions: &'static [(char, TokenKind)],
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,
    Identifier,

    Plus,
    Minus,
    Star,
    Slash,

    Equals,     // =
    NotEquals,  // <>
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    OpenParen,
    CloseParen,
    Semicolon,
    Comma,
    Assignment, // :=

    // Reserved
    Program,
    Const,
    Var,
    Procedure,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
    Call,
    Read,
    Write,
    Odd,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Program
                | TokenKind::Const
                | TokenKind::Var
                | TokenKind::Procedure
                | TokenKind::Begin
                | TokenKind::End
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::Call
                | TokenKind::Read
                | TokenKind::Write
                | TokenKind::Odd
        )
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
        )
    }

    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenKind::OpenParen
                | TokenKind::CloseParen
                | TokenKind::Semicolon
                | TokenKind::Comma
                | TokenKind::Assignment
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
