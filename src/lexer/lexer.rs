use std::rc::Rc;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_TOKEN};

use super::cursor::Cursor;
use super::tokens::{is_digit, is_letter, OperatorRule, Token, TokenKind, OPERATOR_LOOKUP, RESERVED_LOOKUP};

pub struct Lexer {
    cursor: Cursor,
    comment_open: String,
    comment_close: String,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<input>"))
        };

        Lexer {
            cursor: Cursor::new(source, file_name),
            comment_open: String::from("{"),
            comment_close: String::from("}"),
        }
    }

    /// Replaces the default `{` / `}` comment marker pair.
    pub fn with_comment_markers(mut self, open: &str, close: &str) -> Lexer {
        self.comment_open = String::from(open);
        self.comment_close = String::from(close);
        self
    }

    /// Produces the next token, or a lexical error positioned like one.
    ///
    /// Errors do not stop the scan: the cursor has already been moved past
    /// the offending text, so the following call resumes normally. Once the
    /// input is exhausted every call returns the `EOF` token.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_trivia()?;

        let start = self.cursor.position();

        let c = match self.cursor.peek() {
            Some(c) => c,
            None => {
                return Ok(MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    Span { start: start.clone(), end: start }
                ))
            }
        };

        if is_letter(c) {
            return Ok(self.scan_identifier(start));
        }

        if is_digit(c) {
            return self.scan_number(start);
        }

        if let Some(rule) = OPERATOR_LOOKUP.get(&c) {
            return self.scan_operator(c, *rule, start);
        }

        self.cursor.advance();
        Err(Error::new(ErrorImpl::IllegalCharacter { character: c }, start))
    }

    fn skip_trivia(&mut self) -> Result<(), Error> {
        loop {
            match self.cursor.peek() {
                Some(c) if c.is_whitespace() => {
                    self.cursor.advance();
                }
                Some(_) if self.cursor.rest().starts_with(self.comment_open.as_str()) => {
                    self.skip_comment()?;
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), Error> {
        let open = self.cursor.position();

        for _ in 0..self.comment_open.len() {
            self.cursor.advance();
        }

        while !self.cursor.rest().starts_with(self.comment_close.as_str()) {
            if self.cursor.advance().is_none() {
                return Err(Error::new(
                    ErrorImpl::UnterminatedComment {
                        open: self.comment_open.clone(),
                        close: self.comment_close.clone(),
                    },
                    open,
                ));
            }
        }

        for _ in 0..self.comment_close.len() {
            self.cursor.advance();
        }

        Ok(())
    }

    fn scan_identifier(&mut self, start: Position) -> Token {
        let mut lexeme = String::new();

        while let Some(c) = self.cursor.peek() {
            if !is_letter(c) && !is_digit(c) {
                break;
            }
            lexeme.push(c);
            self.cursor.advance();
        }

        let kind = match RESERVED_LOOKUP.get(lexeme.as_str()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        };

        MK_TOKEN!(kind, lexeme, Span { start, end: self.cursor.position() })
    }

    fn scan_number(&mut self, start: Position) -> Result<Token, Error> {
        let mut lexeme = String::new();

        while let Some(c) = self.cursor.peek() {
            if !is_digit(c) {
                break;
            }
            lexeme.push(c);
            self.cursor.advance();
        }

        // A letter directly after the digit run invalidates the whole
        // letter/digit cluster, not just the digits.
        if self.cursor.peek().map_or(false, is_letter) {
            let mut cluster = lexeme;

            while let Some(c) = self.cursor.peek() {
                if !is_letter(c) && !is_digit(c) {
                    break;
                }
                cluster.push(c);
                self.cursor.advance();
            }

            return Err(Error::new(ErrorImpl::DigitFollowedByLetter { cluster }, start));
        }

        Ok(MK_TOKEN!(TokenKind::Integer, lexeme, Span { start, end: self.cursor.position() }))
    }

    fn scan_operator(&mut self, first: char, rule: OperatorRule, start: Position) -> Result<Token, Error> {
        self.cursor.advance();

        for (second, kind) in rule.extensions {
            if self.cursor.peek() == Some(*second) {
                self.cursor.advance();

                let mut lexeme = String::from(first);
                lexeme.push(*second);

                return Ok(MK_TOKEN!(*kind, lexeme, Span { start, end: self.cursor.position() }));
            }
        }

        match rule.single {
            Some(kind) => {
                Ok(MK_TOKEN!(kind, String::from(first), Span { start, end: self.cursor.position() }))
            }
            None => Err(Error::new(ErrorImpl::StandaloneColon, start)),
        }
    }
}

/// Scans the whole source, collecting tokens and lexical errors in source
/// order. The last element is always the `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Result<Token, Error>> {
    let mut lex = Lexer::new(source, file);
    let mut items = vec![];

    loop {
        let item = lex.next_token();
        let done = matches!(&item, Ok(token) if token.kind == TokenKind::EOF);
        items.push(item);

        if done {
            return items;
        }
    }
}
