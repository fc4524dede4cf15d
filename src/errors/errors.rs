use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::DigitFollowedByLetter { .. } => "DigitFollowedByLetter",
            ErrorImpl::StandaloneColon => "StandaloneColon",
            ErrorImpl::UnterminatedComment { .. } => "UnterminatedComment",
        }
    }

    /// The offending source text, exactly as it appears in the input. The
    /// scan resumes at the first character after this text.
    pub fn get_offending_text(&self) -> String {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } => character.to_string(),
            ErrorImpl::DigitFollowedByLetter { cluster } => cluster.clone(),
            ErrorImpl::StandaloneColon => String::from(":"),
            ErrorImpl::UnterminatedComment { open, .. } => open.clone(),
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::DigitFollowedByLetter { cluster } => ErrorTip::Suggestion(format!(
                "A letter cannot directly follow a number: `{}`",
                cluster
            )),
            ErrorImpl::StandaloneColon => {
                ErrorTip::Suggestion(String::from("A lone `:` is not valid, did you mean `:=`?"))
            }
            ErrorImpl::UnterminatedComment { close, .. } => ErrorTip::Suggestion(format!(
                "Comment is never closed, missing `{}`",
                close
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("illegal character: {character:?}")]
    IllegalCharacter { character: char },
    #[error("letter cannot directly follow a number: {cluster:?}")]
    DigitFollowedByLetter { cluster: String },
    #[error("standalone ':', expected \":=\"")]
    StandaloneColon,
    #[error("unterminated comment, missing {close:?}")]
    UnterminatedComment { open: String, close: String },
}
