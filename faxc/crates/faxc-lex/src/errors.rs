//! Tokenizer error taxonomy.

use faxc_util::Span;
use thiserror::Error;

/// Everything that can make the tokenizer fail. All tokenizer failures are
/// fatal: `Lexer` stops producing tokens after the first one.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LexError {
    #[error("unrecognized character '{ch}' at {}:{}", .span.line, .span.column)]
    UnrecognizedCharacter { ch: char, span: Span },

    #[error("unterminated string literal starting at {}:{}", .span.line, .span.column)]
    UnterminatedString { span: Span },

    #[error("malformed numeric literal at {}:{}: {reason}", .span.line, .span.column)]
    MalformedNumber { reason: String, span: Span },

    #[error("mixed tabs and spaces within one indentation unit at {}:{}", .span.line, .span.column)]
    MixedIndentation { span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnrecognizedCharacter { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::MalformedNumber { span, .. }
            | LexError::MixedIndentation { span } => *span,
        }
    }
}
