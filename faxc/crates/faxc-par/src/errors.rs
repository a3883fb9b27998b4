//! Parser error taxonomy.

use faxc_lex::LexError;
use faxc_util::Span;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("unexpected operand at {}:{}", .span.line, .span.column)]
    UnexpectedOperand { span: Span },

    #[error("expecting an operand at {}:{}", .span.line, .span.column)]
    ExpectingOperand { span: Span },

    #[error("expecting '{expected}' at {}:{}", .span.line, .span.column)]
    ExpectingToken { expected: &'static str, span: Span },

    #[error("expecting {expected} operands, got {got}, at {}:{}", .span.line, .span.column)]
    WrongOperandCount { expected: usize, got: usize, span: Span },

    #[error("invalid token in operator position at {}:{}", .span.line, .span.column)]
    InvalidOperator { span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(e) => e.span(),
            ParseError::UnexpectedOperand { span }
            | ParseError::ExpectingOperand { span }
            | ParseError::ExpectingToken { span, .. }
            | ParseError::WrongOperandCount { span, .. }
            | ParseError::InvalidOperator { span } => *span,
        }
    }
}
