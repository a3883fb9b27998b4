//! A restartable forward cursor over a token slice.
//!
//! Mirrors the snapshot/restore idiom `faxc-lex` used at the character
//! level, one layer up: the parser needs to probe "is this identifier
//! followed by `(`?" and similar one-shot lookaheads without hand-rolling
//! an undo log for every call site.

use faxc_lex::{Token, TokenWithSpan};

/// An opaque cursor position, restorable with [`TokenCursor::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

pub struct TokenCursor<'a> {
    tokens: &'a [TokenWithSpan],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [TokenWithSpan]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The token at the cursor, without advancing. Past the end of the
    /// slice this returns the final `Eof` token (tokenizer output always
    /// ends with one), so callers never need to handle `None`.
    pub fn peek(&self) -> &'a TokenWithSpan {
        self.tokens.get(self.pos).unwrap_or_else(|| self.tokens.last().expect("empty token stream"))
    }

    /// The token one position past the cursor, used for the call-probe
    /// lookahead (identifier immediately followed by `(`).
    pub fn peek_second(&self) -> &'a TokenWithSpan {
        self.tokens.get(self.pos + 1).unwrap_or_else(|| self.tokens.last().expect("empty token stream"))
    }

    pub fn bump(&mut self) -> &'a TokenWithSpan {
        let tok = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    pub fn at_eof(&self) -> bool {
        matches!(self.peek().token, Token::Eof)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }
}
