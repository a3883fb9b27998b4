//! The tokenizer state machine (§4.4): turns a [`PushBack`] character
//! stream into a sequence of [`TokenWithSpan`]s.

use crate::errors::LexError;
use crate::pushback::PushBack;
use crate::reserved;
use crate::token::{NumberLiteral, ReservedToken, Token, TokenWithSpan};
use faxc_util::{FileId, Span, Symbol};

/// Columns per unit of leading indentation; a literal tab counts as one
/// full unit on its own.
const INDENT_WIDTH: u32 = 4;

/// Streaming tokenizer. Implements [`Iterator`] so callers can either pull
/// tokens one at a time via [`Lexer::next_token`] or collect them with
/// [`tokenize`].
pub struct Lexer<'a> {
    stream: PushBack<'a>,
    file_id: FileId,
    at_line_start: bool,
    pending_indents: u32,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_file(source, FileId::DUMMY)
    }

    pub fn with_file(source: &'a str, file_id: FileId) -> Self {
        Self {
            stream: PushBack::new(source),
            file_id,
            at_line_start: true,
            pending_indents: 0,
            done: false,
        }
    }

    fn span_from(&self, start_line: u32, start_col: u32, start_byte: usize) -> Span {
        Span {
            start: start_byte,
            end: self.stream.byte_offset(),
            line: start_line,
            column: start_col,
            file_id: self.file_id,
        }
    }

    fn here(&self) -> (u32, u32, usize) {
        (self.stream.line(), self.stream.column(), self.stream.byte_offset())
    }

    /// Produce the next token, or a fatal [`LexError`]. Once an error is
    /// returned, the lexer does not attempt to recover; further calls
    /// keep returning the same error's equivalent EOF-less state is
    /// undefined, mirroring "all errors are fatal, no recovery" (§7).
    pub fn next_token(&mut self) -> Result<TokenWithSpan, LexError> {
        loop {
            if self.pending_indents > 0 {
                let (line, col, byte) = self.here();
                self.pending_indents -= 1;
                return Ok(TokenWithSpan::new(Token::Indent, self.span_from(line, col, byte)));
            }

            if self.at_line_start {
                self.at_line_start = false;
                self.pending_indents = self.scan_indentation()?;
                continue;
            }

            self.skip_intraline_space_and_comments();

            let (line, col, byte) = self.here();
            let Some(c) = self.stream.peek() else {
                return Ok(TokenWithSpan::new(Token::Eof, self.span_from(line, col, byte)));
            };

            if c == '\n' {
                self.stream.pop();
                self.at_line_start = true;
                return Ok(TokenWithSpan::new(Token::Newline, self.span_from(line, col, byte)));
            }

            if c.is_ascii_digit() {
                let num = self.scan_number()?;
                return Ok(TokenWithSpan::new(Token::Number(num), self.span_from(line, col, byte)));
            }

            if c == '"' {
                let s = self.scan_string()?;
                return Ok(TokenWithSpan::new(Token::Str(s), self.span_from(line, col, byte)));
            }

            if is_identifier_start(c) {
                let ident = self.scan_identifier();
                let token = match reserved::get_keyword(&ident) {
                    ReservedToken::Unknown => Token::Identifier(Symbol::intern(&ident)),
                    reserved => Token::Reserved(reserved),
                };
                return Ok(TokenWithSpan::new(token, self.span_from(line, col, byte)));
            }

            let op = reserved::read_operator(&mut self.stream);
            if op == ReservedToken::Unknown {
                return Err(LexError::UnrecognizedCharacter { ch: c, span: self.span_from(line, col, byte) });
            }
            return Ok(TokenWithSpan::new(Token::Reserved(op), self.span_from(line, col, byte)));
        }
    }

    fn skip_intraline_space_and_comments(&mut self) {
        loop {
            match self.stream.peek() {
                Some(' ') | Some('\t') | Some('\r') => {
                    self.stream.pop();
                }
                Some('#') => {
                    while let Some(c) = self.stream.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.stream.pop();
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_indentation(&mut self) -> Result<u32, LexError> {
        let mut units = 0u32;
        let mut spaces_in_unit = 0u32;
        loop {
            let (line, col, byte) = self.here();
            match self.stream.peek() {
                Some(' ') => {
                    self.stream.pop();
                    spaces_in_unit += 1;
                    if spaces_in_unit == INDENT_WIDTH {
                        units += 1;
                        spaces_in_unit = 0;
                    }
                }
                Some('\t') => {
                    if spaces_in_unit != 0 {
                        return Err(LexError::MixedIndentation { span: self.span_from(line, col, byte) });
                    }
                    self.stream.pop();
                    units += 1;
                }
                _ => break,
            }
        }
        Ok(units)
    }

    fn scan_identifier(&mut self) -> String {
        let mut s = String::new();
        while let Some(c) = self.stream.peek() {
            if is_identifier_continue(c) {
                s.push(c);
                self.stream.pop();
            } else {
                break;
            }
        }
        s
    }

    fn scan_number(&mut self) -> Result<NumberLiteral, LexError> {
        let (line, col, byte) = self.here();
        let mut s = String::new();
        let mut is_float = false;

        while let Some(c) = self.stream.peek() {
            if c.is_ascii_digit() {
                s.push(c);
                self.stream.pop();
            } else {
                break;
            }
        }

        if self.stream.peek() == Some('.') {
            // Only consume the `.` as a decimal point if a digit follows;
            // otherwise it's the member-access operator (e.g. `1.to_s`
            // is not a construct this language has, but `1 .foo` might
            // be parsed elsewhere — be conservative and require a digit).
            let dot = self.stream.pop().unwrap();
            if matches!(self.stream.peek(), Some(d) if d.is_ascii_digit()) {
                is_float = true;
                s.push(dot);
                while let Some(c) = self.stream.peek() {
                    if c.is_ascii_digit() {
                        s.push(c);
                        self.stream.pop();
                    } else {
                        break;
                    }
                }
            } else {
                self.stream.push(dot);
            }
        }

        if matches!(self.stream.peek(), Some('e') | Some('E')) {
            let mut exponent = String::new();
            let e = self.stream.pop().unwrap();
            exponent.push(e);
            if matches!(self.stream.peek(), Some('+') | Some('-')) {
                exponent.push(self.stream.pop().unwrap());
            }
            let mut digits = 0;
            while let Some(c) = self.stream.peek() {
                if c.is_ascii_digit() {
                    exponent.push(c);
                    self.stream.pop();
                    digits += 1;
                } else {
                    break;
                }
            }
            if digits == 0 {
                return Err(LexError::MalformedNumber {
                    reason: "exponent has no digits".to_string(),
                    span: self.span_from(line, col, byte),
                });
            }
            is_float = true;
            s.push_str(&exponent);
        }

        if is_float {
            s.parse::<f64>()
                .map(NumberLiteral::Float)
                .map_err(|e| LexError::MalformedNumber { reason: e.to_string(), span: self.span_from(line, col, byte) })
        } else {
            s.parse::<u64>()
                .map(NumberLiteral::Int)
                .map_err(|e| LexError::MalformedNumber { reason: e.to_string(), span: self.span_from(line, col, byte) })
        }
    }

    fn scan_string(&mut self) -> Result<String, LexError> {
        let (line, col, byte) = self.here();
        self.stream.pop(); // opening quote
        let mut s = String::new();
        loop {
            match self.stream.pop() {
                None | Some('\n') => {
                    return Err(LexError::UnterminatedString { span: self.span_from(line, col, byte) });
                }
                Some('"') => break,
                Some('\\') => match self.stream.pop() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('r') => s.push('\r'),
                    Some('\\') => s.push('\\'),
                    Some('"') => s.push('"'),
                    Some('0') => s.push('\0'),
                    Some(other) => s.push(other),
                    None => return Err(LexError::UnterminatedString { span: self.span_from(line, col, byte) }),
                },
                Some(c) => s.push(c),
            }
        }
        Ok(s)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<TokenWithSpan, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(tok) => {
                if matches!(tok.token, Token::Eof) {
                    self.done = true;
                }
                Some(Ok(tok))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Tokenize `source` eagerly into a `Vec`, stopping at (and including) the
/// first fatal error. The trailing `Eof` token is always present on
/// success. This is the "restartable forward cursor" the external
/// interface refers to: `faxc_par::TokenCursor` wraps the returned `Vec`
/// with checkpoint/restore.
pub fn tokenize(source: &str) -> Result<Vec<TokenWithSpan>, LexError> {
    tokenize_with_file(source, FileId::DUMMY)
}

pub fn tokenize_with_file(source: &str, file_id: FileId) -> Result<Vec<TokenWithSpan>, LexError> {
    let mut lexer = Lexer::with_file(source, file_id);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token()?;
        let is_eof = matches!(tok.token, Token::Eof);
        tokens.push(tok);
        if is_eof {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ReservedToken as R;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![Token::Eof]);
    }

    #[test]
    fn identifiers_and_keywords() {
        assert_eq!(
            kinds("if x"),
            vec![Token::Reserved(R::If), Token::Identifier(Symbol::intern("x")), Token::Eof]
        );
    }

    #[test]
    fn maximal_munch_prefers_compound_assign() {
        assert_eq!(
            kinds("a**=b"),
            vec![
                Token::Identifier(Symbol::intern("a")),
                Token::Reserved(R::ExpAssign),
                Token::Identifier(Symbol::intern("b")),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn integer_and_float_literals() {
        assert_eq!(kinds("1 2.5 3e2 4.0e-1"), vec![
            Token::Number(NumberLiteral::Int(1)),
            Token::Number(NumberLiteral::Float(2.5)),
            Token::Number(NumberLiteral::Float(300.0)),
            Token::Number(NumberLiteral::Float(0.4)),
            Token::Eof,
        ]);
    }

    #[test]
    fn string_literal_with_escapes() {
        assert_eq!(kinds(r#""a\nb""#), vec![Token::Str("a\nb".to_string()), Token::Eof]);
    }

    #[test]
    fn unterminated_string_is_fatal() {
        assert!(matches!(tokenize("\"abc"), Err(LexError::UnterminatedString { .. })));
    }

    #[test]
    fn unrecognized_character_is_fatal() {
        assert!(matches!(tokenize("@"), Err(LexError::UnrecognizedCharacter { .. })));
    }

    #[test]
    fn comment_is_skipped_silently() {
        assert_eq!(kinds("x # comment\ny"), vec![
            Token::Identifier(Symbol::intern("x")),
            Token::Newline,
            Token::Identifier(Symbol::intern("y")),
            Token::Eof,
        ]);
    }

    #[test]
    fn indentation_emits_one_marker_per_unit() {
        assert_eq!(kinds("    x"), vec![Token::Indent, Token::Identifier(Symbol::intern("x")), Token::Eof]);
        assert_eq!(
            kinds("        x"),
            vec![Token::Indent, Token::Indent, Token::Identifier(Symbol::intern("x")), Token::Eof]
        );
    }

    #[test]
    fn tab_counts_as_one_unit() {
        assert_eq!(kinds("\tx"), vec![Token::Indent, Token::Identifier(Symbol::intern("x")), Token::Eof]);
    }

    #[test]
    fn mixed_indentation_is_fatal() {
        assert!(matches!(tokenize("  \tx"), Err(LexError::MixedIndentation { .. })));
    }

    #[test]
    fn newline_terminates_logical_line() {
        assert_eq!(kinds("x\ny"), vec![
            Token::Identifier(Symbol::intern("x")),
            Token::Newline,
            Token::Identifier(Symbol::intern("y")),
            Token::Eof,
        ]);
    }
}
