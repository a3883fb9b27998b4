//! faxc-lex - lexical analysis.
//!
//! Turns source text into a flat stream of tokens: reserved keywords and
//! operators, identifiers, numeric and string literals, indentation
//! markers, and newlines. Indentation is turned into explicit `Indent`
//! tokens at this stage (one per unit of leading whitespace) rather than
//! being left for the parser to re-scan, the same way the tokenizer
//! collapses any other repeated lexical structure into a single token
//! kind.
//!
//! All failures are fatal: the lexer does not attempt error recovery or
//! resynchronization. A caller that wants partial results on error should
//! use [`Lexer`] directly and keep whatever tokens were produced before
//! the `Err`.

pub mod errors;
pub mod pushback;
pub mod reserved;
pub mod token;

mod lexer;

pub use errors::LexError;
pub use lexer::{tokenize, tokenize_with_file, Lexer};
pub use token::{NumberLiteral, ReservedToken, Token, TokenWithSpan};
