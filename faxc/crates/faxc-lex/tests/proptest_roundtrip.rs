//! Property tests over the tokenizer's public surface.

use faxc_lex::reserved::{to_str, CONTRACT_KEYWORDS, GENERAL_KEYWORDS, OPERATORS, TYPE_NAMES};
use faxc_lex::{tokenize, Token};
use proptest::prelude::*;

fn all_lexemes() -> Vec<&'static str> {
    [GENERAL_KEYWORDS, CONTRACT_KEYWORDS, TYPE_NAMES, OPERATORS]
        .into_iter()
        .flat_map(|table| table.iter().map(|(lexeme, _)| *lexeme))
        .collect()
}

proptest! {
    /// Every reserved lexeme, tokenized on its own, round-trips back to the
    /// same lexeme through `reserved::to_str`.
    #[test]
    fn reserved_lexeme_round_trips(idx in 0..all_lexemes().len()) {
        let lexeme = all_lexemes()[idx];
        let tokens = tokenize(lexeme).expect("reserved lexemes always tokenize");
        let Token::Reserved(kind) = tokens[0].token else {
            panic!("expected a reserved token for lexeme {lexeme}");
        };
        prop_assert_eq!(to_str(kind), Some(lexeme));
    }

    /// Any sequence of ASCII identifier characters that doesn't collide
    /// with a reserved lexeme tokenizes as exactly one identifier (or
    /// reserved) token followed by Eof — never an error.
    #[test]
    fn ascii_identifier_never_errors(s in "[a-zA-Z_][a-zA-Z0-9_]{0,15}") {
        let tokens = tokenize(&s);
        prop_assert!(tokens.is_ok());
        let tokens = tokens.unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(matches!(tokens[1].token, Token::Eof));
    }

    /// Non-negative integers within u64 range always tokenize as a single
    /// integer literal.
    #[test]
    fn small_integers_tokenize_as_int(n in 0u64..1_000_000_000) {
        let source = n.to_string();
        let tokens = tokenize(&source).unwrap();
        match tokens[0].token {
            Token::Number(faxc_lex::NumberLiteral::Int(v)) => prop_assert_eq!(v, n),
            ref other => prop_assert!(false, "expected Int, got {other:?}"),
        }
    }
}
