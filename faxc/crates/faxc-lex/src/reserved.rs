//! The reserved-token table and its two lookups: keyword lookup (exact
//! identifier match) and the maximal-munch operator recognizer.
//!
//! The table is authored as three lexeme-sorted arrays — general keywords,
//! contract keywords, operators — mirroring the three-array layout the
//! tokenizer conceptually concatenates into one `allTokens` table. Keeping
//! them separate arrays (rather than one combined sorted array) matches
//! how they're used: keyword lookup never needs to scan the operator
//! array, and the operator recognizer never needs to scan the keyword
//! arrays, since operator lexemes can never start with a letter or `_`.

use crate::token::ReservedToken;
use static_assertions::const_assert;
use ReservedToken::*;

/// Lexeme-sorted general keywords, including the word-spelled logical and
/// membership operators (`and`, `or`, `not`, `is`, `in`) since they are
/// identifier-shaped and therefore go through keyword lookup, not the
/// operator recognizer.
pub const GENERAL_KEYWORDS: &[(&str, ReservedToken)] = &[
    ("False", False),
    ("None", None),
    ("True", True),
    ("and", And),
    ("assert", Assert),
    ("async", Async),
    ("await", Await),
    ("break", Break),
    ("class", Class),
    ("continue", Continue),
    ("def", Def),
    ("del", Del),
    ("elif", Elif),
    ("else", Else),
    ("except", Except),
    ("finally", Finally),
    ("for", For),
    ("global", Global),
    ("if", If),
    ("import", Import),
    ("in", In),
    ("is", Is),
    ("lambda", Lambda),
    ("let", Let),
    ("nonlocal", Nonlocal),
    ("not", Not),
    ("or", Or),
    ("pass", Pass),
    ("raise", Raise),
    ("return", Return),
    ("try", Try),
    ("while", While),
    ("with", With),
    ("yield", Yield),
];

/// Lexeme-sorted contract keywords.
pub const CONTRACT_KEYWORDS: &[(&str, ReservedToken)] = &[
    ("contract", Contract),
    ("emit", Emit),
    ("event", Event),
    ("payable", Payable),
    ("private", Private),
    ("public", Public),
    ("view", View),
];

/// Lexeme-sorted built-in type names. Kept as a separate array from
/// keywords because the parser treats them as leaf type tokens, not
/// statement keywords, even though lookup uses the same identifier path.
pub const TYPE_NAMES: &[(&str, ReservedToken)] = &[
    ("address", Address),
    ("bool", Bool),
    ("i16", I16),
    ("i32", I32),
    ("i64", I64),
    ("i8", I8),
    ("num", Num),
    ("str", Str),
    ("u16", U16),
    ("u32", U32),
    ("u64", U64),
    ("u8", U8),
];

/// Lexeme-sorted symbol operators and punctuation, longest-prefix first
/// within any shared prefix group (ensured by plain lexicographic sort,
/// since e.g. `"**"` < `"**="` < `"*="`... actually lexicographic order is
/// independent of length; maximal munch is handled by the recognizer
/// below, not by array order).
pub const OPERATORS: &[(&str, ReservedToken)] = &[
    ("!=", Ne),
    ("%", Mod),
    ("%=", ModAssign),
    ("&", BitAnd),
    ("&=", BitAndAssign),
    ("(", LParen),
    (")", RParen),
    ("*", Mul),
    ("**", Exp),
    ("**=", ExpAssign),
    ("*=", MulAssign),
    ("+", Add),
    ("+=", AddAssign),
    (",", Comma),
    ("-", Sub),
    ("-=", SubAssign),
    ("->", Arrow),
    (".", Dot),
    ("/", Div),
    ("//", FloorDiv),
    ("//=", FloorDivAssign),
    ("/=", DivAssign),
    (":", Colon),
    ("<", Lt),
    ("<<", Shl),
    ("<<=", ShlAssign),
    ("<=", Le),
    ("=", Assign),
    ("==", Eq),
    (">", Gt),
    (">=", Ge),
    (">>", Shr),
    (">>=", ShrAssign),
    ("[", LBracket),
    ("]", RBracket),
    ("^", BitXor),
    ("^=", BitXorAssign),
    ("|", BitOr),
    ("|=", BitOrAssign),
    ("~", BitNot),
];

const fn is_sorted(table: &[(&str, ReservedToken)]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if !str_lt_or_eq(table[i - 1].0, table[i].0) {
            return false;
        }
        i += 1;
    }
    true
}

const fn str_lt_or_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
        i += 1;
    }
    a.len() <= b.len()
}

const_assert!(is_sorted(GENERAL_KEYWORDS));
const_assert!(is_sorted(CONTRACT_KEYWORDS));
const_assert!(is_sorted(TYPE_NAMES));
const_assert!(is_sorted(OPERATORS));

/// Every reserved lexeme the tables together define. `ReservedToken::Count`
/// is the last variant, so its ordinal equals the number of variants before
/// it — every real token plus `Unknown` — hence the `- 1`.
const TOTAL_RESERVED_LEXEMES: usize =
    GENERAL_KEYWORDS.len() + CONTRACT_KEYWORDS.len() + TYPE_NAMES.len() + OPERATORS.len();

const_assert!(TOTAL_RESERVED_LEXEMES == ReservedToken::Count as usize - 1);

/// Look up an identifier-shaped lexeme against the keyword and type-name
/// arrays. Total: returns `Unknown` for any lexeme none of the arrays
/// contain.
pub fn get_keyword(lexeme: &str) -> ReservedToken {
    for table in [GENERAL_KEYWORDS, CONTRACT_KEYWORDS, TYPE_NAMES] {
        if let Ok(idx) = table.binary_search_by_key(&lexeme, |(lex, _)| lex) {
            return table[idx].1;
        }
    }
    Unknown
}

/// The canonical lexeme for a reserved token, or `None` for `Unknown`.
pub fn to_str(token: ReservedToken) -> Option<&'static str> {
    if token == Unknown {
        return Option::None;
    }
    for table in [GENERAL_KEYWORDS, CONTRACT_KEYWORDS, TYPE_NAMES, OPERATORS] {
        if let Some((lex, _)) = table.iter().find(|(_, t)| *t == token) {
            return Some(lex);
        }
    }
    Option::None
}

/// Maximal-munch operator recognition over a [`PushBack`](crate::pushback::PushBack)
/// stream: find the longest lexeme in [`OPERATORS`] prefixing the
/// remaining input, consume exactly that many characters, and push back
/// anything consumed beyond it.
///
/// Returns `Unknown` (with every consumed character pushed back) if no
/// operator lexeme prefixes the input at all.
pub fn read_operator(stream: &mut crate::pushback::PushBack<'_>) -> ReservedToken {
    let mut consumed: Vec<char> = Vec::new();
    let mut candidates: Vec<&(&str, ReservedToken)> = OPERATORS.iter().collect();
    let mut last_match: Option<usize> = None; // length of the longest match so far

    loop {
        let Some(c) = stream.pop() else { break };
        consumed.push(c);
        let i = consumed.len();

        candidates.retain(|(lexeme, _)| {
            lexeme.len() >= i && lexeme.as_bytes()[i - 1] == c as u8 && lexeme.is_char_boundary(i)
        });

        if candidates.is_empty() {
            break;
        }

        let prefix: String = consumed.iter().collect();
        if candidates.iter().any(|(lexeme, _)| *lexeme == prefix) {
            last_match = Some(i);
        }
    }

    // Push back everything beyond the recorded match, in reverse order.
    let keep = last_match.unwrap_or(0);
    for c in consumed[keep..].iter().rev() {
        stream.push(*c);
    }

    match last_match {
        Some(len) => {
            let prefix: String = consumed[..len].iter().collect();
            get_operator_token(&prefix)
        }
        None => Unknown,
    }
}

fn get_operator_token(lexeme: &str) -> ReservedToken {
    OPERATORS
        .iter()
        .find(|(lex, _)| *lex == lexeme)
        .map(|(_, t)| *t)
        .unwrap_or(Unknown)
}
