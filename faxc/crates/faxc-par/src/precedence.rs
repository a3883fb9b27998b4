//! The precedence, associativity, and arity table that drives the parser.
//!
//! Precedence groups run from 1 (`Call`, tightest) to 16 (statements and
//! definitions, loosest); lower numbers bind tighter. Every group is
//! left-associative except `Exponent`, which is right-associative.

use crate::ast::NodeKind;
use NodeKind::*;

/// How many children an internal node's kind requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    AtLeast(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// The precedence group of `kind`, 1 (tightest) through 16 (loosest).
///
/// Only kinds that actually participate in the binary/unary operator fold
/// are meaningful here; structural kinds (`ModuleDefinition`,
/// `FunctionDefinition`, ...) are parsed through dedicated handlers and
/// never compared by precedence, but are still assigned the loosest group
/// for completeness.
pub fn group(kind: NodeKind) -> u8 {
    match kind {
        Call => 1,
        Index | MemberCall => 2,
        Exponent => 3,
        UnaryPlus | UnaryMinus | BitwiseNot => 4,
        Multiplication | Division | FloorDivision | Modulus => 5,
        Addition | Subtraction => 6,
        BitwiseLeftShift | BitwiseRightShift => 7,
        BitwiseAnd => 8,
        BitwiseXor => 9,
        BitwiseOr => 10,
        Equality | Inequality | GreaterThan | GreaterThanEqual | LessThan | LessThanEqual
        | IsIdentical | IsNotIdentical | IsMemberOf | IsNotMemberOf => 11,
        LogicalNot => 12,
        LogicalAnd => 13,
        LogicalOr => 14,
        Assign | AddAssign | SubAssign | MulAssign | DivAssign | FloorDivAssign | ModAssign
        | ExpAssign | ShlAssign | ShrAssign | BitAndAssign | BitOrAssign | BitXorAssign => 15,
        ModuleDefinition
        | ContractDefinition
        | FunctionDefinition
        | FunctionParameterDefinition
        | VariableDefinition
        | StatementIf
        | StatementElif
        | StatementElse
        | StatementWhile
        | StatementPass
        | StatementReturn
        | StatementImport
        | StatementAssert
        | Parentheses => 16,
    }
}

pub fn assoc(kind: NodeKind) -> Assoc {
    match kind {
        Exponent => Assoc::Right,
        _ => Assoc::Left,
    }
}

/// The "higher-precedence" predicate from the spec: whether `lhs` should
/// be folded before `rhs` is allowed to claim the operand between them.
pub fn has_higher_precedence(lhs: NodeKind, rhs: NodeKind) -> bool {
    match assoc(lhs) {
        Assoc::Left => group(lhs) <= group(rhs),
        Assoc::Right => group(lhs) < group(rhs),
    }
}

/// The child-count contract for each kind.
pub fn arity(kind: NodeKind) -> Arity {
    match kind {
        // Unary operators.
        UnaryPlus | UnaryMinus | BitwiseNot | LogicalNot => Arity::Fixed(1),

        // Binary operators.
        Addition | Subtraction | Multiplication | Division | FloorDivision | Modulus
        | Exponent | BitwiseAnd | BitwiseOr | BitwiseXor | BitwiseLeftShift
        | BitwiseRightShift | Equality | Inequality | GreaterThan | GreaterThanEqual | LessThan
        | LessThanEqual | IsIdentical | IsNotIdentical | IsMemberOf | IsNotMemberOf
        | LogicalAnd | LogicalOr | Assign | AddAssign | SubAssign | MulAssign | DivAssign
        | FloorDivAssign | ModAssign | ExpAssign | ShlAssign | ShrAssign | BitAndAssign
        | BitOrAssign | BitXorAssign | Index => Arity::Fixed(2),

        Parentheses => Arity::Fixed(1),
        FunctionParameterDefinition => Arity::Fixed(2),
        StatementPass => Arity::Fixed(0),
        StatementReturn | StatementImport | StatementAssert => Arity::Fixed(1),

        // Variadic-minimum kinds.
        Call | ContractDefinition | FunctionDefinition | VariableDefinition | MemberCall => {
            Arity::AtLeast(1)
        }
        StatementIf | StatementWhile | StatementElif => Arity::AtLeast(2),
        StatementElse => Arity::AtLeast(1),
        ModuleDefinition => Arity::AtLeast(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_is_right_associative_and_binds_tighter_than_unary() {
        assert_eq!(assoc(Exponent), Assoc::Right);
        assert!(group(Exponent) < group(UnaryMinus));
    }

    #[test]
    fn left_associative_same_group_folds_left_first() {
        // `a - b - c`: Subtraction has higher precedence than itself under
        // the left-assoc rule, forcing `(a - b) - c`.
        assert!(has_higher_precedence(Subtraction, Subtraction));
    }

    #[test]
    fn right_associative_same_group_does_not_fold_left_first() {
        assert!(!has_higher_precedence(Exponent, Exponent));
    }

    #[test]
    fn call_binds_tighter_than_multiplication() {
        assert!(group(Call) < group(Multiplication));
    }

    #[test]
    fn bare_let_violates_variadic_minimum() {
        assert_eq!(arity(VariableDefinition), Arity::AtLeast(1));
    }
}
