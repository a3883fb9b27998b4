//! The parser: a Pratt (precedence-climbing) engine for expressions,
//! interleaved with recursive-descent handlers for the constructs that
//! aren't pure expressions (`if`/`elif`/`else`, `while`, `def`, `let`,
//! `contract`) and with indentation-scoped body parsing.
//!
//! This plays the role the source's two-stack shunting-yard engine did,
//! with the Rust call stack standing in for the explicit operator stack.

use crate::ast::{Leaf, Node, NodeKind};
use crate::cursor::TokenCursor;
use crate::errors::ParseError;
use crate::precedence::{self, Assoc};
use faxc_lex::{reserved, NumberLiteral, ReservedToken, Token, TokenWithSpan};
use faxc_util::{Span, Symbol, TypeInterner};

/// The loosest precedence group; passed as `min_group` wherever a full
/// expression (including assignment) is allowed.
const MAX_GROUP: u8 = 16;

pub struct Parser<'a> {
    cursor: TokenCursor<'a>,
    types: &'a TypeInterner,
}

fn span_between(a: Span, b: Span) -> Span {
    Span { start: a.start, end: b.end, line: a.line, column: a.column, file_id: a.file_id }
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [TokenWithSpan], types: &'a TypeInterner) -> Self {
        Self { cursor: TokenCursor::new(tokens), types }
    }

    pub fn parse_module(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.peek().span;
        let children = self.parse_body(0)?;
        Ok(Node::internal(NodeKind::ModuleDefinition, children, start))
    }

    /// Parse statements at indentation level `level` until a line with
    /// lower indentation (or end-of-file) is found; rewinds to the start
    /// of that line before returning.
    fn parse_body(&mut self, level: u32) -> Result<Vec<Node>, ParseError> {
        let mut stmts = Vec::new();
        loop {
            let line_start = self.cursor.checkpoint();
            let mut indent = 0u32;
            while matches!(self.cursor.peek().token, Token::Indent) {
                self.cursor.bump();
                indent += 1;
            }
            if matches!(self.cursor.peek().token, Token::Newline) {
                self.cursor.bump();
                continue;
            }
            if matches!(self.cursor.peek().token, Token::Eof) || indent < level {
                self.cursor.restore(line_start);
                break;
            }
            let stmt = self.parse_statement(level)?;
            stmts.push(stmt);
        }
        Ok(stmts)
    }

    fn parse_statement(&mut self, level: u32) -> Result<Node, ParseError> {
        self.parse_expr(level, MAX_GROUP)
    }

    fn parse_expr(&mut self, level: u32, min_group: u8) -> Result<Node, ParseError> {
        let prefix = self.parse_prefix(level)?;
        let mut lhs = self.parse_postfix_chain(level, prefix)?;

        while let Some((kind, ntoks)) = self.peek_infix() {
            let group = precedence::group(kind);
            if group > min_group {
                break;
            }
            let op_span = self.cursor.peek().span;
            for _ in 0..ntoks {
                self.cursor.bump();
            }
            let next_min = match precedence::assoc(kind) {
                Assoc::Left => group.saturating_sub(1),
                Assoc::Right => group,
            };
            let rhs = self.parse_expr(level, next_min)?;
            let span = span_between(lhs.span(), rhs.span());
            let _ = op_span;
            lhs = Node::internal(kind, vec![lhs, rhs], span);
        }

        Ok(lhs)
    }

    fn peek_infix(&mut self) -> Option<(NodeKind, u8)> {
        use NodeKind as K;
        use ReservedToken as R;
        let r = match self.cursor.peek().token {
            Token::Reserved(r) => r,
            _ => return None,
        };
        Some(match r {
            R::Add => (K::Addition, 1),
            R::Sub => (K::Subtraction, 1),
            R::Mul => (K::Multiplication, 1),
            R::Div => (K::Division, 1),
            R::FloorDiv => (K::FloorDivision, 1),
            R::Mod => (K::Modulus, 1),
            R::Exp => (K::Exponent, 1),
            R::BitAnd => (K::BitwiseAnd, 1),
            R::BitOr => (K::BitwiseOr, 1),
            R::BitXor => (K::BitwiseXor, 1),
            R::Shl => (K::BitwiseLeftShift, 1),
            R::Shr => (K::BitwiseRightShift, 1),
            R::Eq => (K::Equality, 1),
            R::Ne => (K::Inequality, 1),
            R::Gt => (K::GreaterThan, 1),
            R::Ge => (K::GreaterThanEqual, 1),
            R::Lt => (K::LessThan, 1),
            R::Le => (K::LessThanEqual, 1),
            R::And => (K::LogicalAnd, 1),
            R::Or => (K::LogicalOr, 1),
            R::Is if matches!(self.cursor.peek_second().token, Token::Reserved(R::Not)) => {
                (K::IsNotIdentical, 2)
            }
            R::Is => (K::IsIdentical, 1),
            R::In => (K::IsMemberOf, 1),
            R::Not if matches!(self.cursor.peek_second().token, Token::Reserved(R::In)) => {
                (K::IsNotMemberOf, 2)
            }
            R::Assign => (K::Assign, 1),
            R::AddAssign => (K::AddAssign, 1),
            R::SubAssign => (K::SubAssign, 1),
            R::MulAssign => (K::MulAssign, 1),
            R::DivAssign => (K::DivAssign, 1),
            R::FloorDivAssign => (K::FloorDivAssign, 1),
            R::ModAssign => (K::ModAssign, 1),
            R::ExpAssign => (K::ExpAssign, 1),
            R::ShlAssign => (K::ShlAssign, 1),
            R::ShrAssign => (K::ShrAssign, 1),
            R::BitAndAssign => (K::BitAndAssign, 1),
            R::BitOrAssign => (K::BitOrAssign, 1),
            R::BitXorAssign => (K::BitXorAssign, 1),
            _ => return None,
        })
    }

    fn parse_prefix(&mut self, level: u32) -> Result<Node, ParseError> {
        let tok = self.cursor.peek().clone();
        match tok.token {
            Token::Number(n) => {
                self.cursor.bump();
                Ok(Node::leaf(Leaf::Number(n), tok.span))
            }
            Token::Str(s) => {
                self.cursor.bump();
                Ok(Node::leaf(Leaf::Str(s), tok.span))
            }
            Token::Identifier(sym) => {
                self.cursor.bump();
                if matches!(self.cursor.peek().token, Token::Reserved(ReservedToken::LParen)) {
                    self.cursor.bump();
                    let args = self.parse_call_args(level)?;
                    let rparen = self.expect_reserved(ReservedToken::RParen)?;
                    let mut children = vec![Node::leaf(Leaf::Ident(sym), tok.span)];
                    children.extend(args);
                    Ok(Node::internal(NodeKind::Call, children, span_between(tok.span, rparen)))
                } else {
                    Ok(Node::leaf(Leaf::Ident(sym), tok.span))
                }
            }
            Token::Reserved(r) => self.parse_reserved_prefix(level, r, tok.span),
            Token::Indent => Err(ParseError::UnexpectedOperand { span: tok.span }),
            Token::Newline | Token::Eof => Err(ParseError::ExpectingOperand { span: tok.span }),
        }
    }

    fn parse_reserved_prefix(
        &mut self,
        level: u32,
        r: ReservedToken,
        span: Span,
    ) -> Result<Node, ParseError> {
        use ReservedToken::*;
        match r {
            True => {
                self.cursor.bump();
                Ok(Node::leaf(Leaf::Bool(true), span))
            }
            False => {
                self.cursor.bump();
                Ok(Node::leaf(Leaf::Bool(false), span))
            }
            None => {
                self.cursor.bump();
                Ok(Node::leaf(Leaf::None, span))
            }
            Address | Bool | Num | Str | I8 | I16 | I32 | I64 | U8 | U16 | U32 | U64 => {
                self.parse_type()
            }
            LParen => {
                self.cursor.bump();
                let inner = self.parse_expr(level, MAX_GROUP)?;
                let rparen = self.expect_reserved(RParen)?;
                Ok(Node::internal(NodeKind::Parentheses, vec![inner], span_between(span, rparen)))
            }
            Add => {
                self.cursor.bump();
                let operand = self.parse_expr(level, precedence::group(NodeKind::UnaryPlus))?;
                let s = span_between(span, operand.span());
                Ok(Node::internal(NodeKind::UnaryPlus, vec![operand], s))
            }
            Sub => {
                self.cursor.bump();
                let operand = self.parse_expr(level, precedence::group(NodeKind::UnaryMinus))?;
                let s = span_between(span, operand.span());
                Ok(Node::internal(NodeKind::UnaryMinus, vec![operand], s))
            }
            BitNot => {
                self.cursor.bump();
                let operand = self.parse_expr(level, precedence::group(NodeKind::BitwiseNot))?;
                let s = span_between(span, operand.span());
                Ok(Node::internal(NodeKind::BitwiseNot, vec![operand], s))
            }
            Not => {
                self.cursor.bump();
                let operand = self.parse_expr(level, precedence::group(NodeKind::LogicalNot))?;
                let s = span_between(span, operand.span());
                Ok(Node::internal(NodeKind::LogicalNot, vec![operand], s))
            }
            Pass => {
                self.cursor.bump();
                Ok(Node::internal(NodeKind::StatementPass, vec![], span))
            }
            Return => {
                self.cursor.bump();
                let value = self.parse_expr(level, MAX_GROUP)?;
                let s = span_between(span, value.span());
                Ok(Node::internal(NodeKind::StatementReturn, vec![value], s))
            }
            Assert => {
                self.cursor.bump();
                let value = self.parse_expr(level, MAX_GROUP)?;
                let s = span_between(span, value.span());
                Ok(Node::internal(NodeKind::StatementAssert, vec![value], s))
            }
            Import => self.parse_import(span),
            Let => self.parse_let(level, span),
            If => self.parse_if_or_elif(level, NodeKind::StatementIf, span),
            While => self.parse_while(level, span),
            Def => self.parse_def(level, span),
            Contract => self.parse_contract(level, span),
            _ => Err(ParseError::InvalidOperator { span }),
        }
    }

    fn parse_postfix_chain(&mut self, level: u32, mut lhs: Node) -> Result<Node, ParseError> {
        loop {
            match self.cursor.peek().token {
                Token::Reserved(ReservedToken::LBracket) => {
                    self.cursor.bump();
                    let inner = self.parse_expr(level, MAX_GROUP)?;
                    let rbracket = self.expect_reserved(ReservedToken::RBracket)?;
                    let s = span_between(lhs.span(), rbracket);
                    lhs = Node::internal(NodeKind::Index, vec![lhs, inner], s);
                }
                Token::Reserved(ReservedToken::Dot) => {
                    self.cursor.bump();
                    let (name, nsp) = self.expect_identifier()?;
                    let name_leaf = Node::leaf(Leaf::Ident(name), nsp);
                    if matches!(self.cursor.peek().token, Token::Reserved(ReservedToken::LParen)) {
                        self.cursor.bump();
                        let args = self.parse_call_args(level)?;
                        let rparen = self.expect_reserved(ReservedToken::RParen)?;
                        let mut children = vec![lhs.clone(), name_leaf];
                        children.extend(args);
                        let s = span_between(lhs.span(), rparen);
                        lhs = Node::internal(NodeKind::MemberCall, children, s);
                    } else {
                        let s = span_between(lhs.span(), nsp);
                        lhs = Node::internal(NodeKind::Index, vec![lhs, name_leaf], s);
                    }
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    fn parse_call_args(&mut self, level: u32) -> Result<Vec<Node>, ParseError> {
        let mut args = Vec::new();
        if matches!(self.cursor.peek().token, Token::Reserved(ReservedToken::RParen)) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr(level, MAX_GROUP)?);
            if matches!(self.cursor.peek().token, Token::Reserved(ReservedToken::Comma)) {
                self.cursor.bump();
                continue;
            }
            break;
        }
        Ok(args)
    }

    fn parse_import(&mut self, start: Span) -> Result<Node, ParseError> {
        self.cursor.bump(); // 'import'
        let (first, fsp) = self.expect_identifier()?;
        let mut path = Node::leaf(Leaf::Ident(first), fsp);
        while matches!(self.cursor.peek().token, Token::Reserved(ReservedToken::Dot)) {
            self.cursor.bump();
            let (seg, ssp) = self.expect_identifier()?;
            let seg_leaf = Node::leaf(Leaf::Ident(seg), ssp);
            let s = span_between(path.span(), ssp);
            path = Node::internal(NodeKind::Index, vec![path, seg_leaf], s);
        }
        let s = span_between(start, path.span());
        Ok(Node::internal(NodeKind::StatementImport, vec![path], s))
    }

    fn parse_let(&mut self, level: u32, start: Span) -> Result<Node, ParseError> {
        self.cursor.bump(); // 'let'
        let (name, nsp) = self.expect_identifier()?;
        let mut children = vec![Node::leaf(Leaf::Ident(name), nsp)];
        let mut end = nsp;

        if matches!(self.cursor.peek().token, Token::Reserved(ReservedToken::Colon)) {
            self.cursor.bump();
            let ty = self.parse_type()?;
            end = ty.span();
            children.push(ty);
        }
        if matches!(self.cursor.peek().token, Token::Reserved(ReservedToken::Assign)) {
            self.cursor.bump();
            let init = self.parse_expr(level, MAX_GROUP)?;
            end = init.span();
            children.push(init);
        }

        if children.len() < 2 {
            return Err(ParseError::WrongOperandCount {
                expected: 2,
                got: children.len(),
                span: self.cursor.peek().span,
            });
        }
        Ok(Node::internal(NodeKind::VariableDefinition, children, span_between(start, end)))
    }

    fn parse_type(&mut self) -> Result<Node, ParseError> {
        let tok = self.cursor.peek().clone();
        if let Token::Reserved(r) = tok.token {
            if let Some(name) = reserved::to_str(r) {
                if let Some(handle) = self.types.get(name) {
                    self.cursor.bump();
                    return Ok(Node::leaf(Leaf::Type(handle), tok.span));
                }
            }
        }
        Err(ParseError::ExpectingToken { expected: "type name", span: tok.span })
    }

    fn parse_if_or_elif(
        &mut self,
        level: u32,
        kind: NodeKind,
        start: Span,
    ) -> Result<Node, ParseError> {
        self.cursor.bump(); // 'if' or 'elif'
        let cond = self.parse_expr(level, MAX_GROUP)?;
        self.expect_reserved(ReservedToken::Colon)?;
        self.expect_line_end()?;
        let body = self.parse_body(level + 1)?;
        if body.is_empty() {
            return Err(ParseError::ExpectingOperand { span: self.cursor.peek().span });
        }
        let mut children = vec![cond];
        children.extend(body);
        if let Some(tail) = self.maybe_parse_else_chain(level)? {
            children.push(tail);
        }
        Ok(Node::internal(kind, children, start))
    }

    fn maybe_parse_else_chain(&mut self, level: u32) -> Result<Option<Node>, ParseError> {
        let line_start = self.cursor.checkpoint();
        let mut indent = 0u32;
        while matches!(self.cursor.peek().token, Token::Indent) {
            self.cursor.bump();
            indent += 1;
        }
        if indent != level {
            self.cursor.restore(line_start);
            return Ok(None);
        }
        match self.cursor.peek().token {
            Token::Reserved(ReservedToken::Elif) => {
                let span = self.cursor.peek().span;
                Ok(Some(self.parse_if_or_elif(level, NodeKind::StatementElif, span)?))
            }
            Token::Reserved(ReservedToken::Else) => {
                let start = self.cursor.peek().span;
                self.cursor.bump();
                self.expect_reserved(ReservedToken::Colon)?;
                self.expect_line_end()?;
                let body = self.parse_body(level + 1)?;
                if body.is_empty() {
                    return Err(ParseError::ExpectingOperand { span: self.cursor.peek().span });
                }
                Ok(Some(Node::internal(NodeKind::StatementElse, body, start)))
            }
            _ => {
                self.cursor.restore(line_start);
                Ok(None)
            }
        }
    }

    fn parse_while(&mut self, level: u32, start: Span) -> Result<Node, ParseError> {
        self.cursor.bump(); // 'while'
        let cond = self.parse_expr(level, MAX_GROUP)?;
        self.expect_reserved(ReservedToken::Colon)?;
        self.expect_line_end()?;
        let body = self.parse_body(level + 1)?;
        if body.is_empty() {
            return Err(ParseError::ExpectingOperand { span: self.cursor.peek().span });
        }
        let mut children = vec![cond];
        children.extend(body);
        Ok(Node::internal(NodeKind::StatementWhile, children, start))
    }

    fn parse_def(&mut self, level: u32, start: Span) -> Result<Node, ParseError> {
        self.cursor.bump(); // 'def'
        let (name, nsp) = self.expect_identifier()?;
        self.expect_reserved(ReservedToken::LParen)?;

        let mut children = vec![Node::leaf(Leaf::Ident(name), nsp)];
        if !matches!(self.cursor.peek().token, Token::Reserved(ReservedToken::RParen)) {
            loop {
                let (pname, psp) = self.expect_identifier()?;
                let param = if pname.as_str() == "self"
                    && !matches!(self.cursor.peek().token, Token::Reserved(ReservedToken::Colon))
                {
                    let self_ty = self.types.get("Self").expect("Self is a pre-interned builtin");
                    Node::internal(
                        NodeKind::FunctionParameterDefinition,
                        vec![Node::leaf(Leaf::Ident(pname), psp), Node::leaf(Leaf::Type(self_ty), psp)],
                        psp,
                    )
                } else {
                    self.expect_reserved(ReservedToken::Colon)?;
                    let ty = self.parse_type()?;
                    let s = span_between(psp, ty.span());
                    Node::internal(
                        NodeKind::FunctionParameterDefinition,
                        vec![Node::leaf(Leaf::Ident(pname), psp), ty],
                        s,
                    )
                };
                children.push(param);
                if matches!(self.cursor.peek().token, Token::Reserved(ReservedToken::Comma)) {
                    self.cursor.bump();
                    continue;
                }
                break;
            }
        }
        self.expect_reserved(ReservedToken::RParen)?;

        if matches!(self.cursor.peek().token, Token::Reserved(ReservedToken::Arrow)) {
            self.cursor.bump();
            let ret_ty = self.parse_type()?;
            children.push(ret_ty);
        }

        self.expect_reserved(ReservedToken::Colon)?;
        self.expect_line_end()?;
        let body = self.parse_body(level + 1)?;
        if body.is_empty() {
            return Err(ParseError::ExpectingOperand { span: self.cursor.peek().span });
        }
        children.extend(body);
        Ok(Node::internal(NodeKind::FunctionDefinition, children, start))
    }

    fn parse_contract(&mut self, level: u32, start: Span) -> Result<Node, ParseError> {
        self.cursor.bump(); // 'contract'
        let (name, nsp) = self.expect_identifier()?;
        self.expect_reserved(ReservedToken::Colon)?;
        self.expect_line_end()?;
        let body = self.parse_body(level + 1)?;
        if body.is_empty() {
            return Err(ParseError::ExpectingOperand { span: self.cursor.peek().span });
        }
        let mut children = vec![Node::leaf(Leaf::Ident(name), nsp)];
        children.extend(body);
        Ok(Node::internal(NodeKind::ContractDefinition, children, start))
    }

    fn expect_identifier(&mut self) -> Result<(Symbol, Span), ParseError> {
        let tok = self.cursor.peek().clone();
        if let Token::Identifier(sym) = tok.token {
            self.cursor.bump();
            Ok((sym, tok.span))
        } else {
            Err(ParseError::ExpectingToken { expected: "identifier", span: tok.span })
        }
    }

    fn expect_reserved(&mut self, kind: ReservedToken) -> Result<Span, ParseError> {
        let tok = self.cursor.peek().clone();
        if matches!(tok.token, Token::Reserved(k) if k == kind) {
            self.cursor.bump();
            Ok(tok.span)
        } else {
            let expected = reserved::to_str(kind).unwrap_or("?");
            Err(ParseError::ExpectingToken { expected, span: tok.span })
        }
    }

    fn expect_line_end(&mut self) -> Result<(), ParseError> {
        match self.cursor.peek().token {
            Token::Newline => {
                self.cursor.bump();
                Ok(())
            }
            Token::Eof => Ok(()),
            _ => Err(ParseError::ExpectingToken { expected: "newline", span: self.cursor.peek().span }),
        }
    }
}

/// Parse a full module from `tokens`, producing the `ModuleDefinition` root.
pub fn parse(tokens: &[TokenWithSpan], types: &TypeInterner) -> Result<Node, ParseError> {
    Parser::new(tokens, types).parse_module()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_src(src: &str) -> Node {
        let types = TypeInterner::new();
        let tokens = faxc_lex::tokenize(src).expect("lex failed");
        parse(&tokens, &types).expect("parse failed")
    }

    fn try_parse_src(src: &str) -> Result<Node, ParseError> {
        let types = TypeInterner::new();
        let tokens = faxc_lex::tokenize(src).expect("lex failed");
        parse(&tokens, &types)
    }

    #[test]
    fn let_with_type_and_initializer() {
        let module = parse_src("let x: i32 = 1\n");
        let stmt = &module.children()[0];
        assert_eq!(stmt.kind(), Some(NodeKind::VariableDefinition));
        assert_eq!(stmt.children().len(), 3);
        assert!(matches!(
            &stmt.children()[1],
            Node::Leaf { value: Leaf::Type(_), .. }
        ));
    }

    #[test]
    fn bare_let_is_rejected() {
        let err = try_parse_src("let x\n").unwrap_err();
        assert!(matches!(err, ParseError::WrongOperandCount { expected: 2, got: 1, .. }));
    }

    #[test]
    fn if_elif_else_nests_into_one_tree() {
        let module = parse_src(
            "if a:\n    pass\nelif b:\n    pass\nelse:\n    pass\n",
        );
        let if_node = &module.children()[0];
        assert_eq!(if_node.kind(), Some(NodeKind::StatementIf));
        // cond, pass, elif-tail
        assert_eq!(if_node.children().len(), 3);
        let elif_node = &if_node.children()[2];
        assert_eq!(elif_node.kind(), Some(NodeKind::StatementElif));
        let else_node = &elif_node.children()[2];
        assert_eq!(else_node.kind(), Some(NodeKind::StatementElse));
    }

    #[test]
    fn function_with_self_and_typed_params() {
        let module =
            parse_src("def transfer(self, to: address, amount: u64) -> bool:\n    pass\n");
        let def_node = &module.children()[0];
        assert_eq!(def_node.kind(), Some(NodeKind::FunctionDefinition));
        // name, self, to, amount, return-type, pass
        assert_eq!(def_node.children().len(), 6);
        let self_param = &def_node.children()[1];
        assert_eq!(self_param.kind(), Some(NodeKind::FunctionParameterDefinition));
        assert!(matches!(
            &self_param.children()[1],
            Node::Leaf { value: Leaf::Type(_), .. }
        ));
    }

    #[test]
    fn call_preserves_argument_order() {
        let module = parse_src("f(a, b, c)\n");
        let call = &module.children()[0];
        assert_eq!(call.kind(), Some(NodeKind::Call));
        let names: Vec<_> = call.children()[1..]
            .iter()
            .map(|n| match n {
                Node::Leaf { value: Leaf::Ident(s), .. } => s.as_str(),
                _ => panic!("expected identifier leaf"),
            })
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn unary_minus_binds_tighter_than_binary_minus() {
        // `-a - b` is `(-a) - b`, not `-(a - b)`.
        let module = parse_src("-a - b\n");
        let top = &module.children()[0];
        assert_eq!(top.kind(), Some(NodeKind::Subtraction));
        assert_eq!(top.children()[0].kind(), Some(NodeKind::UnaryMinus));
    }

    #[test]
    fn unary_minus_binds_looser_than_exponent() {
        // `-a ** b` is `-(a ** b)`.
        let module = parse_src("-a ** b\n");
        let top = &module.children()[0];
        assert_eq!(top.kind(), Some(NodeKind::UnaryMinus));
        assert_eq!(top.children()[0].kind(), Some(NodeKind::Exponent));
    }

    #[test]
    fn missing_closing_paren_is_an_error() {
        let err = try_parse_src("f(a, b\n").unwrap_err();
        assert!(matches!(err, ParseError::ExpectingToken { expected: ")", .. }));
    }

    #[test]
    fn member_call_versus_dotted_index() {
        let module = parse_src("a.b.c(1)\n");
        let top = &module.children()[0];
        assert_eq!(top.kind(), Some(NodeKind::MemberCall));
        let receiver = &top.children()[0];
        assert_eq!(receiver.kind(), Some(NodeKind::Index));
    }

    #[test]
    fn import_folds_dotted_path_into_index_chain() {
        let module = parse_src("import a.b.c\n");
        let stmt = &module.children()[0];
        assert_eq!(stmt.kind(), Some(NodeKind::StatementImport));
        let path = &stmt.children()[0];
        assert_eq!(path.kind(), Some(NodeKind::Index));
    }

    #[test]
    fn while_loop_requires_a_nonempty_body() {
        let err = try_parse_src("while true:\nx\n").unwrap_err();
        assert!(matches!(err, ParseError::ExpectingOperand { .. }));
    }

    #[test]
    fn contract_definition_nests_members() {
        let module = parse_src("contract Token:\n    let total: u64\n");
        let contract = &module.children()[0];
        assert_eq!(contract.kind(), Some(NodeKind::ContractDefinition));
        assert_eq!(contract.children().len(), 2);
        assert_eq!(contract.children()[1].kind(), Some(NodeKind::VariableDefinition));
    }
}
