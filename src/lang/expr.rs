use super::ast::Label;
use super::parse::Cursor;
use super::token::{Literal, Token};
use super::tree::{NodeId, Tree};
use super::{Error, ErrorKind};
use tracing::trace;

/// Builds one expression subtree from the token cursor, left to right,
/// by restructuring the arena in place: each operator is spliced above the
/// operand already in position, and the remainder of the expression becomes
/// its right child. No precedence — every operator groups strictly
/// right-to-left, so `A + B + C` comes out as `+(A, +(B, C))`.
pub(crate) struct ExprBuilder<'a, 't> {
    cursor: &'a mut Cursor<'t>,
    tree: &'a mut Tree,
    open_parens: u32,
}

impl<'a, 't> ExprBuilder<'a, 't> {
    pub(crate) fn new(cursor: &'a mut Cursor<'t>, tree: &'a mut Tree) -> ExprBuilder<'a, 't> {
        ExprBuilder {
            cursor,
            tree,
            open_parens: 0,
        }
    }

    /// Build the expression under `parent` and return its top node.
    pub(crate) fn build(mut self, parent: NodeId) -> Result<NodeId, Error> {
        let node = self.expression(parent)?;
        debug_assert_eq!(self.open_parens, 0);
        Ok(node)
    }

    fn expression(&mut self, parent: NodeId) -> Result<NodeId, Error> {
        let operand = self.operand(parent)?;
        match self.cursor.peek() {
            Some(Token::Operator(op)) => {
                let op = *op;
                self.cursor.next();
                trace!(%op, "splicing operator");
                let node = self.tree.alloc(Some(Label::Op(op)));
                self.tree.insert_above(operand, node);
                self.expression(node)?;
                Ok(node)
            }
            _ => Ok(operand),
        }
    }

    fn operand(&mut self, parent: NodeId) -> Result<NodeId, Error> {
        match self.cursor.next() {
            Some(Token::Ident(name)) => Ok(self.leaf(parent, Label::Var(name.clone()))),
            Some(Token::Literal(Literal::Integer(s)))
            | Some(Token::Literal(Literal::Decimal(s))) => {
                Ok(self.leaf(parent, Label::Number(s.clone())))
            }
            Some(Token::Literal(Literal::String(s))) => {
                Ok(self.leaf(parent, Label::Str(s.clone())))
            }
            Some(Token::LParen) => self.group(parent),
            Some(_) => Err(Error::new(ErrorKind::ExpectedOperand)),
            None => Err(Error::new(ErrorKind::UnexpectedEndOfInput)),
        }
    }

    /// Parenthesized sub-expression. The group node exists only while the
    /// parentheses are open; it never receives a label, and the promote
    /// collapses it once the closing parenthesis is consumed.
    fn group(&mut self, parent: NodeId) -> Result<NodeId, Error> {
        self.open_parens += 1;
        let group = self.tree.alloc(None);
        self.tree.add_child(parent, group);
        let inner = self.expression(group)?;
        match self.cursor.next() {
            Some(Token::RParen) => self.open_parens -= 1,
            _ => return Err(Error::new(ErrorKind::ParenthesisMismatch)),
        }
        self.tree.promote(inner);
        Ok(inner)
    }

    fn leaf(&mut self, parent: NodeId, label: Label) -> NodeId {
        let leaf = self.tree.alloc(Some(label));
        self.tree.add_child(parent, leaf);
        leaf
    }
}
