use super::ast::Label;
use super::expr::ExprBuilder;
use super::lex::lex;
use super::token::{Literal, Operator, Token, Word};
use super::tree::{NodeId, Tree};
use super::{Error, ErrorKind, LineNumber};
use tracing::trace;

/// Parse a whole source text, one statement per line.
///
/// Errors do not stop the run: each malformed line is recorded and parsing
/// resumes on the next one, so the returned tree holds every statement that
/// did parse.
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse(source: &str) -> Parsed {
    let mut parser = Parser::new();
    for line in source.lines() {
        parser.parse_line(line);
    }
    parser.finish()
}

/// Result of a parse run.
pub struct Parsed {
    /// Node arena; everything reachable from `program` is the AST.
    pub tree: Tree,
    /// The `program` root node.
    pub program: NodeId,
    /// Flat classified token stream for the whole source, in order.
    pub tokens: Vec<Token>,
    /// Identifiers in first-occurrence order.
    pub declared: Vec<String>,
    /// Errors, one per failed line.
    pub errors: Vec<Error>,
}

/// Cursor over one line's token stream with single-token lookahead,
/// shared between the statement parser and the expression builder.
pub(crate) struct Cursor<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Cursor<'a> {
        Cursor {
            token_stream: tokens.iter(),
            peeked: None,
        }
    }

    pub(crate) fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        self.token_stream.next()
    }

    pub(crate) fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.token_stream.next();
        }
        self.peeked
    }
}

pub struct Parser {
    tree: Tree,
    program: NodeId,
    tokens: Vec<Token>,
    declared: Vec<String>,
    errors: Vec<Error>,
    text_line: usize,
}

impl Parser {
    pub fn new() -> Parser {
        let mut tree = Tree::new();
        let program = tree.alloc(Some(Label::Program));
        Parser {
            tree,
            program,
            tokens: Vec::new(),
            declared: Vec::new(),
            errors: Vec::new(),
            text_line: 0,
        }
    }

    /// Feed one raw line. Blank lines are skipped; a failed line records an
    /// error and leaves the tree untouched.
    pub fn parse_line(&mut self, line: &str) {
        self.text_line += 1;
        let result = self.try_line(line);
        if let Err(e) = result {
            let e = if e.line_number().is_none() {
                e.in_line_number(Some(self.text_line.min(u16::MAX as usize) as u16))
            } else {
                e
            };
            trace!(error = %e, "line rejected");
            self.errors.push(e);
        }
    }

    pub fn finish(self) -> Parsed {
        Parsed {
            tree: self.tree,
            program: self.program,
            tokens: self.tokens,
            declared: self.declared,
            errors: self.errors,
        }
    }

    fn try_line(&mut self, line: &str) -> Result<(), Error> {
        let tokens = lex(line)?;
        if tokens.is_empty() {
            return Ok(());
        }
        self.tokens.extend(tokens.iter().cloned());
        let mut cursor = Cursor::new(&tokens);
        let line_number = Self::line_number(&mut cursor)?;
        self.statement(&mut cursor, line_number)
            .map_err(|e| e.in_line_number(Some(line_number)))
    }

    /// The first token of every line must parse as a line number.
    fn line_number(cursor: &mut Cursor) -> Result<u16, Error> {
        match cursor.next() {
            Some(Token::Literal(Literal::Integer(s))) => s
                .parse::<u16>()
                .map_err(|_| Error::new(ErrorKind::InvalidLineNumber)),
            _ => Err(Error::new(ErrorKind::InvalidLineNumber)),
        }
    }

    /// Dispatch on the keyword after the line number. Only assignment is
    /// parsed; every other recognized statement word is a deliberate no-op.
    fn statement(&mut self, cursor: &mut Cursor, line_number: u16) -> Result<(), Error> {
        match cursor.peek() {
            None => Ok(()),
            Some(Token::Word(Word::Let)) => {
                cursor.next();
                self.assignment(cursor, line_number)
            }
            // LET is optional when the target identifier comes first
            Some(Token::Ident(_)) => self.assignment(cursor, line_number),
            Some(Token::Word(word)) => {
                trace!(%word, "statement kind not parsed");
                Ok(())
            }
            Some(_) => Err(Error::new(ErrorKind::UnexpectedToken)),
        }
    }

    /// `identifier = expression`. The assign node is built detached and
    /// attached under the program root only once the whole statement has
    /// parsed, so a failure leaves no partial nodes behind.
    fn assignment(&mut self, cursor: &mut Cursor, line_number: u16) -> Result<(), Error> {
        let name = match cursor.next() {
            Some(Token::Ident(name)) => name.clone(),
            Some(_) => return Err(Error::new(ErrorKind::ExpectedIdentifier)),
            None => return Err(Error::new(ErrorKind::UnexpectedEndOfInput)),
        };
        if !self.declared.contains(&name) {
            self.declared.push(name.clone());
        }
        match cursor.next() {
            Some(Token::Operator(Operator::Equal)) => {}
            Some(_) => return Err(Error::new(ErrorKind::ExpectedEqualsSign)),
            None => return Err(Error::new(ErrorKind::UnexpectedEndOfInput)),
        }
        let assign = self.tree.alloc(Some(Label::Assign));
        self.tree.set_line_number(assign, Some(line_number));
        let var = self.tree.alloc(Some(Label::Var(name)));
        self.tree.add_child(assign, var);
        ExprBuilder::new(cursor, &mut self.tree).build(assign)?;
        match cursor.next() {
            None => {}
            Some(Token::RParen) => return Err(Error::new(ErrorKind::ParenthesisMismatch)),
            Some(_) => return Err(Error::new(ErrorKind::UnexpectedToken)),
        }
        trace!(line_number, "statement parsed");
        self.tree.add_child(self.program, assign);
        Ok(())
    }
}

impl Default for Parser {
    fn default() -> Parser {
        Parser::new()
    }
}
