/*!
# BASIC Language Module

Lexical analysis and parsing of line-numbered BASIC source: one statement
per line, a line number first, then a keyword. `LET` assignments are parsed
into an expression tree; the remaining statement words are recognized but
not parsed.
*/

mod error;
mod expr;
mod lex;
mod parse;
mod tree;

pub mod ast;
pub mod token;

pub use error::{Error, ErrorKind};
pub use lex::lex;
pub use parse::{parse, Parsed, Parser};
pub use tree::{NodeId, Tree};

/// BASIC line number; `None` until one has been read.
pub type LineNumber = Option<u16>;
