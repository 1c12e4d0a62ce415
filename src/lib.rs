//! # minibasic
//!
//! Tokenizer and AST builder for a line-numbered BASIC dialect.
//!
//! Source text goes in one line at a time, a classified token stream and a
//! `program`-rooted syntax tree come out. Only `LET` assignments grow
//! statement nodes; the interesting part is the expression builder, which
//! shapes the operator tree by splicing nodes into place rather than with a
//! precedence table. See [`lang`] for the details.

pub mod lang;
