//! Grammar-table compiler and table-driven LL(1) parser for a small C
//! subset.
//!
//! [`Parser::new`] builds FIRST/FOLLOW sets and a conflict-checked prediction
//! table for the built-in grammar once; [`Parser::parse`] then drives a stack
//! automaton over a token sequence and returns a step-by-step trace.

pub mod error;
pub mod grammar;
pub mod parser;
pub mod token;
mod bnf;

pub use error::{Conflict, GrammarError, ParseError};
pub use grammar::Grammar;
pub use parser::{ParseResult, Parser, ParserConfig};
pub use token::{Token, TokenKind};

/// Builds a parser for `grammar` with the default configuration.
pub fn build(grammar: Grammar) -> Result<Parser, GrammarError> {
  Parser::with_grammar(grammar, ParserConfig::default())
}
