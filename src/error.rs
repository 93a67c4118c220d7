use std::fmt::{self, Display, Formatter};
use thiserror::Error;
use crate::grammar::{Nonterm, ProdId};
use crate::token::{Token, TokenKind};

/// Construction-time failure. A parser is never built from a grammar that
/// produced one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
  #[error("grammar has no productions")]
  Empty,

  #[error("start symbol {0} has no productions")]
  MissingStart(Nonterm),

  #[error("{nonterm} is used in `{production}` but has no productions")]
  Undefined {
    nonterm: Nonterm,
    production: String,
  },

  #[error("line {line}: {message}")]
  Bnf {
    line: usize,
    message: String,
  },

  #[error("grammar has unresolved conflicts\n{}", render_conflicts(.0))]
  Conflicts(Vec<Conflict>),
}

fn render_conflicts(conflicts: &[Conflict]) -> String {
  conflicts.iter()
    .map(|c| c.to_string())
    .collect::<Vec<_>>()
    .join("\n")
}

/// Two productions competing for the same table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
  pub nonterm: Nonterm,
  pub lookahead: TokenKind,
  /// production already in the cell
  pub existing: ProdId,
  pub incoming: ProdId,
  pub(crate) existing_text: String,
  pub(crate) incoming_text: String,
}

impl Display for Conflict {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "Conflict M[{},{}] between {} and {}",
      self.nonterm, self.lookahead, self.existing_text, self.incoming_text)
  }
}

/// Parse-time failure, reported through [`ParseResult`](crate::ParseResult)
/// together with the trace produced so far.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("empty token stream")]
  EmptyInput,

  #[error("expected {expected} but got {found} at line {line}, column {column}")]
  UnexpectedTerminal {
    expected: TokenKind,
    found: Token,
    line: u32,
    column: u32,
  },

  #[error("no rule for {nonterm} on lookahead {found} at line {line}, column {column}{}",
    render_expected(.expected))]
  NoProduction {
    nonterm: Nonterm,
    found: Token,
    line: u32,
    column: u32,
    /// terminals with a populated cell in the row of `nonterm`
    expected: Vec<TokenKind>,
  },

  /// The derivation did not finish within the configured step bound. This
  /// points at a defective table, not at a malformed program.
  #[error("exceeded step limit of {limit}")]
  StepLimitExceeded {
    limit: usize,
  },
}

fn render_expected(expected: &[TokenKind]) -> String {
  if expected.is_empty() {
    return String::new();
  }
  let names = expected.iter()
    .map(|kind| kind.name())
    .collect::<Vec<_>>()
    .join(", ");
  format!(" (expected one of: {})", names)
}

impl ParseError {
  pub fn is_syntax_error(&self) -> bool {
    match self {
      ParseError::UnexpectedTerminal { .. } | ParseError::NoProduction { .. } => true,
      ParseError::EmptyInput | ParseError::StepLimitExceeded { .. } => false,
    }
  }

  /// Position of the offending token, for syntax errors.
  pub fn position(&self) -> Option<(u32, u32)> {
    match *self {
      ParseError::UnexpectedTerminal { line, column, .. } |
      ParseError::NoProduction { line, column, .. } => Some((line, column)),
      ParseError::EmptyInput | ParseError::StepLimitExceeded { .. } => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn no_production_message() {
    let err = ParseError::NoProduction {
      nonterm: Nonterm::TypeSpec,
      found: Token::new(TokenKind::Identifier, "x", 2, 5),
      line: 2,
      column: 5,
      expected: vec![TokenKind::KwVoid, TokenKind::KwInt],
    };
    assert_eq!(
      err.to_string(),
      "no rule for TypeSpec on lookahead Identifier(x) at line 2, column 5 \
       (expected one of: kw_void, kw_int)");
    assert!(err.is_syntax_error());
    assert_eq!(err.position(), Some((2, 5)));
  }

  #[test]
  fn limit_is_not_a_syntax_error() {
    let err = ParseError::StepLimitExceeded { limit: 3 };
    assert_eq!(err.to_string(), "exceeded step limit of 3");
    assert!(!err.is_syntax_error());
    assert_eq!(err.position(), None);
    assert!(!ParseError::EmptyInput.is_syntax_error());
  }
}
