use crate::grammar::Symbol;
use crate::token::Token;

const HEADER: &str = "Step\tStack\tInput\tAction\n----\t-----\t-----\t------\n";

/// Tab-separated, one row per automaton step.
pub(super) struct Trace {
  buf: String,
}

impl Trace {
  pub(super) fn new() -> Self {
    Self {
      buf: HEADER.to_owned(),
    }
  }

  pub(super) fn row(
    &mut self,
    step: usize,
    stack: &str,
    input: &str,
    action: &str,
  ) {
    self.buf.push_str(&format!("{}\t{}\t{}\t{}\n", step, stack, input, action));
  }

  pub(super) fn into_string(self) -> String {
    self.buf
  }
}

/// Top of the stack first.
pub(super) fn render_stack(stack: &[Symbol], limit: usize) -> String {
  let shown = stack.iter()
    .rev()
    .take(limit)
    .map(|sym| sym.to_string())
    .collect::<Vec<_>>()
    .join(" ");
  if stack.len() > limit {
    format!("[{} ...]", shown)
  } else {
    format!("[{}]", shown)
  }
}

pub(super) fn render_input(tokens: &[Token], pos: usize, limit: usize) -> String {
  let rest = tokens.get(pos..).unwrap_or(&[]);
  let shown = rest.iter()
    .take(limit)
    .map(|tok| tok.to_string())
    .collect::<Vec<_>>()
    .join(" ");
  if rest.len() > limit {
    format!("[{} ...]", shown)
  } else {
    format!("[{}]", shown)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::grammar::{n, t, Nonterm};
  use crate::token::TokenKind;
  use pretty_assertions::assert_eq;

  #[test]
  fn stack_is_printed_top_first() {
    let stack = vec![t(TokenKind::Eof), n(Nonterm::DeclList), n(Nonterm::DeclAfterId)];
    assert_eq!(render_stack(&stack, 16), "[DeclAfterId DeclList Eof]");
    assert_eq!(render_stack(&stack, 2), "[DeclAfterId DeclList ...]");
    assert_eq!(render_stack(&[], 16), "[]");
  }

  #[test]
  fn input_preview_is_bounded() {
    let tokens = (1..=8)
      .map(|col| Token::new(TokenKind::Identifier, format!("v{}", col), 1, col))
      .collect::<Vec<_>>();

    assert_eq!(
      render_input(&tokens, 0, 6),
      "[Identifier(v1) Identifier(v2) Identifier(v3) Identifier(v4) Identifier(v5) Identifier(v6) ...]");
    assert_eq!(render_input(&tokens, 6, 6), "[Identifier(v7) Identifier(v8)]");
    assert_eq!(render_input(&tokens, 8, 6), "[]");
    assert_eq!(render_input(&tokens, 9, 6), "[]");
  }

  #[test]
  fn rows_follow_header() {
    let mut trace = Trace::new();
    trace.row(1, "[Program Eof]", "[Eof]", "Program -> DeclList");
    assert_eq!(
      trace.into_string(),
      "Step\tStack\tInput\tAction\n----\t-----\t-----\t------\n\
       1\t[Program Eof]\t[Eof]\tProgram -> DeclList\n");
  }
}
