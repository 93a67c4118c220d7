use crate::error::ParseError;
use crate::grammar::{Grammar, Symbol};
use crate::token::{Token, TokenKind};
use super::config::ParserConfig;
use super::table::ParseTable;
use super::trace::{render_input, render_stack, Trace};
use super::ParseResult;

/// State of a single parse call.
pub(super) struct ParserState<'a> {
  tokens: &'a [Token],
  /// lookahead once the cursor runs past the last token
  end: Token,
  /// top = next expected symbol
  stack: Vec<Symbol>,
  cursor: usize,
  step: usize,
  trace: Trace,
}

impl<'a> ParserState<'a> {
  /// `tokens` must not be empty.
  pub(super) fn new(tokens: &'a [Token], grammar: &Grammar) -> Self {
    let end = match tokens.last() {
      Some(last) => Token::eof(last.line, last.column),
      None => Token::eof(1, 1),
    };

    Self {
      tokens,
      end,
      stack: vec![Symbol::Term(TokenKind::Eof), Symbol::Nonterm(grammar.start())],
      cursor: 0,
      step: 0,
      trace: Trace::new(),
    }
  }

  fn lookahead(&self) -> &Token {
    self.tokens.get(self.cursor).unwrap_or(&self.end)
  }

  pub(super) fn run(
    mut self,
    grammar: &Grammar,
    table: &ParseTable,
    config: &ParserConfig,
  ) -> ParseResult {
    while let Some(&top) = self.stack.last() {
      if self.step == config.step_limit {
        return self.finish(Some(ParseError::StepLimitExceeded {
          limit: config.step_limit,
        }));
      }
      self.step += 1;

      let stack_text = render_stack(&self.stack, config.stack_preview);
      let input_text = render_input(self.tokens, self.cursor, config.input_preview);
      let lookahead = self.lookahead().kind;

      match top {
        Symbol::Term(expected) if expected == lookahead => {
          self.trace.row(self.step, &stack_text, &input_text,
            &format!("match {}", expected));
          self.stack.pop();
          self.cursor += 1;
        }
        Symbol::Term(expected) => {
          self.trace.row(self.step, &stack_text, &input_text, "ERROR");
          let found = self.lookahead().clone();
          return self.finish(Some(ParseError::UnexpectedTerminal {
            expected,
            line: found.line,
            column: found.column,
            found,
          }));
        }
        Symbol::Nonterm(nt) => {
          let prod = match table.get(nt, lookahead) {
            Some(id) => grammar.production(id),
            None => {
              self.trace.row(self.step, &stack_text, &input_text, "ERROR");
              let found = self.lookahead().clone();
              return self.finish(Some(ParseError::NoProduction {
                nonterm: nt,
                line: found.line,
                column: found.column,
                found,
                expected: table.expected(nt),
              }));
            }
          };

          self.trace.row(self.step, &stack_text, &input_text, &prod.to_string());
          self.stack.pop();
          self.stack.extend(prod.rhs.iter().rev());
        }
      }
    }

    // The end marker sits at the bottom of the stack, so the stack only
    // empties by matching it.
    self.finish(None)
  }

  fn finish(self, error: Option<ParseError>) -> ParseResult {
    if let Some(err) = &error {
      log::debug!("rejected after {} steps: {}", self.step, err);
    } else {
      log::debug!("accepted after {} steps", self.step);
    }

    ParseResult {
      success: error.is_none(),
      trace: self.trace.into_string(),
      error,
    }
  }
}
