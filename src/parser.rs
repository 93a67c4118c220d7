use crate::error::{GrammarError, ParseError};
use crate::grammar::Grammar;
use crate::token::Token;

mod config;
mod sets;
mod state;
mod table;
mod token_set;
mod trace;

pub use config::ParserConfig;
pub use sets::{FirstSet, Sets};
pub use table::ParseTable;
pub use token_set::TokenSet;

use state::ParserState;

/// Outcome of one parse call. Parse failures are reported here rather than
/// returned as `Err`, so the trace up to the failure stays available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
  pub success: bool,
  pub trace: String,
  pub error: Option<ParseError>,
}

/// Table-driven LL(1) parser. The grammar, its sets and the prediction
/// table are built once here and only read by [`Parser::parse`].
#[derive(Debug, Clone)]
pub struct Parser {
  grammar: Grammar,
  sets: Sets,
  table: ParseTable,
  config: ParserConfig,
}

impl Parser {
  /// Parser for the built-in C subset with the default configuration.
  pub fn new() -> Result<Self, GrammarError> {
    Self::with_grammar(Grammar::c_subset(), ParserConfig::default())
  }

  pub fn with_grammar(
    grammar: Grammar,
    config: ParserConfig,
  ) -> Result<Self, GrammarError> {
    let sets = Sets::compute(&grammar);
    let table = ParseTable::build(&grammar, &sets)?;
    log::debug!("built LL(1) parser: {} productions, {} table cells",
      grammar.productions().len(), table.len());

    Ok(Parser {
      grammar,
      sets,
      table,
      config,
    })
  }

  /// Runs the predictive automaton over `tokens`, which should end with an
  /// `Eof` token. Past the last token the lookahead is an implicit `Eof`.
  pub fn parse(&self, tokens: &[Token]) -> ParseResult {
    if tokens.is_empty() {
      return ParseResult {
        success: false,
        trace: trace::Trace::new().into_string(),
        error: Some(ParseError::EmptyInput),
      };
    }

    ParserState::new(tokens, &self.grammar)
      .run(&self.grammar, &self.table, &self.config)
  }

  pub fn grammar(&self) -> &Grammar {
    &self.grammar
  }

  pub fn sets(&self) -> &Sets {
    &self.sets
  }

  pub fn table(&self) -> &ParseTable {
    &self.table
  }

  pub fn config(&self) -> &ParserConfig {
    &self.config
  }
}
