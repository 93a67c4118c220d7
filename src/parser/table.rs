use indexmap::IndexMap;
use crate::error::{Conflict, GrammarError};
use crate::grammar::{Grammar, Nonterm, ProdId, Production};
use crate::token::TokenKind;
use super::sets::Sets;
use super::token_set::TokenSet;

/// LL(1) prediction table: (nonterminal, lookahead) -> production.
#[derive(Debug, Clone)]
pub struct ParseTable {
  /// indexed by nonterminal
  rows: Vec<IndexMap<TokenKind, ProdId>>,
  resolved: Vec<Conflict>,
}

impl ParseTable {
  /// Fails with every hard conflict if the grammar is not LL(1). A cell
  /// claimed by one epsilon and one non-epsilon production goes to the
  /// non-epsilon one.
  pub fn build(grammar: &Grammar, sets: &Sets) -> Result<Self, GrammarError> {
    let mut table = ParseTable {
      rows: vec![IndexMap::new(); Nonterm::ALL.len()],
      resolved: vec![],
    };
    let mut conflicts = vec![];

    for prod in grammar.productions() {
      for lookahead in &sets.directive_set(prod) {
        if let Err(conflict) = table.insert(grammar, prod, lookahead) {
          conflicts.push(conflict);
        }
      }
    }

    if !conflicts.is_empty() {
      return Err(GrammarError::Conflicts(conflicts));
    }

    for conflict in &table.resolved {
      log::debug!("resolved {} in favor of the non-epsilon production", conflict);
    }
    log::debug!("prediction table has {} cells", table.len());

    Ok(table)
  }

  fn insert(
    &mut self,
    grammar: &Grammar,
    prod: &Production,
    lookahead: TokenKind,
  ) -> Result<(), Conflict> {
    let row = &mut self.rows[prod.lhs.index()];
    let existing = match row.get(&lookahead) {
      None => {
        row.insert(lookahead, prod.id);
        return Ok(());
      }
      Some(&existing) if existing == prod.id => return Ok(()),
      Some(&existing) => grammar.production(existing),
    };

    let conflict = Conflict {
      nonterm: prod.lhs,
      lookahead,
      existing: existing.id,
      incoming: prod.id,
      existing_text: existing.to_string(),
      incoming_text: prod.to_string(),
    };

    match (existing.is_epsilon(), prod.is_epsilon()) {
      (true, false) => {
        row.insert(lookahead, prod.id);
        self.resolved.push(conflict);
        Ok(())
      }
      (false, true) => {
        self.resolved.push(conflict);
        Ok(())
      }
      _ => Err(conflict),
    }
  }

  pub fn get(&self, nonterm: Nonterm, lookahead: TokenKind) -> Option<ProdId> {
    self.rows[nonterm.index()].get(&lookahead).copied()
  }

  /// Lookaheads with an entry in the row of `nonterm`, in `TokenKind` order.
  pub fn expected(&self, nonterm: Nonterm) -> Vec<TokenKind> {
    self.rows[nonterm.index()].keys()
      .copied()
      .collect::<TokenSet>()
      .iter()
      .collect()
  }

  /// Conflicts settled by preferring the non-epsilon production.
  pub fn resolved_conflicts(&self) -> &[Conflict] {
    &self.resolved
  }

  pub fn cells(&self) -> impl Iterator<Item = (Nonterm, TokenKind, ProdId)> + '_ {
    Nonterm::ALL.iter()
      .zip(&self.rows)
      .flat_map(|(&nt, row)| row.iter().map(move |(&kind, &prod)| (nt, kind, prod)))
  }

  /// Number of populated cells.
  pub fn len(&self) -> usize {
    self.rows.iter().map(|row| row.len()).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
