use crate::grammar::{Grammar, Nonterm, Production, Symbol};
use crate::token::TokenKind;
use super::token_set::TokenSet;

/// FIRST set of a nonterminal or of a symbol sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirstSet {
  pub terminals: TokenSet,
  /// whether the empty string is derivable
  pub nullable: bool,
}

impl FirstSet {
  /// Returns whether the set has changed.
  fn union_with(&mut self, other: &FirstSet) -> bool {
    let mut changed = self.terminals.union_with(&other.terminals);
    if other.nullable && !self.nullable {
      self.nullable = true;
      changed = true;
    }
    changed
  }
}

/// FIRST and FOLLOW sets of every nonterminal of a grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sets {
  first: Vec<FirstSet>,
  follow: Vec<TokenSet>,
}

impl Sets {
  pub fn compute(grammar: &Grammar) -> Self {
    let mut sets = Sets {
      first: vec![FirstSet::default(); Nonterm::ALL.len()],
      follow: vec![TokenSet::new(); Nonterm::ALL.len()],
    };

    let first_passes = sets.compute_first(grammar);
    let follow_passes = sets.compute_follow(grammar);
    log::debug!("FIRST closed after {} passes, FOLLOW after {} passes",
      first_passes, follow_passes);

    sets
  }

  pub fn first(&self, nonterm: Nonterm) -> &FirstSet {
    &self.first[nonterm.index()]
  }

  pub fn follow(&self, nonterm: Nonterm) -> &TokenSet {
    &self.follow[nonterm.index()]
  }

  /// FIRST of `seq[start..]`. A sequence whose every symbol is nullable,
  /// including the empty one, is nullable.
  pub fn first_of_sequence(&self, seq: &[Symbol], start: usize) -> FirstSet {
    let mut result = FirstSet::default();

    for sym in seq.iter().skip(start) {
      match *sym {
        Symbol::Term(kind) => {
          result.terminals.insert(kind);
          return result;
        }
        Symbol::Nonterm(nt) => {
          let first = &self.first[nt.index()];
          result.terminals.union_with(&first.terminals);
          if !first.nullable {
            return result;
          }
        }
      }
    }

    result.nullable = true;
    result
  }

  /// Terminals that select `prod` in the prediction table.
  pub fn directive_set(&self, prod: &Production) -> TokenSet {
    let first = self.first_of_sequence(&prod.rhs, 0);
    let mut directive = first.terminals;
    if first.nullable {
      directive.union_with(&self.follow[prod.lhs.index()]);
    }
    directive
  }

  /// Runs to a fixed point and returns the number of passes.
  pub(super) fn compute_first(&mut self, grammar: &Grammar) -> usize {
    let mut passes = 0;

    loop {
      passes += 1;
      let mut changed = false;
      for prod in grammar.productions() {
        // an epsilon production contributes an empty, nullable set
        let contribution = self.first_of_sequence(&prod.rhs, 0);
        changed |= self.first[prod.lhs.index()].union_with(&contribution);
      }
      if !changed {
        break;
      }
    }

    passes
  }

  /// Runs to a fixed point and returns the number of passes. Expects FIRST
  /// to be closed.
  pub(super) fn compute_follow(&mut self, grammar: &Grammar) -> usize {
    self.follow[grammar.start().index()].insert(TokenKind::Eof);
    let mut passes = 0;

    loop {
      passes += 1;
      let mut changed = false;
      for prod in grammar.productions() {
        for (i, sym) in prod.rhs.iter().enumerate() {
          let b = match *sym {
            Symbol::Nonterm(nt) => nt,
            Symbol::Term(_) => continue,
          };

          let beta = self.first_of_sequence(&prod.rhs, i + 1);
          changed |= self.follow[b.index()].union_with(&beta.terminals);

          if beta.nullable && b != prod.lhs {
            let lhs_follow = self.follow[prod.lhs.index()].clone();
            changed |= self.follow[b.index()].union_with(&lhs_follow);
          }
        }
      }
      if !changed {
        break;
      }
    }

    passes
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::token::TokenKind::*;
  use pretty_assertions::assert_eq;

  fn arith() -> Grammar {
    Grammar::parse(r#"
      Additive -> Multiplicative AdditiveTail
      AdditiveTail -> Plus Multiplicative AdditiveTail | ε
      Multiplicative -> Primary MultiplicativeTail
      MultiplicativeTail -> Star Primary MultiplicativeTail | ε
      Primary -> LParen Additive RParen | Identifier
    "#).unwrap()
  }

  fn terms(set: &TokenSet) -> Vec<TokenKind> {
    set.iter().collect()
  }

  #[test]
  fn arith_first() {
    let sets = Sets::compute(&arith());

    assert_eq!(terms(&sets.first(Nonterm::Additive).terminals), vec![Identifier, LParen]);
    assert!(!sets.first(Nonterm::Additive).nullable);
    assert_eq!(terms(&sets.first(Nonterm::AdditiveTail).terminals), vec![Plus]);
    assert!(sets.first(Nonterm::AdditiveTail).nullable);
    assert_eq!(terms(&sets.first(Nonterm::MultiplicativeTail).terminals), vec![Star]);
  }

  #[test]
  fn arith_follow() {
    let sets = Sets::compute(&arith());

    assert_eq!(terms(sets.follow(Nonterm::Additive)), vec![RParen, Eof]);
    assert_eq!(terms(sets.follow(Nonterm::AdditiveTail)), vec![RParen, Eof]);
    assert_eq!(terms(sets.follow(Nonterm::Multiplicative)), vec![RParen, Plus, Eof]);
    assert_eq!(terms(sets.follow(Nonterm::MultiplicativeTail)), vec![RParen, Plus, Eof]);
    assert_eq!(terms(sets.follow(Nonterm::Primary)), vec![RParen, Plus, Star, Eof]);
  }

  #[test]
  fn sequence_scan() {
    let grammar = arith();
    let sets = Sets::compute(&grammar);
    let rhs = &grammar.production(grammar.productions_of(Nonterm::Additive)[0]).rhs;

    let all = sets.first_of_sequence(rhs, 0);
    assert_eq!(terms(&all.terminals), vec![Identifier, LParen]);
    assert!(!all.nullable);

    let tail = sets.first_of_sequence(rhs, 1);
    assert_eq!(terms(&tail.terminals), vec![Plus]);
    assert!(tail.nullable);

    let past_end = sets.first_of_sequence(rhs, 2);
    assert!(past_end.terminals.is_empty());
    assert!(past_end.nullable);
  }

  #[test]
  fn c_subset_sets() {
    let sets = Sets::compute(&Grammar::c_subset());

    assert_eq!(terms(&sets.first(Nonterm::Expr).terminals), vec![
      Identifier, IntLiteral, DoubleLiteral, CharLiteral, LParen, Plus, Minus, Star, Not,
    ]);
    assert_eq!(terms(sets.follow(Nonterm::Expr)), vec![Semicolon, Comma, RParen]);
    assert_eq!(terms(sets.follow(Nonterm::Program)), vec![Eof]);
    assert_eq!(terms(sets.follow(Nonterm::DeclList)), vec![Eof]);

    let else_opt = sets.first(Nonterm::ElseOpt);
    assert_eq!(terms(&else_opt.terminals), vec![KwElse]);
    assert!(else_opt.nullable);
    assert!(sets.follow(Nonterm::ElseOpt).contains(KwElse));
  }

  #[test]
  fn start_follow_has_end_marker() {
    for grammar in vec![arith(), Grammar::c_subset()] {
      let sets = Sets::compute(&grammar);
      assert!(sets.follow(grammar.start()).contains(Eof));
    }
  }

  #[test]
  fn deterministic_and_idempotent() {
    let grammar = Grammar::c_subset();
    let sets = Sets::compute(&grammar);
    assert_eq!(Sets::compute(&grammar), sets);

    let mut again = sets.clone();
    assert_eq!(again.compute_first(&grammar), 1);
    assert_eq!(again.compute_follow(&grammar), 1);
    assert_eq!(again, sets);
  }
}
