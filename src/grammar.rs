use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use indexmap::IndexMap;
use crate::error::GrammarError;
use crate::token::TokenKind;

mod c_subset;

macro_rules! nonterms {
  ($($variant:ident,)*) => {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum Nonterm {
      $($variant,)*
    }

    impl Nonterm {
      pub const ALL: &'static [Nonterm] = &[$(Nonterm::$variant,)*];

      pub fn name(self) -> &'static str {
        match self {
          $(Nonterm::$variant => stringify!($variant),)*
        }
      }
    }

  };
}

nonterms! {
  Program,
  DeclList,
  Decl,
  TypeSpec,
  DeclAfterId,
  ParamClause,
  ParamList,
  ParamListTail,
  Param,
  ParamTypeSpec,
  CompoundStmt,
  LocalDecls,
  LocalDecl,
  LocalInitOpt,
  StmtList,
  Stmt,
  IfStmt,
  ElseOpt,
  WhileStmt,
  ForStmt,
  ExprOpt,
  ReturnStmt,
  ReturnExprOpt,
  ExprStmt,
  Expr,
  Assignment,
  AssignmentTail,
  LogicalOr,
  LogicalOrTail,
  LogicalAnd,
  LogicalAndTail,
  Equality,
  EqualityTail,
  Relational,
  RelationalTail,
  Additive,
  AdditiveTail,
  Multiplicative,
  MultiplicativeTail,
  Unary,
  UnaryOp,
  Primary,
  PrimaryAfterId,
  ArgListOpt,
  ArgListTail,
}

impl Nonterm {
  pub(crate) fn index(self) -> usize {
    self as usize
  }
}

impl FromStr for Nonterm {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, ()> {
    Nonterm::ALL.iter()
      .find(|nt| nt.name() == s)
      .copied()
      .ok_or(())
  }
}

impl Display for Nonterm {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
  Term(TokenKind),
  Nonterm(Nonterm),
}

impl Display for Symbol {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Symbol::Term(kind) => kind.fmt(f),
      Symbol::Nonterm(nt) => nt.fmt(f),
    }
  }
}

pub fn t(kind: TokenKind) -> Symbol {
  Symbol::Term(kind)
}

pub fn n(nonterm: Nonterm) -> Symbol {
  Symbol::Nonterm(nonterm)
}

/// Index of a production in [`Grammar::productions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProdId(pub u32);

impl ProdId {
  pub(crate) fn index(self) -> usize {
    self.0 as usize
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
  pub id: ProdId,
  pub lhs: Nonterm,
  /// empty => epsilon
  pub rhs: Vec<Symbol>,
}

impl Production {
  pub fn is_epsilon(&self) -> bool {
    self.rhs.is_empty()
  }
}

pub const EPSILON: &str = "ε";

impl Display for Production {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{} ->", self.lhs)?;
    if self.rhs.is_empty() {
      return write!(f, " {}", EPSILON);
    }
    for sym in &self.rhs {
      write!(f, " {}", sym)?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone)]
pub struct Grammar {
  start: Nonterm,
  prods: Vec<Production>,
  /// lhs -> production ids, in order of first appearance
  by_lhs: IndexMap<Nonterm, Vec<ProdId>>,
}

impl Grammar {
  pub fn new(
    start: Nonterm,
    rules: Vec<(Nonterm, Vec<Symbol>)>,
  ) -> Result<Self, GrammarError> {
    let grammar = Grammar::from_rules(start, rules);
    grammar.validate()?;
    Ok(grammar)
  }

  /// Builds without validating. Only for grammars known to be well formed.
  fn from_rules(
    start: Nonterm,
    rules: Vec<(Nonterm, Vec<Symbol>)>,
  ) -> Self {
    let prods = rules.into_iter()
      .enumerate()
      .map(|(i, (lhs, rhs))| Production {
        id: ProdId(i as u32),
        lhs,
        rhs,
      })
      .collect::<Vec<_>>();

    let mut by_lhs = IndexMap::<_, Vec<_>>::new();
    for prod in &prods {
      by_lhs.entry(prod.lhs).or_default().push(prod.id);
    }

    Grammar {
      start,
      prods,
      by_lhs,
    }
  }

  /// The built-in grammar for the C subset, starting at `Program`.
  pub fn c_subset() -> Self {
    Grammar::from_rules(Nonterm::Program, c_subset::rules())
  }

  fn validate(&self) -> Result<(), GrammarError> {
    if self.prods.is_empty() {
      return Err(GrammarError::Empty);
    }
    if !self.by_lhs.contains_key(&self.start) {
      return Err(GrammarError::MissingStart(self.start));
    }
    for prod in &self.prods {
      for sym in &prod.rhs {
        if let Symbol::Nonterm(nt) = *sym {
          if !self.by_lhs.contains_key(&nt) {
            return Err(GrammarError::Undefined {
              nonterm: nt,
              production: prod.to_string(),
            });
          }
        }
      }
    }
    Ok(())
  }

  pub fn start(&self) -> Nonterm {
    self.start
  }

  pub fn productions(&self) -> &[Production] {
    &self.prods
  }

  pub fn production(&self, id: ProdId) -> &Production {
    &self.prods[id.index()]
  }

  /// Empty if `nonterm` has no productions in this grammar.
  pub fn productions_of(&self, nonterm: Nonterm) -> &[ProdId] {
    match self.by_lhs.get(&nonterm) {
      Some(ids) => ids,
      None => &[],
    }
  }

  /// Nonterminals that have at least one production.
  pub fn nonterms(&self) -> impl Iterator<Item = Nonterm> + '_ {
    self.by_lhs.keys().copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use TokenKind::*;

  #[test]
  fn index_groups_productions_by_lhs() {
    let grammar = Grammar::new(Nonterm::ExprOpt, vec![
      (Nonterm::ExprOpt, vec![n(Nonterm::Expr)]),
      (Nonterm::Expr, vec![t(Identifier)]),
      (Nonterm::ExprOpt, vec![]),
    ]).unwrap();

    assert_eq!(grammar.productions_of(Nonterm::ExprOpt), &[ProdId(0), ProdId(2)]);
    assert_eq!(grammar.productions_of(Nonterm::Expr), &[ProdId(1)]);
    assert!(grammar.productions_of(Nonterm::Stmt).is_empty());
    assert_eq!(
      grammar.nonterms().collect::<Vec<_>>(),
      vec![Nonterm::ExprOpt, Nonterm::Expr]);
  }

  #[test]
  fn production_display() {
    let grammar = Grammar::c_subset();
    let decl = grammar.production(grammar.productions_of(Nonterm::Decl)[0]);
    assert_eq!(decl.to_string(), "Decl -> TypeSpec Identifier DeclAfterId");

    let eps = grammar.production(grammar.productions_of(Nonterm::ElseOpt)[1]);
    assert!(eps.is_epsilon());
    assert_eq!(eps.to_string(), "ElseOpt -> ε");
  }

  #[test]
  fn rejects_undefined_nonterm() {
    let err = Grammar::new(Nonterm::Program, vec![
      (Nonterm::Program, vec![n(Nonterm::DeclList)]),
    ]).unwrap_err();

    assert_eq!(err, GrammarError::Undefined {
      nonterm: Nonterm::DeclList,
      production: "Program -> DeclList".to_owned(),
    });
  }

  #[test]
  fn rejects_missing_start() {
    let err = Grammar::new(Nonterm::Program, vec![
      (Nonterm::Expr, vec![t(Identifier)]),
    ]).unwrap_err();
    assert_eq!(err, GrammarError::MissingStart(Nonterm::Program));

    let err = Grammar::new(Nonterm::Program, vec![]).unwrap_err();
    assert_eq!(err, GrammarError::Empty);
  }

  #[test]
  fn c_subset_is_well_formed() {
    let grammar = Grammar::c_subset();
    assert_eq!(grammar.validate(), Ok(()));
    assert_eq!(grammar.start(), Nonterm::Program);
    assert_eq!(grammar.productions().len(), 92);
    assert_eq!(grammar.nonterms().count(), Nonterm::ALL.len());
  }

  #[test]
  fn nonterm_names_round_trip() {
    for &nt in Nonterm::ALL {
      assert_eq!(nt.name().parse::<Nonterm>(), Ok(nt));
    }
  }
}
