use crate::error::GrammarError;
use crate::grammar::{Grammar, Nonterm, Symbol, EPSILON};
use crate::token::TokenKind;

impl Grammar {
  /// Reads a grammar written one rule per line:
  ///
  /// ```text
  /// # comment
  /// ElseOpt -> kw_else Stmt | ε
  /// ```
  ///
  /// An empty alternative or `ε` is the epsilon production. Names resolve to
  /// token kinds first, then to nonterminals. The left-hand side of the first
  /// rule is the start symbol.
  pub fn parse(text: &str) -> Result<Grammar, GrammarError> {
    let mut start = None;
    let mut rules = vec![];

    for (i, line) in text.lines().enumerate() {
      let line_no = i + 1;
      let line = match line.find('#') {
        Some(ix) => &line[..ix],
        None => line,
      }.trim();
      if line.is_empty() {
        continue;
      }

      let arrow = line.find("->")
        .ok_or_else(|| error(line_no, "expected `->`".to_owned()))?;
      let lhs_name = line[..arrow].trim();
      let lhs = lhs_name.parse::<Nonterm>()
        .map_err(|()| error(line_no, format!("unknown nonterminal `{}`", lhs_name)))?;
      start.get_or_insert(lhs);

      for alt in line[arrow + 2..].split('|') {
        let symbols = alt.split_whitespace()
          .filter(|&name| name != EPSILON)
          .map(|name| resolve(name)
            .ok_or_else(|| error(line_no, format!("unknown symbol `{}`", name))))
          .collect::<Result<Vec<_>, _>>()?;
        rules.push((lhs, symbols));
      }
    }

    let start = start.ok_or(GrammarError::Empty)?;
    Grammar::new(start, rules)
  }
}

fn resolve(name: &str) -> Option<Symbol> {
  if let Ok(kind) = name.parse::<TokenKind>() {
    Some(Symbol::Term(kind))
  } else {
    name.parse::<Nonterm>().ok().map(Symbol::Nonterm)
  }
}

fn error(line: usize, message: String) -> GrammarError {
  GrammarError::Bnf {
    line,
    message,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::grammar::{n, t, ProdId};
  use pretty_assertions::assert_eq;

  #[test]
  fn alternatives_and_epsilon() {
    let grammar = Grammar::parse(r#"
      # dangling else
      IfStmt -> kw_if LParen Expr RParen Stmt ElseOpt
      ElseOpt -> kw_else Stmt | ε
      Stmt -> IfStmt | Expr Semicolon
      Expr -> Identifier
      ExprOpt -> Expr |
    "#).unwrap();

    assert_eq!(grammar.start(), Nonterm::IfStmt);
    assert_eq!(grammar.productions().len(), 8);
    assert_eq!(grammar.productions_of(Nonterm::ElseOpt), &[ProdId(1), ProdId(2)]);
    assert_eq!(grammar.production(ProdId(1)).rhs, vec![t(TokenKind::KwElse), n(Nonterm::Stmt)]);
    assert!(grammar.production(ProdId(2)).is_epsilon());
    assert!(grammar.production(ProdId(7)).is_epsilon());
  }

  #[test]
  fn reports_line_numbers() {
    let err = Grammar::parse("Program -> DeclList\n\nDeclList -> Decl Frobnicate\n").unwrap_err();
    assert_eq!(err, GrammarError::Bnf {
      line: 3,
      message: "unknown symbol `Frobnicate`".to_owned(),
    });

    let err = Grammar::parse("Program DeclList").unwrap_err();
    assert_eq!(err.to_string(), "line 1: expected `->`");

    let err = Grammar::parse("Goal -> Identifier").unwrap_err();
    assert_eq!(err.to_string(), "line 1: unknown nonterminal `Goal`");
  }

  #[test]
  fn empty_text() {
    assert_eq!(Grammar::parse("  \n# nothing\n").unwrap_err(), GrammarError::Empty);
  }
}
