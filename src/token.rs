use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

macro_rules! token_kinds {
  ($($variant:ident => $name:literal,)*) => {
    /// Token kinds produced by the scanner.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum TokenKind {
      $($variant,)*
    }

    impl TokenKind {
      pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];

      pub fn name(self) -> &'static str {
        match self {
          $(TokenKind::$variant => $name,)*
        }
      }
    }

    impl FromStr for TokenKind {
      type Err = ();

      fn from_str(s: &str) -> Result<Self, ()> {
        match s {
          $($name => Ok(TokenKind::$variant),)*
          _ => Err(()),
        }
      }
    }
  };
}

token_kinds! {
  Unknown => "Unknown",
  Identifier => "Identifier",

  KwVoid => "kw_void",
  KwInt => "kw_int",
  KwChar => "kw_char",
  KwFloat => "kw_float",
  KwDouble => "kw_double",
  KwLong => "kw_long",

  KwIf => "kw_if",
  KwElse => "kw_else",
  KwFor => "kw_for",
  KwWhile => "kw_while",
  KwContinue => "kw_continue",
  KwBreak => "kw_break",
  KwReturn => "kw_return",

  IntLiteral => "IntLiteral",
  DoubleLiteral => "DoubleLiteral",
  StringLiteral => "StringLiteral",
  CharLiteral => "CharLiteral",

  Semicolon => "Semicolon",
  Comma => "Comma",
  LParen => "LParen",
  RParen => "RParen",
  LBrace => "LBrace",
  RBrace => "RBrace",
  LBracket => "LBracket",
  RBracket => "RBracket",

  Plus => "Plus",
  Minus => "Minus",
  Star => "Star",
  Slash => "Slash",
  Percent => "Percent",
  Assign => "Assign",
  Equal => "Equal",
  NotEq => "NotEq",
  Less => "Less",
  Greater => "Greater",
  LessEq => "LessEq",
  GreaterEq => "GreaterEq",
  PlusPlus => "PlusPlus",
  MinusMinus => "MinusMinus",
  PlusEq => "PlusEq",
  MinusEq => "MinusEq",
  StarEq => "StarEq",
  SlashEq => "SlashEq",
  PercentEq => "PercentEq",
  Not => "Not",
  LogicalAnd => "LogicalAnd",
  LogicalOr => "LogicalOr",

  LeftShift => "LeftShift",
  RightShift => "RightShift",

  Eof => "Eof",
}

impl TokenKind {
  pub(crate) fn index(self) -> usize {
    self as usize
  }
}

impl Display for TokenKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// A scanned token. `line` and `column` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub lexeme: String,
  pub line: u32,
  pub column: u32,
}

impl Token {
  pub fn new(
    kind: TokenKind,
    lexeme: impl Into<String>,
    line: u32,
    column: u32,
  ) -> Self {
    Self {
      kind,
      lexeme: lexeme.into(),
      line,
      column,
    }
  }

  pub fn eof(line: u32, column: u32) -> Self {
    Self::new(TokenKind::Eof, "", line, column)
  }
}

/// Short form used in traces and diagnostics: `Kind(lexeme)`, or `Kind` when
/// the lexeme is empty.
impl Display for Token {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.lexeme.is_empty() {
      write!(f, "{}", self.kind)
    } else {
      write!(f, "{}({})", self.kind, self.lexeme)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn names_round_trip() {
    for &kind in TokenKind::ALL {
      assert_eq!(kind.name().parse::<TokenKind>(), Ok(kind));
    }
    assert_eq!("else".parse::<TokenKind>(), Err(()));
  }

  #[test]
  fn index_follows_declaration_order() {
    for (i, &kind) in TokenKind::ALL.iter().enumerate() {
      assert_eq!(kind.index(), i);
    }
  }

  #[test]
  fn short_form() {
    assert_eq!(Token::new(TokenKind::KwInt, "int", 1, 1).to_string(), "kw_int(int)");
    assert_eq!(Token::eof(3, 7).to_string(), "Eof");
  }
}
