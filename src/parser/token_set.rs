use std::fmt::{self, Debug, Formatter};
use crate::token::TokenKind;

type BitBlock = u64;

const BLOCK_NBITS: usize = std::mem::size_of::<BitBlock>() * 8;

/// A set of token kinds. Iterates in `TokenKind` declaration order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TokenSet {
  slice: Box<[BitBlock]>,
}

impl TokenSet {
  pub fn new() -> Self {
    let len = (TokenKind::ALL.len() + BLOCK_NBITS - 1) / BLOCK_NBITS;
    Self {
      slice: vec![0; len].into_boxed_slice(),
    }
  }

  pub fn from_token(token: TokenKind) -> Self {
    let mut s = Self::new();
    s.insert(token);
    s
  }

  pub fn clear(&mut self) {
    for x in self.slice.iter_mut() {
      *x = 0;
    }
  }

  /// Returns whether the token was newly inserted.
  pub fn insert(&mut self, token: TokenKind) -> bool {
    let ix = token.index();
    let block = &mut self.slice[ix / BLOCK_NBITS];
    let old = *block;
    *block |= 1 << (ix % BLOCK_NBITS);
    old != *block
  }

  pub fn contains(&self, token: TokenKind) -> bool {
    let ix = token.index();
    self.slice[ix / BLOCK_NBITS] & (1 << (ix % BLOCK_NBITS)) != 0
  }

  /// Returns whether the set has changed.
  pub fn union_with(&mut self, other: &TokenSet) -> bool {
    let mut changed = false;
    for i in 0..self.slice.len() {
      let old = self.slice[i];
      self.slice[i] |= other.slice[i];
      changed |= old != self.slice[i];
    }
    changed
  }

  pub fn is_empty(&self) -> bool {
    self.slice.iter().all(|&x| x == 0)
  }

  pub fn len(&self) -> usize {
    self.slice.iter().map(|x| x.count_ones() as usize).sum()
  }

  pub fn iter(&self) -> Iter {
    Iter {
      slice: &*self.slice,
      bit: 0,
      index: 0,
    }
  }
}

impl Default for TokenSet {
  fn default() -> Self {
    Self::new()
  }
}

impl<'a> IntoIterator for &'a TokenSet {
  type Item = TokenKind;
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Iter<'a> {
    self.iter()
  }
}

impl std::iter::FromIterator<TokenKind> for TokenSet {
  fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
    let mut s = Self::new();
    for token in iter {
      s.insert(token);
    }
    s
  }
}

pub struct Iter<'a> {
  slice: &'a [BitBlock],
  bit: usize,
  index: usize,
}

impl<'a> Iterator for Iter<'a> {
  type Item = TokenKind;

  fn next(&mut self) -> Option<TokenKind> {
    while self.index < self.slice.len() {
      if self.bit < BLOCK_NBITS {
        let bit = (self.slice[self.index] & !((1 << self.bit) - 1))
          .trailing_zeros() as usize;
        if bit < BLOCK_NBITS {
          self.bit = bit + 1;
          return Some(TokenKind::ALL[self.index * BLOCK_NBITS + bit]);
        }
      }

      self.index += 1;
      self.bit = 0;
    }
    None
  }
}

impl Debug for TokenSet {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}
