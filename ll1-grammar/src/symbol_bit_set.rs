//! Informs whether symbols are terminal or nonterminal.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::local_prelude::*;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Constructs a `SymbolBitSet` covering `num_syms` symbols,
    /// all of them set to `elem`.
    pub fn from_elem(num_syms: usize, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(num_syms, elem),
        }
    }

    /// Adds or removes a symbol. Grows the set when the symbol is
    /// beyond its current size.
    pub fn set(&mut self, sym: Symbol, elem: bool) {
        let index = sym.usize();
        if index >= self.bit_vec.len() {
            if !elem {
                return;
            }
            self.bit_vec.grow(index + 1 - self.bit_vec.len(), false);
        }
        self.bit_vec.set(index, elem);
    }

    /// Checks whether the set contains the symbol. Symbols beyond the
    /// size of the set are never contained.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Adds all symbols of `other` to this set.
    pub fn union(&mut self, other: &SymbolBitSet) {
        if other.bit_vec.len() > self.bit_vec.len() {
            self.bit_vec
                .grow(other.bit_vec.len() - self.bit_vec.len(), false);
        }
        for sym in other.iter() {
            self.set(sym, true);
        }
    }

    /// Removes all symbols of `other` from this set.
    pub fn subtract(&mut self, other: &SymbolBitSet) {
        for sym in other.iter() {
            self.set(sym, false);
        }
    }

    /// Iterates over symbols in the set, in the order of their IDs.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }

    /// The number of symbols in the set.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Whether no symbol is in the set.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }
}

impl Iterator for Iter<'_> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.contains(index) {
            &TRUE
        } else {
            &FALSE
        }
    }
}

impl FromIterator<Symbol> for SymbolBitSet {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        let mut set = SymbolBitSet::new();
        for sym in iter {
            set.set(sym, true);
        }
        set
    }
}

impl Grammar {
    /// Returns the set of terminal symbols, including the end of input.
    pub fn terminal_symbols(&self) -> &SymbolBitSet {
        &self.terminals
    }

    /// Returns the set of nonterminal symbols.
    pub fn nonterminal_symbols(&self) -> &SymbolBitSet {
        &self.nonterminals
    }
}
