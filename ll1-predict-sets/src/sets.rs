//! The representation of FIRST and FOLLOW sets.

use std::collections::BTreeMap;
use std::fmt;

use ll1_grammar::{Grammar, EPSILON};
use ll1_symbol::Symbol;

/// A set of terminals, possibly with the empty string.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PerSymbolSetVal {
    /// Whether the empty string belongs to the set.
    pub has_empty: bool,
    /// Terminals, sorted by ID.
    pub list: Vec<Symbol>,
}

/// Mapping from symbols to their sets.
pub type PerSymbolSets = BTreeMap<Symbol, PerSymbolSetVal>;

/// Access to computed sets.
pub trait PredictSets {
    /// Returns a reference to the sets.
    fn predict_sets(&self) -> &PerSymbolSets;
}

impl PerSymbolSetVal {
    /// Creates an empty set.
    pub fn new() -> Self {
        PerSymbolSetVal::default()
    }

    /// Whether the terminal belongs to the set.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.list.binary_search(&sym).is_ok()
    }

    /// Adds a terminal. Returns `true` if it was not present.
    pub fn insert(&mut self, sym: Symbol) -> bool {
        match self.list.binary_search(&sym) {
            Ok(_) => false,
            Err(pos) => {
                self.list.insert(pos, sym);
                true
            }
        }
    }

    /// Adds every terminal of `other`, leaving out the empty string.
    /// Returns `true` if the set grew.
    pub fn union_terminals(&mut self, other: &PerSymbolSetVal) -> bool {
        let mut changed = false;
        for &sym in &other.list {
            changed |= self.insert(sym);
        }
        changed
    }

    /// Number of elements, counting the empty string.
    pub fn len(&self) -> usize {
        self.list.len() + self.has_empty as usize
    }

    /// Whether the set has no elements at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Formats the set as `{ a, b, ε }`.
    pub fn display<'a>(&'a self, grammar: &'a Grammar) -> DisplaySet<'a> {
        DisplaySet { set: self, grammar }
    }
}

/// Displays a set with symbol names.
#[derive(Clone, Copy)]
pub struct DisplaySet<'a> {
    set: &'a PerSymbolSetVal,
    grammar: &'a Grammar,
}

impl fmt::Display for DisplaySet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.set.is_empty() {
            return f.write_str("{}");
        }
        let names = self
            .set
            .list
            .iter()
            .map(|&sym| self.grammar.name(sym))
            .chain(self.set.has_empty.then(|| EPSILON.into()));
        f.write_str("{ ")?;
        for (i, name) in names.enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            f.write_str(&name)?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let [a, b, c]: [Symbol; 3] = [2u32.into(), 5u32.into(), 9u32.into()];
        let mut set = PerSymbolSetVal::new();
        assert!(set.insert(c));
        assert!(set.insert(a));
        assert!(!set.insert(c));
        assert!(set.insert(b));
        assert_eq!(set.list, vec![a, b, c]);
        assert!(set.contains(b));
    }

    #[test]
    fn test_union_leaves_out_empty() {
        let mut set = PerSymbolSetVal::new();
        let other = PerSymbolSetVal {
            has_empty: true,
            list: vec![Symbol::from(1u32)],
        };
        assert!(set.union_terminals(&other));
        assert!(!set.union_terminals(&other));
        assert!(!set.has_empty);
        assert_eq!(set.len(), 1);
    }
}
