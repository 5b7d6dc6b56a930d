use std::num::NonZeroU32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The numeric representation of a symbol's ID.
pub type SymbolRepr = u32;

/// A common grammar symbol type.
///
/// The ID is stored off by one in a `NonZeroU32`, so that `Option<Symbol>`
/// takes no more space than `Symbol`.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol {
    n: NonZeroU32,
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol::first()
    }
}

impl Symbol {
    /// The symbol with ID 0.
    pub fn first() -> Self {
        Symbol { n: NonZeroU32::MIN }
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.n.get() as usize - 1
    }
}

impl From<SymbolRepr> for Symbol {
    #[inline]
    fn from(id: SymbolRepr) -> Self {
        let n = id
            .checked_add(1)
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MAX);
        debug_assert_ne!(id, SymbolRepr::MAX, "ran out of Symbol space?");
        Symbol { n }
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol::from(id as SymbolRepr)
    }
}

impl From<Symbol> for SymbolRepr {
    #[inline]
    fn from(sym: Symbol) -> Self {
        sym.n.get() - 1
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> Self {
        sym.usize()
    }
}
