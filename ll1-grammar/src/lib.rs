//! The grammar model: non-terminals, terminals, productions and a start
//! symbol, with productions kept in a deterministic, reachability-first
//! order.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, allow(missing_docs))]

pub mod builder;
pub mod grammar;
mod order;
pub mod symbol_bit_set;

pub use crate::builder::{BuildError, GrammarBuilder, RuleBuilder};
pub use crate::grammar::{DisplayRule, Grammar, GrammarRule, RuleId};
pub use crate::symbol_bit_set::SymbolBitSet;
pub use ll1_symbol::{Symbol, SymbolSource};

/// The literal name of the end-of-input terminal.
pub const END_OF_INPUT: &str = "$";
/// The literal used to display the empty string.
pub const EPSILON: &str = "ε";

pub(crate) mod local_prelude {
    pub use crate::grammar::{Grammar, GrammarRule};
    pub use crate::symbol_bit_set::SymbolBitSet;
    pub use ll1_symbol::{Symbol, SymbolSource};
}
