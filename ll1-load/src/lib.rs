//! Allows us to load context-free grammars from
//! a plain text listing of productions, and to split
//! raw input into the terminals of a loaded grammar.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod basic;
pub mod lexer;
mod string_interner;

use thiserror::Error;

pub use crate::basic::GrammarLoadExt;
pub use crate::lexer::{tokenize, LexError};

/// Represents an error when loading a grammar.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LoadError {
    /// No line of the text holds a valid production.
    #[error("malformed grammar: none of {lines} non-blank lines holds a production")]
    MalformedGrammar {
        /// Number of non-blank lines that were inspected.
        lines: usize,
    },
}
