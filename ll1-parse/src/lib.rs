//! A predictive parser driven by an LL(1) table.
//!
//! The parser never gives up on the first error. A terminal that does not
//! match is discarded, and table cells tell it when to drop a nonterminal
//! or skip an input terminal. Every step is recorded in a [`Trace`].

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod parser;
mod trace;

pub use self::parser::{parse_with_trace, ParseOptions, Parser, DEFAULT_STEP_LIMIT};
pub use self::trace::{Action, DerivationStep, DisplayAction, ParseStatus, Rejection, Trace};
