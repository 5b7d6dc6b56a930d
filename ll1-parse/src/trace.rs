//! Records of a parse run.

use std::fmt;

use ll1_grammar::{Grammar, RuleId};
use ll1_symbol::Symbol;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a parse run stopped without accepting.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rejection {
    /// The stack reached `$` while input remained.
    #[error("unexpected end")]
    UnexpectedEnd,
    /// The table has no cell for the nonterminal and the input terminal.
    #[error("no rule")]
    NoRule,
    /// The top of the stack is neither a terminal nor a nonterminal.
    #[error("unknown symbol")]
    UnknownSymbol,
    /// Recovery would discard the end of input.
    #[error("input exhausted")]
    InputExhausted,
    /// The run took too many steps.
    #[error("step limit reached")]
    StepLimit,
}

/// State of a parse run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseStatus {
    /// The run has not finished.
    Running,
    /// The input was recognized, possibly after recovering from errors.
    Accepted,
    /// The run stopped.
    Rejected(Rejection),
}

/// What the parser did in one step.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// The initial configuration.
    Init,
    /// Both the stack and the input reached `$`.
    Accept,
    /// The run stopped.
    Reject(Rejection),
    /// The terminal on top of the stack was matched with the input.
    Match(Symbol),
    /// The terminal on top of the stack differs from the input. The input
    /// terminal is discarded.
    Mismatch {
        /// The terminal on top of the stack.
        expected: Symbol,
        /// The input terminal.
        found: Symbol,
    },
    /// The nonterminal on top of the stack was replaced with a rule's
    /// right-hand side.
    Expand(RuleId),
    /// The nonterminal was popped, since the lookahead may follow it.
    Extract {
        /// The popped nonterminal.
        nonterminal: Symbol,
        /// The input terminal.
        lookahead: Symbol,
    },
    /// The input terminal was discarded.
    Explore {
        /// The nonterminal on top of the stack.
        nonterminal: Symbol,
        /// The discarded terminal.
        lookahead: Symbol,
    },
}

/// A snapshot taken before an action was applied.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivationStep {
    /// Stack contents from bottom to top. The top is last.
    pub stack: Vec<Symbol>,
    /// Remaining input, ending with `$`.
    pub input: Vec<Symbol>,
    /// The action taken in this configuration.
    pub action: Action,
}

/// The steps of a parse run and its outcome.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace {
    /// Steps in the order they were taken. The first one is `Init`.
    pub steps: Vec<DerivationStep>,
    /// How the run ended.
    pub status: ParseStatus,
}

impl Trace {
    /// Whether the run accepted its input.
    pub fn is_accepted(&self) -> bool {
        self.status == ParseStatus::Accepted
    }

    /// Terminals matched during the run, in order.
    pub fn matched(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.steps.iter().filter_map(|step| match step.action {
            Action::Match(terminal) => Some(terminal),
            _ => None,
        })
    }

    /// Whether the run recovered from any error.
    pub fn has_errors(&self) -> bool {
        self.steps.iter().any(|step| step.action.is_recovery())
    }
}

impl Action {
    /// Whether the action recovers from an error.
    pub fn is_recovery(&self) -> bool {
        matches!(
            self,
            Action::Mismatch { .. } | Action::Extract { .. } | Action::Explore { .. }
        )
    }

    /// Formats the action with symbol names.
    pub fn display<'a>(&'a self, grammar: &'a Grammar) -> DisplayAction<'a> {
        DisplayAction {
            action: self,
            grammar,
        }
    }
}

/// Displays an action with symbol names.
#[derive(Clone, Copy)]
pub struct DisplayAction<'a> {
    action: &'a Action,
    grammar: &'a Grammar,
}

impl fmt::Display for DisplayAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |sym: Symbol| self.grammar.name(sym);
        match *self.action {
            Action::Init => f.write_str("init"),
            Action::Accept => f.write_str("accept"),
            Action::Reject(rejection) => write!(f, "reject: {}", rejection),
            Action::Match(terminal) => write!(f, "match {}", name(terminal)),
            Action::Mismatch { expected, found } => write!(
                f,
                "error: expected {}, found {} (explore)",
                name(expected),
                name(found)
            ),
            Action::Expand(rule_id) => write!(f, "{}", self.grammar.display_rule(rule_id)),
            Action::Extract {
                nonterminal,
                lookahead,
            } => write!(
                f,
                "extract {} ({} ∈ FOLLOW({}))",
                name(nonterminal),
                name(lookahead),
                name(nonterminal)
            ),
            Action::Explore { lookahead, .. } => write!(f, "explore: discard {}", name(lookahead)),
        }
    }
}
