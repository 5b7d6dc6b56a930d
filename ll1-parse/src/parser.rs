//! The parse engine.

use ll1_grammar::Grammar;
use ll1_symbol::Symbol;
use ll1_table::{Cell, LlParseTable};
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::trace::{Action, DerivationStep, ParseStatus, Rejection, Trace};

/// The step limit of [`ParseOptions::default`].
pub const DEFAULT_STEP_LIMIT: usize = 10_000;

/// Run-time configuration of the parser.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ParseOptions {
    /// Maximal number of steps after the initial one. `None` means no
    /// limit, in which case some grammars make the parser loop forever.
    pub step_limit: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            step_limit: Some(DEFAULT_STEP_LIMIT),
        }
    }
}

impl ParseOptions {
    /// Options without a step limit.
    pub fn unlimited() -> Self {
        ParseOptions { step_limit: None }
    }
}

/// A predictive parser for one grammar.
#[derive(Clone, Debug)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
    table: LlParseTable,
    options: ParseOptions,
}

/// Parses `tokens` with a fresh table for `grammar` and default options.
pub fn parse_with_trace(tokens: &[Symbol], grammar: &Grammar) -> Trace {
    Parser::new(grammar).parse(tokens)
}

impl<'g> Parser<'g> {
    /// Creates a parser, building the table for `grammar`.
    pub fn new(grammar: &'g Grammar) -> Self {
        Self::with_table(grammar, LlParseTable::new(grammar))
    }

    /// Creates a parser with a table built beforehand.
    pub fn with_table(grammar: &'g Grammar, table: LlParseTable) -> Self {
        Parser {
            grammar,
            table,
            options: ParseOptions::default(),
        }
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// The table that drives this parser.
    pub fn table(&self) -> &LlParseTable {
        &self.table
    }

    /// Takes the table out of this parser.
    pub fn into_table(self) -> LlParseTable {
        self.table
    }

    /// Parses a sequence of terminals, recording every step.
    ///
    /// The stack starts as `[$, start]` and `$` is appended to the input.
    /// Each step is recorded before it changes the stack or the input.
    /// An error step that would discard `$` is recorded, and the run then
    /// stops with [`Rejection::InputExhausted`].
    pub fn parse(&self, tokens: &[Symbol]) -> Trace {
        let eof = self.grammar.eof();
        let mut stack = vec![eof, self.grammar.start()];
        let mut input = tokens.to_vec();
        input.push(eof);
        let mut pos = 0;

        let mut steps = vec![DerivationStep {
            stack: stack.clone(),
            input: input.clone(),
            action: Action::Init,
        }];
        let mut status = ParseStatus::Running;
        let mut taken = 0;
        let mut exhausted = false;

        while status == ParseStatus::Running {
            let top = stack.last().copied().unwrap_or(eof);
            let lookahead = input.get(pos).copied().unwrap_or(eof);
            let action = match self.options.step_limit {
                Some(limit) if taken >= limit => Action::Reject(Rejection::StepLimit),
                _ if exhausted => Action::Reject(Rejection::InputExhausted),
                _ => self.decide(top, lookahead),
            };
            trace!(
                "step {}: top = {}, lookahead = {}: {}",
                taken + 1,
                self.grammar.name(top),
                self.grammar.name(lookahead),
                action.display(self.grammar)
            );
            steps.push(DerivationStep {
                stack: stack.clone(),
                input: input.get(pos..).unwrap_or_default().to_vec(),
                action,
            });

            match action {
                Action::Init => {}
                Action::Accept => status = ParseStatus::Accepted,
                Action::Reject(rejection) => status = ParseStatus::Rejected(rejection),
                Action::Match(_) => {
                    stack.pop();
                    pos += 1;
                }
                Action::Mismatch { .. } | Action::Explore { .. } if lookahead == eof => {
                    exhausted = true;
                }
                Action::Mismatch { .. } | Action::Explore { .. } => pos += 1,
                Action::Expand(rule_id) => {
                    stack.pop();
                    if let Some(rule) = self.grammar.rule(rule_id) {
                        stack.extend(rule.rhs.iter().rev());
                    }
                }
                Action::Extract { .. } => {
                    stack.pop();
                }
            }
            taken += 1;
        }

        debug!("parse finished after {} steps: {:?}", steps.len(), status);
        Trace { steps, status }
    }

    fn decide(&self, top: Symbol, lookahead: Symbol) -> Action {
        let eof = self.grammar.eof();
        if top == eof {
            return if lookahead == eof {
                Action::Accept
            } else {
                Action::Reject(Rejection::UnexpectedEnd)
            };
        }
        if self.grammar.is_terminal(top) {
            if top == lookahead {
                Action::Match(top)
            } else {
                Action::Mismatch {
                    expected: top,
                    found: lookahead,
                }
            }
        } else if self.grammar.is_nonterminal(top) {
            match self.table.get(top, lookahead) {
                Some(Cell::Rule(rule_id)) if self.grammar.rule(rule_id).is_some() => {
                    Action::Expand(rule_id)
                }
                Some(Cell::Extract) => Action::Extract {
                    nonterminal: top,
                    lookahead,
                },
                Some(Cell::Explore) => Action::Explore {
                    nonterminal: top,
                    lookahead,
                },
                Some(Cell::Rule(_)) | None => Action::Reject(Rejection::NoRule),
            }
        } else {
            Action::Reject(Rejection::UnknownSymbol)
        }
    }
}
