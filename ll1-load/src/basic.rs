//! Loads grammars written one production per line:
//!
//! ```text
//! E  → T E'
//! E' → + T E' | ε
//! T  -> id
//! ```
//!
//! Both `→` and `->` are accepted as the arrow, and both `ε` and `epsilon`
//! denote the empty alternative. Lines without an arrow are ignored.

use ll1_grammar::{Grammar, GrammarBuilder, END_OF_INPUT};
use ll1_symbol::Symbol;
use log::{debug, trace, warn};

use crate::string_interner::StringInterner;
use crate::LoadError;

const ARROWS: [&str; 2] = ["→", "->"];
const EPSILONS: [&str; 2] = ["ε", "epsilon"];

/// Extension trait for loading grammars from text.
pub trait GrammarLoadExt: Sized {
    /// Loads a grammar from its textual listing.
    fn load(text: &str) -> Result<Self, LoadError>;
}

impl GrammarLoadExt for Grammar {
    fn load(text: &str) -> Result<Self, LoadError> {
        load_grammar(text)
    }
}

/// Loads a grammar from its textual listing.
///
/// The left-hand side of the first production becomes the start symbol.
/// Every left-hand side is a nonterminal; every other symbol is a terminal.
/// Productions of a nonterminal written on several lines are merged in the
/// order they appear.
pub fn load_grammar(text: &str) -> Result<Grammar, LoadError> {
    let mut builder = GrammarBuilder::new();
    let mut interner = StringInterner::new(&builder);
    let mut lines = 0;

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        lines += 1;

        let Some((lhs, rhs)) = split_arrow(line) else {
            trace!("line {}: no arrow, skipping", line_no + 1);
            continue;
        };
        if !is_valid_lhs(lhs) {
            warn!("line {}: invalid left-hand side `{}`, skipping", line_no + 1, lhs);
            continue;
        }

        let lhs = interner.get_or_intern(&mut builder, lhs);
        let alternatives: Vec<Vec<Symbol>> = rhs
            .split('|')
            .map(str::trim)
            .filter(|alternative| !alternative.is_empty())
            .map(|alternative| {
                if EPSILONS.contains(&alternative) {
                    return vec![];
                }
                alternative
                    .split_whitespace()
                    .filter(|name| {
                        let is_epsilon = EPSILONS.contains(name);
                        if is_epsilon {
                            warn!("line {}: dropping `{}` inside `{}`", line_no + 1, name, alternative);
                        }
                        !is_epsilon
                    })
                    .map(|name| interner.get_or_intern(&mut builder, name))
                    .collect()
            })
            .collect();
        trace!("line {}: {} alternatives", line_no + 1, alternatives.len());

        alternatives
            .into_iter()
            .fold(builder.rule(lhs), |rule, alternative| rule.rhs(alternative));
    }

    // Invalid left-hand sides are skipped above, so the only build failure
    // left is a grammar without rules.
    let grammar = builder.build().map_err(|err| {
        debug!("cannot build the grammar: {}", err);
        LoadError::MalformedGrammar { lines }
    })?;
    debug!(
        "loaded {} rules for {} nonterminals from {} lines",
        grammar.num_rules(),
        grammar.nonterminals().count(),
        lines
    );
    Ok(grammar)
}

/// Splits a line at its arrow. `→` is looked for first.
fn split_arrow(line: &str) -> Option<(&str, &str)> {
    ARROWS.iter().find_map(|arrow| {
        line.find(arrow)
            .map(|pos| (line[..pos].trim(), &line[pos + arrow.len()..]))
    })
}

fn is_valid_lhs(lhs: &str) -> bool {
    !lhs.is_empty()
        && !lhs.contains(char::is_whitespace)
        && lhs != END_OF_INPUT
        && !EPSILONS.contains(&lhs)
}
