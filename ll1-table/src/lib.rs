//! The LL(1) parse table.
//!
//! Every pair of a nonterminal and a terminal, `$` included, has exactly
//! one cell. A cell holds the rule to expand, or tells the parser how to
//! recover when no rule applies.

#![deny(unsafe_code)]
#![deny(missing_docs)]

use std::collections::BTreeMap;

use ll1_grammar::{Grammar, RuleId};
use ll1_predict_sets::{FirstSets, FollowSets, GrammarSetsExt};
use ll1_symbol::Symbol;
use log::{debug, trace, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// LL parse table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LlParseTable {
    map: BTreeMap<LlParseTableKey, Cell>,
    overwritten: usize,
}

/// Position of a cell in the table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LlParseTableKey {
    /// The nonterminal on top of the stack.
    pub nonterminal: Symbol,
    /// The next input terminal.
    pub terminal: Symbol,
}

/// The content of a table cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    /// Expand the nonterminal with this rule.
    Rule(RuleId),
    /// Pop the nonterminal without consuming input. Used when the terminal
    /// may follow the nonterminal.
    Extract,
    /// Discard the input terminal and keep the nonterminal.
    Explore,
}

impl LlParseTable {
    /// Creates an LL parse table, computing FIRST and FOLLOW sets.
    pub fn new(grammar: &Grammar) -> Self {
        let first = grammar.first_sets();
        let follow = grammar.follow_sets_with_first(&first);
        Self::with_sets(grammar, &first, &follow)
    }

    /// Creates an LL parse table from already computed sets.
    ///
    /// LlParseTable[A, a] holds the rule A → w if
    /// a is in FIRST(w), or
    /// w is nullable and a is in FOLLOW(A).
    ///
    /// When several rules claim a cell, the rule that comes last wins.
    /// Cells that no rule claims hold `Extract` if a is in FOLLOW(A),
    /// and `Explore` otherwise.
    pub fn with_sets(grammar: &Grammar, first: &FirstSets, follow: &FollowSets) -> Self {
        let mut this = LlParseTable {
            map: BTreeMap::new(),
            overwritten: 0,
        };
        for nonterminal in grammar.nonterminals() {
            for terminal in grammar.terminals() {
                let key = LlParseTableKey {
                    nonterminal,
                    terminal,
                };
                this.map.insert(key, Cell::Explore);
            }
        }

        for (rule_id, rule) in grammar.rules_with_ids() {
            let rhs_first_set = first.first_set_for_string(&rule.rhs[..]);
            let mut lookahead = rhs_first_set.list.clone();
            if rhs_first_set.has_empty {
                if let Some(lhs_follow_set) = follow.get(rule.lhs) {
                    lookahead.extend(lhs_follow_set.list.iter().copied());
                }
            }
            for terminal in lookahead {
                this.place(grammar, rule.lhs, terminal, rule_id);
            }
        }

        for nonterminal in grammar.nonterminals() {
            let Some(follow_set) = follow.get(nonterminal) else {
                continue;
            };
            for &terminal in &follow_set.list {
                let key = LlParseTableKey {
                    nonterminal,
                    terminal,
                };
                match this.map.get_mut(&key) {
                    Some(cell) if *cell == Cell::Explore => *cell = Cell::Extract,
                    _ => {}
                }
            }
        }

        debug!(
            "built LL(1) table with {} cells, {} overwritten",
            this.map.len(),
            this.overwritten
        );
        this
    }

    fn place(&mut self, grammar: &Grammar, nonterminal: Symbol, terminal: Symbol, rule_id: RuleId) {
        let key = LlParseTableKey {
            nonterminal,
            terminal,
        };
        let previous = self.map.insert(key, Cell::Rule(rule_id));
        match previous {
            Some(Cell::Rule(previous_id)) if previous_id != rule_id => {
                self.overwritten += 1;
                warn!(
                    "conflict at ({}, {}): `{}` replaces `{}`",
                    grammar.name(nonterminal),
                    grammar.name(terminal),
                    grammar.display_rule(rule_id),
                    grammar.display_rule(previous_id)
                );
            }
            _ => {
                trace!(
                    "({}, {}) = {}",
                    grammar.name(nonterminal),
                    grammar.name(terminal),
                    grammar.display_rule(rule_id)
                );
            }
        }
    }

    /// Returns the cell for a nonterminal and a terminal, or `None` if
    /// either symbol does not belong to the table.
    pub fn get(&self, nonterminal: Symbol, terminal: Symbol) -> Option<Cell> {
        self.map
            .get(&LlParseTableKey {
                nonterminal,
                terminal,
            })
            .copied()
    }

    /// Number of times a rule replaced a different rule in some cell.
    /// Zero for LL(1) grammars.
    pub fn overwritten_cells(&self) -> usize {
        self.overwritten
    }

    /// Iterates over all cells, ordered by nonterminal ID, then by
    /// terminal ID.
    pub fn iter(&self) -> impl Iterator<Item = (LlParseTableKey, Cell)> + '_ {
        self.map.iter().map(|(&key, &cell)| (key, cell))
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
