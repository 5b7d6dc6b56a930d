//! Definitions of the grammar type and its rules.

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::local_prelude::*;
use crate::EPSILON;

/// Context-free grammar prepared for LL(1) analysis.
///
/// Every symbol is either a terminal or a nonterminal, never both. A
/// nonterminal is a symbol that appears on the left-hand side of a rule.
/// The end of input `$` is always a terminal.
///
/// Rules are grouped by their left-hand side. The groups are ordered by a
/// depth-first walk from the start symbol: every nonterminal reachable
/// from the start comes before the unreachable ones.
///
/// A grammar is immutable. Build it with [`GrammarBuilder`].
///
/// [`GrammarBuilder`]: crate::GrammarBuilder
#[derive(Clone, Debug)]
pub struct Grammar {
    pub(crate) sym_source: SymbolSource,
    pub(crate) start: Symbol,
    pub(crate) eof: Symbol,
    pub(crate) terminals: SymbolBitSet,
    pub(crate) nonterminals: SymbolBitSet,
    /// Nonterminals in reachability order.
    pub(crate) order: Vec<Symbol>,
    /// Rule ranges, indexed by symbol ID.
    pub(crate) ranges: Vec<Option<Range<usize>>>,
    pub(crate) rules: Vec<GrammarRule>,
}

/// Standard grammar rule representation.
///
/// An empty right-hand side is the ε-production.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GrammarRule {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side symbols.
    pub rhs: Box<[Symbol]>,
}

/// Refers to a rule by its position in the grammar's rule order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleId(pub usize);

impl GrammarRule {
    /// Creates a rule.
    pub fn new(lhs: Symbol, rhs: &[Symbol]) -> Self {
        GrammarRule {
            lhs,
            rhs: rhs.into(),
        }
    }

    /// Whether this is the ε-production.
    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }
}

impl Grammar {
    /// The start symbol.
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// The end of input terminal, `$`.
    pub fn eof(&self) -> Symbol {
        self.eof
    }

    /// Allows access to the symbol source through a reference.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns the display name of a symbol.
    pub fn name(&self, sym: Symbol) -> Cow<'_, str> {
        self.sym_source.display_name(sym)
    }

    /// Finds the first symbol with the given name.
    pub fn sym_by_name(&self, name: &str) -> Option<Symbol> {
        self.sym_source
            .symbols()
            .find(|&sym| self.sym_source.name_of(sym) == Some(name))
    }

    /// Whether the symbol is a terminal, including `$`.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminals[sym]
    }

    /// Whether the symbol is a nonterminal.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.nonterminals[sym]
    }

    /// Iterates over terminals in the order of their IDs. `$` comes first.
    pub fn terminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.terminals.iter()
    }

    /// Iterates over nonterminals in reachability order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.order.iter().copied()
    }

    /// Returns an iterator over the list of grammar rules, grouped
    /// by nonterminal in reachability order.
    pub fn rules(&self) -> impl Iterator<Item = &GrammarRule> + '_ {
        self.rules.iter()
    }

    /// Returns an iterator over rules together with their IDs.
    pub fn rules_with_ids(&self) -> impl Iterator<Item = (RuleId, &GrammarRule)> + '_ {
        self.rules.iter().enumerate().map(|(i, rule)| (RuleId(i), rule))
    }

    /// Returns the rule with the given ID.
    pub fn rule(&self, id: RuleId) -> Option<&GrammarRule> {
        self.rules.get(id.0)
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Returns the rules of a nonterminal, in the order they were written.
    pub fn rules_of(&self, lhs: Symbol) -> impl Iterator<Item = (RuleId, &GrammarRule)> + '_ {
        let range = self
            .ranges
            .get(lhs.usize())
            .cloned()
            .flatten()
            .unwrap_or(0..0);
        range.map(move |i| (RuleId(i), &self.rules[i]))
    }

    /// Iterates over `(nonterminal, rules)` pairs in reachability order.
    pub fn ordered_productions(&self) -> impl Iterator<Item = (Symbol, &[GrammarRule])> + '_ {
        self.order.iter().map(move |&lhs| {
            let range = self.ranges[lhs.usize()].clone().unwrap_or(0..0);
            (lhs, &self.rules[range])
        })
    }

    /// Formats a rule as `A → x y`, or `A → ε`.
    pub fn display_rule(&self, id: RuleId) -> DisplayRule<'_> {
        DisplayRule {
            grammar: self,
            id,
            lhs: true,
        }
    }

    /// Formats the right-hand side of a rule as `x y`, or `ε`.
    pub fn display_rhs(&self, id: RuleId) -> DisplayRule<'_> {
        DisplayRule {
            grammar: self,
            id,
            lhs: false,
        }
    }
}

/// Displays a rule with symbol names.
#[derive(Clone, Copy)]
pub struct DisplayRule<'a> {
    grammar: &'a Grammar,
    id: RuleId,
    lhs: bool,
}

impl fmt::Display for DisplayRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(rule) = self.grammar.rule(self.id) else {
            return write!(f, "<rule {}>", self.id.0);
        };
        if self.lhs {
            write!(f, "{} → ", self.grammar.name(rule.lhs))?;
        }
        if rule.rhs.is_empty() {
            return f.write_str(EPSILON);
        }
        for (i, &sym) in rule.rhs.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            f.write_str(&self.grammar.name(sym))?;
        }
        Ok(())
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &lhs in &self.order {
            write!(f, "{} →", self.name(lhs))?;
            let mut first = true;
            for (id, _) in self.rules_of(lhs) {
                if !first {
                    f.write_str(" |")?;
                }
                first = false;
                write!(f, " {}", self.display_rhs(id))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
