//! Grammar rules can be built with the builder pattern.

use std::borrow::Cow;
use std::convert::AsRef;

use log::debug;
use thiserror::Error;

use crate::local_prelude::*;
use crate::order::reachability_order;
use crate::END_OF_INPUT;

/// Errors detected when a grammar is finished.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum BuildError {
    /// No rule was ever started.
    #[error("the grammar has no rules")]
    NoRules,
    /// The end of input appears on the left-hand side of a rule.
    #[error("the end of input `$` cannot have rules")]
    EndOfInputAsLhs,
    /// A symbol was not generated by this builder.
    #[error("symbol #{} does not belong to this grammar", .0.usize())]
    ForeignSymbol(Symbol),
}

/// Collects rules for a [`Grammar`].
///
/// The end of input `$` is the first symbol of every builder. The first
/// nonterminal given to [`rule`] becomes the start symbol, unless another
/// one is set with [`set_start`].
///
/// [`rule`]: GrammarBuilder::rule
/// [`set_start`]: GrammarBuilder::set_start
#[derive(Clone, Debug)]
pub struct GrammarBuilder {
    sym_source: SymbolSource,
    eof: Symbol,
    start: Option<Symbol>,
    /// Nonterminals in the order of their first rule.
    declared: Vec<Symbol>,
    /// Rules in the order they were added.
    rules: Vec<GrammarRule>,
}

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: Symbol,
    builder: &'a mut GrammarBuilder,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarBuilder {
    /// Creates a builder with no rules.
    pub fn new() -> Self {
        let mut sym_source = SymbolSource::new();
        let eof = sym_source.next_sym(Some(END_OF_INPUT.into()));
        GrammarBuilder {
            sym_source,
            eof,
            start: None,
            declared: vec![],
            rules: vec![],
        }
    }

    /// Returns generated symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        self.sym_source.sym()
    }

    /// Generates a new unique symbol.
    ///
    /// If a name is given, it will be recorded within the symbol
    /// source.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        self.sym_source.next_sym(name)
    }

    /// Returns generated symbols with the given names.
    pub fn named_syms<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.next_sym(Some(name.into())))
    }

    /// The end of input terminal.
    pub fn eof(&self) -> Symbol {
        self.eof
    }

    /// Allows access to the symbol source through a reference.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Overrides the start symbol.
    pub fn set_start(&mut self, start: Symbol) {
        self.start = Some(start);
    }

    /// Starts building rules for the given nonterminal. The nonterminal
    /// is declared even if no alternative is added.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<'_> {
        self.declare(lhs);
        RuleBuilder { lhs, builder: self }
    }

    fn declare(&mut self, lhs: Symbol) {
        if !self.declared.contains(&lhs) {
            self.declared.push(lhs);
        }
        if self.start.is_none() {
            self.start = Some(lhs);
        }
    }

    /// Finishes the grammar.
    ///
    /// Classifies symbols and lays out the rules in reachability order.
    pub fn build(self) -> Result<Grammar, BuildError> {
        let GrammarBuilder {
            sym_source,
            eof,
            start,
            declared,
            rules: added,
        } = self;
        let num_syms = sym_source.num_syms();
        let check = |sym: Symbol| {
            if sym.usize() < num_syms {
                Ok(sym)
            } else {
                Err(BuildError::ForeignSymbol(sym))
            }
        };
        let start = check(start.ok_or(BuildError::NoRules)?)?;

        let mut nonterminals = SymbolBitSet::from_elem(num_syms, false);
        for &lhs in &declared {
            if check(lhs)? == eof {
                return Err(BuildError::EndOfInputAsLhs);
            }
            nonterminals.set(lhs, true);
        }

        let mut terminals = SymbolBitSet::from_elem(num_syms, false);
        terminals.set(eof, true);
        let mut rules_by_lhs: Vec<Vec<Box<[Symbol]>>> = vec![vec![]; num_syms];
        for rule in added {
            for &sym in &rule.rhs[..] {
                if !nonterminals[check(sym)?] {
                    terminals.set(sym, true);
                }
            }
            rules_by_lhs[rule.lhs.usize()].push(rule.rhs);
        }

        let order = reachability_order(start, &declared, &rules_by_lhs, &nonterminals, num_syms);

        let mut rules = vec![];
        let mut ranges = vec![None; num_syms];
        for &lhs in &order {
            let begin = rules.len();
            for rhs in rules_by_lhs[lhs.usize()].drain(..) {
                rules.push(GrammarRule { lhs, rhs });
            }
            ranges[lhs.usize()] = Some(begin..rules.len());
        }

        debug!(
            "built grammar with {} nonterminals, {} terminals and {} rules",
            order.len(),
            terminals.count(),
            rules.len()
        );

        Ok(Grammar {
            sym_source,
            start,
            eof,
            terminals,
            nonterminals,
            order,
            ranges,
            rules,
        })
    }
}

impl<'a> RuleBuilder<'a> {
    /// Starts building rules for another nonterminal.
    pub fn rule(self, lhs: Symbol) -> Self {
        let RuleBuilder { builder, .. } = self;
        builder.declare(lhs);
        RuleBuilder { lhs, builder }
    }

    /// Adds a rule alternative to the grammar. An empty slice adds the
    /// ε-production.
    pub fn rhs<S>(self, syms: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        self.builder
            .rules
            .push(GrammarRule::new(self.lhs, syms.as_ref()));
        self
    }
}
