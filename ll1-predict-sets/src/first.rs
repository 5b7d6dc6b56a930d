//! FIRST sets.

use ll1_grammar::{Grammar, SymbolBitSet};
use ll1_symbol::Symbol;
use log::{debug, trace};

use crate::sets::{PerSymbolSetVal, PerSymbolSets, PredictSets};

/// Collector of FIRST sets.
#[derive(Clone, Debug)]
pub struct FirstSets {
    pub(super) map: PerSymbolSets,
    terminal_set: SymbolBitSet,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// Every terminal, including `$`, is its own FIRST set. The sets of
    /// nonterminals start empty and grow with each pass over the rules,
    /// until a pass changes nothing. Every pass reads the sets as they were
    /// at its beginning.
    pub fn new(grammar: &Grammar) -> Self {
        let mut map = PerSymbolSets::new();
        for terminal in grammar.terminals() {
            map.insert(
                terminal,
                PerSymbolSetVal {
                    has_empty: false,
                    list: vec![terminal],
                },
            );
        }
        for nonterminal in grammar.nonterminals() {
            map.insert(nonterminal, PerSymbolSetVal::new());
        }

        let mut this = FirstSets {
            map,
            terminal_set: grammar.terminal_symbols().clone(),
        };
        this.collect_from(grammar);
        this
    }

    fn collect_from(&mut self, grammar: &Grammar) {
        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            let snapshot = self.map.clone();
            for rule in grammar.rules() {
                let lookahead = first_of_string(&snapshot, &self.terminal_set, &rule.rhs[..]);
                let first_set = self.map.entry(rule.lhs).or_default();
                let mut set_changed = first_set.union_terminals(&lookahead);
                if lookahead.has_empty && !first_set.has_empty {
                    first_set.has_empty = true;
                    set_changed = true;
                }
                changed |= set_changed;
            }
            trace!("FIRST pass {}: changed = {}", passes, changed);
        }
        debug!("FIRST sets converged after {} passes", passes);
    }

    /// Calculates a FIRST set for a string of symbols.
    ///
    /// The empty string belongs to the result when every symbol is
    /// nullable, in particular when `string` is empty.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> PerSymbolSetVal {
        first_of_string(&self.map, &self.terminal_set, string)
    }

    /// Returns the FIRST set of a symbol.
    pub fn get(&self, sym: Symbol) -> Option<&PerSymbolSetVal> {
        self.map.get(&sym)
    }

    /// Whether the symbol derives the empty string.
    pub fn is_nullable(&self, sym: Symbol) -> bool {
        self.get(sym).map_or(false, |set| set.has_empty)
    }
}

fn first_of_string(
    map: &PerSymbolSets,
    terminal_set: &SymbolBitSet,
    string: &[Symbol],
) -> PerSymbolSetVal {
    let mut result = PerSymbolSetVal::new();
    for &sym in string {
        if terminal_set[sym] {
            result.insert(sym);
            return result;
        }
        match map.get(&sym) {
            Some(first_set) => {
                result.union_terminals(first_set);
                if !first_set.has_empty {
                    return result;
                }
            }
            // An unknown symbol derives nothing.
            None => return result,
        }
    }
    result.has_empty = true;
    result
}

impl PredictSets for FirstSets {
    /// Returns a reference to FIRST sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll1_grammar::GrammarBuilder;

    #[test]
    fn test_nullable_chain() {
        // s → a b c ; a → ε | x ; b → ε ; c → y
        let mut builder = GrammarBuilder::new();
        let [s, a, b, c, x, y] = builder.sym();
        builder
            .rule(s)
            .rhs([a, b, c])
            .rule(a)
            .rhs([])
            .rhs([x])
            .rule(b)
            .rhs([])
            .rule(c)
            .rhs([y]);
        let grammar = builder.build().unwrap();
        let first = FirstSets::new(&grammar);

        assert_eq!(first.get(s).unwrap().list, vec![x, y]);
        assert!(!first.is_nullable(s));
        assert!(first.is_nullable(a));
        assert!(first.is_nullable(b));
        assert!(first.get(b).unwrap().list.is_empty());

        let ab = first.first_set_for_string(&[a, b]);
        assert!(ab.has_empty);
        assert_eq!(ab.list, vec![x]);
        assert!(first.first_set_for_string(&[]).has_empty);
    }

    #[test]
    fn test_left_recursion_converges() {
        // s → s x | y
        let mut builder = GrammarBuilder::new();
        let [s, x, y] = builder.sym();
        builder.rule(s).rhs([s, x]).rhs([y]);
        let grammar = builder.build().unwrap();
        let first = FirstSets::new(&grammar);

        assert_eq!(first.get(s).unwrap().list, vec![y]);
        assert_eq!(first.get(x).unwrap().list, vec![x]);
        assert_eq!(first.get(grammar.eof()).unwrap().list, vec![grammar.eof()]);
    }
}
