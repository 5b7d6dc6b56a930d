//! FOLLOW sets.

use ll1_grammar::Grammar;
use ll1_symbol::Symbol;
use log::{debug, trace};

use crate::first::FirstSets;
use crate::sets::{PerSymbolSetVal, PerSymbolSets, PredictSets};

/// FOLLOW sets.
#[derive(Clone, Debug)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// For every occurrence of a nonterminal `B` in a rule `A → α B β`,
    /// FOLLOW(B) receives the FIRST set of the symbol right after `B`. If
    /// that symbol is nullable, or `B` ends the rule, FOLLOW(B) also
    /// receives FOLLOW(A). The start symbol is followed by `$`.
    ///
    /// Only the symbol right after `B` is looked at. With `A → B C D` and a
    /// nullable `C`, FOLLOW(B) receives FOLLOW(A), not FIRST(D).
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let mut map = PerSymbolSets::new();
        for nonterminal in grammar.nonterminals() {
            map.insert(nonterminal, PerSymbolSetVal::new());
        }
        if let Some(follow_set) = map.get_mut(&grammar.start()) {
            follow_set.insert(grammar.eof());
        }

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            let snapshot = map.clone();
            for rule in grammar.rules() {
                let Some(lhs_follow) = snapshot.get(&rule.lhs) else {
                    continue;
                };
                for (i, &sym) in rule.rhs.iter().enumerate() {
                    let Some(follow_set) = map.get_mut(&sym) else {
                        // A terminal.
                        continue;
                    };
                    match rule.rhs.get(i + 1).and_then(|&next| first_sets.get(next)) {
                        Some(next_first) => {
                            changed |= follow_set.union_terminals(next_first);
                            if next_first.has_empty {
                                changed |= follow_set.union_terminals(lhs_follow);
                            }
                        }
                        None => {
                            changed |= follow_set.union_terminals(lhs_follow);
                        }
                    }
                }
            }
            trace!("FOLLOW pass {}: changed = {}", passes, changed);
        }
        debug!("FOLLOW sets converged after {} passes", passes);

        FollowSets { map }
    }

    /// Returns the FOLLOW set of a nonterminal.
    pub fn get(&self, sym: Symbol) -> Option<&PerSymbolSetVal> {
        self.map.get(&sym)
    }
}

impl PredictSets for FollowSets {
    /// Returns a reference to FOLLOW sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
