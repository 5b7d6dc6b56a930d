//! Set computation as methods on the grammar.

use ll1_grammar::Grammar;

use crate::{FirstSets, FollowSets};

/// Extension trait for computing FIRST and FOLLOW sets.
pub trait GrammarSetsExt {
    /// Computes FIRST sets.
    fn first_sets(&self) -> FirstSets;
    /// Computes FOLLOW sets, along with the FIRST sets they need.
    fn follow_sets(&self) -> FollowSets;
    /// Computes FOLLOW sets from already computed FIRST sets.
    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets;
}

impl GrammarSetsExt for Grammar {
    fn first_sets(&self) -> FirstSets {
        FirstSets::new(self)
    }

    fn follow_sets(&self) -> FollowSets {
        FollowSets::new(self, &self.first_sets())
    }

    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets {
        FollowSets::new(self, first_sets)
    }
}
