//! Reachability-first ordering of nonterminals.

use log::trace;

use crate::local_prelude::*;

/// Orders nonterminals by a depth-first walk from `start`.
///
/// The walk uses an explicit work stack. When a nonterminal is visited, the
/// nonterminals referenced by its rules are pushed so that the first one
/// referenced is visited next. A symbol already waiting on the stack is not
/// pushed again. Nonterminals never reached are appended afterward, in
/// `declared` order.
pub(crate) fn reachability_order(
    start: Symbol,
    declared: &[Symbol],
    rules_by_lhs: &[Vec<Box<[Symbol]>>],
    nonterminals: &SymbolBitSet,
    num_syms: usize,
) -> Vec<Symbol> {
    let mut order = Vec::with_capacity(declared.len());
    let mut visited = SymbolBitSet::from_elem(num_syms, false);
    let mut on_stack = SymbolBitSet::from_elem(num_syms, false);
    let mut work_stack = vec![];
    let mut referenced = vec![];

    if nonterminals[start] {
        work_stack.push(start);
        on_stack.set(start, true);
    }

    while let Some(lhs) = work_stack.pop() {
        on_stack.set(lhs, false);
        if visited[lhs] {
            continue;
        }
        visited.set(lhs, true);
        order.push(lhs);

        for rhs in &rules_by_lhs[lhs.usize()] {
            for &sym in &rhs[..] {
                if nonterminals[sym]
                    && !visited[sym]
                    && !on_stack[sym]
                    && !referenced.contains(&sym)
                {
                    referenced.push(sym);
                }
            }
        }
        trace!("visited {:?}, next {:?}", lhs, referenced);
        for sym in referenced.drain(..).rev() {
            on_stack.set(sym, true);
            work_stack.push(sym);
        }
    }

    for &lhs in declared {
        if !visited[lhs] {
            visited.set(lhs, true);
            order.push(lhs);
        }
    }

    order
}
