#![allow(dead_code)]

use ll1::{Grammar, GrammarLoadExt, Symbol};

pub const EXPRESSIONS: &str = "
E  → T E'
E' → + T E'
E' → ε
T  → id
";

pub const ASSIGNMENTS: &str = "
S → id = E
S → print ( E )
E → id
";

/// Statement lists with expressions.
pub const STATEMENTS: &str = "P → SL
SL → S SL'
SL' → ; S SL'
SL' → ε
S → id = E
S → print ( E )
E → T E'
E' → + T E'
E' → - T E'
E' → ε
T → F T'
T' → * F T'
T' → ε
F → id
F → num
F → ( E )";

pub const STATEMENTS_INPUT: &str = "id = num + num ; print ( id + num )";

/// A function declaration.
pub const FUNCTIONS: &str = "F → fun id ( P ) { B }
P → id P'
P → ε 
P' → , id P'
P' → ε 
B → S B
B → ε 
S → return E ;
E → id";

pub const FUNCTIONS_INPUT: &str = "fun id ( id , id ) { return id ; }";

pub fn load(text: &str) -> Grammar {
    Grammar::load(text).unwrap()
}

pub fn sym(grammar: &Grammar, name: &str) -> Symbol {
    grammar
        .sym_by_name(name)
        .unwrap_or_else(|| panic!("no symbol named {}", name))
}

pub fn syms(grammar: &Grammar, names: &str) -> Vec<Symbol> {
    names
        .split_whitespace()
        .map(|name| sym(grammar, name))
        .collect()
}

pub fn names(grammar: &Grammar, syms: &[Symbol]) -> String {
    syms.iter()
        .map(|&sym| grammar.name(sym).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
