use ll1_grammar::Grammar;
use ll1_load::GrammarLoadExt;
use ll1_predict_sets::{GrammarSetsExt, PredictSets};
use test_case::test_case;

const EXPRESSIONS: &str = r#"
    E  → T E'
    E' → + T E' | ε
    T  → id
"#;

const STATEMENTS: &str = r#"
    P  → SL
    SL → S ; SL | ε
    S  → id = E | print ( E )
    E  → T E'
    E' → + T E' | ε
    T  → id | num | ( E )
"#;

fn sets(text: &str, name: &str) -> (String, String) {
    let grammar = Grammar::load(text).unwrap();
    let sym = grammar.sym_by_name(name).unwrap();
    let first = grammar.first_sets();
    let follow = grammar.follow_sets_with_first(&first);
    (
        first.get(sym).unwrap().display(&grammar).to_string(),
        follow.get(sym).unwrap().display(&grammar).to_string(),
    )
}

#[test_case(EXPRESSIONS, "E", "{ id }", "{ $ }")]
#[test_case(EXPRESSIONS, "E'", "{ +, ε }", "{ $ }")]
#[test_case(EXPRESSIONS, "T", "{ id }", "{ $, + }")]
#[test_case(STATEMENTS, "SL", "{ id, print, ε }", "{ $ }")]
#[test_case(STATEMENTS, "S", "{ id, print }", "{ ; }")]
#[test_case(STATEMENTS, "E", "{ id, (, num }", "{ ;, ) }")]
#[test_case(STATEMENTS, "T", "{ id, (, num }", "{ ;, ), + }")]
fn test_sets(text: &str, name: &str, first: &str, follow: &str) {
    assert_eq!(sets(text, name), (first.to_string(), follow.to_string()));
}

#[test]
fn test_follow_never_has_empty() {
    let grammar = Grammar::load(STATEMENTS).unwrap();
    let follow = grammar.follow_sets();

    for (_, set) in follow.predict_sets() {
        assert!(!set.has_empty);
    }
    assert!(follow.get(grammar.start()).unwrap().contains(grammar.eof()));
}

#[test]
fn test_terminals_are_their_own_first() {
    let grammar = Grammar::load(STATEMENTS).unwrap();
    let first = grammar.first_sets();

    for terminal in grammar.terminals() {
        let set = first.get(terminal).unwrap();
        assert_eq!(set.list, vec![terminal]);
        assert!(!set.has_empty);
    }
}
