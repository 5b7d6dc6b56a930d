mod support;

use ll1::{
    parse_with_trace, tokenize, Action, ParseOptions, ParseStatus, Parser, Rejection, Trace,
};
use support::*;
use test_case::test_case;

fn actions(grammar: &ll1::Grammar, trace: &Trace) -> Vec<String> {
    trace
        .steps
        .iter()
        .map(|step| step.action.display(grammar).to_string())
        .collect()
}

#[test]
fn test_assignment() {
    init_logging();
    let grammar = load(ASSIGNMENTS);
    let tokens = syms(&grammar, "id = id");
    let trace = parse_with_trace(&tokens, &grammar);

    assert_eq!(trace.status, ParseStatus::Accepted);
    assert_eq!(trace.matched().collect::<Vec<_>>(), tokens);
}

#[test]
fn test_expression_steps() {
    let grammar = load(EXPRESSIONS);
    let trace = parse_with_trace(&syms(&grammar, "id + id"), &grammar);

    assert_eq!(
        actions(&grammar, &trace),
        [
            "init",
            "E → T E'",
            "T → id",
            "match id",
            "E' → + T E'",
            "match +",
            "T → id",
            "match id",
            "E' → ε",
            "accept",
        ]
    );
    let first = &trace.steps[0];
    assert_eq!(names(&grammar, &first.stack), "$ E");
    assert_eq!(names(&grammar, &first.input), "id + id $");
    let last = &trace.steps[trace.steps.len() - 1];
    assert_eq!(names(&grammar, &last.stack), "$");
    assert_eq!(names(&grammar, &last.input), "$");
}

#[test]
fn test_mismatch_discards_one_token() {
    let grammar = load(ASSIGNMENTS);
    let trace = parse_with_trace(&syms(&grammar, "id id = id"), &grammar);

    assert!(trace.is_accepted());
    let position = trace
        .steps
        .iter()
        .position(|step| matches!(step.action, Action::Mismatch { .. }))
        .unwrap();
    let (mismatch, next) = (&trace.steps[position], &trace.steps[position + 1]);
    assert_eq!(
        mismatch.action.display(&grammar).to_string(),
        "error: expected =, found id (explore)"
    );
    assert_eq!(next.stack, mismatch.stack);
    assert_eq!(next.input[..], mismatch.input[1..]);
    assert_eq!(names(&grammar, &trace.matched().collect::<Vec<_>>()), "id = id");
}

#[test]
fn test_recovery_cells() {
    let grammar = load(STATEMENTS);
    // `id = ;` drops E through its FOLLOW set, and the second `print` is discarded.
    let tokens = syms(&grammar, "id = ; print print ( id )");
    let trace = parse_with_trace(&tokens, &grammar);

    assert!(trace.is_accepted());
    assert!(trace.has_errors());
    let recoveries: Vec<_> = trace
        .steps
        .iter()
        .filter(|step| step.action.is_recovery())
        .map(|step| step.action.display(&grammar).to_string())
        .collect();
    assert_eq!(
        recoveries,
        [
            "extract E (; ∈ FOLLOW(E))",
            "error: expected (, found print (explore)",
        ]
    );
}

#[test_case(STATEMENTS, STATEMENTS_INPUT ; "statement list")]
#[test_case(FUNCTIONS, FUNCTIONS_INPUT ; "function declaration")]
fn test_sample_inputs(text: &str, input: &str) {
    let grammar = load(text);
    let tokens = tokenize(input, &grammar).unwrap();
    let trace = parse_with_trace(&tokens, &grammar);

    assert!(trace.is_accepted());
    assert!(!trace.has_errors());
    assert_eq!(trace.matched().collect::<Vec<_>>(), tokens);
    assert_eq!(trace.steps[0].action, Action::Init);
}

#[test_case(FUNCTIONS, "fun id ( id", "explore: discard $" ; "explore at end")]
#[test_case(ASSIGNMENTS, "print ( id", "error: expected ), found $ (explore)" ; "mismatch at end")]
fn test_input_exhausted(text: &str, input: &str, error: &str) {
    let grammar = load(text);
    let trace = parse_with_trace(&syms(&grammar, input), &grammar);

    assert_eq!(trace.status, ParseStatus::Rejected(Rejection::InputExhausted));
    let tail = &actions(&grammar, &trace)[trace.steps.len() - 2..];
    assert_eq!(tail, [error, "reject: input exhausted"]);
}

#[test_case(Some(3), ParseStatus::Rejected(Rejection::StepLimit) ; "limited")]
#[test_case(None, ParseStatus::Accepted ; "unlimited")]
fn test_step_limit(step_limit: Option<usize>, status: ParseStatus) {
    let grammar = load(EXPRESSIONS);
    let trace = Parser::new(&grammar)
        .with_options(ParseOptions { step_limit })
        .parse(&syms(&grammar, "id + id"));

    assert_eq!(trace.status, status);
}

#[test]
fn test_unexpected_end() {
    let grammar = load(ASSIGNMENTS);
    let trace = parse_with_trace(&syms(&grammar, "id = id id"), &grammar);

    assert_eq!(trace.status, ParseStatus::Rejected(Rejection::UnexpectedEnd));
    let last = trace.steps.last().unwrap();
    assert_eq!(names(&grammar, &last.input), "id $");
}
