mod support;

use ll1::{analyze, AnalysisError, LexError, LoadError, ParseOptions, ParseStatus, Rejection};
use support::*;

#[test]
fn test_analyze() {
    init_logging();
    let analysis = analyze(STATEMENTS, STATEMENTS_INPUT, &ParseOptions::default()).unwrap();

    assert!(analysis.trace.is_accepted());
    assert_eq!(analysis.tokens.len(), 12);
    assert_eq!(analysis.table.overwritten_cells(), 0);
    let start = analysis.grammar.start();
    assert!(analysis.follow.get(start).unwrap().contains(analysis.grammar.eof()));
    assert_eq!(
        analysis.first.get(start).unwrap().display(&analysis.grammar).to_string(),
        "{ id, print }"
    );
}

#[test]
fn test_malformed_grammar() {
    let result = analyze("this is not a grammar", "id", &ParseOptions::default());

    assert_eq!(
        result.unwrap_err(),
        AnalysisError::Load(LoadError::MalformedGrammar { lines: 1 })
    );
}

#[test]
fn test_unknown_token() {
    let result = analyze(ASSIGNMENTS, "id = 42", &ParseOptions::default());

    assert_eq!(
        result.unwrap_err(),
        AnalysisError::Lex(LexError {
            text: "4".to_string(),
            offset: 5
        })
    );
}

#[test]
fn test_empty_input() {
    let result = analyze(ASSIGNMENTS, " \n ", &ParseOptions::default());

    assert_eq!(result.unwrap_err(), AnalysisError::EmptyInput);
}

#[test]
fn test_options() {
    let options = ParseOptions {
        step_limit: Some(1),
    };
    let analysis = analyze(EXPRESSIONS, "id", &options).unwrap();

    assert_eq!(
        analysis.trace.status,
        ParseStatus::Rejected(Rejection::StepLimit)
    );
    assert_eq!(analysis.trace.steps.len(), 3);
}

#[test]
fn test_error_messages() {
    let err = analyze(ASSIGNMENTS, "id = 42", &ParseOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "unrecognized token `4` at byte 5");

    let err = analyze("", "id", &ParseOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed grammar: none of 0 non-blank lines holds a production"
    );
}
