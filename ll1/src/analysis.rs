//! The whole analysis in one call.

use ll1_grammar::{Grammar, Symbol};
use ll1_load::{tokenize, GrammarLoadExt, LexError, LoadError};
use ll1_parse::{ParseOptions, Parser, Trace};
use ll1_predict_sets::{FirstSets, FollowSets, GrammarSetsExt};
use ll1_table::LlParseTable;
use log::debug;
use thiserror::Error;

/// An error that stops the analysis before parsing.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum AnalysisError {
    /// The grammar could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The input could not be split into terminals.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The input holds no terminals.
    #[error("the input is empty")]
    EmptyInput,
}

/// Everything computed for a grammar and an input.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// The loaded grammar.
    pub grammar: Grammar,
    /// FIRST sets of all symbols.
    pub first: FirstSets,
    /// FOLLOW sets of nonterminals.
    pub follow: FollowSets,
    /// The parse table.
    pub table: LlParseTable,
    /// The input, split into terminals.
    pub tokens: Vec<Symbol>,
    /// The parse run.
    pub trace: Trace,
}

/// Loads a grammar, splits the input and parses it.
///
/// # Errors
///
/// Fails when the grammar has no productions, or the input is empty or
/// holds text that is not a terminal. The parser does not run in these
/// cases.
pub fn analyze(
    grammar_text: &str,
    raw_input: &str,
    options: &ParseOptions,
) -> Result<Analysis, AnalysisError> {
    let grammar = Grammar::load(grammar_text)?;
    let tokens = tokenize(raw_input, &grammar)?;
    if tokens.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let first = grammar.first_sets();
    let follow = grammar.follow_sets_with_first(&first);
    let table = LlParseTable::with_sets(&grammar, &first, &follow);
    let parser = Parser::with_table(&grammar, table).with_options(*options);
    let trace = parser.parse(&tokens);
    let table = parser.into_table();
    debug!(
        "analyzed {} tokens in {} steps: {:?}",
        tokens.len(),
        trace.steps.len(),
        trace.status
    );

    Ok(Analysis {
        grammar,
        first,
        follow,
        table,
        tokens,
        trace,
    })
}
