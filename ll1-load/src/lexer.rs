//! Splits raw input into the terminals of a grammar.

use std::collections::BTreeMap;
use std::ops::Bound;

use ll1_grammar::Grammar;
use ll1_symbol::Symbol;
use log::trace;
use thiserror::Error;

/// Input text that does not spell any terminal.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unrecognized token `{text}` at byte {offset}")]
pub struct LexError {
    /// The text accumulated so far.
    pub text: String,
    /// Byte offset of the text within the input.
    pub offset: usize,
}

/// Splits `input` into terminals of `grammar`.
///
/// Characters are accumulated until they spell a terminal name, at which
/// point the terminal is emitted. Whitespace always ends a token, so a
/// name split by whitespace is not joined: `pri nt` is an error rather than
/// `print`. The end of input `$` is never produced; the parser appends it.
///
/// # Errors
///
/// Fails when the accumulated text is not a prefix of any terminal name,
/// or when a partial token is cut off by whitespace or the end of input.
pub fn tokenize(input: &str, grammar: &Grammar) -> Result<Vec<Symbol>, LexError> {
    let terminals: BTreeMap<&str, Symbol> = grammar
        .terminals()
        .filter(|&terminal| terminal != grammar.eof())
        .filter_map(|terminal| {
            grammar
                .sym_source()
                .name_of(terminal)
                .map(|name| (name, terminal))
        })
        .collect();

    let mut tokens = vec![];
    let mut pending: Option<usize> = None;
    let error = |begin: usize, end: usize| LexError {
        text: input[begin..end].to_string(),
        offset: begin,
    };

    for (offset, ch) in input.char_indices() {
        if ch.is_whitespace() {
            if let Some(begin) = pending {
                return Err(error(begin, offset));
            }
            continue;
        }
        let begin = *pending.get_or_insert(offset);
        let end = offset + ch.len_utf8();
        let text = &input[begin..end];
        if let Some(&terminal) = terminals.get(text) {
            trace!("token `{}` at byte {}", text, begin);
            tokens.push(terminal);
            pending = None;
        } else if !is_prefix(&terminals, text) {
            return Err(error(begin, end));
        }
    }
    if let Some(begin) = pending {
        return Err(error(begin, input.len()));
    }
    Ok(tokens)
}

/// Whether some terminal name starts with `text`.
fn is_prefix(terminals: &BTreeMap<&str, Symbol>, text: &str) -> bool {
    terminals
        .range::<str, _>((Bound::Included(text), Bound::Unbounded))
        .next()
        .map_or(false, |(name, _)| name.starts_with(text))
}
