//! Plain-text tables.

use std::iter;

use ll1::{Analysis, Cell, Grammar, ParseStatus, Symbol};

/// FIRST and FOLLOW sets of every nonterminal, in grammar order.
pub(crate) fn sets(analysis: &Analysis) -> String {
    let grammar = &analysis.grammar;
    let rows: Vec<Vec<String>> = grammar
        .nonterminals()
        .map(|nonterminal| {
            let first = analysis
                .first
                .get(nonterminal)
                .map(|set| set.display(grammar).to_string());
            let follow = analysis
                .follow
                .get(nonterminal)
                .map(|set| set.display(grammar).to_string());
            vec![
                grammar.name(nonterminal).into_owned(),
                first.unwrap_or_default(),
                follow.unwrap_or_default(),
            ]
        })
        .collect();
    boxed(&["NONTERMINAL", "FIRST", "FOLLOW"], &rows)
}

/// The parse table. Terminals are sorted by name, with `$` last.
pub(crate) fn table(analysis: &Analysis) -> String {
    let grammar = &analysis.grammar;
    let columns = sorted_terminals(grammar);
    let mut headers = vec![String::new()];
    headers.extend(columns.iter().map(|&terminal| grammar.name(terminal).into_owned()));

    let rows: Vec<Vec<String>> = grammar
        .nonterminals()
        .map(|nonterminal| {
            let cells = columns.iter().map(|&terminal| {
                match analysis.table.get(nonterminal, terminal) {
                    Some(Cell::Rule(rule_id)) => grammar.display_rhs(rule_id).to_string(),
                    Some(Cell::Extract) => "extract".to_string(),
                    Some(Cell::Explore) => "explore".to_string(),
                    None => String::new(),
                }
            });
            iter::once(grammar.name(nonterminal).into_owned())
                .chain(cells)
                .collect()
        })
        .collect();
    let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
    boxed(&headers, &rows)
}

/// The derivation as a `STACK | INPUT | ACTION` table.
pub(crate) fn trace(analysis: &Analysis) -> String {
    let grammar = &analysis.grammar;
    let rows: Vec<Vec<String>> = analysis
        .trace
        .steps
        .iter()
        .map(|step| {
            vec![
                names(grammar, &step.stack),
                names(grammar, &step.input),
                step.action.display(grammar).to_string(),
            ]
        })
        .collect();
    boxed(&["STACK", "INPUT", "ACTION"], &rows)
}

/// One line about the outcome.
pub(crate) fn status(analysis: &Analysis) -> String {
    match analysis.trace.status {
        ParseStatus::Accepted if analysis.trace.has_errors() => {
            "accepted after recovering from errors".to_string()
        }
        ParseStatus::Accepted => "accepted".to_string(),
        ParseStatus::Rejected(rejection) => format!("rejected: {}", rejection),
        ParseStatus::Running => "running".to_string(),
    }
}

fn sorted_terminals(grammar: &Grammar) -> Vec<Symbol> {
    let mut terminals: Vec<Symbol> = grammar
        .terminals()
        .filter(|&terminal| terminal != grammar.eof())
        .collect();
    terminals.sort_by(|&a, &b| grammar.name(a).cmp(&grammar.name(b)));
    terminals.push(grammar.eof());
    terminals
}

fn names(grammar: &Grammar, syms: &[Symbol]) -> String {
    let names: Vec<_> = syms.iter().map(|&sym| grammar.name(sym)).collect();
    names.join(" ")
}

fn boxed(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator: String = widths
        .iter()
        .map(|&width| format!("+{}", "-".repeat(width + 2)))
        .chain(iter::once("+\n".to_string()))
        .collect();
    let mut out = separator.clone();
    out.push_str(&boxed_line(headers.iter().copied(), &widths));
    out.push_str(&separator);
    for row in rows {
        out.push_str(&boxed_line(row.iter().map(String::as_str), &widths));
    }
    out.push_str(&separator);
    out
}

fn boxed_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line: String = cells
        .zip(widths)
        .map(|(cell, &width)| format!("| {:<width$} ", cell, width = width))
        .collect();
    line.push_str("|\n");
    line
}
