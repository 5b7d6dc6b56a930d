//! Sample grammars with inputs they accept.

use clap::ValueEnum;

/// A built-in grammar and input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum Sample {
    /// Statement lists with arithmetic expressions.
    #[value(name = "1")]
    Statements,
    /// A function declaration.
    #[value(name = "2")]
    Functions,
}

impl Sample {
    pub(crate) fn grammar(self) -> &'static str {
        match self {
            Sample::Statements => {
                "P → SL
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
F → ( E )"
            }
            Sample::Functions => {
                "F → fun id ( P ) { B }
P → id P'
P → ε
P' → , id P'
P' → ε
B → S B
B → ε
S → return E ;
E → id"
            }
        }
    }

    pub(crate) fn input(self) -> &'static str {
        match self {
            Sample::Statements => "id = num + num ; print ( id + num )",
            Sample::Functions => "fun id ( id , id ) { return id ; }",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll1::{analyze, ParseOptions};

    #[test]
    fn test_samples_are_accepted() {
        for sample in [Sample::Statements, Sample::Functions] {
            let analysis =
                analyze(sample.grammar(), sample.input(), &ParseOptions::default()).unwrap();
            assert!(analysis.trace.is_accepted());
        }
    }
}
