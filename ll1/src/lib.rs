//! LL(1) grammar analysis.
//!
//! Loads a grammar from text, computes its FIRST and FOLLOW sets, builds a
//! predictive parse table and runs a parser that records each step it
//! takes, recovering from errors as it goes.
//!
//! ```
//! use ll1::{analyze, ParseOptions};
//!
//! let grammar = "
//!     E  → T E'
//!     E' → + T E' | ε
//!     T  → id
//! ";
//! let analysis = analyze(grammar, "id + id", &ParseOptions::default()).unwrap();
//! assert!(analysis.trace.is_accepted());
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod analysis;

pub use self::analysis::{analyze, Analysis, AnalysisError};
pub use ll1_grammar::*;
pub use ll1_load as load;
pub use ll1_load::{tokenize, GrammarLoadExt, LexError, LoadError};
pub use ll1_parse::*;
pub use ll1_predict_sets as predict_sets;
pub use ll1_predict_sets::{FirstSets, FollowSets, GrammarSetsExt, PerSymbolSetVal, PredictSets};
pub use ll1_table::{Cell, LlParseTable, LlParseTableKey};
