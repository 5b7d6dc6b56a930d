//! Utility for string interning.

use elsa::FrozenIndexSet;

use ll1_grammar::GrammarBuilder;
use ll1_symbol::Symbol;

/// Collects symbol names and hands out one symbol per distinct name.
pub(crate) struct StringInterner {
    set: FrozenIndexSet<String>,
    symbols: Vec<Symbol>,
}

impl StringInterner {
    /// Creates a new `StringInterner` that already knows the builder's
    /// end of input.
    pub(crate) fn new(builder: &GrammarBuilder) -> Self {
        let set = FrozenIndexSet::new();
        let name = builder
            .sym_source()
            .display_name(builder.eof())
            .into_owned();
        set.insert(name);
        StringInterner {
            set,
            symbols: vec![builder.eof()],
        }
    }

    /// Retrieves the symbol for a name, or generates a new symbol
    /// if the name was not seen before.
    pub(crate) fn get_or_intern<T>(&mut self, builder: &mut GrammarBuilder, value: T) -> Symbol
    where
        T: AsRef<str>,
    {
        let name = value.as_ref();
        let (index, _) = self.set.insert_full(name.to_string());
        if index == self.symbols.len() {
            self.symbols.push(builder.next_sym(Some(name.into())));
        }
        self.symbols[index]
    }
}
