//! Source of fresh symbols.

use std::borrow::Cow;

use crate::Symbol;

/// The name a symbol was created with.
pub type SymbolName = Box<str>;

/// A source of numeric symbols.
///
/// Every symbol may carry a name. Names are used for display only; two
/// symbols may share a name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolSource {
    names: Vec<Option<SymbolName>>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self { names: vec![] }
    }

    /// Returns generated symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        let mut result = [Symbol::default(); N];
        for dest in &mut result {
            *dest = self.next_sym(None);
        }
        result
    }

    /// Generates a new unique symbol.
    ///
    /// If a name is given, it will be recorded within the symbol
    /// source.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        let ret = Symbol::from(self.names.len());
        self.names.push(name.map(|name| name.into_owned().into_boxed_str()));
        ret
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Returns the name of the given symbol, if it has one.
    pub fn name_of(&self, sym: Symbol) -> Option<&str> {
        self.names.get(sym.usize()).and_then(|name| name.as_deref())
    }

    /// Returns the name of the given symbol, or `#<id>` for
    /// anonymous symbols.
    pub fn display_name(&self, sym: Symbol) -> Cow<'_, str> {
        match self.name_of(sym) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("#{}", sym.usize())),
        }
    }

    /// Iterates over all symbols generated so far.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.num_syms()).map(Symbol::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let mut source = SymbolSource::new();
        let [a] = source.sym();
        let b = source.next_sym(Some("id".into()));
        assert_eq!(source.num_syms(), 2);
        assert_eq!(source.name_of(a), None);
        assert_eq!(source.name_of(b), Some("id"));
        assert_eq!(source.display_name(a), "#0");
        assert_eq!(source.display_name(b), "id");
    }

    #[test]
    fn test_symbols() {
        let mut source = SymbolSource::new();
        let syms: [Symbol; 3] = source.sym();
        assert_eq!(syms, [Symbol::from(0u32), 1u32.into(), 2u32.into()]);
        assert_eq!(source.symbols().collect::<Vec<_>>(), syms);
    }
}
