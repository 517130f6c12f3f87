use indexmap::IndexMap;

use crate::{constants::PREDEFINED, error::ErrorKind};

/// Names bound to addresses for one assembly run. A name is bound once and
/// never rebound; entries come back in the order they were added.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: IndexMap<String, u16>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: PREDEFINED
                .iter()
                .map(|(name, address)| ((*name).to_owned(), *address))
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn add_entry(&mut self, name: &str, address: u16) -> Result<(), ErrorKind> {
        if let Some(bound) = self.symbols.get(name) {
            return Err(ErrorKind::DuplicateSymbol {
                name: name.to_owned(),
                address: *bound,
            });
        }
        self.symbols.insert(name.to_owned(), address);
        Ok(())
    }

    pub fn get_address(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.symbols.iter().map(|(name, address)| (name.as_str(), *address))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn predefined() {
        let table = SymbolTable::new();
        for i in 0..16 {
            assert_eq!(table.get_address(&format!("R{}", i)), Some(i));
        }
        assert_eq!(table.get_address("SP"), Some(0));
        assert_eq!(table.get_address("LCL"), Some(1));
        assert_eq!(table.get_address("ARG"), Some(2));
        assert_eq!(table.get_address("THIS"), Some(3));
        assert_eq!(table.get_address("THAT"), Some(4));
        assert_eq!(table.get_address("SCREEN"), Some(16384));
        assert_eq!(table.get_address("KBD"), Some(24576));
        assert_eq!(table.len(), 23);
    }

    #[test]
    fn case_sensitive() {
        let table = SymbolTable::new();
        assert!(table.contains("KBD"));
        assert!(!table.contains("kbd"));
        assert_eq!(table.get_address("r0"), None);
    }

    #[test]
    fn bind_once() {
        let mut table = SymbolTable::new();
        table.add_entry("LOOP", 4).unwrap();
        assert_eq!(table.get_address("LOOP"), Some(4));
        assert_eq!(
            table.add_entry("LOOP", 9),
            Err(ErrorKind::DuplicateSymbol {
                name: "LOOP".to_owned(),
                address: 4
            })
        );
        assert_eq!(table.get_address("LOOP"), Some(4));
        assert!(table.add_entry("SCREEN", 2).is_err());
    }

    #[test]
    fn insertion_order() {
        let mut table = SymbolTable::new();
        table.add_entry("END", 10).unwrap();
        table.add_entry("i", 16).unwrap();
        let tail = table.iter().skip(PREDEFINED.len()).collect::<Vec<_>>();
        assert_eq!(tail, vec![("END", 10), ("i", 16)]);
    }
}
