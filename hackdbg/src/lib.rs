use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
pub use serde_json::Error;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HdbLine {
    pub address: u16,
    pub text: String,
    pub line_number: usize,
}

/// Debug symbols for one assembled program. Maps are kept in insertion
/// order so the same program always serializes to the same bytes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Hdb {
    pub name: String,
    pub lines: Vec<HdbLine>,
    pub address_map: IndexMap<u16, usize>,
    pub symbols: IndexMap<String, u16>,
}

impl Hdb {
    pub fn new(name: &str) -> Self {
        Hdb {
            name: name.into(),
            lines: Vec::new(),
            address_map: IndexMap::new(),
            symbols: IndexMap::new(),
        }
    }

    pub fn to_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_string(dbg: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(dbg)
    }

    pub fn add_symbol(&mut self, symbol: String, address: u16) {
        self.symbols.insert(symbol, address);
    }

    pub fn add_line(&mut self, address: u16, text: String, line_number: usize) {
        self.lines.push(HdbLine {
            address,
            text,
            line_number,
        });
        self.address_map.insert(address, self.lines.len() - 1);
    }

    pub fn line_for(&self, address: u16) -> Option<&HdbLine> {
        self.address_map
            .get(&address)
            .and_then(|idx| self.lines.get(*idx))
    }
}
