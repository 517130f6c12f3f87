use std::fmt;

use libhack::Word;

/// One emitted instruction and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub address: u16,
    /// The encoded instruction as 16 `0`/`1` characters.
    pub bits: String,
    pub line_no: usize,
    pub text: String,
}

impl Record {
    pub fn word(&self) -> Option<Word> {
        Word::from_str_radix(&self.bits, 2).ok()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}
