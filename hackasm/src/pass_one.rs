use log::{debug, info};

use crate::{
    constants::ROM_SIZE,
    error::{AsmError, ErrorKind},
    line::{classify, normalize, LineKind, ParsedLine},
    symbols::SymbolTable,
};

pub struct FirstPass {
    pc: usize,
    symbols: SymbolTable,
}

pub struct PassOne {
    pub parsed_lines: Vec<ParsedLine>,
    pub symbols: SymbolTable,
}

impl FirstPass {
    fn new() -> Self {
        Self {
            pc: 0,
            symbols: SymbolTable::new(),
        }
    }

    /// Classify every line and bind labels to the address of the next real
    /// instruction. Blank and comment lines are dropped here.
    pub fn parse_lines(lines: &[&str]) -> Result<PassOne, AsmError> {
        let mut pass = Self::new();
        let parsed_lines = lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| pass.parse_line(idx + 1, line).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "pass one: {} instructions, {} symbols",
            pass.pc,
            pass.symbols.len()
        );

        Ok(PassOne {
            parsed_lines,
            symbols: pass.symbols,
        })
    }

    fn parse_line(&mut self, line_no: usize, raw: &str) -> Result<Option<ParsedLine>, AsmError> {
        let Some(text) = normalize(raw) else {
            return Ok(None);
        };
        let kind = classify(text).map_err(|e| e.at(line_no, raw))?;

        // pc never exceeds ROM_SIZE, which fits in a u16
        let address = self.pc as u16;

        if let LineKind::Label(ref name) = kind {
            self.symbols
                .add_entry(name, address)
                .map_err(|e| e.at(line_no, raw))?;
            debug!("label {} = {}", name, address);
        } else {
            if self.pc == ROM_SIZE {
                return Err(ErrorKind::RomOverflow(ROM_SIZE).at(line_no, raw));
            }
            self.pc += 1;
        }

        Ok(Some(ParsedLine {
            line_no,
            text: text.to_owned(),
            source: raw.trim().to_owned(),
            kind,
            address,
        }))
    }
}
