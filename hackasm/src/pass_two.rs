use std::mem;

use libhack::{encode_address, encode_compute};
use log::{debug, info};

use crate::{
    constants::VARIABLE_BASE,
    error::{AsmError, ErrorKind},
    line::{LineKind, ParsedLine, Symbol},
    pass_one::PassOne,
    record::Record,
    symbols::SymbolTable,
};

struct PassTwo {
    next_variable: u16,
    records: Vec<Record>,
    pass_one: PassOne,
}

impl PassTwo {
    fn new(pass_one: PassOne) -> Self {
        Self {
            next_variable: VARIABLE_BASE,
            records: Vec::with_capacity(pass_one.parsed_lines.len()),
            pass_one,
        }
    }

    fn assemble_lines(mut self) -> Result<(Vec<Record>, SymbolTable), AsmError> {
        let lines = mem::take(&mut self.pass_one.parsed_lines);
        for line in lines.iter() {
            self.assemble_line(line)
                .map_err(|e| e.at(line.line_no, &line.source))?;
        }

        info!(
            "pass two: {} words, {} variables",
            self.records.len(),
            self.next_variable - VARIABLE_BASE
        );

        Ok((self.records, self.pass_one.symbols))
    }

    fn resolve(&mut self, symbol: &Symbol) -> Result<u16, ErrorKind> {
        match symbol {
            Symbol::Literal(value) => Ok(*value),
            Symbol::Name(name) => match self.pass_one.symbols.get_address(name) {
                Some(address) => Ok(address),
                None => {
                    let address = self.next_variable;
                    self.pass_one.symbols.add_entry(name, address)?;
                    self.next_variable += 1;
                    debug!("variable {} = {}", name, address);
                    Ok(address)
                }
            },
        }
    }

    fn assemble_line(&mut self, line: &ParsedLine) -> Result<(), ErrorKind> {
        let bits = match line.kind {
            LineKind::Label(_) => return Ok(()),
            LineKind::Address(ref symbol) => encode_address(self.resolve(symbol)?)?,
            LineKind::Compute {
                ref dest,
                ref comp,
                ref jump,
            } => encode_compute(dest, comp, jump)?,
        };

        self.records.push(Record {
            address: line.address,
            bits,
            line_no: line.line_no,
            text: line.text.clone(),
        });

        Ok(())
    }
}

/// Resolve every symbol and encode one word per address or compute line.
pub fn pass_two(pass_one: PassOne) -> Result<(Vec<Record>, SymbolTable), AsmError> {
    let pass = PassTwo::new(pass_one);
    pass.assemble_lines()
}
