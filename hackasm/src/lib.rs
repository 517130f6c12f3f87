use hackdbg::Hdb;
use libhack::Instruction;
use pass_one::FirstPass;
use pass_two::pass_two;

pub use error::{AsmError, ErrorKind};
pub use record::Record;
pub use symbols::SymbolTable;

mod constants;
mod error;
mod line;
mod pass_one;
mod pass_two;
mod record;
mod symbols;

/// Output of a successful run: the emitted words in source order and the
/// symbol table as it stood at the end of pass two.
#[derive(Debug, Clone)]
pub struct Assembled {
    pub records: Vec<Record>,
    pub symbols: SymbolTable,
}

impl Assembled {
    /// The `.hack` text: one 16-character word per line, no trailing newline.
    pub fn to_hack(&self) -> String {
        self.records
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn debug_info(&self, name: &str) -> Hdb {
        let mut debug = Hdb::new(name);
        for record in &self.records {
            debug.add_line(record.address, record.text.clone(), record.line_no);
        }
        for (symbol, address) in self.symbols.iter() {
            debug.add_symbol(symbol.to_owned(), address);
        }
        debug
    }

    pub fn listing(&self) -> String {
        self.records
            .iter()
            .map(|record| {
                let decoded = record
                    .word()
                    .and_then(|word| Instruction::from_word(word).ok())
                    .map_or_else(|| "????".to_owned(), |inst| inst.to_string());
                format!(
                    "[{:04X}] {} {:<12} | {:>4}: {}\n",
                    record.address, record.bits, decoded, record.line_no, record.text
                )
            })
            .collect()
    }
}

/// Run both passes over the program text.
///
/// # Errors
///
/// The first line that cannot be classified, resolved or encoded aborts the
/// run; no partial output is returned.
pub fn assemble(program_text: &str) -> Result<Assembled, AsmError> {
    let lines = program_text.lines().collect::<Vec<_>>();
    let pass_one = FirstPass::parse_lines(&lines)?;
    let (records, symbols) = pass_two(pass_one)?;

    Ok(Assembled { records, symbols })
}

/// Assemble a Hack program from text into `.hack` text.
///
/// # Errors
///
/// If there's an error in the assembly code
pub fn assemble_program(program_text: &str) -> Result<String, AsmError> {
    Ok(assemble(program_text)?.to_hack())
}
