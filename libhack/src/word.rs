use crate::{
    error::Error,
    op::{Compute, Instruction},
};

pub type Word = u16;

/// Largest value an address instruction can load; bit 15 is the opcode.
pub const ADDRESS_MAX: u16 = 0x7FFF;

pub trait WordExt {
    fn as_bin_string(&self) -> String;
    fn is_address(&self) -> bool;
}

impl WordExt for Word {
    fn as_bin_string(&self) -> String {
        format!("{:0>16b}", self)
    }

    fn is_address(&self) -> bool {
        self & 0x8000 == 0
    }
}

/// Encode `@value` as its 16-character binary text.
pub fn encode_address(value: u16) -> Result<String, Error> {
    Ok(Instruction::Address(value).to_word()?.as_bin_string())
}

/// Encode `dest=comp;jump` as its 16-character binary text. Empty `dest` and
/// `jump` select the null codes.
pub fn encode_compute(dest: &str, comp: &str, jump: &str) -> Result<String, Error> {
    let compute = Compute::from_mnemonics(dest, comp, jump)?;
    Ok(Instruction::Compute(compute).to_word()?.as_bin_string())
}
