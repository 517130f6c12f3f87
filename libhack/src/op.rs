use std::fmt;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use strum::{Display, EnumIter, EnumString};

use crate::{error::Error, word::Word, ADDRESS_MAX};

const COMPUTE_PREFIX: Word = 0b111 << 13;

#[allow(clippy::upper_case_acronyms)]
#[derive(FromPrimitive, EnumString, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dest {
    #[strum(serialize = "")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

// Discriminants carry the a-bit followed by c1..c6.
#[derive(FromPrimitive, EnumString, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comp {
    #[strum(serialize = "0")]
    Zero = 0b0101010,
    #[strum(serialize = "1")]
    One = 0b0111111,
    #[strum(serialize = "-1")]
    NegOne = 0b0111010,
    #[strum(serialize = "D")]
    D = 0b0001100,
    #[strum(serialize = "A")]
    A = 0b0110000,
    #[strum(serialize = "!D")]
    NotD = 0b0001101,
    #[strum(serialize = "!A")]
    NotA = 0b0110001,
    #[strum(serialize = "-D")]
    NegD = 0b0001111,
    #[strum(serialize = "-A")]
    NegA = 0b0110011,
    #[strum(serialize = "D+1")]
    DPlusOne = 0b0011111,
    #[strum(serialize = "A+1")]
    APlusOne = 0b0110111,
    #[strum(serialize = "D-1")]
    DMinusOne = 0b0001110,
    #[strum(serialize = "A-1")]
    AMinusOne = 0b0110010,
    #[strum(serialize = "D+A")]
    DPlusA = 0b0000010,
    #[strum(serialize = "D-A")]
    DMinusA = 0b0010011,
    #[strum(serialize = "A-D")]
    AMinusD = 0b0000111,
    #[strum(serialize = "D&A")]
    DAndA = 0b0000000,
    #[strum(serialize = "D|A")]
    DOrA = 0b0010101,
    #[strum(serialize = "M")]
    M = 0b1110000,
    #[strum(serialize = "!M")]
    NotM = 0b1110001,
    #[strum(serialize = "-M")]
    NegM = 0b1110011,
    #[strum(serialize = "M+1")]
    MPlusOne = 0b1110111,
    #[strum(serialize = "M-1")]
    MMinusOne = 0b1110010,
    #[strum(serialize = "D+M")]
    DPlusM = 0b1000010,
    #[strum(serialize = "D-M")]
    DMinusM = 0b1010011,
    #[strum(serialize = "M-D")]
    MMinusD = 0b1000111,
    #[strum(serialize = "D&M")]
    DAndM = 0b1000000,
    #[strum(serialize = "D|M")]
    DOrM = 0b1010101,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(FromPrimitive, EnumString, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jump {
    #[strum(serialize = "")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compute {
    pub dest: Dest,
    pub comp: Comp,
    pub jump: Jump,
}

impl Compute {
    /// Look up each field in its table. Unknown mnemonics are errors, there is
    /// no fallback code.
    pub fn from_mnemonics(dest: &str, comp: &str, jump: &str) -> Result<Self, Error> {
        Ok(Self {
            dest: dest
                .parse()
                .map_err(|_| Error::UnknownDest(dest.to_owned()))?,
            comp: comp
                .parse()
                .map_err(|_| Error::UnknownComp(comp.to_owned()))?,
            jump: jump
                .parse()
                .map_err(|_| Error::UnknownJump(jump.to_owned()))?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Address(u16),
    Compute(Compute),
}

impl Instruction {
    pub fn to_word(&self) -> Result<Word, Error> {
        match self {
            Instruction::Address(value) if *value > ADDRESS_MAX => {
                Err(Error::AddressOutOfRange(*value))
            }
            Instruction::Address(value) => Ok(*value),
            Instruction::Compute(Compute { dest, comp, jump }) => Ok(COMPUTE_PREFIX
                | (*comp as Word) << 6
                | (*dest as Word) << 3
                | *jump as Word),
        }
    }

    pub fn from_word(word: Word) -> Result<Self, Error> {
        if word & 0x8000 == 0 {
            return Ok(Instruction::Address(word));
        }
        if word & COMPUTE_PREFIX != COMPUTE_PREFIX {
            return Err(Error::InvalidWord(word));
        }

        let comp = Comp::from_u16((word >> 6) & 0x7F).ok_or(Error::InvalidWord(word))?;
        let dest = Dest::from_u16((word >> 3) & 0x07).ok_or(Error::InvalidWord(word))?;
        let jump = Jump::from_u16(word & 0x07).ok_or(Error::InvalidWord(word))?;

        Ok(Instruction::Compute(Compute { dest, comp, jump }))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Address(value) => write!(f, "@{}", value),
            Instruction::Compute(Compute { dest, comp, jump }) => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}
