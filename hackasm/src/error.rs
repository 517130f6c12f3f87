use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("malformed instruction: {0}")]
    Malformed(String),

    #[error(transparent)]
    Encode(#[from] libhack::Error),

    #[error("symbol `{name}` is already bound to {address}")]
    DuplicateSymbol { name: String, address: u16 },

    #[error("literal `{0}` does not fit in 15 bits")]
    LiteralOutOfRange(String),

    #[error("program does not fit in {0} words of ROM")]
    RomOverflow(usize),
}

/// A failure tied to the source line that caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_no}: {kind}\n    {text}")]
pub struct AsmError {
    pub line_no: usize,
    pub text: String,
    pub kind: ErrorKind,
}

impl ErrorKind {
    pub fn at(self, line_no: usize, text: &str) -> AsmError {
        AsmError {
            line_no,
            text: text.trim().to_owned(),
            kind: self,
        }
    }
}
