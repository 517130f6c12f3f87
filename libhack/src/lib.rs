pub use error::Error;
pub use op::{Comp, Compute, Dest, Instruction, Jump};
pub use word::{encode_address, encode_compute, Word, WordExt, ADDRESS_MAX};

pub mod error;
pub mod op;
pub mod word;
