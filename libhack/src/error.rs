use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown destination `{0}`")]
    UnknownDest(String),

    #[error("unknown computation `{0}`")]
    UnknownComp(String),

    #[error("unknown jump `{0}`")]
    UnknownJump(String),

    #[error("address {0} does not fit in 15 bits")]
    AddressOutOfRange(u16),

    #[error("{0:#06X} is not a valid instruction word")]
    InvalidWord(u16),
}
