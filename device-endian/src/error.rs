use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndianError {
    #[error("Expected a slice of exactly {expected} bytes; got {actual}.")]
    SliceLength { expected: usize, actual: usize },
    #[error("Unrecognized byte order `{0}`; expected `little` or `big`.")]
    UnknownByteOrder(String),
}
