use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    #[error("frequency table holds no symbols")]
    EmptyAlphabet,
    #[error("no code for symbol {0}")]
    UnknownSymbol(u8),
    #[error("malformed tree serialization: {0}")]
    MalformedSerialization(&'static str),
    #[error("bitstream truncated: {needed} bits requested, {available} available")]
    TruncatedBitstream { needed: usize, available: usize },
}
