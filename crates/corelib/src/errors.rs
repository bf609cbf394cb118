use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DigestParseError {
    #[error("expected 64 hex characters, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digest: {0}")]
    InvalidHex(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MixConfigError {
    #[error("mix rounds {rounds} exceeds the maximum of {max}")]
    TooManyRounds { rounds: u32, max: u32 },
}
