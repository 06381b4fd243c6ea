//! Error types for VBK encoding and decoding

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A length or count prefix fell outside the `[min, max]` range of its field.
    #[error("{what}: length {got} out of range [{min}, {max}]")]
    MalformedLength {
        what: &'static str,
        got: i64,
        min: u64,
        max: u64,
    },

    #[error("Unexpected end of stream: need {need} bytes, {have} remaining")]
    TruncatedInput { need: usize, have: usize },

    #[error("{entity}: unsupported version {version}")]
    UnsupportedVersion { entity: &'static str, version: u32 },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Unknown discriminator: {0}")]
    UnknownDiscriminator(String),

    #[error("Encoding constraint violated: {0}")]
    EncodeConstraint(String),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CodecError {
    /// True for the error classes a decoder raises when its input ends early
    /// or claims more bytes than it has.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            CodecError::TruncatedInput { .. } | CodecError::MalformedLength { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
