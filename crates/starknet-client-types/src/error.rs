//! Error types for the codec crates.
//!
//! All of these are local, synchronous and non-retryable: they indicate a
//! malformed document or a caller/ABI mismatch, never a transient condition.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FeltError {
    #[error("value {0} is out of range for the Stark field")]
    OutOfRange(String),

    #[error("invalid field element literal: {0}")]
    InvalidLiteral(String),
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum AbiError {
    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("cyclic type definition: {0}")]
    CyclicType(String),
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CalldataError {
    #[error("missing argument: {0}")]
    MissingArgument(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("calldata exhausted after {consumed} elements")]
    BufferUnderrun { consumed: usize },

    #[error("{remaining} calldata elements left over after decoding all outputs")]
    TrailingData { remaining: usize },

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("{0} is not a valid array length")]
    InvalidLength(String),

    #[error("{index} is not a variant index of enum {name}")]
    InvalidEnumIndex { name: String, index: String },
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum HintCodecError {
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    #[error("expected a single-key object, found {0} keys")]
    AmbiguousTag(usize),

    #[error("{variant}: missing field `{field}`")]
    MissingField { variant: &'static str, field: &'static str },

    #[error("{variant}: unexpected field `{field}`")]
    UnexpectedField { variant: &'static str, field: String },

    #[error("{context}: expected {expected}")]
    InvalidShape { context: String, expected: &'static str },

    #[error(transparent)]
    Felt(#[from] FeltError),
}

#[derive(Error, Debug)]
pub enum ContractClassError {
    #[error("invalid ABI shape: expected a string or an array of objects")]
    InvalidAbiShape,

    #[error("unrecognized contract class document")]
    UnknownDocument,

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}
