//! Client-side errors, layered over the codec errors.

use starknet_client_types::{AbiError, CalldataError, FieldElement};
use thiserror::Error;

use crate::transport::TransportError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error(transparent)]
    Calldata(#[from] CalldataError),

    #[error("no function named {0} in the contract ABI")]
    UnknownFunction(String),

    #[error("unknown transaction status: {0}")]
    UnknownStatus(String),

    #[error("transaction was not received, gateway answered with code {code}")]
    SubmissionRejected { code: String },

    #[error("transaction {transaction_hash} was rejected")]
    TransactionRejected { transaction_hash: FieldElement },
}
