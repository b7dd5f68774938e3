//! The wire boundary: request/response payloads and the transport trait the
//! contract binding is generic over.

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use starknet_client_types::FieldElement;
use thiserror::Error;

/// A read-only call against a contract entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub contract_address: FieldElement,
    pub entry_point_selector: FieldElement,
    pub calldata: Vec<FieldElement>,
}

/// A state-changing invocation, ready for submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeFunction {
    pub contract_address: FieldElement,
    pub entry_point_selector: FieldElement,
    pub calldata: Vec<FieldElement>,
    pub signature: Vec<FieldElement>,
}

/// The gateway acknowledges a submission with a code and the assigned hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeResponse {
    pub code: String,
    pub transaction_hash: FieldElement,
}

/// Code the gateway answers with when a transaction enters its queue.
pub const TRANSACTION_RECEIVED: &str = "TRANSACTION_RECEIVED";

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("endpoint {endpoint} answered with an error: {message}")]
    Endpoint { endpoint: &'static str, message: String },

    #[error("network failure: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// What the contract binding needs from a network backend.
///
/// Implementations are expected to be cheap to share; the binding keeps one
/// behind an `Arc` and issues concurrent requests through it.
pub trait Transport: Send + Sync {
    /// Executes a read-only call and returns the raw output elements.
    fn call_contract(&self, call: Call) -> BoxFuture<'_, Result<Vec<FieldElement>, TransportError>>;

    /// Submits an invocation to the gateway.
    fn add_invoke_transaction(
        &self,
        invoke: InvokeFunction,
    ) -> BoxFuture<'_, Result<InvokeResponse, TransportError>>;

    /// Fetches the finality status string for a transaction hash.
    fn get_transaction_status(
        &self,
        transaction_hash: FieldElement,
    ) -> BoxFuture<'_, Result<String, TransportError>>;
}
