//! The asynchronous half of the client: a typed contract binding over a
//! pluggable transport, plus finality tracking for submitted invocations.

pub mod contract;
pub mod error;
pub mod invocation;
pub mod transport;

pub use contract::{Contract, ContractFunction};
pub use error::ClientError;
pub use invocation::{InvocationResult, TransactionStatus, DEFAULT_CHECK_INTERVAL};
pub use transport::{Call, InvokeFunction, InvokeResponse, Transport, TransportError};
