//! Tracking a submitted invocation until the network settles it.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use starknet_client_types::FieldElement;

use crate::error::ClientError;
use crate::transport::Transport;

/// How often [`InvocationResult::wait_for_acceptance`] polls by default.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(5);

/// Finality of a transaction as reported by the network.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransactionStatus {
    NotReceived,
    Received,
    Pending,
    AcceptedOnL2,
    AcceptedOnL1,
    Rejected,
}

impl TransactionStatus {
    pub fn is_accepted(self) -> bool {
        matches!(self, TransactionStatus::AcceptedOnL2 | TransactionStatus::AcceptedOnL1)
    }
}

impl FromStr for TransactionStatus {
    type Err = ClientError;

    fn from_str(status: &str) -> Result<Self, ClientError> {
        match status {
            "NOT_RECEIVED" => Ok(TransactionStatus::NotReceived),
            "RECEIVED" => Ok(TransactionStatus::Received),
            "PENDING" => Ok(TransactionStatus::Pending),
            "ACCEPTED_ON_L2" => Ok(TransactionStatus::AcceptedOnL2),
            "ACCEPTED_ON_L1" => Ok(TransactionStatus::AcceptedOnL1),
            "REJECTED" => Ok(TransactionStatus::Rejected),
            other => Err(ClientError::UnknownStatus(other.to_string())),
        }
    }
}

/// A handle to a submitted invocation.
///
/// Holds the transport it was submitted through so the caller can keep
/// polling without carrying the contract around.
pub struct InvocationResult {
    transport: Arc<dyn Transport>,
    pub transaction_hash: FieldElement,
    pub status: TransactionStatus,
}

impl std::fmt::Debug for InvocationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvocationResult")
            .field("transaction_hash", &self.transaction_hash)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl InvocationResult {
    pub(crate) fn new(transport: Arc<dyn Transport>, transaction_hash: FieldElement) -> Self {
        Self { transport, transaction_hash, status: TransactionStatus::Received }
    }

    /// Polls the transaction status every `check_interval` until it settles.
    ///
    /// With `wait_for_accept` unset, a `PENDING` status already counts as
    /// settled; otherwise only acceptance on L2 or L1 ends the loop. A
    /// `REJECTED` status always fails with
    /// [`ClientError::TransactionRejected`].
    pub async fn wait_for_acceptance(
        mut self,
        wait_for_accept: bool,
        check_interval: Duration,
    ) -> Result<Self, ClientError> {
        loop {
            let status_str =
                self.transport.get_transaction_status(self.transaction_hash.clone()).await?;
            let status = status_str.parse::<TransactionStatus>()?;
            log::debug!(
                "transaction {} reported {status_str}",
                self.transaction_hash.to_hex_string()
            );

            match status {
                TransactionStatus::Rejected => {
                    return Err(ClientError::TransactionRejected {
                        transaction_hash: self.transaction_hash,
                    });
                }
                _ if status.is_accepted() => {
                    self.status = status;
                    return Ok(self);
                }
                TransactionStatus::Pending if !wait_for_accept => {
                    self.status = status;
                    return Ok(self);
                }
                _ => {
                    self.status = status;
                }
            }

            tokio::time::sleep(check_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("NOT_RECEIVED", TransactionStatus::NotReceived)]
    #[case("RECEIVED", TransactionStatus::Received)]
    #[case("PENDING", TransactionStatus::Pending)]
    #[case("ACCEPTED_ON_L2", TransactionStatus::AcceptedOnL2)]
    #[case("ACCEPTED_ON_L1", TransactionStatus::AcceptedOnL1)]
    #[case("REJECTED", TransactionStatus::Rejected)]
    fn status_strings_parse_exactly(#[case] wire: &str, #[case] expected: TransactionStatus) {
        assert_eq!(wire.parse::<TransactionStatus>().unwrap(), expected);
    }

    #[test]
    fn casing_and_spelling_are_not_forgiven() {
        assert_matches!(
            "ACCEPTED".parse::<TransactionStatus>(),
            Err(ClientError::UnknownStatus(status)) if status == "ACCEPTED"
        );
        assert_matches!(
            "accepted_on_l2".parse::<TransactionStatus>(),
            Err(ClientError::UnknownStatus(_))
        );
    }

    #[test]
    fn only_l1_and_l2_acceptance_count_as_accepted() {
        assert!(TransactionStatus::AcceptedOnL2.is_accepted());
        assert!(TransactionStatus::AcceptedOnL1.is_accepted());
        assert!(!TransactionStatus::Pending.is_accepted());
        assert!(!TransactionStatus::Rejected.is_accepted());
    }
}
