use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use assert_matches::assert_matches;
use futures::future::BoxFuture;
use futures::FutureExt;
use indexmap::indexmap;
use serde_json::json;

use starknet_client::{
    Call, ClientError, Contract, InvokeFunction, InvokeResponse, TransactionStatus, Transport,
    TransportError,
};
use starknet_client_types::abi::AbiEntry;
use starknet_client_types::calldata::CallValue;
use starknet_client_types::{selector_from_name, FieldElement};

fn erc20_abi() -> Vec<AbiEntry> {
    serde_json::from_value(json!([
        {
            "type": "struct",
            "name": "Uint256",
            "size": 2,
            "members": [
                { "name": "low", "type": "felt", "offset": 0 },
                { "name": "high", "type": "felt", "offset": 1 }
            ]
        },
        {
            "type": "function",
            "name": "transfer",
            "inputs": [
                { "name": "recipient", "type": "felt" },
                { "name": "amount", "type": "Uint256" }
            ],
            "outputs": [ { "name": "success", "type": "felt" } ]
        },
        {
            "type": "function",
            "name": "balance_of",
            "inputs": [ { "name": "account", "type": "felt" } ],
            "outputs": [ { "name": "balance", "type": "Uint256" } ]
        }
    ]))
    .unwrap()
}

fn transfer_arguments() -> indexmap::IndexMap<String, CallValue> {
    indexmap! {
        "recipient".to_string() => CallValue::from(5_u64),
        "amount".to_string() => CallValue::Struct(indexmap! {
            "low".to_string() => CallValue::from(1_u64),
            "high".to_string() => CallValue::from(0_u64),
        }),
    }
}

#[derive(Default)]
struct MockTransport {
    response_code: Option<String>,
    call_result: Vec<FieldElement>,
    statuses: Mutex<VecDeque<&'static str>>,
    status_polls: AtomicUsize,
    last_invoke: Mutex<Option<InvokeFunction>>,
}

impl MockTransport {
    fn with_statuses(statuses: &[&'static str]) -> Self {
        Self {
            response_code: Some("TRANSACTION_RECEIVED".to_string()),
            statuses: Mutex::new(statuses.iter().copied().collect()),
            ..Self::default()
        }
    }
}

impl Transport for MockTransport {
    fn call_contract(&self, _call: Call) -> BoxFuture<'_, Result<Vec<FieldElement>, TransportError>> {
        futures::future::ready(Ok(self.call_result.clone())).boxed()
    }

    fn add_invoke_transaction(
        &self,
        invoke: InvokeFunction,
    ) -> BoxFuture<'_, Result<InvokeResponse, TransportError>> {
        *self.last_invoke.lock().unwrap() = Some(invoke);
        let response = match &self.response_code {
            Some(code) => Ok(InvokeResponse {
                code: code.clone(),
                transaction_hash: FieldElement::from(0xabc_u64),
            }),
            None => Err(TransportError::Network("connection reset".to_string())),
        };
        futures::future::ready(response).boxed()
    }

    fn get_transaction_status(
        &self,
        _transaction_hash: FieldElement,
    ) -> BoxFuture<'_, Result<String, TransportError>> {
        self.status_polls.fetch_add(1, Ordering::SeqCst);
        let status = self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .expect("status polled more times than scripted");
        futures::future::ready(Ok(status.to_string())).boxed()
    }
}

#[test]
fn prepare_invoke_flattens_the_transfer_arguments() {
    let transport = Arc::new(MockTransport::default());
    let contract = Contract::new(FieldElement::from(0x99_u64), &erc20_abi(), transport).unwrap();

    let invoke = contract
        .function("transfer")
        .unwrap()
        .prepare_invoke(&transfer_arguments(), vec![])
        .unwrap();

    assert_eq!(invoke.contract_address, FieldElement::from(0x99_u64));
    assert_eq!(invoke.entry_point_selector, selector_from_name("transfer"));
    assert_eq!(
        invoke.calldata,
        vec![FieldElement::from(5_u64), FieldElement::from(1_u64), FieldElement::from(0_u64)],
    );
    assert!(invoke.signature.is_empty());
}

#[test]
fn unknown_function_lookup_fails_by_name() {
    let transport = Arc::new(MockTransport::default());
    let contract = Contract::new(FieldElement::from(0x99_u64), &erc20_abi(), transport).unwrap();
    assert_matches!(
        contract.function("approve"),
        Err(ClientError::UnknownFunction(name)) if name == "approve"
    );
}

#[tokio::test]
async fn call_decodes_the_outputs_by_name() {
    let transport = Arc::new(MockTransport {
        call_result: vec![FieldElement::from(7_u64), FieldElement::from(0_u64)],
        ..MockTransport::default()
    });
    let contract =
        Contract::new(FieldElement::from(0x99_u64), &erc20_abi(), transport).unwrap();

    let outputs = contract
        .function("balance_of")
        .unwrap()
        .call(&indexmap! { "account".to_string() => CallValue::from(5_u64) })
        .await
        .unwrap();

    assert_eq!(
        outputs["balance"],
        CallValue::Struct(indexmap! {
            "low".to_string() => CallValue::from(7_u64),
            "high".to_string() => CallValue::from(0_u64),
        }),
    );
}

#[tokio::test]
async fn trailing_call_output_is_an_error() {
    let transport = Arc::new(MockTransport {
        call_result: vec![
            FieldElement::from(7_u64),
            FieldElement::from(0_u64),
            FieldElement::from(1_u64),
            FieldElement::from(2_u64),
        ],
        ..MockTransport::default()
    });
    let contract =
        Contract::new(FieldElement::from(0x99_u64), &erc20_abi(), transport).unwrap();

    let result = contract
        .function("balance_of")
        .unwrap()
        .call(&indexmap! { "account".to_string() => CallValue::from(5_u64) })
        .await;

    assert_matches!(
        result,
        Err(ClientError::Calldata(starknet_client_types::CalldataError::TrailingData {
            remaining: 2
        }))
    );
}

#[tokio::test]
async fn acceptance_takes_exactly_three_polls() {
    let transport =
        Arc::new(MockTransport::with_statuses(&["RECEIVED", "PENDING", "ACCEPTED_ON_L2"]));
    let contract =
        Contract::new(FieldElement::from(0x99_u64), &erc20_abi(), transport.clone()).unwrap();

    let result = contract
        .function("transfer")
        .unwrap()
        .invoke(&transfer_arguments(), vec![])
        .await
        .unwrap();
    assert_eq!(result.status, TransactionStatus::Received);

    let settled = result.wait_for_acceptance(true, Duration::ZERO).await.unwrap();
    assert_eq!(settled.status, TransactionStatus::AcceptedOnL2);
    assert_eq!(transport.status_polls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn pending_settles_the_wait_unless_acceptance_is_required() {
    let transport = Arc::new(MockTransport::with_statuses(&["RECEIVED", "PENDING"]));
    let contract =
        Contract::new(FieldElement::from(0x99_u64), &erc20_abi(), transport.clone()).unwrap();

    let result = contract
        .function("transfer")
        .unwrap()
        .invoke(&transfer_arguments(), vec![])
        .await
        .unwrap();

    let settled = result.wait_for_acceptance(false, Duration::ZERO).await.unwrap();
    assert_eq!(settled.status, TransactionStatus::Pending);
    assert_eq!(transport.status_polls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn a_rejected_transaction_fails_the_wait() {
    let transport = Arc::new(MockTransport::with_statuses(&["RECEIVED", "REJECTED"]));
    let contract =
        Contract::new(FieldElement::from(0x99_u64), &erc20_abi(), transport).unwrap();

    let result = contract
        .function("transfer")
        .unwrap()
        .invoke(&transfer_arguments(), vec![])
        .await
        .unwrap();

    assert_matches!(
        result.wait_for_acceptance(true, Duration::ZERO).await,
        Err(ClientError::TransactionRejected { transaction_hash })
            if transaction_hash == FieldElement::from(0xabc_u64)
    );
}

#[tokio::test]
async fn an_unknown_status_string_is_surfaced() {
    let transport = Arc::new(MockTransport::with_statuses(&["ACCEPTED"]));
    let contract =
        Contract::new(FieldElement::from(0x99_u64), &erc20_abi(), transport).unwrap();

    let result = contract
        .function("transfer")
        .unwrap()
        .invoke(&transfer_arguments(), vec![])
        .await
        .unwrap();

    assert_matches!(
        result.wait_for_acceptance(true, Duration::ZERO).await,
        Err(ClientError::UnknownStatus(status)) if status == "ACCEPTED"
    );
}

#[tokio::test]
async fn a_gateway_code_other_than_received_rejects_the_submission() {
    let transport = Arc::new(MockTransport {
        response_code: Some("TRANSACTION_FAILED".to_string()),
        ..MockTransport::default()
    });
    let contract =
        Contract::new(FieldElement::from(0x99_u64), &erc20_abi(), transport).unwrap();

    assert_matches!(
        contract.function("transfer").unwrap().invoke(&transfer_arguments(), vec![]).await,
        Err(ClientError::SubmissionRejected { code }) if code == "TRANSACTION_FAILED"
    );
}

#[tokio::test]
async fn transport_failures_pass_through() {
    let transport = Arc::new(MockTransport::default());
    let contract =
        Contract::new(FieldElement::from(0x99_u64), &erc20_abi(), transport).unwrap();

    assert_matches!(
        contract.function("transfer").unwrap().invoke(&transfer_arguments(), vec![]).await,
        Err(ClientError::Transport(TransportError::Network(_)))
    );
}
