//! A typed binding over a deployed contract's ABI.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use starknet_client_types::abi::{selector_from_name, AbiEntry, TypeNode, TypeResolver};
use starknet_client_types::calldata::{decode_arguments, encode_arguments, CallValue};
use starknet_client_types::FieldElement;

use crate::error::ClientError;
use crate::invocation::InvocationResult;
use crate::transport::{Call, InvokeFunction, Transport, TRANSACTION_RECEIVED};

/// A callable ABI function with its input and output types fully resolved.
#[derive(Clone)]
pub struct ContractFunction {
    pub name: String,
    pub selector: FieldElement,
    inputs: Vec<(String, TypeNode)>,
    outputs: Vec<(String, TypeNode)>,
    contract_address: FieldElement,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ContractFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractFunction")
            .field("name", &self.name)
            .field("selector", &self.selector)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("contract_address", &self.contract_address)
            .finish_non_exhaustive()
    }
}

impl ContractFunction {
    /// Encodes the arguments into a ready-to-sign invocation payload.
    pub fn prepare_invoke(
        &self,
        arguments: &IndexMap<String, CallValue>,
        signature: Vec<FieldElement>,
    ) -> Result<InvokeFunction, ClientError> {
        let calldata = encode_arguments(&self.inputs, arguments)?;
        Ok(InvokeFunction {
            contract_address: self.contract_address.clone(),
            entry_point_selector: self.selector.clone(),
            calldata,
            signature,
        })
    }

    /// Executes a read-only call and decodes the outputs by name.
    pub async fn call(
        &self,
        arguments: &IndexMap<String, CallValue>,
    ) -> Result<IndexMap<String, CallValue>, ClientError> {
        let calldata = encode_arguments(&self.inputs, arguments)?;
        let result = self
            .transport
            .call_contract(Call {
                contract_address: self.contract_address.clone(),
                entry_point_selector: self.selector.clone(),
                calldata,
            })
            .await?;
        Ok(decode_arguments(&self.outputs, &result)?)
    }

    /// Submits an invocation and returns a handle for tracking its finality.
    pub async fn invoke(
        &self,
        arguments: &IndexMap<String, CallValue>,
        signature: Vec<FieldElement>,
    ) -> Result<InvocationResult, ClientError> {
        let invoke = self.prepare_invoke(arguments, signature)?;
        let response = self.transport.add_invoke_transaction(invoke).await?;
        if response.code != TRANSACTION_RECEIVED {
            return Err(ClientError::SubmissionRejected { code: response.code });
        }
        log::debug!(
            "invoke of {} submitted as {}",
            self.name,
            response.transaction_hash.to_hex_string()
        );
        Ok(InvocationResult::new(self.transport.clone(), response.transaction_hash))
    }
}

/// A deployed contract: an address plus its resolved function table.
pub struct Contract {
    pub address: FieldElement,
    functions: HashMap<String, ContractFunction>,
}

impl Contract {
    /// Resolves every function and L1 handler signature in the ABI eagerly,
    /// so type errors surface at construction rather than at call time.
    pub fn new(
        address: FieldElement,
        abi: &[AbiEntry],
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ClientError> {
        let mut resolver = TypeResolver::new(abi);
        let mut functions = HashMap::new();
        for entry in abi {
            let (name, inputs, outputs) = match entry {
                AbiEntry::Function { name, inputs, outputs }
                | AbiEntry::L1Handler { name, inputs, outputs } => (name, inputs, outputs),
                _ => continue,
            };
            let resolve_params = |resolver: &mut TypeResolver,
                                  params: &[starknet_client_types::abi::TypedParameter]|
             -> Result<Vec<(String, TypeNode)>, ClientError> {
                params
                    .iter()
                    .map(|param| Ok((param.name.clone(), resolver.resolve(&param.ty)?)))
                    .collect()
            };
            functions.insert(
                name.clone(),
                ContractFunction {
                    name: name.clone(),
                    selector: selector_from_name(name),
                    inputs: resolve_params(&mut resolver, inputs)?,
                    outputs: resolve_params(&mut resolver, outputs)?,
                    contract_address: address.clone(),
                    transport: transport.clone(),
                },
            );
        }
        Ok(Self { address, functions })
    }

    pub fn function(&self, name: &str) -> Result<&ContractFunction, ClientError> {
        self.functions.get(name).ok_or_else(|| ClientError::UnknownFunction(name.to_string()))
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}
