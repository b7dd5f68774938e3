//! Codec types for Starknet contract artifacts and call payloads.
//!
//! This crate is the synchronous half of the client: field element
//! arithmetic and parsing, ABI type resolution, calldata encoding and
//! decoding, the CASM hint grammar with its strict JSON codec, and the three
//! contract class generations. Nothing here performs I/O.

pub mod abi;
pub mod calldata;
pub mod casm;
pub mod casm_contract_class;
pub mod contract_class;
pub mod deprecated_contract_class;
pub mod entry_point;
pub mod error;
pub mod felt;
pub mod serde_utils;
pub mod sierra_contract_class;

pub use abi::{selector_from_name, starknet_keccak, AbiEntry, TypeNode, TypeResolver};
pub use calldata::{decode_arguments, encode_arguments, CallValue};
pub use casm::Hint;
pub use casm_contract_class::CasmContractClass;
pub use contract_class::ContractClass;
pub use deprecated_contract_class::DeprecatedContractClass;
pub use error::{AbiError, CalldataError, ContractClassError, FeltError, HintCodecError};
pub use felt::FieldElement;
pub use sierra_contract_class::SierraContractClass;
