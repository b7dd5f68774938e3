//! The Sierra (Cairo 1) contract class document.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::entry_point::{EntryPointsByType, SierraEntryPoint};
use crate::error::ContractClassError;
use crate::felt::FieldElement;

/// A Sierra class: the flat felt-encoded program, its entry point table and
/// the ABI kept as the JSON string the compiler emitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SierraContractClass {
    pub sierra_program: Vec<FieldElement>,
    pub contract_class_version: String,
    pub entry_points_by_type: EntryPointsByType<SierraEntryPoint>,
    #[serde(default, deserialize_with = "deserialize_abi", skip_serializing_if = "Option::is_none")]
    pub abi: Option<String>,
}

impl SierraContractClass {
    pub fn from_json_str(definition: &str) -> Result<Self, ContractClassError> {
        Ok(serde_json::from_str(definition)?)
    }

    pub fn to_json_string(&self) -> Result<String, ContractClassError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The ABI arrives either pre-rendered as a string or as the raw entry array;
/// the array form is normalized back to its JSON string rendering.
fn deserialize_abi<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(abi)) => Ok(Some(abi)),
        Some(Value::Array(entries)) if entries.iter().all(Value::is_object) => {
            serde_json::to_string(&entries).map(Some).map_err(de::Error::custom)
        }
        Some(_) => Err(de::Error::custom(ContractClassError::InvalidAbiShape)),
    }
}
