//! The Cairo 0 ("deprecated") contract class document.

use serde::{Deserialize, Serialize};

use crate::abi::AbiEntry;
use crate::entry_point::{DeprecatedEntryPoint, EntryPointsByType};
use crate::error::ContractClassError;

/// A Cairo 0 class as returned by the network: the compressed program blob,
/// the entry point table and the typed ABI the calldata transformer consumes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeprecatedContractClass {
    pub program: String,
    pub entry_points_by_type: EntryPointsByType<DeprecatedEntryPoint>,
    #[serde(default)]
    pub abi: Vec<AbiEntry>,
}

impl DeprecatedContractClass {
    pub fn from_json_str(definition: &str) -> Result<Self, ContractClassError> {
        Ok(serde_json::from_str(definition)?)
    }

    pub fn to_json_string(&self) -> Result<String, ContractClassError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::abi::AbiEntry;

    #[test]
    fn decodes_entry_points_and_typed_abi() {
        let class: DeprecatedContractClass = serde_json::from_value(json!({
            "program": "H4sIAAA",
            "entry_points_by_type": {
                "CONSTRUCTOR": [],
                "EXTERNAL": [{ "selector": "0x1", "offset": "0x2a" }],
                "L1_HANDLER": [],
            },
            "abi": [
                { "type": "function", "name": "transfer", "inputs": [], "outputs": [] }
            ],
        }))
        .unwrap();
        assert_eq!(class.entry_points_by_type.external[0].offset, 42);
        assert!(matches!(&class.abi[0], AbiEntry::Function { name, .. } if name == "transfer"));
    }

    #[test]
    fn abi_defaults_to_empty_when_absent() {
        let class: DeprecatedContractClass = serde_json::from_value(json!({
            "program": "H4sIAAA",
            "entry_points_by_type": {},
        }))
        .unwrap();
        assert!(class.abi.is_empty());
    }
}
