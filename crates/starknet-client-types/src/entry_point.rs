//! Entry point records shared by the contract class generations.

use serde::{Deserialize, Serialize};

use crate::felt::FieldElement;
use crate::serde_utils::u64_hex_or_int;

/// A Cairo 0 entry point: a selector bound to a bytecode offset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecatedEntryPoint {
    pub selector: FieldElement,
    #[serde(with = "u64_hex_or_int")]
    pub offset: u64,
}

/// A Sierra entry point: a selector bound to a function index in the program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SierraEntryPoint {
    pub selector: FieldElement,
    pub function_idx: u64,
}

/// A CASM entry point, carrying the builtins the function needs at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasmEntryPoint {
    pub selector: FieldElement,
    #[serde(with = "u64_hex_or_int")]
    pub offset: u64,
    #[serde(default)]
    pub builtins: Vec<String>,
}

/// Entry points grouped by invocation kind, keyed the way the wire format
/// spells them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPointsByType<T> {
    #[serde(rename = "CONSTRUCTOR", default = "Vec::new")]
    pub constructor: Vec<T>,
    #[serde(rename = "EXTERNAL", default = "Vec::new")]
    pub external: Vec<T>,
    #[serde(rename = "L1_HANDLER", default = "Vec::new")]
    pub l1_handler: Vec<T>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn offsets_decode_from_hex_and_encode_as_integers() {
        let entry_point: CasmEntryPoint = serde_json::from_value(json!({
            "selector": "0x1",
            "offset": "0xa",
            "builtins": ["range_check"],
        }))
        .unwrap();
        assert_eq!(entry_point.offset, 10);

        let rendered = serde_json::to_value(&entry_point).unwrap();
        assert_eq!(rendered["offset"], 10);
    }

    #[test]
    fn missing_groups_default_to_empty() {
        let grouped: EntryPointsByType<DeprecatedEntryPoint> = serde_json::from_value(json!({
            "EXTERNAL": [{ "selector": "0x1", "offset": 3 }],
        }))
        .unwrap();
        assert_eq!(grouped.external.len(), 1);
        assert!(grouped.constructor.is_empty());
        assert!(grouped.l1_handler.is_empty());
    }
}
