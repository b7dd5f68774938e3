//! The compiled (CASM) contract class document.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::casm::Hint;
use crate::entry_point::{CasmEntryPoint, EntryPointsByType};
use crate::error::ContractClassError;
use crate::felt::FieldElement;
use crate::serde_utils::biguint_hex;

/// A compiled class: bytecode, the hints keyed by bytecode offset and the
/// entry point table. The prime is carried as written; it is the one value
/// in the document that does not fit in the field it defines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CasmContractClass {
    #[serde(with = "biguint_hex")]
    pub prime: BigUint,
    pub bytecode: Vec<FieldElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytecode_segment_lengths: Option<Vec<usize>>,
    pub hints: Vec<(u64, Vec<Hint>)>,
    pub compiler_version: String,
    pub entry_points_by_type: EntryPointsByType<CasmEntryPoint>,
}

impl CasmContractClass {
    pub fn from_json_str(definition: &str) -> Result<Self, ContractClassError> {
        Ok(serde_json::from_str(definition)?)
    }

    pub fn to_json_string(&self) -> Result<String, ContractClassError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The hints attached to the given bytecode offset, in document order.
    pub fn hints_at(&self, offset: u64) -> impl Iterator<Item = &Hint> {
        self.hints.iter().filter(move |(at, _)| *at == offset).flat_map(|(_, hints)| hints)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::casm::operand::ap_cell_ref;

    const SIMPLE_CASM: &str = r#"{
        "prime": "0x800000000000011000000000000000000000000000000000000000000000001",
        "bytecode": ["0x1", "0x2", "0x3", "0x4"],
        "hints": [[3, [{ "AllocSegment": { "dst": { "register": "AP", "offset": 0 } } }]]],
        "compiler_version": "2.6.0",
        "entry_points_by_type": {
            "CONSTRUCTOR": [],
            "EXTERNAL": [{ "selector": "0x1", "offset": 0, "builtins": ["range_check"] }],
            "L1_HANDLER": []
        }
    }"#;

    #[test]
    fn hints_stay_attached_to_their_offsets() {
        let class = CasmContractClass::from_json_str(SIMPLE_CASM).unwrap();
        assert_eq!(class.hints.len(), 1);
        assert_eq!(class.hints[0].0, 3);
        assert_matches!(
            &class.hints[0].1[..],
            [Hint::AllocSegment { dst }] if *dst == ap_cell_ref(0)
        );
        assert!(class.hints_at(0).next().is_none());
        assert_eq!(class.hints_at(3).count(), 1);
    }

    #[test]
    fn the_prime_itself_round_trips() {
        let class = CasmContractClass::from_json_str(SIMPLE_CASM).unwrap();
        let rendered = class.to_json_string().unwrap();
        let reparsed = CasmContractClass::from_json_str(&rendered).unwrap();
        assert_eq!(reparsed, class);
        assert!(rendered.contains(
            "\"0x800000000000011000000000000000000000000000000000000000000000001\""
        ));
    }

    #[test]
    fn a_malformed_hint_fails_the_whole_document() {
        let definition = SIMPLE_CASM.replace("AllocSegment", "AllocSegments");
        assert_matches!(
            CasmContractClass::from_json_str(&definition),
            Err(ContractClassError::SerdeError(_))
        );
    }
}
