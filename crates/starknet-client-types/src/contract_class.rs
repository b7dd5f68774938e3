//! Generation sniffing over the three contract class documents.

use serde::Serialize;
use serde_json::Value;

use crate::casm_contract_class::CasmContractClass;
use crate::deprecated_contract_class::DeprecatedContractClass;
use crate::error::ContractClassError;
use crate::sierra_contract_class::SierraContractClass;

/// Any of the three class generations, classified by the structural key that
/// only that generation carries.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContractClass {
    Deprecated(DeprecatedContractClass),
    Sierra(SierraContractClass),
    Casm(CasmContractClass),
}

impl ContractClass {
    /// Classifies a class document by shape: `sierra_program` marks a Sierra
    /// class, `bytecode` a compiled one, `program` a Cairo 0 one.
    pub fn from_json_str(definition: &str) -> Result<Self, ContractClassError> {
        let document: Value = serde_json::from_str(definition)?;
        let keys = document.as_object().ok_or(ContractClassError::UnknownDocument)?;
        if keys.contains_key("sierra_program") {
            Ok(Self::Sierra(serde_json::from_value(document)?))
        } else if keys.contains_key("bytecode") {
            Ok(Self::Casm(serde_json::from_value(document)?))
        } else if keys.contains_key("program") {
            Ok(Self::Deprecated(serde_json::from_value(document)?))
        } else {
            Err(ContractClassError::UnknownDocument)
        }
    }

    pub fn to_json_string(&self) -> Result<String, ContractClassError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<DeprecatedContractClass> for ContractClass {
    fn from(class: DeprecatedContractClass) -> Self {
        Self::Deprecated(class)
    }
}

impl From<SierraContractClass> for ContractClass {
    fn from(class: SierraContractClass) -> Self {
        Self::Sierra(class)
    }
}

impl From<CasmContractClass> for ContractClass {
    fn from(class: CasmContractClass) -> Self {
        Self::Casm(class)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn classifies_each_generation_by_its_marker_key() {
        let deprecated = json!({
            "program": "H4sIAAA",
            "entry_points_by_type": {},
        })
        .to_string();
        assert_matches!(
            ContractClass::from_json_str(&deprecated),
            Ok(ContractClass::Deprecated(_))
        );

        let sierra = json!({
            "sierra_program": ["0x1"],
            "contract_class_version": "0.1.0",
            "entry_points_by_type": {},
        })
        .to_string();
        assert_matches!(ContractClass::from_json_str(&sierra), Ok(ContractClass::Sierra(_)));

        let casm = json!({
            "prime": "0x1f",
            "bytecode": [],
            "hints": [],
            "compiler_version": "2.6.0",
            "entry_points_by_type": {},
        })
        .to_string();
        assert_matches!(ContractClass::from_json_str(&casm), Ok(ContractClass::Casm(_)));
    }

    #[test]
    fn a_document_with_no_marker_key_is_unknown() {
        assert_matches!(
            ContractClass::from_json_str(r#"{"abi": []}"#),
            Err(ContractClassError::UnknownDocument)
        );
        assert_matches!(
            ContractClass::from_json_str("[]"),
            Err(ContractClassError::UnknownDocument)
        );
    }
}
