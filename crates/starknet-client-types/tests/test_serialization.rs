use assert_matches::assert_matches;
use indoc::indoc;
use pretty_assertions::assert_eq;

use starknet_client_types::casm::operand::{ap_cell_ref, ResOperand};
use starknet_client_types::casm::Hint;
use starknet_client_types::{
    CasmContractClass, ContractClass, ContractClassError, DeprecatedContractClass, FieldElement,
    SierraContractClass,
};

const CASM_FIXTURE: &str = indoc! {r#"
    {
        "prime": "0x800000000000011000000000000000000000000000000000000000000000001",
        "compiler_version": "2.6.0",
        "bytecode": ["0xa0680017fff8000", "0x7", "0x482680017ffa8000", "0x100000000000000000000000000000000"],
        "bytecode_segment_lengths": [3, 1],
        "hints": [
            [3, [
                { "AllocSegment": { "dst": { "register": "AP", "offset": 0 } } },
                { "TestLessThan": {
                    "lhs": { "Deref": { "register": "AP", "offset": -1 } },
                    "rhs": { "Immediate": "0x100000000000000000000000000000000" },
                    "dst": { "register": "AP", "offset": 4 }
                } }
            ]]
        ],
        "entry_points_by_type": {
            "CONSTRUCTOR": [],
            "EXTERNAL": [
                { "selector": "0x15d40a3d6ca2ac30f4031e42be28da9b056fef9bb7357ac5e85627ee876e5ad", "offset": 0, "builtins": ["range_check"] }
            ],
            "L1_HANDLER": []
        }
    }
"#};

#[test]
fn casm_class_round_trips_with_hints_in_place() {
    let class = CasmContractClass::from_json_str(CASM_FIXTURE).unwrap();
    assert_eq!(class.compiler_version, "2.6.0");
    assert_eq!(class.bytecode.len(), 4);
    assert_eq!(class.bytecode_segment_lengths, Some(vec![3, 1]));
    assert_eq!(class.entry_points_by_type.external[0].builtins, vec!["range_check"]);

    let at_three: Vec<&Hint> = class.hints_at(3).collect();
    assert_eq!(at_three.len(), 2);
    assert_eq!(*at_three[0], Hint::AllocSegment { dst: ap_cell_ref(0) });
    assert_matches!(
        at_three[1],
        Hint::TestLessThan { rhs: ResOperand::Immediate(imm), .. }
            if *imm == FieldElement::from_hex_str("0x100000000000000000000000000000000").unwrap()
    );

    let rendered = class.to_json_string().unwrap();
    let reparsed = CasmContractClass::from_json_str(&rendered).unwrap();
    assert_eq!(reparsed, class);
}

#[test]
fn sierra_class_normalizes_an_array_abi_to_a_string() {
    let definition = indoc! {r#"
        {
            "sierra_program": ["0x1", "0x2", "0x3"],
            "contract_class_version": "0.1.0",
            "entry_points_by_type": {
                "CONSTRUCTOR": [],
                "EXTERNAL": [{ "selector": "0x1", "function_idx": 2 }],
                "L1_HANDLER": []
            },
            "abi": [{ "type": "function", "name": "transfer" }]
        }
    "#};
    let class = SierraContractClass::from_json_str(definition).unwrap();
    assert_eq!(class.abi.as_deref(), Some(r#"[{"type":"function","name":"transfer"}]"#));
    assert_eq!(class.entry_points_by_type.external[0].function_idx, 2);
}

#[test]
fn sierra_class_rejects_a_scalar_abi() {
    let definition = indoc! {r#"
        {
            "sierra_program": ["0x1"],
            "contract_class_version": "0.1.0",
            "entry_points_by_type": {},
            "abi": 17
        }
    "#};
    assert_matches!(
        SierraContractClass::from_json_str(definition),
        Err(ContractClassError::SerdeError(error))
            if error.to_string().contains("invalid ABI shape")
    );
}

#[test]
fn deprecated_class_round_trips_its_typed_abi() {
    let definition = indoc! {r#"
        {
            "program": "H4sIAAAAAAAA",
            "entry_points_by_type": {
                "CONSTRUCTOR": [],
                "EXTERNAL": [{ "selector": "0x362398bec32bc0ebb411203221a35a0301193a96f317ebe5e40be9f60d15320", "offset": "0x3a" }],
                "L1_HANDLER": []
            },
            "abi": [
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
                    "outputs": [{ "name": "success", "type": "felt" }]
                }
            ]
        }
    "#};
    let class = DeprecatedContractClass::from_json_str(definition).unwrap();
    assert_eq!(class.abi.len(), 2);
    assert_eq!(class.entry_points_by_type.external[0].offset, 58);

    let rendered = class.to_json_string().unwrap();
    assert_eq!(DeprecatedContractClass::from_json_str(&rendered).unwrap(), class);
}

#[test]
fn the_wrapper_sniffs_each_generation() {
    let casm = ContractClass::from_json_str(CASM_FIXTURE).unwrap();
    assert_matches!(casm, ContractClass::Casm(_));

    let deprecated = ContractClass::from_json_str(
        r#"{"program": "H4sIAAA", "entry_points_by_type": {}}"#,
    )
    .unwrap();
    assert_matches!(deprecated, ContractClass::Deprecated(_));

    assert_matches!(
        ContractClass::from_json_str(r#"{"compiler_version": "2.6.0"}"#),
        Err(ContractClassError::UnknownDocument)
    );
}
