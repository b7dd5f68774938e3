//! The closed grammar of CASM hints and its strict JSON codec.
//!
//! A hint travels either as a bare tag string (parameterless variants) or as
//! a single-key object whose key names the variant and whose value is an
//! inner record with an exact field set. The operand grammar nested inside
//! hint fields is dispatched with the same single-present-key rule. The
//! decoder never infers: exactly one recognized key, all required sub-fields
//! present, no extras.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

use crate::casm::operand::{BinOpOperand, CellRef, DerefOrImmediate, Operation, Register, ResOperand};
use crate::error::HintCodecError;
use crate::felt::FieldElement;

/// A VM-level side instruction attached to a bytecode offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hint {
    // Bare-tag variants, serialized as literal strings.
    AssertCurrentAccessIndicesIsEmpty,
    AssertAllKeysUsed,
    AssertLeAssertThirdArcExcluded,

    AssertAllAccessesUsed {
        n_used_accesses: CellRef,
    },
    AssertLtAssertValidInput {
        a: ResOperand,
        b: ResOperand,
    },
    Felt252DictRead {
        dict_ptr: ResOperand,
        key: ResOperand,
        value_dst: CellRef,
    },
    Felt252DictWrite {
        dict_ptr: ResOperand,
        key: ResOperand,
        value: ResOperand,
    },
    AllocSegment {
        dst: CellRef,
    },
    TestLessThan {
        lhs: ResOperand,
        rhs: ResOperand,
        dst: CellRef,
    },
    TestLessThanOrEqual {
        lhs: ResOperand,
        rhs: ResOperand,
        dst: CellRef,
    },
    // The misspelled tag is what the wire format uses.
    TestLessThenOrEqualAddress {
        lhs: ResOperand,
        rhs: ResOperand,
        dst: CellRef,
    },
    WideMul128 {
        lhs: ResOperand,
        rhs: ResOperand,
        high: CellRef,
        low: CellRef,
    },
    DivMod {
        lhs: ResOperand,
        rhs: ResOperand,
        quotient: CellRef,
        remainder: CellRef,
    },
    Uint256DivMod {
        dividend0: ResOperand,
        dividend1: ResOperand,
        divisor0: ResOperand,
        divisor1: ResOperand,
        quotient0: CellRef,
        quotient1: CellRef,
        remainder0: CellRef,
        remainder1: CellRef,
    },
    Uint512DivModByUint256 {
        dividend0: ResOperand,
        dividend1: ResOperand,
        dividend2: ResOperand,
        dividend3: ResOperand,
        divisor0: ResOperand,
        divisor1: ResOperand,
        quotient0: CellRef,
        quotient1: CellRef,
        quotient2: CellRef,
        quotient3: CellRef,
        remainder0: CellRef,
        remainder1: CellRef,
    },
    SquareRoot {
        value: ResOperand,
        dst: CellRef,
    },
    Uint256SquareRoot {
        value_low: ResOperand,
        value_high: ResOperand,
        sqrt0: CellRef,
        sqrt1: CellRef,
        remainder_low: CellRef,
        remainder_high: CellRef,
        sqrt_mul_2_minus_remainder_ge_u128: CellRef,
    },
    LinearSplit {
        value: ResOperand,
        scalar: ResOperand,
        max_x: ResOperand,
        x: CellRef,
        y: CellRef,
    },
    AllocFelt252Dict {
        segment_arena_ptr: ResOperand,
    },
    Felt252DictEntryInit {
        dict_ptr: ResOperand,
        key: ResOperand,
    },
    Felt252DictEntryUpdate {
        dict_ptr: ResOperand,
        value: ResOperand,
    },
    GetSegmentArenaIndex {
        dict_end_ptr: ResOperand,
        dict_index: ResOperand,
    },
    InitSquashData {
        dict_access: ResOperand,
        ptr_diff: ResOperand,
        n_accesses: ResOperand,
        big_keys: CellRef,
        first_key: CellRef,
    },
    GetCurrentAccessIndex {
        range_check_ptr: ResOperand,
    },
    ShouldSkipSquashLoop {
        should_skip_loop: CellRef,
    },
    GetCurrentAccessDelta {
        index_delta_minus1: CellRef,
    },
    ShouldContinueSquashLoop {
        should_continue: CellRef,
    },
    GetNextDictKey {
        next_key: CellRef,
    },
    AssertLeFindSmallArcs {
        range_check_ptr: ResOperand,
        a: ResOperand,
        b: ResOperand,
    },
    AssertLeIsFirstArcExcluded {
        skip_exclude_a_flag: CellRef,
    },
    AssertLeIsSecondArcExcluded {
        skip_exclude_b_minus_a: CellRef,
    },
    RandomEcPoint {
        x: CellRef,
        y: CellRef,
    },
    FieldSqrt {
        val: ResOperand,
        sqrt: CellRef,
    },
    DebugPrint {
        start: ResOperand,
        end: ResOperand,
    },
    AllocConstantSize {
        size: ResOperand,
        dst: CellRef,
    },
    U256InvModN {
        b0: ResOperand,
        b1: ResOperand,
        n0: ResOperand,
        n1: ResOperand,
        g0_or_no_inv: CellRef,
        g1_option: CellRef,
        s_or_r0: CellRef,
        s_or_r1: CellRef,
        t_or_k0: CellRef,
        t_or_k1: CellRef,
    },
    EvalCircuit {
        n_add_mods: ResOperand,
        add_mod_builtin: ResOperand,
        n_mul_mods: ResOperand,
        mul_mod_builtin: ResOperand,
    },
    SystemCall {
        system: ResOperand,
    },
    Cheatcode {
        selector: FieldElement,
        input_start: ResOperand,
        input_end: ResOperand,
        output_start: CellRef,
        output_end: CellRef,
    },
}

// --- value-level encoding ---

fn register_to_value(register: Register) -> Value {
    match register {
        Register::AP => json!("AP"),
        Register::FP => json!("FP"),
    }
}

fn cell_ref_to_value(cell_ref: &CellRef) -> Value {
    json!({ "register": register_to_value(cell_ref.register), "offset": cell_ref.offset })
}

fn felt_to_value(felt: &FieldElement) -> Value {
    json!(felt.to_hex_string())
}

fn deref_or_immediate_to_value(operand: &DerefOrImmediate) -> Value {
    match operand {
        DerefOrImmediate::Deref(cell_ref) => json!({ "Deref": cell_ref_to_value(cell_ref) }),
        DerefOrImmediate::Immediate(felt) => json!({ "Immediate": felt_to_value(felt) }),
    }
}

pub(crate) fn res_operand_to_value(operand: &ResOperand) -> Value {
    match operand {
        ResOperand::Deref(cell_ref) => json!({ "Deref": cell_ref_to_value(cell_ref) }),
        ResOperand::DoubleDeref(cell_ref, offset) => {
            json!({ "DoubleDeref": [cell_ref_to_value(cell_ref), offset] })
        }
        ResOperand::Immediate(felt) => json!({ "Immediate": felt_to_value(felt) }),
        ResOperand::BinOp(bin_op) => json!({ "BinOp": {
            "op": match bin_op.op { Operation::Add => "Add", Operation::Mul => "Mul" },
            "a": cell_ref_to_value(&bin_op.a),
            "b": deref_or_immediate_to_value(&bin_op.b),
        } }),
    }
}

/// Emits exactly the JSON shape [`hint_from_value`] accepts.
pub fn hint_to_value(hint: &Hint) -> Value {
    let cell = cell_ref_to_value;
    let op = res_operand_to_value;
    match hint {
        Hint::AssertCurrentAccessIndicesIsEmpty => json!("AssertCurrentAccessIndicesIsEmpty"),
        Hint::AssertAllKeysUsed => json!("AssertAllKeysUsed"),
        Hint::AssertLeAssertThirdArcExcluded => json!("AssertLeAssertThirdArcExcluded"),

        Hint::AssertAllAccessesUsed { n_used_accesses } => {
            json!({ "AssertAllAccessesUsed": { "n_used_accesses": cell(n_used_accesses) } })
        }
        Hint::AssertLtAssertValidInput { a, b } => {
            json!({ "AssertLtAssertValidInput": { "a": op(a), "b": op(b) } })
        }
        Hint::Felt252DictRead { dict_ptr, key, value_dst } => json!({ "Felt252DictRead": {
            "dict_ptr": op(dict_ptr), "key": op(key), "value_dst": cell(value_dst),
        } }),
        Hint::Felt252DictWrite { dict_ptr, key, value } => json!({ "Felt252DictWrite": {
            "dict_ptr": op(dict_ptr), "key": op(key), "value": op(value),
        } }),
        Hint::AllocSegment { dst } => json!({ "AllocSegment": { "dst": cell(dst) } }),
        Hint::TestLessThan { lhs, rhs, dst } => json!({ "TestLessThan": {
            "lhs": op(lhs), "rhs": op(rhs), "dst": cell(dst),
        } }),
        Hint::TestLessThanOrEqual { lhs, rhs, dst } => json!({ "TestLessThanOrEqual": {
            "lhs": op(lhs), "rhs": op(rhs), "dst": cell(dst),
        } }),
        Hint::TestLessThenOrEqualAddress { lhs, rhs, dst } => json!({ "TestLessThenOrEqualAddress": {
            "lhs": op(lhs), "rhs": op(rhs), "dst": cell(dst),
        } }),
        Hint::WideMul128 { lhs, rhs, high, low } => json!({ "WideMul128": {
            "lhs": op(lhs), "rhs": op(rhs), "high": cell(high), "low": cell(low),
        } }),
        Hint::DivMod { lhs, rhs, quotient, remainder } => json!({ "DivMod": {
            "lhs": op(lhs), "rhs": op(rhs), "quotient": cell(quotient), "remainder": cell(remainder),
        } }),
        Hint::Uint256DivMod {
            dividend0,
            dividend1,
            divisor0,
            divisor1,
            quotient0,
            quotient1,
            remainder0,
            remainder1,
        } => json!({ "Uint256DivMod": {
            "dividend0": op(dividend0), "dividend1": op(dividend1),
            "divisor0": op(divisor0), "divisor1": op(divisor1),
            "quotient0": cell(quotient0), "quotient1": cell(quotient1),
            "remainder0": cell(remainder0), "remainder1": cell(remainder1),
        } }),
        Hint::Uint512DivModByUint256 {
            dividend0,
            dividend1,
            dividend2,
            dividend3,
            divisor0,
            divisor1,
            quotient0,
            quotient1,
            quotient2,
            quotient3,
            remainder0,
            remainder1,
        } => json!({ "Uint512DivModByUint256": {
            "dividend0": op(dividend0), "dividend1": op(dividend1),
            "dividend2": op(dividend2), "dividend3": op(dividend3),
            "divisor0": op(divisor0), "divisor1": op(divisor1),
            "quotient0": cell(quotient0), "quotient1": cell(quotient1),
            "quotient2": cell(quotient2), "quotient3": cell(quotient3),
            "remainder0": cell(remainder0), "remainder1": cell(remainder1),
        } }),
        Hint::SquareRoot { value, dst } => json!({ "SquareRoot": {
            "value": op(value), "dst": cell(dst),
        } }),
        Hint::Uint256SquareRoot {
            value_low,
            value_high,
            sqrt0,
            sqrt1,
            remainder_low,
            remainder_high,
            sqrt_mul_2_minus_remainder_ge_u128,
        } => json!({ "Uint256SquareRoot": {
            "value_low": op(value_low), "value_high": op(value_high),
            "sqrt0": cell(sqrt0), "sqrt1": cell(sqrt1),
            "remainder_low": cell(remainder_low), "remainder_high": cell(remainder_high),
            "sqrt_mul_2_minus_remainder_ge_u128": cell(sqrt_mul_2_minus_remainder_ge_u128),
        } }),
        Hint::LinearSplit { value, scalar, max_x, x, y } => json!({ "LinearSplit": {
            "value": op(value), "scalar": op(scalar), "max_x": op(max_x),
            "x": cell(x), "y": cell(y),
        } }),
        Hint::AllocFelt252Dict { segment_arena_ptr } => {
            json!({ "AllocFelt252Dict": { "segment_arena_ptr": op(segment_arena_ptr) } })
        }
        Hint::Felt252DictEntryInit { dict_ptr, key } => json!({ "Felt252DictEntryInit": {
            "dict_ptr": op(dict_ptr), "key": op(key),
        } }),
        Hint::Felt252DictEntryUpdate { dict_ptr, value } => json!({ "Felt252DictEntryUpdate": {
            "dict_ptr": op(dict_ptr), "value": op(value),
        } }),
        Hint::GetSegmentArenaIndex { dict_end_ptr, dict_index } => json!({ "GetSegmentArenaIndex": {
            "dict_end_ptr": op(dict_end_ptr), "dict_index": op(dict_index),
        } }),
        Hint::InitSquashData { dict_access, ptr_diff, n_accesses, big_keys, first_key } => {
            json!({ "InitSquashData": {
                "dict_access": op(dict_access), "ptr_diff": op(ptr_diff),
                "n_accesses": op(n_accesses),
                "big_keys": cell(big_keys), "first_key": cell(first_key),
            } })
        }
        Hint::GetCurrentAccessIndex { range_check_ptr } => {
            json!({ "GetCurrentAccessIndex": { "range_check_ptr": op(range_check_ptr) } })
        }
        Hint::ShouldSkipSquashLoop { should_skip_loop } => {
            json!({ "ShouldSkipSquashLoop": { "should_skip_loop": cell(should_skip_loop) } })
        }
        Hint::GetCurrentAccessDelta { index_delta_minus1 } => {
            json!({ "GetCurrentAccessDelta": { "index_delta_minus1": cell(index_delta_minus1) } })
        }
        Hint::ShouldContinueSquashLoop { should_continue } => {
            json!({ "ShouldContinueSquashLoop": { "should_continue": cell(should_continue) } })
        }
        Hint::GetNextDictKey { next_key } => {
            json!({ "GetNextDictKey": { "next_key": cell(next_key) } })
        }
        Hint::AssertLeFindSmallArcs { range_check_ptr, a, b } => json!({ "AssertLeFindSmallArcs": {
            "range_check_ptr": op(range_check_ptr), "a": op(a), "b": op(b),
        } }),
        Hint::AssertLeIsFirstArcExcluded { skip_exclude_a_flag } => {
            json!({ "AssertLeIsFirstArcExcluded": { "skip_exclude_a_flag": cell(skip_exclude_a_flag) } })
        }
        Hint::AssertLeIsSecondArcExcluded { skip_exclude_b_minus_a } => {
            json!({ "AssertLeIsSecondArcExcluded": { "skip_exclude_b_minus_a": cell(skip_exclude_b_minus_a) } })
        }
        Hint::RandomEcPoint { x, y } => json!({ "RandomEcPoint": { "x": cell(x), "y": cell(y) } }),
        Hint::FieldSqrt { val, sqrt } => json!({ "FieldSqrt": { "val": op(val), "sqrt": cell(sqrt) } }),
        Hint::DebugPrint { start, end } => json!({ "DebugPrint": { "start": op(start), "end": op(end) } }),
        Hint::AllocConstantSize { size, dst } => json!({ "AllocConstantSize": {
            "size": op(size), "dst": cell(dst),
        } }),
        Hint::U256InvModN {
            b0,
            b1,
            n0,
            n1,
            g0_or_no_inv,
            g1_option,
            s_or_r0,
            s_or_r1,
            t_or_k0,
            t_or_k1,
        } => json!({ "U256InvModN": {
            "b0": op(b0), "b1": op(b1), "n0": op(n0), "n1": op(n1),
            "g0_or_no_inv": cell(g0_or_no_inv), "g1_option": cell(g1_option),
            "s_or_r0": cell(s_or_r0), "s_or_r1": cell(s_or_r1),
            "t_or_k0": cell(t_or_k0), "t_or_k1": cell(t_or_k1),
        } }),
        Hint::EvalCircuit { n_add_mods, add_mod_builtin, n_mul_mods, mul_mod_builtin } => {
            json!({ "EvalCircuit": {
                "n_add_mods": op(n_add_mods), "add_mod_builtin": op(add_mod_builtin),
                "n_mul_mods": op(n_mul_mods), "mul_mod_builtin": op(mul_mod_builtin),
            } })
        }
        Hint::SystemCall { system } => json!({ "SystemCall": { "system": op(system) } }),
        Hint::Cheatcode { selector, input_start, input_end, output_start, output_end } => {
            json!({ "Cheatcode": {
                "selector": felt_to_value(selector),
                "input_start": op(input_start), "input_end": op(input_end),
                "output_start": cell(output_start), "output_end": cell(output_end),
            } })
        }
    }
}

// --- value-level decoding ---

/// An inner record being consumed field by field; leftovers are an error.
struct RecordFields {
    variant: &'static str,
    fields: Map<String, Value>,
}

impl RecordFields {
    fn new(variant: &'static str, value: &Value) -> Result<Self, HintCodecError> {
        let fields = value
            .as_object()
            .ok_or_else(|| HintCodecError::InvalidShape {
                context: variant.to_string(),
                expected: "an object",
            })?
            .clone();
        Ok(Self { variant, fields })
    }

    fn take(&mut self, field: &'static str) -> Result<Value, HintCodecError> {
        self.fields
            .remove(field)
            .ok_or(HintCodecError::MissingField { variant: self.variant, field })
    }

    fn cell_ref(&mut self, field: &'static str) -> Result<CellRef, HintCodecError> {
        cell_ref_from_value(&self.take(field)?)
    }

    fn operand(&mut self, field: &'static str) -> Result<ResOperand, HintCodecError> {
        res_operand_from_value(&self.take(field)?)
    }

    fn felt(&mut self, field: &'static str) -> Result<FieldElement, HintCodecError> {
        let value = self.take(field)?;
        felt_from_value(&format!("{}.{field}", self.variant), &value)
    }

    fn finish(self) -> Result<(), HintCodecError> {
        match self.fields.into_iter().next() {
            Some((field, _)) => Err(HintCodecError::UnexpectedField { variant: self.variant, field }),
            None => Ok(()),
        }
    }
}

fn single_key(value: &Value) -> Result<(&str, &Value), HintCodecError> {
    let map = value.as_object().ok_or_else(|| HintCodecError::InvalidShape {
        context: "tagged union".to_string(),
        expected: "a single-key object or a tag string",
    })?;
    match map.iter().next() {
        Some((key, inner)) if map.len() == 1 => Ok((key.as_str(), inner)),
        _ => Err(HintCodecError::AmbiguousTag(map.len())),
    }
}

fn felt_from_value(context: &str, value: &Value) -> Result<FieldElement, HintCodecError> {
    match value {
        Value::String(text) => Ok(FieldElement::parse(text)?),
        Value::Number(number) => number
            .as_u64()
            .map(FieldElement::from)
            .ok_or_else(|| HintCodecError::InvalidShape {
                context: context.to_string(),
                expected: "a non-negative integer or a numeric string",
            }),
        _ => Err(HintCodecError::InvalidShape {
            context: context.to_string(),
            expected: "a non-negative integer or a numeric string",
        }),
    }
}

fn i32_from_value(context: &str, value: &Value) -> Result<i32, HintCodecError> {
    value
        .as_i64()
        .and_then(|offset| i32::try_from(offset).ok())
        .ok_or_else(|| HintCodecError::InvalidShape {
            context: context.to_string(),
            expected: "a 32-bit integer",
        })
}

pub(crate) fn cell_ref_from_value(value: &Value) -> Result<CellRef, HintCodecError> {
    let mut record = RecordFields::new("CellRef", value)?;
    let register = match record.take("register")?.as_str() {
        Some("AP") => Register::AP,
        Some("FP") => Register::FP,
        _ => {
            return Err(HintCodecError::InvalidShape {
                context: "CellRef.register".to_string(),
                expected: "\"AP\" or \"FP\"",
            })
        }
    };
    let offset = i32_from_value("CellRef.offset", &record.take("offset")?)?;
    record.finish()?;
    Ok(CellRef { register, offset })
}

fn deref_or_immediate_from_value(value: &Value) -> Result<DerefOrImmediate, HintCodecError> {
    let (tag, inner) = single_key(value)?;
    match tag {
        "Deref" => Ok(DerefOrImmediate::Deref(cell_ref_from_value(inner)?)),
        "Immediate" => Ok(DerefOrImmediate::Immediate(felt_from_value("Immediate", inner)?)),
        other => Err(HintCodecError::UnknownVariant(other.to_string())),
    }
}

pub(crate) fn res_operand_from_value(value: &Value) -> Result<ResOperand, HintCodecError> {
    let (tag, inner) = single_key(value)?;
    match tag {
        "Deref" => Ok(ResOperand::Deref(cell_ref_from_value(inner)?)),
        "DoubleDeref" => {
            let pair = inner.as_array().filter(|pair| pair.len() == 2).ok_or_else(|| {
                HintCodecError::InvalidShape {
                    context: "DoubleDeref".to_string(),
                    expected: "a [cell reference, offset] pair",
                }
            })?;
            let cell_ref = cell_ref_from_value(&pair[0])?;
            let offset = i32_from_value("DoubleDeref.offset", &pair[1])?;
            Ok(ResOperand::DoubleDeref(cell_ref, offset))
        }
        "Immediate" => Ok(ResOperand::Immediate(felt_from_value("Immediate", inner)?)),
        "BinOp" => {
            let mut record = RecordFields::new("BinOp", inner)?;
            let op = match record.take("op")?.as_str() {
                Some("Add") => Operation::Add,
                Some("Mul") => Operation::Mul,
                _ => {
                    return Err(HintCodecError::InvalidShape {
                        context: "BinOp.op".to_string(),
                        expected: "\"Add\" or \"Mul\"",
                    })
                }
            };
            let a = record.cell_ref("a")?;
            let b = deref_or_immediate_from_value(&record.take("b")?)?;
            record.finish()?;
            Ok(ResOperand::BinOp(BinOpOperand { op, a, b }))
        }
        other => Err(HintCodecError::UnknownVariant(other.to_string())),
    }
}

/// Decodes a hint, reporting the offending key or tag on any mismatch.
pub fn hint_from_value(value: &Value) -> Result<Hint, HintCodecError> {
    if let Some(tag) = value.as_str() {
        return match tag {
            "AssertCurrentAccessIndicesIsEmpty" => Ok(Hint::AssertCurrentAccessIndicesIsEmpty),
            "AssertAllKeysUsed" => Ok(Hint::AssertAllKeysUsed),
            "AssertLeAssertThirdArcExcluded" => Ok(Hint::AssertLeAssertThirdArcExcluded),
            other => Err(HintCodecError::UnknownVariant(other.to_string())),
        };
    }

    let (tag, inner) = single_key(value)?;
    match tag {
        "AssertAllAccessesUsed" => {
            let mut record = RecordFields::new("AssertAllAccessesUsed", inner)?;
            let n_used_accesses = record.cell_ref("n_used_accesses")?;
            record.finish()?;
            Ok(Hint::AssertAllAccessesUsed { n_used_accesses })
        }
        "AssertLtAssertValidInput" => {
            let mut record = RecordFields::new("AssertLtAssertValidInput", inner)?;
            let a = record.operand("a")?;
            let b = record.operand("b")?;
            record.finish()?;
            Ok(Hint::AssertLtAssertValidInput { a, b })
        }
        "Felt252DictRead" => {
            let mut record = RecordFields::new("Felt252DictRead", inner)?;
            let dict_ptr = record.operand("dict_ptr")?;
            let key = record.operand("key")?;
            let value_dst = record.cell_ref("value_dst")?;
            record.finish()?;
            Ok(Hint::Felt252DictRead { dict_ptr, key, value_dst })
        }
        "Felt252DictWrite" => {
            let mut record = RecordFields::new("Felt252DictWrite", inner)?;
            let dict_ptr = record.operand("dict_ptr")?;
            let key = record.operand("key")?;
            let value = record.operand("value")?;
            record.finish()?;
            Ok(Hint::Felt252DictWrite { dict_ptr, key, value })
        }
        "AllocSegment" => {
            let mut record = RecordFields::new("AllocSegment", inner)?;
            let dst = record.cell_ref("dst")?;
            record.finish()?;
            Ok(Hint::AllocSegment { dst })
        }
        "TestLessThan" => {
            let mut record = RecordFields::new("TestLessThan", inner)?;
            let lhs = record.operand("lhs")?;
            let rhs = record.operand("rhs")?;
            let dst = record.cell_ref("dst")?;
            record.finish()?;
            Ok(Hint::TestLessThan { lhs, rhs, dst })
        }
        "TestLessThanOrEqual" => {
            let mut record = RecordFields::new("TestLessThanOrEqual", inner)?;
            let lhs = record.operand("lhs")?;
            let rhs = record.operand("rhs")?;
            let dst = record.cell_ref("dst")?;
            record.finish()?;
            Ok(Hint::TestLessThanOrEqual { lhs, rhs, dst })
        }
        "TestLessThenOrEqualAddress" => {
            let mut record = RecordFields::new("TestLessThenOrEqualAddress", inner)?;
            let lhs = record.operand("lhs")?;
            let rhs = record.operand("rhs")?;
            let dst = record.cell_ref("dst")?;
            record.finish()?;
            Ok(Hint::TestLessThenOrEqualAddress { lhs, rhs, dst })
        }
        "WideMul128" => {
            let mut record = RecordFields::new("WideMul128", inner)?;
            let lhs = record.operand("lhs")?;
            let rhs = record.operand("rhs")?;
            let high = record.cell_ref("high")?;
            let low = record.cell_ref("low")?;
            record.finish()?;
            Ok(Hint::WideMul128 { lhs, rhs, high, low })
        }
        "DivMod" => {
            let mut record = RecordFields::new("DivMod", inner)?;
            let lhs = record.operand("lhs")?;
            let rhs = record.operand("rhs")?;
            let quotient = record.cell_ref("quotient")?;
            let remainder = record.cell_ref("remainder")?;
            record.finish()?;
            Ok(Hint::DivMod { lhs, rhs, quotient, remainder })
        }
        "Uint256DivMod" => {
            let mut record = RecordFields::new("Uint256DivMod", inner)?;
            let dividend0 = record.operand("dividend0")?;
            let dividend1 = record.operand("dividend1")?;
            let divisor0 = record.operand("divisor0")?;
            let divisor1 = record.operand("divisor1")?;
            let quotient0 = record.cell_ref("quotient0")?;
            let quotient1 = record.cell_ref("quotient1")?;
            let remainder0 = record.cell_ref("remainder0")?;
            let remainder1 = record.cell_ref("remainder1")?;
            record.finish()?;
            Ok(Hint::Uint256DivMod {
                dividend0,
                dividend1,
                divisor0,
                divisor1,
                quotient0,
                quotient1,
                remainder0,
                remainder1,
            })
        }
        "Uint512DivModByUint256" => {
            let mut record = RecordFields::new("Uint512DivModByUint256", inner)?;
            let dividend0 = record.operand("dividend0")?;
            let dividend1 = record.operand("dividend1")?;
            let dividend2 = record.operand("dividend2")?;
            let dividend3 = record.operand("dividend3")?;
            let divisor0 = record.operand("divisor0")?;
            let divisor1 = record.operand("divisor1")?;
            let quotient0 = record.cell_ref("quotient0")?;
            let quotient1 = record.cell_ref("quotient1")?;
            let quotient2 = record.cell_ref("quotient2")?;
            let quotient3 = record.cell_ref("quotient3")?;
            let remainder0 = record.cell_ref("remainder0")?;
            let remainder1 = record.cell_ref("remainder1")?;
            record.finish()?;
            Ok(Hint::Uint512DivModByUint256 {
                dividend0,
                dividend1,
                dividend2,
                dividend3,
                divisor0,
                divisor1,
                quotient0,
                quotient1,
                quotient2,
                quotient3,
                remainder0,
                remainder1,
            })
        }
        "SquareRoot" => {
            let mut record = RecordFields::new("SquareRoot", inner)?;
            let value = record.operand("value")?;
            let dst = record.cell_ref("dst")?;
            record.finish()?;
            Ok(Hint::SquareRoot { value, dst })
        }
        "Uint256SquareRoot" => {
            let mut record = RecordFields::new("Uint256SquareRoot", inner)?;
            let value_low = record.operand("value_low")?;
            let value_high = record.operand("value_high")?;
            let sqrt0 = record.cell_ref("sqrt0")?;
            let sqrt1 = record.cell_ref("sqrt1")?;
            let remainder_low = record.cell_ref("remainder_low")?;
            let remainder_high = record.cell_ref("remainder_high")?;
            let sqrt_mul_2_minus_remainder_ge_u128 =
                record.cell_ref("sqrt_mul_2_minus_remainder_ge_u128")?;
            record.finish()?;
            Ok(Hint::Uint256SquareRoot {
                value_low,
                value_high,
                sqrt0,
                sqrt1,
                remainder_low,
                remainder_high,
                sqrt_mul_2_minus_remainder_ge_u128,
            })
        }
        "LinearSplit" => {
            let mut record = RecordFields::new("LinearSplit", inner)?;
            let value = record.operand("value")?;
            let scalar = record.operand("scalar")?;
            let max_x = record.operand("max_x")?;
            let x = record.cell_ref("x")?;
            let y = record.cell_ref("y")?;
            record.finish()?;
            Ok(Hint::LinearSplit { value, scalar, max_x, x, y })
        }
        "AllocFelt252Dict" => {
            let mut record = RecordFields::new("AllocFelt252Dict", inner)?;
            let segment_arena_ptr = record.operand("segment_arena_ptr")?;
            record.finish()?;
            Ok(Hint::AllocFelt252Dict { segment_arena_ptr })
        }
        "Felt252DictEntryInit" => {
            let mut record = RecordFields::new("Felt252DictEntryInit", inner)?;
            let dict_ptr = record.operand("dict_ptr")?;
            let key = record.operand("key")?;
            record.finish()?;
            Ok(Hint::Felt252DictEntryInit { dict_ptr, key })
        }
        "Felt252DictEntryUpdate" => {
            let mut record = RecordFields::new("Felt252DictEntryUpdate", inner)?;
            let dict_ptr = record.operand("dict_ptr")?;
            let value = record.operand("value")?;
            record.finish()?;
            Ok(Hint::Felt252DictEntryUpdate { dict_ptr, value })
        }
        "GetSegmentArenaIndex" => {
            let mut record = RecordFields::new("GetSegmentArenaIndex", inner)?;
            let dict_end_ptr = record.operand("dict_end_ptr")?;
            let dict_index = record.operand("dict_index")?;
            record.finish()?;
            Ok(Hint::GetSegmentArenaIndex { dict_end_ptr, dict_index })
        }
        "InitSquashData" => {
            let mut record = RecordFields::new("InitSquashData", inner)?;
            let dict_access = record.operand("dict_access")?;
            let ptr_diff = record.operand("ptr_diff")?;
            let n_accesses = record.operand("n_accesses")?;
            let big_keys = record.cell_ref("big_keys")?;
            let first_key = record.cell_ref("first_key")?;
            record.finish()?;
            Ok(Hint::InitSquashData { dict_access, ptr_diff, n_accesses, big_keys, first_key })
        }
        "GetCurrentAccessIndex" => {
            let mut record = RecordFields::new("GetCurrentAccessIndex", inner)?;
            let range_check_ptr = record.operand("range_check_ptr")?;
            record.finish()?;
            Ok(Hint::GetCurrentAccessIndex { range_check_ptr })
        }
        "ShouldSkipSquashLoop" => {
            let mut record = RecordFields::new("ShouldSkipSquashLoop", inner)?;
            let should_skip_loop = record.cell_ref("should_skip_loop")?;
            record.finish()?;
            Ok(Hint::ShouldSkipSquashLoop { should_skip_loop })
        }
        "GetCurrentAccessDelta" => {
            let mut record = RecordFields::new("GetCurrentAccessDelta", inner)?;
            let index_delta_minus1 = record.cell_ref("index_delta_minus1")?;
            record.finish()?;
            Ok(Hint::GetCurrentAccessDelta { index_delta_minus1 })
        }
        "ShouldContinueSquashLoop" => {
            let mut record = RecordFields::new("ShouldContinueSquashLoop", inner)?;
            let should_continue = record.cell_ref("should_continue")?;
            record.finish()?;
            Ok(Hint::ShouldContinueSquashLoop { should_continue })
        }
        "GetNextDictKey" => {
            let mut record = RecordFields::new("GetNextDictKey", inner)?;
            let next_key = record.cell_ref("next_key")?;
            record.finish()?;
            Ok(Hint::GetNextDictKey { next_key })
        }
        "AssertLeFindSmallArcs" => {
            let mut record = RecordFields::new("AssertLeFindSmallArcs", inner)?;
            let range_check_ptr = record.operand("range_check_ptr")?;
            let a = record.operand("a")?;
            let b = record.operand("b")?;
            record.finish()?;
            Ok(Hint::AssertLeFindSmallArcs { range_check_ptr, a, b })
        }
        "AssertLeIsFirstArcExcluded" => {
            let mut record = RecordFields::new("AssertLeIsFirstArcExcluded", inner)?;
            let skip_exclude_a_flag = record.cell_ref("skip_exclude_a_flag")?;
            record.finish()?;
            Ok(Hint::AssertLeIsFirstArcExcluded { skip_exclude_a_flag })
        }
        "AssertLeIsSecondArcExcluded" => {
            let mut record = RecordFields::new("AssertLeIsSecondArcExcluded", inner)?;
            let skip_exclude_b_minus_a = record.cell_ref("skip_exclude_b_minus_a")?;
            record.finish()?;
            Ok(Hint::AssertLeIsSecondArcExcluded { skip_exclude_b_minus_a })
        }
        "RandomEcPoint" => {
            let mut record = RecordFields::new("RandomEcPoint", inner)?;
            let x = record.cell_ref("x")?;
            let y = record.cell_ref("y")?;
            record.finish()?;
            Ok(Hint::RandomEcPoint { x, y })
        }
        "FieldSqrt" => {
            let mut record = RecordFields::new("FieldSqrt", inner)?;
            let val = record.operand("val")?;
            let sqrt = record.cell_ref("sqrt")?;
            record.finish()?;
            Ok(Hint::FieldSqrt { val, sqrt })
        }
        "DebugPrint" => {
            let mut record = RecordFields::new("DebugPrint", inner)?;
            let start = record.operand("start")?;
            let end = record.operand("end")?;
            record.finish()?;
            Ok(Hint::DebugPrint { start, end })
        }
        "AllocConstantSize" => {
            let mut record = RecordFields::new("AllocConstantSize", inner)?;
            let size = record.operand("size")?;
            let dst = record.cell_ref("dst")?;
            record.finish()?;
            Ok(Hint::AllocConstantSize { size, dst })
        }
        "U256InvModN" => {
            let mut record = RecordFields::new("U256InvModN", inner)?;
            let b0 = record.operand("b0")?;
            let b1 = record.operand("b1")?;
            let n0 = record.operand("n0")?;
            let n1 = record.operand("n1")?;
            let g0_or_no_inv = record.cell_ref("g0_or_no_inv")?;
            let g1_option = record.cell_ref("g1_option")?;
            let s_or_r0 = record.cell_ref("s_or_r0")?;
            let s_or_r1 = record.cell_ref("s_or_r1")?;
            let t_or_k0 = record.cell_ref("t_or_k0")?;
            let t_or_k1 = record.cell_ref("t_or_k1")?;
            record.finish()?;
            Ok(Hint::U256InvModN {
                b0,
                b1,
                n0,
                n1,
                g0_or_no_inv,
                g1_option,
                s_or_r0,
                s_or_r1,
                t_or_k0,
                t_or_k1,
            })
        }
        "EvalCircuit" => {
            let mut record = RecordFields::new("EvalCircuit", inner)?;
            let n_add_mods = record.operand("n_add_mods")?;
            let add_mod_builtin = record.operand("add_mod_builtin")?;
            let n_mul_mods = record.operand("n_mul_mods")?;
            let mul_mod_builtin = record.operand("mul_mod_builtin")?;
            record.finish()?;
            Ok(Hint::EvalCircuit { n_add_mods, add_mod_builtin, n_mul_mods, mul_mod_builtin })
        }
        "SystemCall" => {
            let mut record = RecordFields::new("SystemCall", inner)?;
            let system = record.operand("system")?;
            record.finish()?;
            Ok(Hint::SystemCall { system })
        }
        "Cheatcode" => {
            let mut record = RecordFields::new("Cheatcode", inner)?;
            let selector = record.felt("selector")?;
            let input_start = record.operand("input_start")?;
            let input_end = record.operand("input_end")?;
            let output_start = record.cell_ref("output_start")?;
            let output_end = record.cell_ref("output_end")?;
            record.finish()?;
            Ok(Hint::Cheatcode { selector, input_start, input_end, output_start, output_end })
        }
        other => Err(HintCodecError::UnknownVariant(other.to_string())),
    }
}

impl Serialize for Hint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        hint_to_value(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        hint_from_value(&value).map_err(de::Error::custom)
    }
}
