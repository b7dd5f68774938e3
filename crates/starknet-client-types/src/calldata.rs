//! Flattens structured argument values into calldata field elements and back.
//!
//! Both directions are driven by the same recursive rule over [`TypeNode`]:
//! a felt is one element, a struct is its members in declaration order, an
//! array is a count element followed by its items, a tuple is its elements in
//! order, and an enum is a variant-index element followed by the payload.

use indexmap::IndexMap;

use crate::abi::TypeNode;
use crate::error::CalldataError;
use crate::felt::FieldElement;

/// A structured argument value, matched against a [`TypeNode`] when encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallValue {
    Felt(FieldElement),
    Array(Vec<CallValue>),
    Tuple(Vec<CallValue>),
    Struct(IndexMap<String, CallValue>),
    Enum {
        variant: String,
        payload: Option<Box<CallValue>>,
    },
}

impl CallValue {
    fn kind(&self) -> &'static str {
        match self {
            CallValue::Felt(_) => "felt",
            CallValue::Array(_) => "array",
            CallValue::Tuple(_) => "tuple",
            CallValue::Struct(_) => "struct",
            CallValue::Enum { .. } => "enum",
        }
    }
}

impl From<FieldElement> for CallValue {
    fn from(felt: FieldElement) -> Self {
        CallValue::Felt(felt)
    }
}

impl From<u64> for CallValue {
    fn from(value: u64) -> Self {
        CallValue::Felt(FieldElement::from(value))
    }
}

/// Encodes named argument values against a declared parameter list.
///
/// Declared names missing from `values` fail with `MissingArgument`; supplied
/// names missing from the declaration fail with `UnexpectedArgument`.
pub fn encode_arguments(
    params: &[(String, TypeNode)],
    values: &IndexMap<String, CallValue>,
) -> Result<Vec<FieldElement>, CalldataError> {
    for name in values.keys() {
        if !params.iter().any(|(param, _)| param == name) {
            return Err(CalldataError::UnexpectedArgument(name.clone()));
        }
    }

    let mut out = Vec::new();
    for (name, node) in params {
        let value = values
            .get(name)
            .ok_or_else(|| CalldataError::MissingArgument(name.clone()))?;
        encode_value(node, value, &mut out)?;
    }
    Ok(out)
}

fn mismatch(node: &TypeNode, value: &CallValue) -> CalldataError {
    CalldataError::TypeMismatch { expected: node.describe(), got: value.kind().to_string() }
}

fn encode_value(
    node: &TypeNode,
    value: &CallValue,
    out: &mut Vec<FieldElement>,
) -> Result<(), CalldataError> {
    match (node, value) {
        (TypeNode::Felt, CallValue::Felt(felt)) => out.push(felt.clone()),

        (TypeNode::Array(element), CallValue::Array(items)) => {
            out.push(FieldElement::from(items.len() as u64));
            for item in items {
                encode_value(element, item, out)?;
            }
        }

        (TypeNode::Tuple(elements), CallValue::Tuple(items)) => {
            if elements.len() != items.len() {
                return Err(mismatch(node, value));
            }
            for (element, item) in elements.iter().zip(items) {
                encode_value(element, item, out)?;
            }
        }

        (TypeNode::Struct { name, members }, CallValue::Struct(fields)) => {
            for key in fields.keys() {
                if !members.iter().any(|(member, _)| member == key) {
                    return Err(CalldataError::UnexpectedArgument(format!("{name}.{key}")));
                }
            }
            for (member_name, member_node) in members {
                let member = fields
                    .get(member_name)
                    .ok_or_else(|| CalldataError::MissingArgument(format!("{name}.{member_name}")))?;
                encode_value(member_node, member, out)?;
            }
        }

        (TypeNode::Enum { name, variants }, CallValue::Enum { variant, payload }) => {
            let (index, (_, payload_node)) = variants
                .iter()
                .enumerate()
                .find(|(_, (declared, _))| declared == variant)
                .ok_or_else(|| CalldataError::UnexpectedArgument(format!("{name}::{variant}")))?;
            out.push(FieldElement::from(index as u64));
            match (payload_node, payload) {
                (Some(node), Some(value)) => encode_value(node, value, out)?,
                (None, None) => {}
                _ => return Err(mismatch(node, value)),
            }
        }

        _ => return Err(mismatch(node, value)),
    }
    Ok(())
}

/// Decodes a flat element sequence against a declared output list.
///
/// Fails with `BufferUnderrun` if the sequence runs out mid-type and with
/// `TrailingData` if elements remain after all outputs are consumed.
pub fn decode_arguments(
    params: &[(String, TypeNode)],
    data: &[FieldElement],
) -> Result<IndexMap<String, CallValue>, CalldataError> {
    let mut reader = FeltReader::new(data);
    let mut values = IndexMap::with_capacity(params.len());
    for (name, node) in params {
        values.insert(name.clone(), decode_value(node, &mut reader)?);
    }
    if reader.remaining() > 0 {
        return Err(CalldataError::TrailingData { remaining: reader.remaining() });
    }
    Ok(values)
}

struct FeltReader<'a> {
    data: &'a [FieldElement],
    position: usize,
}

impl<'a> FeltReader<'a> {
    fn new(data: &'a [FieldElement]) -> Self {
        Self { data, position: 0 }
    }

    fn read(&mut self) -> Result<&'a FieldElement, CalldataError> {
        let felt = self
            .data
            .get(self.position)
            .ok_or(CalldataError::BufferUnderrun { consumed: self.position })?;
        self.position += 1;
        Ok(felt)
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.position
    }
}

fn decode_value(node: &TypeNode, reader: &mut FeltReader<'_>) -> Result<CallValue, CalldataError> {
    match node {
        TypeNode::Felt => Ok(CallValue::Felt(reader.read()?.clone())),

        TypeNode::Array(element) => {
            let count_felt = reader.read()?;
            let count = count_felt
                .to_usize()
                .ok_or_else(|| CalldataError::InvalidLength(count_felt.to_hex_string()))?;
            let mut items = Vec::with_capacity(count.min(reader.remaining()));
            for _ in 0..count {
                items.push(decode_value(element, reader)?);
            }
            Ok(CallValue::Array(items))
        }

        TypeNode::Tuple(elements) => {
            let mut items = Vec::with_capacity(elements.len());
            for element in elements {
                items.push(decode_value(element, reader)?);
            }
            Ok(CallValue::Tuple(items))
        }

        TypeNode::Struct { members, .. } => {
            let mut fields = IndexMap::with_capacity(members.len());
            for (member_name, member_node) in members {
                fields.insert(member_name.clone(), decode_value(member_node, reader)?);
            }
            Ok(CallValue::Struct(fields))
        }

        TypeNode::Enum { name, variants } => {
            let index_felt = reader.read()?;
            let index = index_felt
                .to_usize()
                .filter(|index| *index < variants.len())
                .ok_or_else(|| CalldataError::InvalidEnumIndex {
                    name: name.clone(),
                    index: index_felt.to_hex_string(),
                })?;
            let (variant, payload_node) = &variants[index];
            let payload = match payload_node {
                Some(node) => Some(Box::new(decode_value(node, reader)?)),
                None => None,
            };
            Ok(CallValue::Enum { variant: variant.clone(), payload })
        }
    }
}
