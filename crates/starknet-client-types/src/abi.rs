//! Contract ABI entries and the type resolver used for calldata transformation.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::error::AbiError;
use crate::felt::FieldElement;

/// A named, typed parameter of a function signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

/// An enum variant; `ty` is absent (or the unit tuple) for payload-less variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumVariant {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
}

/// One entry of a contract ABI, discriminated by its `type` field.
///
/// Unknown fields inside an entry are ignored on decode; the wire format has
/// grown optional annotations over time and the codec only needs the names
/// and signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AbiEntry {
    Function {
        name: String,
        #[serde(default)]
        inputs: Vec<TypedParameter>,
        #[serde(default)]
        outputs: Vec<TypedParameter>,
    },
    Constructor {
        name: String,
        #[serde(default)]
        inputs: Vec<TypedParameter>,
        #[serde(default)]
        outputs: Vec<TypedParameter>,
    },
    L1Handler {
        name: String,
        #[serde(default)]
        inputs: Vec<TypedParameter>,
        #[serde(default)]
        outputs: Vec<TypedParameter>,
    },
    Struct {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<u64>,
        members: Vec<StructMember>,
    },
    Enum {
        name: String,
        variants: Vec<EnumVariant>,
    },
    Event {
        name: String,
        #[serde(default)]
        keys: Vec<TypedParameter>,
        #[serde(default)]
        data: Vec<TypedParameter>,
    },
}

/// Keccak-256 truncated to its 250 low bits so it fits in a field element.
pub fn starknet_keccak(data: &[u8]) -> FieldElement {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut digest = hasher.finalize();

    // Truncate to 250 bits.
    digest[0] &= 0x03;
    FieldElement::from_biguint_unchecked(num_bigint::BigUint::from_bytes_be(&digest))
}

/// The selector addressing a function on-chain.
pub fn selector_from_name(name: &str) -> FieldElement {
    starknet_keccak(name.as_bytes())
}

/// Resolved representation of an ABI type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Felt,
    Struct {
        name: String,
        members: Vec<(String, TypeNode)>,
    },
    /// The element count travels as a preceding field element on the wire.
    Array(Box<TypeNode>),
    Tuple(Vec<TypeNode>),
    Enum {
        name: String,
        variants: Vec<(String, Option<TypeNode>)>,
    },
}

impl TypeNode {
    /// Short human-readable description, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            TypeNode::Felt => "felt".to_string(),
            TypeNode::Struct { name, .. } => format!("struct {name}"),
            TypeNode::Array(element) => format!("array of {}", element.describe()),
            TypeNode::Tuple(elements) => format!("tuple of {} elements", elements.len()),
            TypeNode::Enum { name, .. } => format!("enum {name}"),
        }
    }
}

/// Resolves ABI type strings into [`TypeNode`] trees.
///
/// Declared struct and enum definitions are collected once at construction;
/// resolutions are memoized so repeated lookups of the same type string are
/// cheap and idempotent.
pub struct TypeResolver {
    structs: HashMap<String, Vec<StructMember>>,
    enums: HashMap<String, Vec<EnumVariant>>,
    cache: HashMap<String, TypeNode>,
    /// Named definitions currently being expanded, for cycle detection.
    in_progress: HashSet<String>,
}

impl TypeResolver {
    pub fn new(abi: &[AbiEntry]) -> Self {
        let mut structs = HashMap::new();
        let mut enums = HashMap::new();
        for entry in abi {
            match entry {
                AbiEntry::Struct { name, members, .. } => {
                    structs.insert(name.clone(), members.clone());
                }
                AbiEntry::Enum { name, variants } => {
                    enums.insert(name.clone(), variants.clone());
                }
                _ => {}
            }
        }
        Self { structs, enums, cache: HashMap::new(), in_progress: HashSet::new() }
    }

    pub fn resolve(&mut self, type_str: &str) -> Result<TypeNode, AbiError> {
        let type_str = type_str.trim();
        if let Some(node) = self.cache.get(type_str) {
            return Ok(node.clone());
        }
        let node = self.resolve_uncached(type_str)?;
        self.cache.insert(type_str.to_string(), node.clone());
        Ok(node)
    }

    fn resolve_uncached(&mut self, type_str: &str) -> Result<TypeNode, AbiError> {
        if type_str == "felt" {
            return Ok(TypeNode::Felt);
        }

        if let Some(element) = type_str.strip_suffix('*') {
            return Ok(TypeNode::Array(Box::new(self.resolve(element)?)));
        }

        if let Some(inner) = type_str.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            let mut elements = Vec::new();
            for part in split_top_level(inner) {
                elements.push(self.resolve(part)?);
            }
            return Ok(TypeNode::Tuple(elements));
        }

        if let Some(members) = self.structs.get(type_str).cloned() {
            if !self.in_progress.insert(type_str.to_string()) {
                return Err(AbiError::CyclicType(type_str.to_string()));
            }
            let mut resolved = Vec::with_capacity(members.len());
            for member in &members {
                resolved.push((member.name.clone(), self.resolve(&member.ty)?));
            }
            self.in_progress.remove(type_str);
            return Ok(TypeNode::Struct { name: type_str.to_string(), members: resolved });
        }

        if let Some(variants) = self.enums.get(type_str).cloned() {
            if !self.in_progress.insert(type_str.to_string()) {
                return Err(AbiError::CyclicType(type_str.to_string()));
            }
            let mut resolved = Vec::with_capacity(variants.len());
            for variant in &variants {
                let payload = match variant.ty.as_deref() {
                    None | Some("()") => None,
                    Some(ty) => Some(self.resolve(ty)?),
                };
                resolved.push((variant.name.clone(), payload));
            }
            self.in_progress.remove(type_str);
            return Ok(TypeNode::Enum { name: type_str.to_string(), variants: resolved });
        }

        Err(AbiError::UnknownType(type_str.to_string()))
    }
}

/// Splits a tuple body at commas that are not nested inside parentheses.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (index, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(text[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    let last = text[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}
