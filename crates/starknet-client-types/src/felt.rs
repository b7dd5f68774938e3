//! The Stark field element, the atomic wire unit of calldata and bytecode.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::{Num, ToPrimitive};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FeltError;

lazy_static! {
    /// The Stark field prime, 2^251 + 17 * 2^192 + 1.
    pub static ref PRIME: BigUint = BigUint::from_str_radix(
        "800000000000011000000000000000000000000000000000000000000000001",
        16,
    )
    .expect("prime literal is valid hex");
}

/// An unsigned integer strictly smaller than [`struct@PRIME`].
///
/// Every constructor that takes an external representation validates the
/// range; arithmetic wraps around the prime.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldElement(BigUint);

impl FieldElement {
    pub fn zero() -> Self {
        Self(BigUint::from(0u8))
    }

    pub fn one() -> Self {
        Self(BigUint::from(1u8))
    }

    /// Wraps a `BigUint`, rejecting values outside the field.
    pub fn from_biguint(value: BigUint) -> Result<Self, FeltError> {
        if value < *PRIME {
            Ok(Self(value))
        } else {
            Err(FeltError::OutOfRange(value.to_string()))
        }
    }

    /// Range is guaranteed by the caller (e.g. a 250-bit hash output).
    pub(crate) fn from_biguint_unchecked(value: BigUint) -> Self {
        debug_assert!(value < *PRIME);
        Self(value)
    }

    pub fn from_dec_str(text: &str) -> Result<Self, FeltError> {
        if let Some(negative) = text.strip_prefix('-') {
            // BigUint cannot hold it, but the caller deserves the range error.
            if negative.chars().all(|c| c.is_ascii_digit()) && !negative.is_empty() {
                return Err(FeltError::OutOfRange(text.to_string()));
            }
            return Err(FeltError::InvalidLiteral(text.to_string()));
        }
        let value = BigUint::from_str_radix(text, 10)
            .map_err(|_| FeltError::InvalidLiteral(text.to_string()))?;
        Self::from_biguint(value)
    }

    pub fn from_hex_str(text: &str) -> Result<Self, FeltError> {
        let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text);
        let value = BigUint::from_str_radix(digits, 16)
            .map_err(|_| FeltError::InvalidLiteral(text.to_string()))?;
        Self::from_biguint(value)
    }

    /// Parses either representation: hex with a `0x` prefix, decimal otherwise.
    pub fn parse(text: &str) -> Result<Self, FeltError> {
        if text.starts_with("0x") || text.starts_with("0X") {
            Self::from_hex_str(text)
        } else {
            Self::from_dec_str(text)
        }
    }

    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, FeltError> {
        Self::from_biguint(BigUint::from_bytes_be(bytes))
    }

    /// Canonical wire rendering: `0x`-prefixed lowercase hex, no leading zeros.
    pub fn to_hex_string(&self) -> String {
        format!("0x{:x}", self.0)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn to_usize(&self) -> Option<usize> {
        self.0.to_usize()
    }
}

impl From<u8> for FieldElement {
    fn from(value: u8) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u32> for FieldElement {
    fn from(value: u32) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for FieldElement {
    fn from(value: u128) -> Self {
        // 2^128 - 1 < PRIME, so this cannot leave the field.
        Self(BigUint::from(value))
    }
}

impl Add for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        FieldElement((&self.0 + &rhs.0) % &*PRIME)
    }
}

impl Sub for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        FieldElement((&*PRIME + &self.0 - &rhs.0) % &*PRIME)
    }
}

impl Mul for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        FieldElement((&self.0 * &rhs.0) % &*PRIME)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self.to_hex_string())
    }
}

impl Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_string())
    }
}

struct FieldElementVisitor;

impl Visitor<'_> for FieldElementVisitor {
    type Value = FieldElement;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a field element as a hex/decimal string or a non-negative integer")
    }

    fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        FieldElement::parse(text).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(FieldElement::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(FieldElement::from)
            .map_err(|_| E::custom(FeltError::OutOfRange(value.to_string())))
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldElementVisitor)
    }
}
