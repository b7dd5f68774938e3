//! Field-level (de)serialization helpers for the contract class documents.

/// `u64` fields that arrive either as a JSON integer or a `0x`-prefixed hex
/// string, and are always written back as integers.
pub mod u64_hex_or_int {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct U64Visitor;

        impl Visitor<'_> for U64Visitor {
            type Value = u64;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an unsigned integer or a 0x-prefixed hex string")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
                Ok(value)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
                u64::try_from(value).map_err(|_| {
                    de::Error::invalid_value(de::Unexpected::Signed(value), &self)
                })
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<u64, E> {
                let parsed = match value.strip_prefix("0x") {
                    Some(hex) => u64::from_str_radix(hex, 16),
                    None => value.parse(),
                };
                parsed.map_err(|_| de::Error::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(U64Visitor)
    }
}

/// `BigUint` fields serialized as `0x`-prefixed hex strings. Unlike a field
/// element these are not reduced, so the field prime itself round-trips.
pub mod biguint_hex {
    use std::fmt;

    use num_bigint::BigUint;
    use num_traits::Num;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{value:x}"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigUintVisitor;

        impl Visitor<'_> for BigUintVisitor {
            type Value = BigUint;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an unsigned integer or a 0x-prefixed hex string")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<BigUint, E> {
                Ok(BigUint::from(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<BigUint, E> {
                let parsed = match value.strip_prefix("0x") {
                    Some(hex) => BigUint::from_str_radix(hex, 16),
                    None => BigUint::from_str_radix(value, 10),
                };
                parsed.map_err(|_| de::Error::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(BigUintVisitor)
    }
}
