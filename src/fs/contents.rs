// src/fs/contents.rs
//!
//! Byte payloads for binary file operations
//!

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use ts_rs::TS;

/// Canonical byte sequence sent to or received from the host.
///
/// Built from any of the usual byte representations via `From`. Always sent
/// as an array of byte values; replies may be an array of byte values or a
/// standard base64 string.
#[derive(Debug, Clone, Default, PartialEq, Eq, TS)]
#[ts(export)]
pub struct BinaryContents(Vec<u8>);

impl BinaryContents {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for BinaryContents {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&Vec<u8>> for BinaryContents {
    fn from(bytes: &Vec<u8>) -> Self {
        Self(bytes.clone())
    }
}

impl From<&[u8]> for BinaryContents {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for BinaryContents {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for BinaryContents {
    fn from(bytes: &[u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<String> for BinaryContents {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl From<&str> for BinaryContents {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl FromIterator<u8> for BinaryContents {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BinaryContents> for Vec<u8> {
    fn from(contents: BinaryContents) -> Self {
        contents.0
    }
}

impl AsRef<[u8]> for BinaryContents {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for BinaryContents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Vec<u8> goes out as a sequence of numbers, not a byte string
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BinaryContents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BinaryContentsVisitor)
    }
}

struct BinaryContentsVisitor;

impl<'de> Visitor<'de> for BinaryContentsVisitor {
    type Value = BinaryContents;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of byte values or a base64 string")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(BinaryContents(bytes))
    }

    fn visit_str<E>(self, encoded: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        STANDARD
            .decode(encoded)
            .map(BinaryContents)
            .map_err(|e| E::custom(format!("Invalid base64 data: {}", e)))
    }

    fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BinaryContents(bytes.to_vec()))
    }

    fn visit_byte_buf<E>(self, bytes: Vec<u8>) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BinaryContents(bytes))
    }
}
