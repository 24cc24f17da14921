use std::{fmt, str::FromStr};

use crate::foundation::error::{ArxError, ArxResult};

/// Structural parameters of one mix type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MixTypeInfo {
    /// Canonical identifier, `<width>x<terms>`.
    pub id: &'static str,
    /// Word width in bits (8/16/32/64).
    pub word_bits: u32,
    /// Width of each rotation-amount field.
    pub rotation_bits: u32,
    /// Number of ARX operations in the mix.
    pub operator_count: usize,
    /// Number of working variables threaded through the chain.
    pub term_count: usize,
}

impl MixTypeInfo {
    /// Bits of a packed definition actually in use: `operator_count * (rotation_bits + 1)`.
    pub const fn definition_bits(&self) -> u32 {
        self.operator_count as u32 * (self.rotation_bits + 1)
    }

    /// Exclusive upper bound on rotation amounts (`2^rotation_bits`).
    pub const fn rotation_limit(&self) -> u32 {
        1 << self.rotation_bits
    }
}

/// Registered mix types, named `<width>x<terms>`.
///
/// Declaration order indexes the static parameter table and matches [`MixType::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MixType {
    /// 8-bit words, 2 terms.
    Mix8x2,
    /// 8-bit words, 3 terms.
    Mix8x3,
    /// 8-bit words, 4 terms.
    Mix8x4,
    /// 16-bit words, 2 terms.
    Mix16x2,
    /// 16-bit words, 3 terms.
    Mix16x3,
    /// 16-bit words, 4 terms.
    Mix16x4,
    /// 32-bit words, 2 terms.
    Mix32x2,
    /// 32-bit words, 3 terms.
    Mix32x3,
    /// 32-bit words, 4 terms.
    Mix32x4,
    /// 64-bit words, 2 terms.
    Mix64x2,
    /// 64-bit words, 3 terms.
    Mix64x3,
    /// 64-bit words, 4 terms.
    Mix64x4,
}

const fn row(
    id: &'static str,
    word_bits: u32,
    rotation_bits: u32,
    operator_count: usize,
    term_count: usize,
) -> MixTypeInfo {
    MixTypeInfo {
        id,
        word_bits,
        rotation_bits,
        operator_count,
        term_count,
    }
}

static TYPE_TABLE: [MixTypeInfo; 12] = [
    row("8x2", 8, 3, 4, 2),
    row("8x3", 8, 3, 6, 3),
    row("8x4", 8, 3, 8, 4),
    row("16x2", 16, 4, 4, 2),
    row("16x3", 16, 4, 6, 3),
    row("16x4", 16, 4, 8, 4),
    row("32x2", 32, 5, 4, 2),
    row("32x3", 32, 5, 6, 3),
    row("32x4", 32, 5, 8, 4),
    row("64x2", 64, 6, 4, 2),
    row("64x3", 64, 6, 6, 3),
    row("64x4", 64, 6, 8, 4),
];

impl MixType {
    /// Every registered type in canonical order.
    pub const ALL: [MixType; 12] = [
        MixType::Mix8x2,
        MixType::Mix8x3,
        MixType::Mix8x4,
        MixType::Mix16x2,
        MixType::Mix16x3,
        MixType::Mix16x4,
        MixType::Mix32x2,
        MixType::Mix32x3,
        MixType::Mix32x4,
        MixType::Mix64x2,
        MixType::Mix64x3,
        MixType::Mix64x4,
    ];

    /// Resolve a type identifier such as `"32x3"`.
    ///
    /// Matching is exact and case-sensitive. Unrecognised identifiers fail with
    /// [`ArxError::UnknownType`]; parameters are never guessed.
    pub fn lookup(type_id: &str) -> ArxResult<Self> {
        match Self::ALL.iter().copied().find(|t| t.id() == type_id) {
            Some(t) => Ok(t),
            None => {
                tracing::warn!(type_id, "unrecognised mix type");
                Err(ArxError::unknown_type(type_id))
            }
        }
    }

    /// Static parameters for this type.
    pub fn info(self) -> &'static MixTypeInfo {
        &TYPE_TABLE[self as usize]
    }

    /// Canonical identifier.
    pub fn id(self) -> &'static str {
        self.info().id
    }

    /// Word width in bits.
    pub fn word_bits(self) -> u32 {
        self.info().word_bits
    }

    /// Width of each rotation-amount field.
    pub fn rotation_bits(self) -> u32 {
        self.info().rotation_bits
    }

    /// Number of operations in the mix.
    pub fn operator_count(self) -> usize {
        self.info().operator_count
    }

    /// Number of working variables.
    pub fn term_count(self) -> usize {
        self.info().term_count
    }

    /// Bits of a packed definition in use for this type.
    pub fn definition_bits(self) -> u32 {
        self.info().definition_bits()
    }
}

impl fmt::Display for MixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MixType {
    type Err = ArxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl serde::Serialize for MixType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> serde::Deserialize<'de> for MixType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::lookup(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mix/registry.rs"]
mod tests;
