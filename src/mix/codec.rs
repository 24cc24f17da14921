//! Packed definition layout.
//!
//! A definition is a flat bitstream, bit 0 least significant. With
//! `B = rotation_bits` and `N = operator_count`:
//!
//! - bits `[0, N*B)` hold the rotation amounts in reverse operator order: the
//!   `B`-bit field at offset `k*B` belongs to operator `N-1-k`;
//! - bits `[N*B, N*B + N)` hold one XOR flag per operator, also reversed: bit
//!   `N*B + k` belongs to operator `N-1-k` (1 = XOR, 0 = ADD);
//! - anything above `N*(B+1)` is ignored on decode and zero on encode.

use crate::{
    foundation::error::{ArxError, ArxResult},
    foundation::math::low_mask,
    mix::registry::MixType,
};

/// One step of a mix: `receiver (^= | +=) ROTL(argument, rotation_amount)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Operation {
    /// `true` for XOR-rotate, `false` for ADD-rotate.
    pub is_xor: bool,
    /// Left-rotation applied to the argument word.
    pub rotation_amount: u32,
}

impl Operation {
    /// XOR-rotate step.
    pub fn xor(rotation_amount: u32) -> Self {
        Self {
            is_xor: true,
            rotation_amount,
        }
    }

    /// ADD-rotate step.
    pub fn add(rotation_amount: u32) -> Self {
        Self {
            is_xor: false,
            rotation_amount,
        }
    }

    /// `"XOR"` or `"ADD"`.
    pub fn mnemonic(self) -> &'static str {
        if self.is_xor { "XOR" } else { "ADD" }
    }
}

/// Decoded structural description of one mix candidate.
///
/// Always holds exactly `operator_count` operations with in-range rotations;
/// the fields are private so a descriptor cannot be mutated once built.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MixDescriptor {
    #[serde(rename = "type")]
    mix_type: MixType,
    operations: Vec<Operation>,
}

impl MixDescriptor {
    /// Decode `definition` for the type named `type_id`.
    pub fn decode(type_id: &str, definition: u64) -> ArxResult<Self> {
        let mix_type = MixType::lookup(type_id)?;
        Ok(Self::from_packed(mix_type, definition))
    }

    /// Decode `definition` for an already-resolved type.
    pub fn from_packed(mix_type: MixType, definition: u64) -> Self {
        Self {
            mix_type,
            operations: decode_with(mix_type, definition),
        }
    }

    /// Build a descriptor from explicit operations, validating count and rotation range.
    pub fn new(mix_type: MixType, operations: Vec<Operation>) -> ArxResult<Self> {
        check_operations(mix_type, &operations)?;
        Ok(Self {
            mix_type,
            operations,
        })
    }

    /// Mix type this descriptor was decoded for.
    pub fn mix_type(&self) -> MixType {
        self.mix_type
    }

    /// Operations in execution order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Re-encode into the packed wire form. High unused bits are zero.
    pub fn pack(&self) -> u64 {
        pack_unchecked(self.mix_type, &self.operations)
    }
}

/// Decode a packed definition for the type named `type_id`.
///
/// Fails with [`ArxError::UnknownType`] before touching `definition` if the
/// type is not registered.
#[tracing::instrument(level = "debug")]
pub fn decode(type_id: &str, definition: u64) -> ArxResult<Vec<Operation>> {
    let mix_type = MixType::lookup(type_id)?;
    Ok(decode_with(mix_type, definition))
}

/// Decode a packed definition for an already-resolved type.
pub fn decode_with(mix_type: MixType, definition: u64) -> Vec<Operation> {
    let info = mix_type.info();
    let b = info.rotation_bits;
    let n = info.operator_count;
    let rot_mask = low_mask(b);
    let flags_base = n as u32 * b;

    let ops: Vec<Operation> = (0..n)
        .map(|idx| {
            // field k counts from the low end and belongs to operator n-1-k
            let k = (n - 1 - idx) as u32;
            Operation {
                is_xor: (definition >> (flags_base + k)) & 1 == 1,
                rotation_amount: ((definition >> (k * b)) & rot_mask) as u32,
            }
        })
        .collect();

    let unused = definition & !low_mask(info.definition_bits());
    if unused != 0 {
        tracing::debug!(
            mix_type = info.id,
            unused_bits = unused,
            "ignoring bits above the definition width"
        );
    }
    ops
}

/// Pack operations into a definition for `mix_type`.
///
/// Rejects a list whose length differs from the type's operator count or any
/// rotation amount that does not fit the rotation field.
pub fn encode(mix_type: MixType, operations: &[Operation]) -> ArxResult<u64> {
    check_operations(mix_type, operations)?;
    Ok(pack_unchecked(mix_type, operations))
}

fn pack_unchecked(mix_type: MixType, operations: &[Operation]) -> u64 {
    let info = mix_type.info();
    let b = info.rotation_bits;
    let n = info.operator_count;
    let flags_base = n as u32 * b;

    let mut packed = 0u64;
    for (idx, op) in operations.iter().enumerate() {
        let k = (n - 1 - idx) as u32;
        packed |= u64::from(op.rotation_amount) << (k * b);
        if op.is_xor {
            packed |= 1u64 << (flags_base + k);
        }
    }
    packed
}

fn check_operations(mix_type: MixType, operations: &[Operation]) -> ArxResult<()> {
    let info = mix_type.info();
    if operations.len() != info.operator_count {
        return Err(ArxError::validation(format!(
            "mix type {} needs {} operations, got {}",
            info.id,
            info.operator_count,
            operations.len()
        )));
    }
    let limit = info.rotation_limit();
    if let Some((idx, op)) = operations
        .iter()
        .enumerate()
        .find(|(_, op)| op.rotation_amount >= limit)
    {
        return Err(ArxError::validation(format!(
            "operation {idx}: rotation {} does not fit in {} bits for mix type {}",
            op.rotation_amount, info.rotation_bits, info.id
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/mix/codec.rs"]
mod tests;
