/// Mask covering the low `bits` bits. `bits >= 64` yields all ones.
pub(crate) fn low_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Rotate the low `word_bits` bits of `v` left by `r`; bits above the word are dropped.
pub(crate) fn rotl_word(v: u64, r: u32, word_bits: u32) -> u64 {
    if word_bits >= u64::BITS {
        return v.rotate_left(r);
    }
    let mask = low_mask(word_bits);
    let v = v & mask;
    let r = r % word_bits;
    if r == 0 {
        return v;
    }
    ((v << r) | (v >> (word_bits - r))) & mask
}

/// 64-bit finalizer used to spread image identifiers across directory buckets.
///
/// The shift amounts and multipliers are part of the on-disk asset layout and
/// must not change.
pub fn avalanche64(mut v: u64) -> u64 {
    v ^= v >> 21;
    v = v.wrapping_mul(0x2AE2_64A9_B1A3_6D69);
    v ^= v >> 37;
    v = v.wrapping_mul(0x3967_47CA_3A58_E56F);
    v ^= v >> 44;
    v = v.wrapping_mul(0xFB77_1918_2775_D593);
    v ^= v >> 21;
    v
}

/// Low 12 bits of [`avalanche64`]: a bucket in `0..4096`.
pub fn mix12_bits(v: u64) -> u16 {
    (avalanche64(v) & 0xFFF) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
