use crate::{
    foundation::error::{ArxError, ArxResult},
    foundation::math::mix12_bits,
};

/// Root under which avalanche graph images are laid out.
pub const DEFAULT_IMAGE_PREFIX: &str = "/images";

/// Number of shard directories (`000` through `FFF`).
pub const BUCKET_COUNT: u16 = 1 << 12;

/// Parse an image reference as an unsigned 64-bit hex value.
///
/// Digits may be upper- or lowercase and an optional `0x`/`0X` prefix is
/// accepted. Empty input, signs, whitespace and overflow are rejected.
pub fn parse_image_ref(image_ref: &str) -> ArxResult<u64> {
    let digits = image_ref
        .strip_prefix("0x")
        .or_else(|| image_ref.strip_prefix("0X"))
        .unwrap_or(image_ref);
    if digits.is_empty() {
        return Err(ArxError::invalid_hex(format!("'{image_ref}' has no digits")));
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ArxError::invalid_hex(format!(
            "'{image_ref}' contains non-hex character '{c}'"
        )));
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| ArxError::invalid_hex(format!("'{image_ref}': {e}")))
}

/// Directory bucket (`0..4096`) for an image reference.
pub fn shard_bucket(image_ref: &str) -> ArxResult<u16> {
    Ok(mix12_bits(parse_image_ref(image_ref)?))
}

/// Asset path under [`DEFAULT_IMAGE_PREFIX`], e.g. `"/images/000/00.png"`.
pub fn shard_path(image_ref: &str) -> ArxResult<String> {
    shard_path_with_prefix(DEFAULT_IMAGE_PREFIX, image_ref)
}

/// Asset path `"{prefix}/{bucket:03X}/{image_ref}.png"`.
///
/// The file name keeps the caller's spelling of `image_ref`; only the bucket
/// is derived from its numeric value.
#[tracing::instrument(level = "debug")]
pub fn shard_path_with_prefix(prefix: &str, image_ref: &str) -> ArxResult<String> {
    let bucket = shard_bucket(image_ref)?;
    Ok(format!("{prefix}/{bucket:03X}/{image_ref}.png"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/shard.rs"]
mod tests;
