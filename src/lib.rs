//! arxmix decodes and describes packed ARX mix function candidates.
//!
//! An ARX mix is a short Feistel-like chain of Add/Rotate/XOR steps over two to
//! four words. An external backend enumerates candidates, scores them, renders
//! avalanche graphs and stores each candidate as a `(type, definition)` pair,
//! where `definition` packs the whole operator sequence into one `u64`.
//!
//! # Pieces
//!
//! - [`MixType`]: static registry of the twelve `<width>x<terms>` types.
//! - [`decode`] / [`encode`]: the bit-exact definition codec, plus
//!   [`MixDescriptor`] as the decoded, immutable view.
//! - [`terse_description`] / [`code_description`]: human-readable renderings.
//! - [`shard_path`]: maps an avalanche graph reference to its bucketed asset path.
//! - [`MixEntry`]: the API record, tying the above together.
//!
//! Everything except the file loaders is pure and safe to call from any thread.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod describe;
mod entry;
mod foundation;
mod mix;

pub use assets::shard::{
    BUCKET_COUNT, DEFAULT_IMAGE_PREFIX, parse_image_ref, shard_bucket, shard_path,
    shard_path_with_prefix,
};
pub use config::ArxConfig;
pub use describe::render::{code_description, terse_description};
pub use entry::model::{MixEntry, MixSummary, parse_entries};
pub use foundation::error::{ArxError, ArxResult};
pub use foundation::math::{avalanche64, mix12_bits};
pub use mix::codec::{MixDescriptor, Operation, decode, decode_with, encode};
pub use mix::registry::{MixType, MixTypeInfo};
