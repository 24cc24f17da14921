use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    assets::shard::{DEFAULT_IMAGE_PREFIX, shard_path_with_prefix},
    foundation::error::{ArxError, ArxResult},
};

/// Front-end settings. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArxConfig {
    /// Directory prefix for sharded avalanche graph images (no trailing `/`).
    pub image_prefix: String,
}

impl Default for ArxConfig {
    fn default() -> Self {
        Self {
            image_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
        }
    }
}

impl ArxConfig {
    /// Parse and validate a JSON config from a reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ArxResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ArxError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> ArxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Replace the image prefix, re-validating.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> ArxResult<Self> {
        self.image_prefix = prefix.into();
        self.validate()?;
        Ok(self)
    }

    /// Check field invariants.
    pub fn validate(&self) -> ArxResult<()> {
        if self.image_prefix.is_empty() {
            return Err(ArxError::validation("image_prefix must be non-empty"));
        }
        if self.image_prefix.ends_with('/') {
            return Err(ArxError::validation(format!(
                "image_prefix '{}' must not end with '/'",
                self.image_prefix
            )));
        }
        Ok(())
    }

    /// Sharded asset path for `image_ref` under this config's prefix.
    pub fn image_path(&self, image_ref: &str) -> ArxResult<String> {
        shard_path_with_prefix(&self.image_prefix, image_ref)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
