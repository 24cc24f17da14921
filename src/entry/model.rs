use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    config::ArxConfig,
    foundation::error::{ArxError, ArxResult},
    mix::codec::{MixDescriptor, Operation},
    mix::registry::MixType,
};

/// One mix candidate as returned by the backend API.
///
/// Scores and image references are indexed by round count (1 through 4).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixEntry {
    /// Mix type identifier, e.g. `"32x3"`.
    #[serde(rename = "type")]
    pub mix_type: String,
    /// Packed definition as sent on the wire (signed; reinterpret as `u64`).
    pub definition: i64,
    /// Avalanche score after one round.
    pub av_score1: f64,
    /// Avalanche score after two rounds.
    pub av_score2: f64,
    /// Avalanche score after three rounds.
    pub av_score3: f64,
    /// Avalanche score after four rounds.
    pub av_score4: f64,
    /// Hex reference of the one-round avalanche graph.
    pub av_image1: String,
    /// Hex reference of the two-round avalanche graph.
    pub av_image2: String,
    /// Hex reference of the three-round avalanche graph.
    pub av_image3: String,
    /// Hex reference of the four-round avalanche graph.
    pub av_image4: String,
}

/// Everything a UI needs to show one entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MixSummary {
    /// Resolved mix type.
    #[serde(rename = "type")]
    pub mix_type: MixType,
    /// Packed definition, unsigned.
    pub definition: u64,
    /// Terse operation listing.
    pub terse: String,
    /// Pseudocode listing.
    pub code: String,
    /// Decoded operations in order.
    pub operations: Vec<Operation>,
    /// Avalanche scores for one to four rounds.
    pub avalanche_scores: [f64; 4],
    /// Sharded image paths for one to four rounds.
    pub image_paths: [String; 4],
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<MixEntry>),
    Many(Vec<MixEntry>),
}

impl MixEntry {
    /// Parse a single record from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ArxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ArxError::serde(format!("parse mix entry JSON: {e}")))
    }

    /// Parse a single record from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ArxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open mix entry '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Definition reinterpreted bit-for-bit as unsigned.
    pub fn packed_definition(&self) -> u64 {
        self.definition as u64
    }

    /// Decode this entry's definition.
    pub fn descriptor(&self) -> ArxResult<MixDescriptor> {
        MixDescriptor::decode(&self.mix_type, self.packed_definition())
    }

    /// Terse operation listing.
    pub fn terse_description(&self) -> ArxResult<String> {
        Ok(self.descriptor()?.terse())
    }

    /// Pseudocode listing.
    pub fn code_description(&self) -> ArxResult<String> {
        Ok(self.descriptor()?.code())
    }

    /// Scores for one to four rounds.
    pub fn avalanche_scores(&self) -> [f64; 4] {
        [self.av_score1, self.av_score2, self.av_score3, self.av_score4]
    }

    /// Image references for one to four rounds.
    pub fn avalanche_image_refs(&self) -> [&str; 4] {
        [
            self.av_image1.as_str(),
            self.av_image2.as_str(),
            self.av_image3.as_str(),
            self.av_image4.as_str(),
        ]
    }

    /// Sharded image paths for one to four rounds.
    pub fn image_paths(&self, cfg: &ArxConfig) -> ArxResult<[String; 4]> {
        let [r1, r2, r3, r4] = self.avalanche_image_refs();
        Ok([
            cfg.image_path(r1)?,
            cfg.image_path(r2)?,
            cfg.image_path(r3)?,
            cfg.image_path(r4)?,
        ])
    }

    /// Decode and resolve everything at once.
    pub fn summary(&self, cfg: &ArxConfig) -> ArxResult<MixSummary> {
        let desc = self.descriptor()?;
        Ok(MixSummary {
            mix_type: desc.mix_type(),
            definition: self.packed_definition(),
            terse: desc.terse(),
            code: desc.code(),
            operations: desc.operations().to_vec(),
            avalanche_scores: self.avalanche_scores(),
            image_paths: self.image_paths(cfg)?,
        })
    }
}

/// Parse either a single record or a list of records.
pub fn parse_entries<R: std::io::Read>(r: R) -> ArxResult<Vec<MixEntry>> {
    let parsed: OneOrMany = serde_json::from_reader(r)
        .map_err(|e| ArxError::serde(format!("parse mix entries JSON: {e}")))?;
    Ok(match parsed {
        OneOrMany::One(entry) => vec![*entry],
        OneOrMany::Many(entries) => entries,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/entry/model.rs"]
mod tests;
