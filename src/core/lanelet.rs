use serde::{Deserialize, Serialize};

use crate::core::avu::FileMetadata;

/// A single-lane unit of sequencing data: run, lane and optional tag index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lanelet {
    pub id_run: u64,
    pub lane: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_index: Option<u32>,
}

impl Lanelet {
    #[must_use]
    pub fn new(id_run: u64, lane: u32, tag_index: Option<u32>) -> Self {
        Self {
            id_run,
            lane,
            tag_index,
        }
    }

    /// Parse a lanelet from a data file name such as `5970_1#23.bam`,
    /// `5970_1.cram` or `5970_1#23_phix.bam`.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.split('.').next()?;
        let (id_run, rest) = stem.split_once('_')?;
        let id_run = id_run.parse().ok()?;

        // Anything after a second underscore is a subset suffix (phix, human, ...)
        let lanelet_part = rest.split('_').next()?;
        let (lane, tag_index) = match lanelet_part.split_once('#') {
            Some((lane, tag)) => (lane.parse().ok()?, Some(tag.parse().ok()?)),
            None => (lanelet_part.parse().ok()?, None),
        };

        Some(Self::new(id_run, lane, tag_index))
    }

    /// Build a lanelet from the `id_run`, `lane` and `tag_index` attributes.
    /// Returns None when run or lane is absent or not numeric.
    #[must_use]
    pub fn from_metadata(metadata: &FileMetadata) -> Option<Self> {
        let id_run = metadata.first_value("id_run")?.trim().parse().ok()?;
        let lane = metadata.first_value("lane")?.trim().parse().ok()?;
        let tag_index = match metadata.first_value("tag_index") {
            Some(tag) => Some(tag.trim().parse().ok()?),
            None => None,
        };
        Some(Self::new(id_run, lane, tag_index))
    }
}

impl std::fmt::Display for Lanelet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tag_index {
            Some(tag) => write!(f, "{}_{}#{}", self.id_run, self.lane, tag),
            None => write!(f, "{}_{}", self.id_run, self.lane),
        }
    }
}
