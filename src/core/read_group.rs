use serde::{Deserialize, Serialize};

/// One `@RG` record from a SAM/BAM/CRAM header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadGroup {
    /// Read group identifier (ID tag)
    pub id: String,

    /// Sample (SM tag)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>,

    /// Library (LB tag)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
}

impl ReadGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
