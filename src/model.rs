use serde::{Deserialize, Serialize};

/// One aligned word as reported by the alignment engine. Timelines are
/// ordered by non-decreasing `start_s`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTiming {
    pub text: String,
    pub start_s: f64,
    pub end_s: f64,
}

/// A group of consecutive words displayed together as one caption cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionChunk {
    /// 1-based cue number.
    pub index: usize,
    /// Start of the chunk's first word, in seconds.
    pub start_s: f64,
    /// End of the chunk's last word, in seconds.
    pub end_s: f64,
    /// Space-joined word texts.
    pub text: String,
}

impl CaptionChunk {
    pub fn duration_s(&self) -> f64 {
        (self.end_s - self.start_s).max(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptionTrack {
    pub chunks: Vec<CaptionChunk>,
}

impl CaptionTrack {
    pub fn new(chunks: Vec<CaptionChunk>) -> Self {
        Self { chunks }
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn duration_s(&self) -> f64 {
        self.chunks.last().map(|c| c.end_s).unwrap_or(0.0).max(0.0)
    }
}
