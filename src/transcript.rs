use serde::{Deserialize, Serialize};

/// A single word with its timing, as produced by a transcription engine when
/// word-level timestamps are requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub start: f64,
    pub end: f64,
    pub word: String,
    pub probability: f64,
}

/// One contiguous transcribed utterance window.
///
/// `words` is empty unless the transcription engine produced word-level timing.
/// `speaker` stays `None` until speaker attribution runs; presence/absence is the
/// signal consumers check, so an unattributed segment never carries an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<Word>,
}

impl Segment {
    /// The `"[<speaker>]: "` prefix for rendered output, when a speaker is attributed.
    pub fn speaker_prefix(&self) -> Option<String> {
        self.speaker.as_ref().map(|speaker| format!("[{speaker}]: "))
    }
}

/// A complete transcription of one audio input, ordered by segment start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResult {
    pub text: String,
    pub segments: Vec<Segment>,
    pub language: String,
}
