//! File-loading engine implementations.
//!
//! Real inference backends live outside this crate; these engines satisfy the
//! same traits by loading previously produced results from disk, which is what
//! the CLI ships and what keeps the pipeline testable without a model in the
//! loop.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::diarization::DiarizationInterval;
use crate::pipeline::{DiarizationEngine, TranscriptionEngine};
use crate::transcript::TranscriptResult;
use crate::Result;

/// Loads a transcript in this crate's JSON schema from the input path itself.
#[derive(Debug, Default)]
pub struct JsonFileTranscription;

impl TranscriptionEngine for JsonFileTranscription {
    fn transcribe(&mut self, audio: &Path) -> Result<TranscriptResult> {
        let file = File::open(audio)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Loads diarization intervals from a `<basename>.speakers.json` sidecar file:
/// a JSON array of `{"start", "end", "speaker"}` objects.
#[derive(Debug, Default)]
pub struct JsonFileDiarization;

impl JsonFileDiarization {
    pub fn sidecar_path(audio: &Path) -> std::path::PathBuf {
        audio.with_extension("speakers.json")
    }
}

impl DiarizationEngine for JsonFileDiarization {
    fn diarize(&mut self, audio: &Path) -> Result<Vec<DiarizationInterval>> {
        let file = File::open(Self::sidecar_path(audio))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
