//! `subtext` — speaker attribution and subtitle rendering for speech transcripts.
//!
//! This crate provides:
//! - Speaker attribution from diarization intervals (overlap-dominant labeling)
//! - Subtitle line segmentation under width/line-count/word-count constraints
//! - Cue rendering with optional progressive word highlighting
//! - Pluggable output writers (TXT, SRT, VTT, TSV, JSON)
//! - A two-phase batch pipeline over external inference engines
//!
//! The heavy lifting — acoustic modeling, language detection, the diarization
//! model itself — stays behind the engine traits in [`pipeline`]; this crate is
//! the post-processing that turns raw timestamped segments into finished files.

// High-level API (most consumers should start here).
pub mod opts;
pub mod pipeline;

// Transcript and diarization data structures.
pub mod diarization;
pub mod transcript;

// Subtitle segmentation and cue rendering.
pub mod subtitle_cues;
pub mod subtitle_lines;
pub mod timestamp;

// Output selection and writer interfaces.
pub mod output_type;
pub mod result_writer;
pub mod writer_dispatch;

// Writers that serialize a transcript into various formats.
pub mod json_writer;
pub mod srt_writer;
pub mod tsv_writer;
pub mod txt_writer;
pub mod vtt_writer;

// File-loading engine implementations for the CLI and tests.
pub mod engines;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

mod error;

pub use error::{Error, Result};
