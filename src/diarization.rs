//! Speaker attribution from diarization intervals.
//!
//! A diarization engine tells us *who spoke when* as a flat set of labeled time
//! intervals; this module overlays those intervals onto transcript segments and
//! labels each segment with the speaker that covers most of its window.

use serde::{Deserialize, Serialize};

use crate::transcript::TranscriptResult;

/// The label prefix diarization engines put on anonymous speakers (`SPEAKER_00`,
/// `SPEAKER_01`, ...). Speaker-name templates substitute this token.
///
/// Upstream behavior is unspecified if the engine ever changes its prefix convention.
pub const SPEAKER_LABEL_PREFIX: &str = "SPEAKER";

/// One labeled interval of speech from a diarization engine.
///
/// Intervals are an unordered set per audio file: multiple intervals may share a
/// label, and intervals across labels may overlap during cross-talk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiarizationInterval {
    pub start: f64,
    pub end: f64,
    pub speaker: String,
}

/// Find the speaker whose intervals cover the most time within `[start, end)`.
///
/// Overlap is accumulated per label in input-interval order, and ties go to the
/// label encountered first. That ordering must be reproduced exactly: multiple
/// labels can share the maximum, and iteration order is the only thing keeping
/// the output deterministic.
///
/// Returns `None` when no interval has strictly positive overlap.
pub fn dominant_speaker(
    intervals: &[DiarizationInterval],
    start: f64,
    end: f64,
) -> Option<&str> {
    let mut totals: Vec<(&str, f64)> = Vec::new();
    for interval in intervals {
        let overlap = interval.end.min(end) - interval.start.max(start);
        if overlap <= 0.0 {
            continue;
        }

        match totals
            .iter_mut()
            .find(|(label, _)| *label == interval.speaker)
        {
            Some((_, total)) => *total += overlap,
            None => totals.push((interval.speaker.as_str(), overlap)),
        }
    }

    let mut dominant: Option<(&str, f64)> = None;
    for (label, total) in totals {
        if dominant.is_none_or(|(_, best)| total > best) {
            dominant = Some((label, total));
        }
    }

    dominant.map(|(label, _)| label)
}

/// Attribute a speaker to every segment that overlaps the diarization intervals.
///
/// When `speaker_name` is a non-empty template, the engine's fixed label prefix is
/// substituted with it (`SPEAKER_00` + `JOHN` becomes `JOHN_00`); otherwise the
/// original label is kept. Segments with no dominant speaker are left untouched,
/// and the interval set is never mutated. Calling with zero intervals is a no-op.
pub fn assign_speakers(
    result: &mut TranscriptResult,
    intervals: &[DiarizationInterval],
    speaker_name: Option<&str>,
) {
    for segment in &mut result.segments {
        let Some(label) = dominant_speaker(intervals, segment.start, segment.end) else {
            continue;
        };

        let label = match speaker_name {
            Some(name) if !name.is_empty() => label.replace(SPEAKER_LABEL_PREFIX, name),
            _ => label.to_string(),
        };
        segment.speaker = Some(label);
    }
}
