//! High-level driver for batch transcription post-processing.
//!
//! The pipeline wires external inference engines to the rendering core:
//! diarization → speaker attribution → subtitle rendering → format writers.
//!
//! Two-phase execution: the diarization and transcription backends are mutually
//! exclusive users of the same compute device within one process lifetime, so
//! diarization runs for *every* file before transcription starts for *any*
//! file, and the diarization engine is released between the phases. This is an
//! external-collaborator requirement, not a performance choice.
//!
//! A failure in one file never aborts the run; it is logged with full detail
//! and recorded in the run summary while the remaining files are processed.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::diarization::{DiarizationInterval, assign_speakers};
use crate::opts::Opts;
use crate::transcript::TranscriptResult;
use crate::writer_dispatch::write_result_files;
use crate::Result;

/// An external engine that turns one audio input into a transcript.
pub trait TranscriptionEngine {
    fn transcribe(&mut self, audio: &Path) -> Result<TranscriptResult>;
}

/// An external engine that produces speaker intervals for one audio input.
pub trait DiarizationEngine {
    fn diarize(&mut self, audio: &Path) -> Result<Vec<DiarizationInterval>>;
}

/// The outcome of processing one audio input.
#[derive(Debug)]
pub struct FileOutcome {
    pub audio: PathBuf,

    /// Files written for this input, in format order.
    pub outputs: Vec<PathBuf>,

    /// The rendered failure, when any stage of this file failed.
    pub error: Option<String>,
}

/// Per-file outcomes for one pipeline run, in input order.
#[derive(Debug)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.error.is_some())
            .count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// The batch post-processing driver.
///
/// Construct once with the engines and options, then `run` over a file list.
/// Passing `None` for the diarization engine skips speaker attribution
/// entirely; segments pass through unlabeled.
pub struct Pipeline<T: TranscriptionEngine, D: DiarizationEngine> {
    transcription: T,
    diarization: Option<D>,
    opts: Opts,
    output_dir: PathBuf,
}

impl<T: TranscriptionEngine, D: DiarizationEngine> Pipeline<T, D> {
    /// Create a pipeline, failing fast on configuration conflicts.
    ///
    /// No-op option combinations are logged here so a run's log always carries
    /// them, even when the frontend ignored the warnings from `Opts::validate`.
    pub fn new(
        transcription: T,
        diarization: Option<D>,
        opts: Opts,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        for warning in opts.validate()? {
            warn!(%warning, "option has no effect");
        }

        Ok(Self {
            transcription,
            diarization,
            opts,
            output_dir: output_dir.into(),
        })
    }

    /// Process every file: diarize all, then transcribe and render each.
    ///
    /// Per-file ordering is preserved, and the diarization engine is dropped
    /// once phase one completes so the transcription backend has the device to
    /// itself. A second `run` on the same pipeline therefore renders without
    /// speaker attribution.
    pub fn run<P: AsRef<Path>>(&mut self, audio_files: &[P]) -> RunSummary {
        let mut outcomes: Vec<FileOutcome> = audio_files
            .iter()
            .map(|path| FileOutcome {
                audio: path.as_ref().to_path_buf(),
                outputs: Vec::new(),
                error: None,
            })
            .collect();

        // Phase one: diarization for every file.
        let mut interval_sets: Vec<Vec<DiarizationInterval>> = Vec::new();
        if let Some(diarization) = self.diarization.as_mut() {
            for outcome in &mut outcomes {
                match diarization.diarize(&outcome.audio) {
                    Ok(intervals) => {
                        info!(
                            audio = %outcome.audio.display(),
                            intervals = intervals.len(),
                            "diarization complete"
                        );
                        interval_sets.push(intervals);
                    }
                    Err(err) => {
                        error!(audio = %outcome.audio.display(), error = %err, "diarization failed");
                        outcome.error = Some(err.to_string());
                        interval_sets.push(Vec::new());
                    }
                }
            }
        } else {
            interval_sets.resize_with(outcomes.len(), Vec::new);
        }

        // Release the diarization backend before the transcription backend
        // touches the device.
        drop(self.diarization.take());

        // Phase two: transcribe, attribute speakers, render, write.
        for (outcome, intervals) in outcomes.iter_mut().zip(&interval_sets) {
            if outcome.error.is_some() {
                continue;
            }
            match self.process_file(&outcome.audio, intervals) {
                Ok(outputs) => outcome.outputs = outputs,
                Err(err) => {
                    error!(audio = %outcome.audio.display(), error = %err, "processing failed");
                    outcome.error = Some(err.to_string());
                }
            }
        }

        RunSummary { outcomes }
    }

    fn process_file(
        &mut self,
        audio: &Path,
        intervals: &[DiarizationInterval],
    ) -> Result<Vec<PathBuf>> {
        let mut result = self.transcription.transcribe(audio)?;
        info!(
            audio = %audio.display(),
            language = %result.language,
            segments = result.segments.len(),
            "transcription complete"
        );

        assign_speakers(&mut result, intervals, self.opts.speaker_name.as_deref());

        write_result_files(
            &result,
            audio,
            &self.output_dir,
            self.opts.output_type,
            &self.opts.writer,
        )
    }
}
