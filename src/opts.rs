use std::fmt;

use crate::output_type::OutputType;
use crate::{Error, Result};

/// Options consumed by the subtitle segmentation and rendering engines.
#[derive(Debug, Clone, Default)]
pub struct WriterOpts {
    /// Character budget per display line. When set, word lists are split
    /// recursively at commas, pauses, or the midpoint until each line fits.
    pub max_line_width: Option<usize>,

    /// Maximum display lines per timed subtitle block.
    pub max_line_count: Option<usize>,

    /// Word budget per display line. Ignored when `max_line_width` is set.
    pub max_words_per_line: Option<usize>,

    /// Emit one cue per word with that word underlined, producing the classic
    /// progressive highlight effect. Requires word-level timing.
    pub highlight_words: bool,

    /// Indent the JSON output instead of writing it compact.
    pub pretty_json: bool,
}

impl WriterOpts {
    fn word_level_options(&self) -> Vec<&'static str> {
        let mut options = Vec::new();
        if self.highlight_words {
            options.push("highlight_words");
        }
        if self.max_line_width.is_some() {
            options.push("max_line_width");
        }
        if self.max_line_count.is_some() {
            options.push("max_line_count");
        }
        if self.max_words_per_line.is_some() {
            options.push("max_words_per_line");
        }
        options
    }
}

/// Library-level configuration for one rendering run.
///
/// This struct represents *library-level configuration*, not CLI flags directly.
/// The CLI is responsible for mapping user input into this type so that:
/// - the library remains reusable outside of a CLI context
/// - other frontends (APIs, tests, batch jobs) can construct options programmatically
#[derive(Debug, Clone)]
pub struct Opts {
    /// The requested output format (or all of them).
    pub output_type: OutputType,

    /// Whether the transcription engine is producing word-level timestamps.
    /// The word-level writer options are rejected when it is not.
    pub word_timestamps: bool,

    /// Speaker-name template substituted for the diarization label prefix
    /// (`SPEAKER_00` + `JOHN` renders as `JOHN_00`). `None` keeps raw labels.
    pub speaker_name: Option<String>,

    /// Options forwarded to the subtitle writers.
    pub writer: WriterOpts,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            output_type: OutputType::All,
            word_timestamps: false,
            speaker_name: None,
            writer: WriterOpts::default(),
        }
    }
}

/// A configuration combination that is legal but has no effect.
///
/// Warnings are returned to the caller rather than only logged, so a frontend
/// can surface them wherever its users look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptsWarning {
    /// `max_words_per_line` was requested together with `max_line_width`;
    /// the width constraint wins and the word budget is a no-op.
    WordsPerLineIgnored,

    /// `max_line_count` regroups lines produced by `max_line_width`; without
    /// a width it has nothing to regroup.
    LineCountWithoutWidth,
}

impl fmt::Display for OptsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordsPerLineIgnored => {
                write!(f, "max_words_per_line has no effect with max_line_width")
            }
            Self::LineCountWithoutWidth => {
                write!(f, "max_line_count has no effect without max_line_width")
            }
        }
    }
}

impl Opts {
    /// Check the option set for conflicts before any file is processed.
    ///
    /// Word-level options without word timestamps are a frontend misuse, not a
    /// per-file data problem, so they fail the whole run up front. No-op
    /// combinations come back as warnings.
    pub fn validate(&self) -> Result<Vec<OptsWarning>> {
        if !self.word_timestamps {
            let requested = self.writer.word_level_options();
            if !requested.is_empty() {
                return Err(Error::configuration_conflict(format!(
                    "{} requires word_timestamps",
                    requested.join(", ")
                )));
            }
        }

        let mut warnings = Vec::new();
        if self.writer.max_words_per_line.is_some() && self.writer.max_line_width.is_some() {
            warnings.push(OptsWarning::WordsPerLineIgnored);
        }
        if self.writer.max_line_count.is_some() && self.writer.max_line_width.is_none() {
            warnings.push(OptsWarning::LineCountWithoutWidth);
        }
        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_cleanly() -> crate::Result<()> {
        assert!(Opts::default().validate()?.is_empty());
        Ok(())
    }

    #[test]
    fn word_level_options_require_word_timestamps() {
        let mut opts = Opts::default();
        opts.writer.highlight_words = true;
        opts.writer.max_line_width = Some(42);

        let err = opts.validate().unwrap_err();
        assert!(matches!(err, Error::ConfigurationConflict(_)));
        let message = err.to_string();
        assert!(message.contains("highlight_words"));
        assert!(message.contains("max_line_width"));
    }

    #[test]
    fn words_per_line_with_width_is_flagged_as_a_no_op() -> crate::Result<()> {
        let mut opts = Opts::default();
        opts.word_timestamps = true;
        opts.writer.max_line_width = Some(42);
        opts.writer.max_words_per_line = Some(7);

        let warnings = opts.validate()?;
        assert_eq!(warnings, vec![OptsWarning::WordsPerLineIgnored]);
        Ok(())
    }

    #[test]
    fn line_count_without_width_is_flagged() -> crate::Result<()> {
        let mut opts = Opts::default();
        opts.word_timestamps = true;
        opts.writer.max_line_count = Some(2);

        let warnings = opts.validate()?;
        assert_eq!(warnings, vec![OptsWarning::LineCountWithoutWidth]);
        Ok(())
    }
}
