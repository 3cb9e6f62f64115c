/// The supported output formats for rendered transcripts.
///
/// Why this exists:
/// - We want a single, strongly-typed representation of output formats
///   across the CLI and library code.
/// - Using an enum avoids stringly-typed conditionals and keeps format
///   selection explicit and discoverable.
///
/// Integration notes:
/// - With the `cli` feature, `ValueEnum` allows this enum to be used directly
///   as a CLI flag with `clap`.
/// - Each concrete variant maps to a `ResultWriter` implementation; `All`
///   resolves to every concrete format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputType {
    /// One plain-text line per segment.
    Txt,

    /// WebVTT subtitles.
    Vtt,

    /// SubRip (SRT) subtitles.
    Srt,

    /// Tab-separated millisecond rows.
    Tsv,

    /// The full transcript as JSON.
    Json,

    /// Every format above, written in sequence against the same result.
    All,
}

impl OutputType {
    /// The file extension of a concrete format; `None` for `All`.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Txt => Some("txt"),
            Self::Vtt => Some("vtt"),
            Self::Srt => Some("srt"),
            Self::Tsv => Some("tsv"),
            Self::Json => Some("json"),
            Self::All => None,
        }
    }

    /// The concrete formats this selection stands for.
    pub fn resolved(&self) -> Vec<OutputType> {
        match self {
            Self::All => vec![Self::Txt, Self::Vtt, Self::Srt, Self::Tsv, Self::Json],
            format => vec![*format],
        }
    }
}
