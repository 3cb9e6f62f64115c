use anyhow::Result;
use clap::Parser;

use std::path::PathBuf;

use subtext::engines::{JsonFileDiarization, JsonFileTranscription};
use subtext::opts::{Opts, WriterOpts};
use subtext::output_type::OutputType;
use subtext::pipeline::Pipeline;

fn main() -> Result<()> {
    subtext::logging::init();
    let params = get_params()?;

    if params.transcripts.is_empty() {
        anyhow::bail!("you need to specify one or more transcript files");
    }

    let opts = Opts {
        output_type: params.output_format,
        word_timestamps: params.word_timestamps,
        speaker_name: params.speaker_name.clone(),
        writer: WriterOpts {
            max_line_width: params.max_line_width,
            max_line_count: params.max_line_count,
            max_words_per_line: params.max_words_per_line,
            highlight_words: params.highlight_words,
            pretty_json: params.pretty_json,
        },
    };

    for warning in opts.validate()? {
        eprintln!("warning: {warning}");
    }

    std::fs::create_dir_all(&params.output_dir)?;

    let diarization = params.speakers.then(JsonFileDiarization::default);
    let mut pipeline = Pipeline::new(
        JsonFileTranscription,
        diarization,
        opts,
        &params.output_dir,
    )?;

    let summary = pipeline.run(&params.transcripts);
    for outcome in &summary.outcomes {
        if let Some(error) = &outcome.error {
            eprintln!("{}: {error}", outcome.audio.display());
        }
    }

    let failed = summary.failed();
    if failed > 0 {
        anyhow::bail!("{failed} of {} inputs failed", summary.outcomes.len());
    }

    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "subtext")]
#[command(about = "Speaker attribution and subtitle rendering for speech transcripts")]
struct Params {
    /// Transcript JSON file(s) to render. Output files are named after each
    /// input's basename.
    pub transcripts: Vec<PathBuf>,

    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    #[arg(
        short = 'f',
        long = "output-format",
        value_enum,
        default_value_t = OutputType::All
    )]
    pub output_format: OutputType,

    /// Produce indented JSON instead of compact output.
    #[arg(short = 'p', long = "pretty-json", default_value_t = false)]
    pub pretty_json: bool,

    /// Underline each word as it is spoken in srt and vtt output
    /// (requires --word-timestamps).
    #[arg(long = "highlight-words", default_value_t = false)]
    pub highlight_words: bool,

    /// Maximum characters in a line before breaking it in srt and vtt output
    /// (requires --word-timestamps).
    #[arg(long = "max-line-width")]
    pub max_line_width: Option<usize>,

    /// Maximum lines in a subtitle block (requires --word-timestamps).
    #[arg(long = "max-line-count")]
    pub max_line_count: Option<usize>,

    /// Maximum words per line; no effect with --max-line-width
    /// (requires --word-timestamps).
    #[arg(long = "max-words-per-line")]
    pub max_words_per_line: Option<usize>,

    /// Declare that the input transcripts carry word-level timestamps.
    #[arg(long = "word-timestamps", default_value_t = false)]
    pub word_timestamps: bool,

    /// Attribute speakers from a `<basename>.speakers.json` sidecar next to
    /// each transcript.
    #[arg(long = "speakers", default_value_t = false)]
    pub speakers: bool,

    /// Rename diarization labels with this template (SPEAKER_00 becomes
    /// NAME_00).
    #[arg(long = "speaker-name")]
    pub speaker_name: Option<String>,
}

fn get_params() -> Result<Params> {
    Ok(Params::parse())
}
