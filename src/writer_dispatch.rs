//! Map a requested output format to writer(s) and output files.
//!
//! File naming follows the usual transcription-tool convention: each format is
//! written to `<audio-basename>.<ext>` inside the configured output directory,
//! with `All` fanning out to every format against the same result.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::json_writer::JsonWriter;
use crate::opts::WriterOpts;
use crate::output_type::OutputType;
use crate::result_writer::ResultWriter;
use crate::srt_writer::SrtWriter;
use crate::transcript::TranscriptResult;
use crate::tsv_writer::TsvWriter;
use crate::txt_writer::TxtWriter;
use crate::vtt_writer::VttWriter;
use crate::{Error, Result};

/// Serialize `result` into one writer's format.
pub fn write_result<W: Write>(
    format: OutputType,
    w: W,
    result: &TranscriptResult,
    opts: &WriterOpts,
) -> Result<()> {
    match format {
        OutputType::Txt => TxtWriter::new(w).write_result(result, opts),
        OutputType::Vtt => VttWriter::new(w).write_result(result, opts),
        OutputType::Srt => SrtWriter::new(w).write_result(result, opts),
        OutputType::Tsv => TsvWriter::new(w).write_result(result, opts),
        OutputType::Json => JsonWriter::new(w).write_result(result, opts),
        OutputType::All => Err(Error::invalid_input(
            "'all' must be resolved to concrete formats before writing",
        )),
    }
}

/// Write `result` to `<audio-basename>.<ext>` in `output_dir` for every format
/// the requested output type resolves to. Returns the written paths in order.
pub fn write_result_files(
    result: &TranscriptResult,
    audio_path: &Path,
    output_dir: &Path,
    output_type: OutputType,
    opts: &WriterOpts,
) -> Result<Vec<PathBuf>> {
    let basename = audio_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            Error::invalid_input(format!(
                "audio path has no usable basename: '{}'",
                audio_path.display()
            ))
        })?;

    let mut written = Vec::new();
    for format in output_type.resolved() {
        // resolved() only yields concrete formats, each with an extension.
        let Some(extension) = format.extension() else {
            continue;
        };
        let path = output_dir.join(format!("{basename}.{extension}"));
        let file = File::create(&path)?;
        write_result(format, BufWriter::new(file), result, opts)?;
        written.push(path);
    }

    Ok(written)
}
