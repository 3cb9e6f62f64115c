use std::io::Write;

use crate::opts::WriterOpts;
use crate::result_writer::ResultWriter;
use crate::subtitle_cues::subtitle_cues;
use crate::timestamp::VTT_TIMESTAMPS;
use crate::transcript::TranscriptResult;
use crate::Result;

/// A `ResultWriter` that emits WebVTT subtitles.
///
/// The mandatory `WEBVTT` header and its trailing blank line are written even
/// when the transcript has no segments, so every produced file is valid WebVTT.
pub struct VttWriter<W: Write> {
    w: W,
}

impl<W: Write> VttWriter<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }
}

impl<W: Write> ResultWriter for VttWriter<W> {
    fn write_result(&mut self, result: &TranscriptResult, opts: &WriterOpts) -> Result<()> {
        self.w.write_all(b"WEBVTT\n\n")?;
        for cue in subtitle_cues(result, opts, VTT_TIMESTAMPS)? {
            writeln!(self.w, "{} --> {}", cue.start, cue.end)?;
            writeln!(self.w, "{}", cue.text)?;
            writeln!(self.w)?;
        }
        self.w.flush()?;
        Ok(())
    }
}
