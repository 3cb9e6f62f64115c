use std::io::Write;

use crate::opts::WriterOpts;
use crate::result_writer::ResultWriter;
use crate::subtitle_cues::subtitle_cues;
use crate::timestamp::SRT_TIMESTAMPS;
use crate::transcript::TranscriptResult;
use crate::Result;

/// A `ResultWriter` that emits SubRip (SRT) subtitles.
///
/// Each cue carries a 1-based sequential index, a decimal-comma timing line with
/// a forced hour field, the cue text, and a blank separator line.
pub struct SrtWriter<W: Write> {
    w: W,
}

impl<W: Write> SrtWriter<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }
}

impl<W: Write> ResultWriter for SrtWriter<W> {
    fn write_result(&mut self, result: &TranscriptResult, opts: &WriterOpts) -> Result<()> {
        for (index, cue) in subtitle_cues(result, opts, SRT_TIMESTAMPS)?.iter().enumerate() {
            writeln!(self.w, "{}", index + 1)?;
            writeln!(self.w, "{} --> {}", cue.start, cue.end)?;
            writeln!(self.w, "{}", cue.text)?;
            writeln!(self.w)?;
        }
        self.w.flush()?;
        Ok(())
    }
}
