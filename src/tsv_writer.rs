use std::io::Write;

use crate::opts::WriterOpts;
use crate::result_writer::ResultWriter;
use crate::transcript::TranscriptResult;
use crate::Result;

/// A `ResultWriter` that emits tab-separated `start\tend\ttext` rows.
///
/// Start and end are integer milliseconds, which keeps the file immune to
/// locale-dependent decimal markers and cheap to parse downstream. Tabs inside
/// segment text are flattened to spaces so rows stay three columns wide.
pub struct TsvWriter<W: Write> {
    w: W,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }
}

impl<W: Write> ResultWriter for TsvWriter<W> {
    fn write_result(&mut self, result: &TranscriptResult, _opts: &WriterOpts) -> Result<()> {
        writeln!(self.w, "start\tend\ttext")?;
        for segment in &result.segments {
            let start = (segment.start * 1000.0).round() as i64;
            let end = (segment.end * 1000.0).round() as i64;
            let text = segment.text.trim().replace('\t', " ");
            writeln!(self.w, "{start}\t{end}\t{text}")?;
        }
        self.w.flush()?;
        Ok(())
    }
}
