use std::io::Write;

use crate::opts::WriterOpts;
use crate::result_writer::ResultWriter;
use crate::transcript::TranscriptResult;
use crate::Result;

/// A `ResultWriter` that serializes the full transcript as JSON.
///
/// The serialized form is the crate's transcript schema verbatim, so a written
/// file can be loaded back and re-rendered losslessly. `pretty_json` selects
/// indented output; both modes preserve non-ASCII text as-is.
pub struct JsonWriter<W: Write> {
    w: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }
}

impl<W: Write> ResultWriter for JsonWriter<W> {
    fn write_result(&mut self, result: &TranscriptResult, opts: &WriterOpts) -> Result<()> {
        if opts.pretty_json {
            serde_json::to_writer_pretty(&mut self.w, result)?;
        } else {
            serde_json::to_writer(&mut self.w, result)?;
        }
        self.w.flush()?;
        Ok(())
    }
}
