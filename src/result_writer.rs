use crate::opts::WriterOpts;
use crate::transcript::TranscriptResult;
use crate::Result;

/// A single-shot serializer for one completed transcript.
///
/// Writers own their output stream, emit the whole result in one call, and
/// flush before returning so file and pipe consumers see complete output.
pub trait ResultWriter {
    fn write_result(&mut self, result: &TranscriptResult, opts: &WriterOpts) -> Result<()>;
}
