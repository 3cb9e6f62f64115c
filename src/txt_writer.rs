use std::io::Write;

use crate::opts::WriterOpts;
use crate::result_writer::ResultWriter;
use crate::transcript::TranscriptResult;
use crate::Result;

/// A `ResultWriter` that emits one plain-text line per segment.
///
/// Speaker-attributed segments keep their `[speaker]:` prefix; subtitle line
/// re-flow does not apply to plain text.
pub struct TxtWriter<W: Write> {
    w: W,
}

impl<W: Write> TxtWriter<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }
}

impl<W: Write> ResultWriter for TxtWriter<W> {
    fn write_result(&mut self, result: &TranscriptResult, _opts: &WriterOpts) -> Result<()> {
        for segment in &result.segments {
            let prefix = segment.speaker_prefix().unwrap_or_default();
            writeln!(self.w, "{prefix}{}", segment.text.trim())?;
        }
        self.w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Segment;

    fn seg(text: &str, speaker: Option<&str>) -> Segment {
        Segment {
            start: 0.0,
            end: 1.0,
            text: text.to_string(),
            speaker: speaker.map(str::to_string),
            words: Vec::new(),
        }
    }

    fn result(segments: Vec<Segment>) -> TranscriptResult {
        TranscriptResult {
            text: "all text".to_string(),
            segments,
            language: "English".to_string(),
        }
    }

    #[test]
    fn writes_one_trimmed_line_per_segment() -> anyhow::Result<()> {
        let mut out = Vec::new();
        TxtWriter::new(&mut out).write_result(
            &result(vec![
                seg(" Hello my friends. ", None),
                seg(" How are you? ", None),
            ]),
            &WriterOpts::default(),
        )?;

        assert_eq!(
            std::str::from_utf8(&out)?,
            "Hello my friends.\nHow are you?\n"
        );
        Ok(())
    }

    #[test]
    fn speaker_prefix_is_included_when_attributed() -> anyhow::Result<()> {
        let mut out = Vec::new();
        TxtWriter::new(&mut out).write_result(
            &result(vec![seg("Hello.", Some("JOHN_00"))]),
            &WriterOpts::default(),
        )?;

        assert_eq!(std::str::from_utf8(&out)?, "[JOHN_00]: Hello.\n");
        Ok(())
    }
}
