//! Turn a transcript into ordered, timestamped subtitle cues.
//!
//! A cue is one `(start, end, text)` triple ready for an SRT or VTT writer.
//! Segments carrying word-level timing go through the line segmentation engine;
//! segments without it are rendered as a single cue from their own start/end/text.

use crate::opts::WriterOpts;
use crate::subtitle_lines::{SubtitleBlock, segment_blocks};
use crate::timestamp::TimestampStyle;
use crate::transcript::{Segment, TranscriptResult};
use crate::Result;

/// One renderable subtitle cue. Timestamps are pre-formatted for the target
/// format's convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub start: String,
    pub end: String,
    pub text: String,
}

/// Render every segment of `result` into cues under the given constraints.
///
/// With `highlight_words` enabled, each block additionally yields one cue per
/// word with that word wrapped in `<u>` markers, plus "no emphasis" cues filling
/// any silence between consecutive words.
pub fn subtitle_cues(
    result: &TranscriptResult,
    opts: &WriterOpts,
    style: TimestampStyle,
) -> Result<Vec<Cue>> {
    let mut cues = Vec::new();
    for segment in &result.segments {
        let blocks = segment_blocks(segment, opts);
        if blocks.is_empty() {
            cues.push(segment_cue(segment, style)?);
            continue;
        }

        for block in blocks {
            if opts.highlight_words {
                highlight_cues(&block, style, &mut cues)?;
            } else {
                cues.push(Cue {
                    start: style.format(block.start())?,
                    end: style.format(block.end())?,
                    text: block.text().trim().to_string(),
                });
            }
        }
    }

    Ok(cues)
}

/// Fallback for segments without word-level timing: one cue from the segment's
/// own window, with the speaker prefix applied and `-->` defused so the cue text
/// cannot be mistaken for a timing line.
fn segment_cue(segment: &Segment, style: TimestampStyle) -> Result<Cue> {
    let prefix = segment.speaker_prefix().unwrap_or_default();
    Ok(Cue {
        start: style.format(segment.start)?,
        end: style.format(segment.end)?,
        text: format!("{prefix}{}", segment.text.trim().replace("-->", "->")),
    })
}

/// The progressive word-highlight rendering of one block.
///
/// Each word yields a cue spanning the previous word's end (or the block start)
/// to its own end. Gap comparisons are made on the formatted strings so cue
/// boundaries line up exactly with what the writers emit.
fn highlight_cues(block: &SubtitleBlock, style: TimestampStyle, cues: &mut Vec<Cue>) -> Result<()> {
    let plain_text = block.text().trim().to_string();
    let mut last = style.format(block.start())?;

    for (index, word) in block.words.iter().enumerate() {
        let start = style.format(word.start)?;
        let end = style.format(word.end)?;

        if last != start {
            cues.push(Cue {
                start: last,
                end: start.clone(),
                text: plain_text.clone(),
            });
        }

        let text: String = block
            .words
            .iter()
            .enumerate()
            .map(|(j, w)| {
                if j == index {
                    underline(&w.word)
                } else {
                    w.word.clone()
                }
            })
            .collect();
        cues.push(Cue {
            start,
            end: end.clone(),
            text,
        });
        last = end;
    }

    Ok(())
}

/// Wrap a word in `<u>` markers, keeping leading whitespace and any embedded
/// line break outside the emphasis.
fn underline(word: &str) -> String {
    let body_at = word.len() - word.trim_start().len();
    let (leading, body) = word.split_at(body_at);
    match body.split_once('\n') {
        Some((first, rest)) => format!("{leading}<u>{first}</u>\n{rest}"),
        None => format!("{leading}<u>{body}</u>"),
    }
}
