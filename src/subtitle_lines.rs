//! Re-flow a segment's word list into display lines and timed subtitle blocks.
//!
//! Three independent constraints drive the re-flow:
//! - `max_line_width` splits a word list recursively at commas, speech pauses,
//!   or the midpoint until every line fits the character budget
//! - `max_words_per_line` chunks the word list into fixed-size groups
//!   (ignored when `max_line_width` is set)
//! - `max_line_count` regroups produced lines into blocks, joined with embedded
//!   line breaks while remaining one timed subtitle
//!
//! Lines and blocks own copies of their words. Whitespace trimming and speaker
//! prefixing mutate those copies, never the source segment, so the same word can
//! safely appear in several highlight cues later.

use crate::opts::WriterOpts;
use crate::transcript::{Segment, Word};

/// Recursion budget for the width splitter. Malformed word lists (unsorted, gaps)
/// must not recurse forever; past this depth the remainder stays on one line.
pub const MAX_LINE_SPLITS: usize = 12;

/// Denominator of the split heuristics' edge fraction: comma candidates in the
/// first fifth of a line are discarded, and the pause search scans a window of
/// one fifth of the line on each side of the midpoint. Heuristic constants
/// carried over from the original re-flow logic; no deeper rationale is known.
pub const SPLIT_EDGE_FRACTION: usize = 5;

/// Character budget applied when no explicit width constraint is configured.
/// Wide enough that ordinary segments stay on a single line.
pub const DEFAULT_MAX_LINE_WIDTH: usize = 1000;

/// One display line: an ordered run of words sharing a rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleLine {
    pub words: Vec<Word>,
}

impl SubtitleLine {
    pub fn start(&self) -> f64 {
        self.words.first().map_or(0.0, |word| word.start)
    }

    pub fn end(&self) -> f64 {
        self.words.last().map_or(0.0, |word| word.end)
    }
}

/// One timed subtitle block: one or more lines joined by embedded line breaks,
/// rendered as a single cue spanning its first word's start to its last word's end.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleBlock {
    pub words: Vec<Word>,
}

impl SubtitleBlock {
    pub fn start(&self) -> f64 {
        self.words.first().map_or(0.0, |word| word.start)
    }

    pub fn end(&self) -> f64 {
        self.words.last().map_or(0.0, |word| word.end)
    }

    /// The block's rendered text: every word concatenated verbatim.
    pub fn text(&self) -> String {
        self.words.iter().map(|word| word.word.as_str()).collect()
    }
}

/// Split one segment's words into timed subtitle blocks under the configured
/// constraints, with whitespace normalized and the speaker prefix applied.
///
/// Returns no blocks when the segment carries no word-level timing; callers fall
/// back to rendering the segment as a single block from its own start/end/text.
pub fn segment_blocks(segment: &Segment, opts: &WriterOpts) -> Vec<SubtitleBlock> {
    if segment.words.is_empty() {
        return Vec::new();
    }

    let lines = match (opts.max_line_width, opts.max_words_per_line) {
        // Width wins over words-per-line when both are set; validation has
        // already flagged the ignored option to the caller.
        (Some(width), _) => split_by_width(&segment.words, width, MAX_LINE_SPLITS),
        (None, Some(word_count)) => split_by_word_count(&segment.words, word_count),
        (None, None) => split_by_width(&segment.words, DEFAULT_MAX_LINE_WIDTH, MAX_LINE_SPLITS),
    };

    // Without an explicit line count, width-split lines stay together as one
    // block per segment, while word-count chunks each become their own block.
    let lines_per_block = opts
        .max_line_count
        .unwrap_or(match opts.max_line_width {
            Some(_) => usize::MAX,
            None if opts.max_words_per_line.is_some() => 1,
            None => usize::MAX,
        })
        .max(1);

    let speaker_prefix = segment.speaker_prefix();
    let mut blocks = Vec::new();
    let mut lines = lines.as_slice();
    while !lines.is_empty() {
        let take = lines_per_block.min(lines.len());
        let (group, rest) = lines.split_at(take);
        lines = rest;
        if let Some(block) = join_lines(group, speaker_prefix.as_deref()) {
            blocks.push(block);
        }
    }

    blocks
}

/// Recursively bisect `words` until each line's concatenated text fits `max_line_width`.
///
/// Split-point preference, mirroring natural reading order:
/// 1. the comma-bearing word closest to the midpoint (last word excluded),
///    unless it falls within the leading fifth of the list
/// 2. the largest strictly-positive time gap between adjacent words within a
///    fifth of the list on either side of the midpoint (first maximum wins)
/// 3. the midpoint itself
fn split_by_width(words: &[Word], max_line_width: usize, splits_left: usize) -> Vec<SubtitleLine> {
    if words.is_empty() {
        return Vec::new();
    }
    if words.len() == 1 || splits_left == 0 || line_width(words) <= max_line_width {
        return vec![SubtitleLine {
            words: words.to_vec(),
        }];
    }

    let middle = words.len() / 2;
    let edge = words.len() / SPLIT_EDGE_FRACTION;

    let comma_index = words[..words.len() - 1]
        .iter()
        .enumerate()
        .filter(|(_, word)| word.word.contains(','))
        .min_by_key(|(index, _)| middle.abs_diff(*index))
        .map(|(index, _)| index)
        .filter(|index| *index >= edge);

    let pause_index = comma_index.or_else(|| largest_pause(words, middle, edge));

    // A comma or pause split keeps the chosen word on the left line; the
    // midpoint fallback splits exactly at the middle of the list.
    let left_len = match pause_index {
        Some(index) => index + 1,
        None => middle,
    };

    let (left, right) = words.split_at(left_len);
    let mut lines = split_by_width(left, max_line_width, splits_left - 1);
    lines.extend(split_by_width(right, max_line_width, splits_left - 1));
    lines
}

fn line_width(words: &[Word]) -> usize {
    words.iter().map(|word| word.word.chars().count()).sum()
}

/// The index preceding the largest positive inter-word gap near the midpoint.
fn largest_pause(words: &[Word], middle: usize, edge: usize) -> Option<usize> {
    let window_start = middle.saturating_sub(edge);
    let window_end = (middle + edge).min(words.len());

    let mut largest: Option<usize> = None;
    let mut largest_gap = 0.0;
    for index in window_start..window_end.saturating_sub(1) {
        let gap = words[index + 1].start - words[index].end;
        if gap > largest_gap {
            largest_gap = gap;
            largest = Some(index);
        }
    }

    largest
}

/// Chunk words into fixed-size lines of `max_words` each, last line possibly shorter.
fn split_by_word_count(words: &[Word], max_words: usize) -> Vec<SubtitleLine> {
    let max_words = max_words.max(1);
    words
        .chunks(max_words)
        .map(|chunk| SubtitleLine {
            words: chunk.to_vec(),
        })
        .collect()
}

/// Join a group of lines into one block.
///
/// Every line's first word loses its leading whitespace. A non-final line's last
/// word trades its trailing whitespace for a line break; the final line's last
/// word is right-trimmed. The speaker prefix is attached to the block's first
/// word exactly once, so reprocessing an already-prefixed block is a no-op.
fn join_lines(group: &[SubtitleLine], speaker_prefix: Option<&str>) -> Option<SubtitleBlock> {
    let mut words: Vec<Word> = Vec::new();
    let last_line = group.iter().rposition(|line| !line.words.is_empty())?;

    for (index, line) in group.iter().enumerate() {
        let mut line_words = line.words.clone();
        if let Some(first) = line_words.first_mut() {
            first.word = first.word.trim_start().to_string();
        }
        if let Some(last) = line_words.last_mut() {
            let trimmed = last.word.trim_end().to_string();
            last.word = if index == last_line {
                trimmed
            } else {
                trimmed + "\n"
            };
        }
        words.extend(line_words);
    }

    if let Some(prefix) = speaker_prefix {
        let first = words.first_mut()?;
        if !first.word.starts_with(prefix) {
            first.word = format!("{prefix}{}", first.word.trim_start());
        }
    }

    Some(SubtitleBlock { words })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opts::WriterOpts;

    fn word(start: f64, end: f64, text: &str) -> Word {
        Word {
            start,
            end,
            word: text.to_string(),
            probability: 1.0,
        }
    }

    fn segment(words: Vec<Word>) -> Segment {
        let text = words.iter().map(|w| w.word.as_str()).collect();
        Segment {
            start: words.first().map_or(0.0, |w| w.start),
            end: words.last().map_or(0.0, |w| w.end),
            text,
            speaker: None,
            words,
        }
    }

    fn spoken(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| word(i as f64, i as f64 + 0.5, text))
            .collect()
    }

    // Back-to-back words with no inter-word gaps, so pause-based splitting
    // never triggers.
    fn contiguous(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| word(i as f64, i as f64 + 1.0, text))
            .collect()
    }

    fn block_texts(blocks: &[SubtitleBlock]) -> Vec<String> {
        blocks.iter().map(|block| block.text()).collect()
    }

    #[test]
    fn wide_enough_lines_are_left_alone() {
        let blocks = segment_blocks(
            &segment(spoken(&["Hello", " my", " friends."])),
            &WriterOpts {
                max_line_width: Some(80),
                ..WriterOpts::default()
            },
        );

        assert_eq!(block_texts(&blocks), vec!["Hello my friends."]);
    }

    #[test]
    fn overwide_two_word_segments_split_at_the_midpoint() {
        let words = vec![word(1.0, 2.0, "Hello"), word(4.0, 6.0, "friends")];
        let blocks = segment_blocks(
            &segment(words),
            &WriterOpts {
                max_line_width: Some(5),
                ..WriterOpts::default()
            },
        );

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "Hello\nfriends");
        assert_eq!(blocks[0].start(), 1.0);
        assert_eq!(blocks[0].end(), 6.0);
    }

    #[test]
    fn max_line_count_regroups_lines_into_separate_blocks() {
        let words = vec![word(1.0, 2.0, "Hello"), word(4.0, 6.0, "friends")];
        let blocks = segment_blocks(
            &segment(words),
            &WriterOpts {
                max_line_width: Some(5),
                max_line_count: Some(1),
                ..WriterOpts::default()
            },
        );

        assert_eq!(block_texts(&blocks), vec!["Hello", "friends"]);
        assert_eq!(blocks[0].start(), 1.0);
        assert_eq!(blocks[0].end(), 2.0);
        assert_eq!(blocks[1].start(), 4.0);
        assert_eq!(blocks[1].end(), 6.0);
    }

    #[test]
    fn comma_nearest_the_midpoint_is_the_preferred_split() {
        let words = contiguous(&["One,", " two", " three,", " four", " five", " six"]);
        let blocks = segment_blocks(
            &segment(words),
            &WriterOpts {
                max_line_width: Some(15),
                max_line_count: Some(1),
                ..WriterOpts::default()
            },
        );

        // Both "One," (index 0) and "three," (index 2) carry commas; index 2
        // sits closest to the midpoint and keeps the comma word on its line.
        assert_eq!(
            block_texts(&blocks),
            vec!["One, two three,", "four five six"]
        );
    }

    #[test]
    fn commas_in_the_leading_fifth_are_not_split_points() {
        let words = contiguous(&[
            "aaaa", " aaa,", " aaaa", " aaaa", " aaaa", " aaaa", " aaaa", " aaaa", " aaaa",
            " aaaa",
        ]);
        let blocks = segment_blocks(
            &segment(words),
            &WriterOpts {
                max_line_width: Some(25),
                max_line_count: Some(1),
                ..WriterOpts::default()
            },
        );

        // The only comma (index 1) falls inside the leading fifth of the list
        // and is discarded; with no pauses either, the list splits at the
        // midpoint instead of producing a degenerate two-word leading line.
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].words.len(), 5);
        assert_eq!(blocks[1].words.len(), 5);
    }

    #[test]
    fn a_speech_pause_splits_when_no_comma_qualifies() {
        let mut words = contiguous(&[
            "aaaa", " aaaa", " aaaa", " aaaa", " aaaa", " aaaa", " aaaa", " aaaa", " aaaa",
            " aaaa",
        ]);
        // Open a gap between the 5th and 6th word, inside the pause window.
        for w in &mut words[5..] {
            w.start += 10.0;
            w.end += 10.0;
        }

        let blocks = segment_blocks(
            &segment(words),
            &WriterOpts {
                max_line_width: Some(25),
                max_line_count: Some(1),
                ..WriterOpts::default()
            },
        );

        assert_eq!(
            block_texts(&blocks),
            vec!["aaaa aaaa aaaa aaaa aaaa", "aaaa aaaa aaaa aaaa aaaa"]
        );
    }

    #[test]
    fn words_survive_every_constraint_combination_in_order() {
        let words = spoken(&[
            "One,", " two", " three", " four,", " five", " six", " seven", " eight",
        ]);
        let originals: Vec<String> = words.iter().map(|w| w.word.trim().to_string()).collect();

        let widths = [None, Some(3), Some(10), Some(25)];
        let counts = [None, Some(1), Some(2)];
        let per_line = [None, Some(1), Some(3)];

        for max_line_width in widths {
            for max_line_count in counts {
                for max_words_per_line in per_line {
                    let opts = WriterOpts {
                        max_line_width,
                        max_line_count,
                        max_words_per_line,
                        ..WriterOpts::default()
                    };
                    let blocks = segment_blocks(&segment(words.clone()), &opts);

                    let flattened: Vec<String> = blocks
                        .iter()
                        .flat_map(|block| &block.words)
                        .map(|w| w.word.trim().to_string())
                        .collect();
                    assert_eq!(flattened, originals, "words lost under {opts:?}");
                }
            }
        }
    }

    #[test]
    fn words_per_line_chunks_into_one_block_per_chunk() {
        let words = spoken(&["a", " b", " c", " d", " e"]);
        let blocks = segment_blocks(
            &segment(words.clone()),
            &WriterOpts {
                max_words_per_line: Some(2),
                ..WriterOpts::default()
            },
        );

        assert_eq!(block_texts(&blocks), vec!["a b", "c d", "e"]);
        assert_eq!(blocks[0].start(), words[0].start);
        assert_eq!(blocks[0].end(), words[1].end);
        assert_eq!(blocks[2].start(), words[4].start);
        assert_eq!(blocks[2].end(), words[4].end);
    }

    #[test]
    fn width_takes_precedence_over_words_per_line() {
        let words = spoken(&["a", " b", " c", " d"]);
        let blocks = segment_blocks(
            &segment(words),
            &WriterOpts {
                max_line_width: Some(80),
                max_words_per_line: Some(1),
                ..WriterOpts::default()
            },
        );

        assert_eq!(block_texts(&blocks), vec!["a b c d"]);
    }

    #[test]
    fn speaker_prefix_is_attached_once_per_block() {
        let mut seg = segment(spoken(&["Hello", " there"]));
        seg.speaker = Some("JOHN_00".to_string());

        let opts = WriterOpts::default();
        let blocks = segment_blocks(&seg, &opts);
        assert_eq!(block_texts(&blocks), vec!["[JOHN_00]: Hello there"]);

        // Reprocessing a segment whose first word already carries the prefix
        // must not double it.
        seg.words[0].word = "[JOHN_00]: Hello".to_string();
        let blocks = segment_blocks(&seg, &opts);
        assert_eq!(block_texts(&blocks), vec!["[JOHN_00]: Hello there"]);
    }

    #[test]
    fn wordless_segments_produce_no_blocks() {
        let seg = Segment {
            start: 0.0,
            end: 2.0,
            text: "Hello.".to_string(),
            speaker: None,
            words: Vec::new(),
        };
        assert!(segment_blocks(&seg, &WriterOpts::default()).is_empty());
    }

    #[test]
    fn pathological_word_lists_terminate_within_the_split_budget() {
        // A single huge "word" can never fit the width; it must stay one line
        // instead of recursing forever.
        let words = vec![word(0.0, 1.0, "a".repeat(100).as_str())];
        let blocks = segment_blocks(
            &segment(words),
            &WriterOpts {
                max_line_width: Some(5),
                ..WriterOpts::default()
            },
        );
        assert_eq!(blocks.len(), 1);

        // Unsorted timings with negative gaps fall back to midpoint splits and
        // still terminate.
        let words: Vec<Word> = (0..64)
            .map(|i| word(64.0 - i as f64, 0.5, "xxxxxxxx"))
            .collect();
        let blocks = segment_blocks(
            &segment(words),
            &WriterOpts {
                max_line_width: Some(4),
                ..WriterOpts::default()
            },
        );
        assert!(!blocks.is_empty());
    }
}
