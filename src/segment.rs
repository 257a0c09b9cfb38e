//! Segment Builder: the second pipeline stage.
//!
//! Sweeps the resolved spans left to right and emits a contiguous,
//! non-overlapping list of segments covering the whole verse text, each
//! tagged with at most one winning annotation under the fixed precedence
//! order: user highlight > auto-highlight > plain.

use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;
use crate::resolver::ResolvedSpans;
use crate::token::Token;

/// A maximal contiguous run of one verse's text sharing the same winning
/// annotation (or none). Sorted by `start_char`, segments are contiguous,
/// non-overlapping, never empty, and their union is the whole text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Half-open character range within the verse text.
    pub start_char: usize,
    pub end_char: usize,
    pub text: String,
    pub annotation: Option<Annotation>,
    /// Filled in by the pipeline entry point; see `engine::segment_verse`.
    pub tokens: Vec<Token>,
}

/// Byte offset of every character boundary, including the end of the text.
/// Lets the builder slice by character offsets without re-walking the string.
fn char_boundaries(text: &str) -> Vec<usize> {
    let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    boundaries.push(text.len());
    boundaries
}

/// Merge resolved spans against the verse text into the final segment list.
///
/// User spans are applied in resolved order. Overlapping user spans are a
/// transient UI state, not an expected one: the later span is clipped to
/// start at the sweep cursor (first-applied-wins) and the clip is logged for
/// data-quality monitoring. Regions not claimed by any user span fall to the
/// first overlapping auto-highlight as a whole, or to plain text.
///
/// Spans reaching past the text bounds are clamped here too, so hand-built
/// `ResolvedSpans` never panic the builder.
pub fn build(text: &str, resolved: &ResolvedSpans) -> Vec<Segment> {
    let boundaries = char_boundaries(text);
    let char_len = boundaries.len() - 1;

    let mut segments = Vec::new();
    let mut pos = 0;

    for span in &resolved.user {
        let span_end = span.end.min(char_len);
        let span_start = span.start.min(span_end);
        // Zero-length spans contribute nothing.
        if span_end <= span_start {
            continue;
        }
        if span_end <= pos {
            tracing::warn!(
                highlight = span.highlight.id.as_str(),
                "user highlight fully covered by an earlier one, skipping"
            );
            continue;
        }
        let start = if span_start < pos {
            tracing::warn!(
                highlight = span.highlight.id.as_str(),
                span_start,
                clipped_to = pos,
                "overlapping user highlights, clipping later one"
            );
            pos
        } else {
            span_start
        };

        if pos < start {
            segments.push(filler(text, &boundaries, pos, start, resolved));
        }
        segments.push(Segment {
            start_char: start,
            end_char: span_end,
            text: slice(text, &boundaries, start, span_end),
            annotation: Some(Annotation::User(span.highlight.clone())),
            tokens: Vec::new(),
        });
        pos = span_end;
    }

    if pos < char_len {
        segments.push(filler(text, &boundaries, pos, char_len, resolved));
    }

    segments
}

/// A region claimed by no user span. Any auto-highlight presence blankets
/// the entire region as one segment; auto-highlights carry no character
/// precision, so the builder never sub-splits plain text for them. The first
/// overlapping auto span in resolved order wins.
fn filler(
    text: &str,
    boundaries: &[usize],
    start: usize,
    end: usize,
    resolved: &ResolvedSpans,
) -> Segment {
    let annotation = resolved
        .auto
        .iter()
        .find(|span| span.start < end && span.end > start)
        .map(|span| Annotation::Auto(span.highlight.clone()));

    Segment {
        start_char: start,
        end_char: end,
        text: slice(text, boundaries, start, end),
        annotation,
        tokens: Vec::new(),
    }
}

fn slice(text: &str, boundaries: &[usize], start: usize, end: usize) -> String {
    text[boundaries[start]..boundaries[end]].to_string()
}
