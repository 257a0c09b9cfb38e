//! Range Resolver: the first pipeline stage.
//!
//! Filters the chapter-wide highlight collections down to one verse and
//! computes the verse-local character span each highlight occupies, clipping
//! multi-verse highlights to the current verse's text bounds.

use crate::annotation::{AutoHighlight, UserHighlight};

/// A user highlight's span within the current verse, half-open `[start, end)`
/// in character offsets. Carries its own copy of the highlight with any
/// stale offsets normalized to the clamped span, so downstream output never
/// embeds out-of-range data.
#[derive(Debug, Clone)]
pub struct UserSpan {
    pub start: usize,
    pub end: usize,
    pub highlight: UserHighlight,
}

/// An auto-highlight's span within the current verse. Auto-highlights have no
/// character precision, so this is always the whole verse.
#[derive(Debug, Clone)]
pub struct AutoSpan {
    pub start: usize,
    pub end: usize,
    pub highlight: AutoHighlight,
}

/// Resolver output, consumed by the segment builder.
#[derive(Debug, Default)]
pub struct ResolvedSpans {
    /// Sorted ascending by `start`; ties keep the supplied highlight order,
    /// which decides precedence among equally-starting highlights downstream.
    pub user: Vec<UserSpan>,
    pub auto: Vec<AutoSpan>,
}

/// Resolve both highlight collections against one verse.
///
/// Malformed highlights (reversed verse ranges, mismatched single-verse
/// offsets) are a caller contract violation: asserted in debug builds,
/// silently treated as absent in release so one bad annotation never blanks
/// a chapter render.
pub fn resolve(
    verse_number: i32,
    text: &str,
    user_highlights: &[UserHighlight],
    auto_highlights: &[AutoHighlight],
) -> ResolvedSpans {
    let char_len = text.chars().count();

    let mut user = Vec::new();
    for highlight in user_highlights {
        debug_assert!(
            highlight.is_well_formed(),
            "malformed user highlight {}",
            highlight.id
        );
        if !highlight.is_well_formed() || !highlight.covers_verse(verse_number) {
            continue;
        }
        let (start, end) = verse_local_range(highlight, verse_number, char_len);
        user.push(UserSpan {
            start,
            end,
            highlight: normalized(highlight, verse_number, start, end),
        });
    }
    // Stable sort: equal starts keep supplied order.
    user.sort_by_key(|span| span.start);

    let mut auto = Vec::new();
    for highlight in auto_highlights {
        debug_assert!(
            highlight.is_well_formed(),
            "malformed auto highlight {}",
            highlight.id
        );
        if !highlight.is_well_formed() || !highlight.covers_verse(verse_number) {
            continue;
        }
        auto.push(AutoSpan {
            start: 0,
            end: char_len,
            highlight: highlight.clone(),
        });
    }

    ResolvedSpans { user, auto }
}

/// Clip a (possibly multi-verse) highlight to one verse's text bounds.
fn verse_local_range(
    highlight: &UserHighlight,
    verse_number: i32,
    char_len: usize,
) -> (usize, usize) {
    let single_verse = highlight.start_verse == highlight.end_verse;

    let (raw_start, raw_end) = if single_verse {
        match (highlight.start_char, highlight.end_char) {
            (Some(s), Some(e)) => (s, e),
            _ => (0, char_len as i64),
        }
    } else if verse_number == highlight.start_verse {
        (highlight.start_char.unwrap_or(0), char_len as i64)
    } else if verse_number == highlight.end_verse {
        (0, highlight.end_char.unwrap_or(char_len as i64))
    } else {
        // Strictly between start and end verse: fully covered.
        (0, char_len as i64)
    };

    let start = clamp_offset(raw_start, char_len, &highlight.id);
    let end = clamp_offset(raw_end, char_len, &highlight.id);
    // A reversed span after clamping collapses to empty; the builder skips it.
    (start, end.max(start))
}

/// Copy of the highlight for the output, with each offset that refers to
/// this verse rewritten to the resolved span. `start_char` is meaningful
/// only relative to `start_verse` and `end_char` only relative to
/// `end_verse`, so offsets belonging to other verses are left untouched.
/// After this, stale offsets and an equivalent pre-clamped highlight produce
/// identical output.
fn normalized(
    highlight: &UserHighlight,
    verse_number: i32,
    start: usize,
    end: usize,
) -> UserHighlight {
    let mut highlight = highlight.clone();
    if verse_number == highlight.start_verse && highlight.start_char.is_some() {
        highlight.start_char = Some(start as i64);
    }
    if verse_number == highlight.end_verse && highlight.end_char.is_some() {
        highlight.end_char = Some(end as i64);
    }
    highlight
}

fn clamp_offset(raw: i64, char_len: usize, id: &str) -> usize {
    let clamped = raw.clamp(0, char_len as i64) as usize;
    if raw < 0 || raw > char_len as i64 {
        tracing::debug!(
            highlight = id,
            raw,
            char_len,
            "clamped stale character offset"
        );
    }
    clamped
}
