//! The full segmentation pipeline: resolve, build, tokenize.
//!
//! Pure and synchronous: no I/O, no shared state between calls, output is
//! freshly allocated per invocation. Cheap enough (linear in text length
//! plus highlight count) to recompute on every render; hosts that want
//! memoization can add it outside the engine.

use crate::annotation::{AutoHighlight, UserHighlight};
use crate::resolver;
use crate::segment::{self, Segment};
use crate::token;

/// Segment one verse's text against the chapter-wide highlight collections.
///
/// Returns the ordered, non-overlapping segment list covering the whole
/// text, each segment carrying its winning annotation and its tokens.
/// Empty text yields an empty list. Malformed or out-of-range highlight
/// data never causes a failure; it is clamped or treated as absent.
pub fn segment_verse(
    verse_number: i32,
    text: &str,
    user_highlights: &[UserHighlight],
    auto_highlights: &[AutoHighlight],
) -> Vec<Segment> {
    let resolved = resolver::resolve(verse_number, text, user_highlights, auto_highlights);
    let mut segments = segment::build(text, &resolved);

    for (idx, segment) in segments.iter_mut().enumerate() {
        let segment_key = format!("v{}-s{}", verse_number, idx);
        segment.tokens = token::tokenize(&segment.text, &segment_key);
    }

    segments
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::annotation::{Annotation, ColorTag};
    use proptest::prelude::*;

    fn color_tag() -> impl Strategy<Value = ColorTag> {
        prop::sample::select(ColorTag::all())
    }

    fn user_highlight() -> impl Strategy<Value = UserHighlight> {
        (
            "[a-z0-9]{4}",
            color_tag(),
            1i32..6,
            0i32..3,
            prop::option::of(-10i64..120),
            prop::option::of(-10i64..120),
        )
            .prop_map(|(id, color, start_verse, span, start_char, end_char)| {
                let end_verse = start_verse + span;
                // Keep the single-verse invariant; the offsets themselves may
                // still be wildly out of range, which is the point.
                let (start_char, end_char) = if start_verse == end_verse {
                    match (start_char, end_char) {
                        (Some(s), Some(e)) => (Some(s), Some(e)),
                        _ => (None, None),
                    }
                } else {
                    (start_char, end_char)
                };
                UserHighlight {
                    id,
                    color,
                    start_verse,
                    end_verse,
                    start_char,
                    end_char,
                }
            })
    }

    fn auto_highlight() -> impl Strategy<Value = AutoHighlight> {
        ("[a-z0-9]{4}", 1i32..6, 0i32..3, 0.0f32..1.0).prop_map(
            |(id, start_verse, span, relevance_score)| AutoHighlight {
                id,
                theme_color: "amber".to_string(),
                start_verse,
                end_verse: start_verse + span,
                relevance_score,
            },
        )
    }

    fn inputs() -> impl Strategy<
        Value = (
            i32,
            String,
            Vec<UserHighlight>,
            Vec<AutoHighlight>,
        ),
    > {
        (
            1i32..6,
            "[a-zA-Z0-9 ,.;:!?'—áéí-]{0,60}",
            prop::collection::vec(user_highlight(), 0..5),
            prop::collection::vec(auto_highlight(), 0..3),
        )
    }

    proptest! {
        #[test]
        fn segments_cover_text_exactly((verse, text, users, autos) in inputs()) {
            let segments = segment_verse(verse, &text, &users, &autos);

            let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
            prop_assert_eq!(&rebuilt, &text);

            let mut cursor = 0;
            for segment in &segments {
                prop_assert_eq!(segment.start_char, cursor);
                prop_assert!(segment.start_char < segment.end_char);
                cursor = segment.end_char;
            }
            prop_assert_eq!(cursor, text.chars().count());
        }

        #[test]
        fn tokens_reconstruct_segments((verse, text, users, autos) in inputs()) {
            for segment in segment_verse(verse, &text, &users, &autos) {
                let rebuilt: String =
                    segment.tokens.iter().map(|t| t.text.as_str()).collect();
                prop_assert_eq!(rebuilt, segment.text);
            }
        }

        #[test]
        fn identical_inputs_identical_outputs((verse, text, users, autos) in inputs()) {
            let first = segment_verse(verse, &text, &users, &autos);
            let second = segment_verse(verse, &text, &users, &autos);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn user_highlight_always_beats_auto(
            (verse, text, autos) in (1i32..6, "[a-zA-Z ,.]{1,60}", prop::collection::vec(auto_highlight(), 0..3))
        ) {
            // One user highlight covering the whole verse: no segment may
            // surface an auto-highlight, whatever the auto set looks like.
            let whole_verse = UserHighlight {
                id: "user".to_string(),
                color: ColorTag::Yellow,
                start_verse: verse,
                end_verse: verse,
                start_char: None,
                end_char: None,
            };
            for segment in segment_verse(verse, &text, &[whole_verse], &autos) {
                prop_assert!(matches!(segment.annotation, Some(Annotation::User(_))));
            }
        }

        #[test]
        fn stale_offsets_equal_preclamped_offsets(
            verse in 1i32..6,
            text in "[a-zA-Z ,.]{0,40}",
            start in -50i64..200,
            end in -50i64..200,
        ) {
            let len = text.chars().count() as i64;
            let stale = UserHighlight {
                id: "h".to_string(),
                color: ColorTag::Pink,
                start_verse: verse,
                end_verse: verse,
                start_char: Some(start),
                end_char: Some(end),
            };
            let clamped = UserHighlight {
                start_char: Some(start.clamp(0, len)),
                end_char: Some(end.clamp(0, len)),
                ..stale.clone()
            };
            prop_assert_eq!(
                segment_verse(verse, &text, &[stale], &[]),
                segment_verse(verse, &text, &[clamped], &[])
            );
        }
    }
}
