//! Verse annotation segmentation engine.
//!
//! Given one verse's text plus the chapter's user highlights (character
//! precision) and AI auto-highlights (verse precision), the engine computes
//! an ordered, non-overlapping partition of the text, assigns each partition
//! its winning annotation under the fixed precedence user > auto > plain,
//! and splits each partition into word/non-word tokens for per-word
//! interaction. The whole pipeline is a pure function of its inputs.

pub mod annotation;
pub mod engine;
pub mod resolver;
pub mod segment;
pub mod store;
pub mod style;
pub mod token;

// Re-export main types for convenience
pub use annotation::{Annotation, AutoHighlight, ColorTag, UserHighlight};
pub use engine::segment_verse;
pub use segment::Segment;
pub use store::HighlightStore;
pub use style::{auto_style, style_for, ThemeMode};
pub use token::{tokenize, Token};
