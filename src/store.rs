//! In-memory highlight collections.
//!
//! The store owns the chapter's annotations for the lifetime of a reading
//! session and exposes the three lifecycle operations highlights support:
//! save, recolor, delete. Persistence and sync live outside this crate; the
//! caller serializes the raw collections however it likes.

use crate::annotation::{AutoHighlight, ColorTag, UserHighlight};
use crate::engine;
use crate::segment::Segment;

#[derive(Debug, Default)]
pub struct HighlightStore {
    highlights: Vec<UserHighlight>,
    auto_highlights: Vec<AutoHighlight>,
}

impl HighlightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a new highlight. Supplied order is preserved; it breaks ties
    /// between equally-starting highlights at segmentation time.
    pub fn add_highlight(&mut self, highlight: UserHighlight) {
        self.highlights.push(highlight);
    }

    /// Explicit color change. Returns false if no highlight has this id.
    pub fn set_color(&mut self, id: &str, color: ColorTag) -> bool {
        match self.highlights.iter_mut().find(|h| h.id == id) {
            Some(highlight) => {
                highlight.color = color;
                true
            }
            None => false,
        }
    }

    /// Explicit delete. Returns false if no highlight has this id.
    pub fn remove_highlight(&mut self, id: &str) -> bool {
        let before = self.highlights.len();
        self.highlights.retain(|h| h.id != id);
        self.highlights.len() < before
    }

    /// Auto-highlights are produced wholesale by an external generation
    /// process, so they are replaced rather than edited.
    pub fn set_auto_highlights(&mut self, auto_highlights: Vec<AutoHighlight>) {
        self.auto_highlights = auto_highlights;
    }

    pub fn highlights(&self) -> &[UserHighlight] {
        &self.highlights
    }

    pub fn auto_highlights(&self) -> &[AutoHighlight] {
        &self.auto_highlights
    }

    pub fn highlights_for_verse(&self, verse_number: i32) -> Vec<&UserHighlight> {
        self.highlights
            .iter()
            .filter(|h| h.covers_verse(verse_number))
            .collect()
    }

    pub fn auto_highlights_for_verse(&self, verse_number: i32) -> Vec<&AutoHighlight> {
        self.auto_highlights
            .iter()
            .filter(|h| h.covers_verse(verse_number))
            .collect()
    }

    /// Run the segmentation pipeline for one verse against the stored
    /// collections.
    pub fn segment_verse(&self, verse_number: i32, text: &str) -> Vec<Segment> {
        engine::segment_verse(verse_number, text, &self.highlights, &self.auto_highlights)
    }
}
