//! Annotation types shared between the engine and its callers.
//!
//! Highlights arrive from a persistence/sync layer the engine knows nothing
//! about; everything here is read-only input from the engine's point of view.

use serde::{Deserialize, Serialize};

/// Fixed highlight color palette. The engine never interprets colors;
/// they pass through to the styling layer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Yellow,
    Green,
    Blue,
    Pink,
    Orange,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Yellow => "yellow",
            ColorTag::Green => "green",
            ColorTag::Blue => "blue",
            ColorTag::Pink => "pink",
            ColorTag::Orange => "orange",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yellow" => Some(ColorTag::Yellow),
            "green" => Some(ColorTag::Green),
            "blue" => Some(ColorTag::Blue),
            "pink" => Some(ColorTag::Pink),
            "orange" => Some(ColorTag::Orange),
            _ => None,
        }
    }

    pub fn all() -> Vec<ColorTag> {
        vec![
            ColorTag::Yellow,
            ColorTag::Green,
            ColorTag::Blue,
            ColorTag::Pink,
            ColorTag::Orange,
        ]
    }
}

/// A persisted, user-created highlight.
///
/// `start_char`/`end_char` are character offsets relative to `start_verse`
/// and `end_verse` respectively; `None` means "whole verse" on that boundary.
/// Offsets are `i64` so stale data from a prior text revision (including
/// negative values) survives deserialization and gets clamped at resolve
/// time instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserHighlight {
    pub id: String,
    pub color: ColorTag,
    pub start_verse: i32,
    pub end_verse: i32,
    pub start_char: Option<i64>,
    pub end_char: Option<i64>,
}

impl UserHighlight {
    pub fn covers_verse(&self, verse_number: i32) -> bool {
        self.start_verse <= verse_number && verse_number <= self.end_verse
    }

    /// Caller-contract checks. A highlight failing these is treated as
    /// absent by the resolver rather than aborting the render.
    pub fn is_well_formed(&self) -> bool {
        if self.start_verse < 1 || self.start_verse > self.end_verse {
            return false;
        }
        // Single-verse highlights carry either both offsets or neither.
        if self.start_verse == self.end_verse {
            return self.start_char.is_some() == self.end_char.is_some();
        }
        true
    }
}

/// An AI-generated highlight. Verse-level precision only: when active it
/// always covers the verse in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoHighlight {
    pub id: String,
    pub theme_color: String,
    pub start_verse: i32,
    pub end_verse: i32,
    pub relevance_score: f32,
}

impl AutoHighlight {
    pub fn covers_verse(&self, verse_number: i32) -> bool {
        self.start_verse <= verse_number && verse_number <= self.end_verse
    }

    pub fn is_well_formed(&self) -> bool {
        self.start_verse >= 1 && self.start_verse <= self.end_verse
    }
}

/// The annotation attached to a segment, as an explicit sum type so callers
/// match on the kind instead of probing optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Annotation {
    User(UserHighlight),
    Auto(AutoHighlight),
}

impl Annotation {
    pub fn id(&self) -> &str {
        match self {
            Annotation::User(h) => &h.id,
            Annotation::Auto(h) => &h.id,
        }
    }

    pub fn covers_verse(&self, verse_number: i32) -> bool {
        match self {
            Annotation::User(h) => h.covers_verse(verse_number),
            Annotation::Auto(h) => h.covers_verse(verse_number),
        }
    }
}
