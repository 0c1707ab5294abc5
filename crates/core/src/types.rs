//! Domain types for segmented slides and rendered decks.

use crate::theme::ThemeDescriptor;
use serde::{Deserialize, Serialize};

/// A single slide cut from the source markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Heading text without its `#` marker. Empty for preamble slides.
    pub title: String,

    /// Raw markdown body, not yet rendered to HTML.
    pub body: String,

    /// 0-based position in the deck.
    pub order: usize,
}

impl SlideRecord {
    /// Create a new slide record.
    pub fn new(title: impl Into<String>, body: impl Into<String>, order: usize) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            order,
        }
    }

    /// Whether the slide carries neither a title nor a body.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }
}

/// Slides paired with the theme they will be rendered in.
///
/// Built once per render request and dropped once the document exists.
#[derive(Debug, Clone)]
pub struct SlideDeck<'t> {
    /// Slides in presentation order.
    pub slides: Vec<SlideRecord>,

    /// Resolved visual theme.
    pub theme: &'t ThemeDescriptor,
}

impl<'t> SlideDeck<'t> {
    /// Create a deck from already segmented slides.
    pub fn new(slides: Vec<SlideRecord>, theme: &'t ThemeDescriptor) -> Self {
        Self { slides, theme }
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Result of a full markdown-to-deck generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDeck {
    /// The complete standalone HTML document.
    pub html: String,

    /// Identifier of the theme actually used, after any fallback.
    pub theme_used: String,

    /// Number of slides in the document.
    pub slides_count: usize,

    /// The segmented slides the document was rendered from.
    pub slides: Vec<SlideRecord>,
}
