//! Markdown to slide deck generation.
//!
//! Splits markdown into slides at level 1 and 2 headings, resolves one of
//! the built-in themes, and renders a standalone HTML document with
//! keyboard and button navigation.

pub mod demo;
pub mod error;
pub mod markdown;
pub mod navigation;
pub mod render;
pub mod segment;
pub mod theme;
pub mod types;

pub use demo::DEMO_MARKDOWN;
pub use error::{Error, Result};
pub use markdown::{CommonMarkRenderer, FragmentRenderer};
pub use navigation::{Direction, Navigator};
pub use render::{render, DeckRenderer};
pub use segment::segment;
pub use theme::{resolve_theme, ThemeCatalog, ThemeDescriptor, ThemeId, ThemeSummary};
pub use types::{GeneratedDeck, SlideDeck, SlideRecord};

/// Segment `markdown` and render it with the theme named `theme`.
///
/// Unknown theme names fall back to `professional`.
pub fn generate(markdown: &str, theme: &str) -> GeneratedDeck {
    generate_with(&DeckRenderer::new(), markdown, theme)
}

/// Like [`generate`], with a configured renderer.
pub fn generate_with<R: FragmentRenderer>(
    renderer: &DeckRenderer<R>,
    markdown: &str,
    theme: &str,
) -> GeneratedDeck {
    let (theme_id, descriptor) = theme::resolve_theme_id(theme);
    let deck = SlideDeck::new(segment(markdown), descriptor);
    let html = renderer.render_deck(&deck);

    GeneratedDeck {
        html,
        theme_used: theme_id.to_string(),
        slides_count: deck.len(),
        slides: deck.slides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_reports_metadata() {
        let result = generate("# A\none\n# B\ntwo\n", "creative");
        assert_eq!(result.theme_used, "creative");
        assert_eq!(result.slides_count, 2);
        assert_eq!(result.slides.len(), 2);
        assert!(result.html.contains(r#"<span id="total-slides">2</span>"#));
        assert!(result.html.contains("#7c3aed"));
    }

    #[test]
    fn test_generate_unknown_theme_uses_professional() {
        let result = generate("# A\n", "sparkly");
        assert_eq!(result.theme_used, "professional");
        assert!(result.html.contains("#2563eb"));
    }

    #[test]
    fn test_generate_empty_input() {
        let result = generate("", "minimal");
        assert_eq!(result.slides_count, 1);
        assert_eq!(result.slides[0].title, "Presentation");
        assert!(result.html.contains("<h1 class=\"slide-title\">Presentation</h1>"));
    }

    #[test]
    fn test_generate_is_reproducible() {
        let first = generate(DEMO_MARKDOWN, "minimal");
        let second = generate(DEMO_MARKDOWN, "minimal");
        assert_eq!(first.html, second.html);
    }

    #[test]
    fn test_generate_with_custom_renderer() {
        let renderer = DeckRenderer::new().with_webfonts(false).with_title("Demo");
        let result = generate_with(&renderer, DEMO_MARKDOWN, "professional");
        assert!(result.html.contains("<title>Demo</title>"));
        assert!(!result.html.contains("@import"));
        assert_eq!(result.slides_count, 6);
    }

    #[test]
    fn test_generated_deck_serializes_snake_case_fields() {
        let result = generate("# A\n", "minimal");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["theme_used"], "minimal");
        assert_eq!(json["slides_count"], 1);
        assert_eq!(json["slides"][0]["title"], "A");
    }
}
