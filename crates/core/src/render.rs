//! Standalone HTML output for a slide deck.
//!
//! Produces one self-contained document: a theme-keyed stylesheet, one
//! element per slide, the previous/next controls with a position readout,
//! and the navigation controller script. Output is a pure function of the
//! slides, the theme and the renderer options.

use crate::error::Result;
use crate::markdown::{escape_text, CommonMarkRenderer, FragmentRenderer};
use crate::navigation::{
    controller_script, Navigator, ACTIVE_CLASS, NEXT_ID, PREV_ID, READOUT_ID, SLIDE_CLASS,
    TOTAL_ID,
};
use crate::theme::ThemeDescriptor;
use crate::types::{SlideDeck, SlideRecord};
use std::io;

/// Default document `<title>`.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Generated Slides";

/// Webfonts for the catalog's font families. Layout and navigation do not
/// depend on them being reachable.
const WEBFONT_IMPORT: &str = "@import url('https://fonts.googleapis.com/css2?family=Inter:wght@300;400;600;700&family=Poppins:wght@300;400;600;700&family=Source+Sans+Pro:wght@300;400;600;700&display=swap');";

/// Renderer for complete slide deck documents.
#[derive(Debug, Clone)]
pub struct DeckRenderer<R = CommonMarkRenderer> {
    fragments: R,
    document_title: String,
    webfonts: bool,
}

impl Default for DeckRenderer {
    fn default() -> Self {
        Self {
            fragments: CommonMarkRenderer::new(),
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            webfonts: true,
        }
    }
}

impl DeckRenderer {
    /// Create a renderer with CommonMark bodies and default options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: FragmentRenderer> DeckRenderer<R> {
    /// Use a different renderer for slide bodies.
    pub fn with_fragment_renderer<F: FragmentRenderer>(self, fragments: F) -> DeckRenderer<F> {
        DeckRenderer {
            fragments,
            document_title: self.document_title,
            webfonts: self.webfonts,
        }
    }

    /// Set the document `<title>`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = title.into();
        self
    }

    /// Set whether the stylesheet imports webfonts.
    pub fn with_webfonts(mut self, webfonts: bool) -> Self {
        self.webfonts = webfonts;
        self
    }

    /// Render slides in `theme` to a complete HTML document.
    ///
    /// Slides are laid out by their `order` field, not by their position in
    /// `slides`; records with equal `order` keep their relative position.
    pub fn render(&self, slides: &[SlideRecord], theme: &ThemeDescriptor) -> String {
        let mut ordered: Vec<&SlideRecord> = slides.iter().collect();
        ordered.sort_by_key(|slide| slide.order);

        let mut html = String::with_capacity(8 * 1024);
        self.write_document(&mut html, &ordered, theme);
        log::debug!(
            "Rendered {} slides with the {} theme ({} bytes)",
            slides.len(),
            theme.name,
            html.len()
        );
        html
    }

    /// Render a deck to a complete HTML document.
    pub fn render_deck(&self, deck: &SlideDeck<'_>) -> String {
        self.render(&deck.slides, deck.theme)
    }

    /// Render slides and write the document to `writer`.
    pub fn write_to<W: io::Write>(
        &self,
        slides: &[SlideRecord],
        theme: &ThemeDescriptor,
        mut writer: W,
    ) -> Result<()> {
        let html = self.render(slides, theme);
        writer.write_all(html.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn write_document(&self, out: &mut String, slides: &[&SlideRecord], theme: &ThemeDescriptor) {
        let nav = Navigator::new(slides.len());

        out.push_str("<!DOCTYPE html>\n");
        out.push_str("<html lang=\"en\">\n");
        out.push_str("<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        out.push_str(&format!(
            "    <title>{}</title>\n",
            escape_text(&self.document_title)
        ));
        out.push_str("    <style>\n");
        self.write_stylesheet(out, theme);
        out.push_str("    </style>\n");
        out.push_str("</head>\n");
        out.push_str("<body>\n");

        out.push_str("    <div class=\"slide-counter\">\n");
        out.push_str(&format!(
            "        <span id=\"{}\">{}</span> / <span id=\"{}\">{}</span>\n",
            READOUT_ID,
            nav.readout(),
            TOTAL_ID,
            nav.total()
        ));
        out.push_str("    </div>\n");

        for (index, slide) in slides.iter().enumerate() {
            self.write_slide(out, index, slide, nav.is_visible(index));
        }

        out.push_str("    <nav class=\"navigation\">\n");
        out.push_str(&format!(
            "        <button class=\"nav-btn\" id=\"{}\" type=\"button\"{}>&larr; Previous</button>\n",
            PREV_ID,
            disabled_attr(nav.previous_disabled())
        ));
        out.push_str(&format!(
            "        <button class=\"nav-btn\" id=\"{}\" type=\"button\"{}>Next &rarr;</button>\n",
            NEXT_ID,
            disabled_attr(nav.next_disabled())
        ));
        out.push_str("    </nav>\n");

        out.push_str("    <script>\n");
        out.push_str(&controller_script(nav.total()));
        out.push_str("    </script>\n");
        out.push_str("</body>\n");
        out.push_str("</html>\n");
    }

    fn write_slide(&self, out: &mut String, index: usize, slide: &SlideRecord, visible: bool) {
        let class = if visible {
            format!("{} {}", SLIDE_CLASS, ACTIVE_CLASS)
        } else {
            SLIDE_CLASS.to_string()
        };

        out.push_str(&format!(
            "    <section class=\"{}\" data-slide=\"{}\">\n",
            class, index
        ));
        out.push_str(&format!(
            "        <h1 class=\"slide-title\">{}</h1>\n",
            escape_text(&slide.title)
        ));
        out.push_str("        <div class=\"slide-content\">\n");
        out.push_str(&self.fragments.to_html_fragment(&slide.body));
        out.push_str("        </div>\n");
        out.push_str("    </section>\n");
    }

    fn write_stylesheet(&self, out: &mut String, theme: &ThemeDescriptor) {
        if self.webfonts {
            out.push_str(&format!("        {}\n", WEBFONT_IMPORT));
        }

        out.push_str(&format!(
            r#"        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: {font_family};
            background: {background};
            min-height: 100vh;
            overflow-x: hidden;
        }}
        .{slide_class} {{
            display: none;
            min-height: 100vh;
            padding: 60px 40px;
            flex-direction: column;
            justify-content: center;
            align-items: center;
            text-align: center;
        }}
        .{slide_class}.{active_class} {{ display: flex; }}
        .slide-title {{
            font-size: 3rem;
            font-weight: 700;
            color: {primary};
            margin-bottom: 2rem;
            line-height: 1.2;
        }}
        .slide-content {{
            font-size: 1.5rem;
            color: {secondary};
            max-width: 800px;
            line-height: 1.6;
        }}
        .slide-content h3 {{ color: {primary}; margin: 1.5rem 0 1rem 0; }}
        .slide-content ul, .slide-content ol {{ text-align: left; margin: 1rem 0; padding-left: 1.5rem; }}
        .slide-content li {{ margin: 0.5rem 0; }}
        .slide-content code {{ font-family: monospace; }}
        .navigation {{
            position: fixed;
            bottom: 30px;
            left: 50%;
            transform: translateX(-50%);
            display: flex;
            gap: 15px;
            z-index: 100;
        }}
        .nav-btn {{
            background: {primary};
            color: white;
            border: none;
            padding: 12px 24px;
            border-radius: 25px;
            cursor: pointer;
            font-weight: 600;
        }}
        .nav-btn:disabled {{ opacity: 0.5; cursor: not-allowed; }}
        .slide-counter {{
            position: fixed;
            top: 30px;
            right: 30px;
            background: rgba(255, 255, 255, 0.9);
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: 600;
            color: {primary};
        }}
        @media (max-width: 768px) {{
            .slide-title {{ font-size: 2rem; }}
            .slide-content {{ font-size: 1.2rem; }}
            .{slide_class} {{ padding: 40px 20px; }}
        }}
"#,
            font_family = theme.font_family,
            background = theme.background,
            primary = theme.primary_color,
            secondary = theme.secondary_color,
            slide_class = SLIDE_CLASS,
            active_class = ACTIVE_CLASS,
        ));
    }
}

fn disabled_attr(disabled: bool) -> &'static str {
    if disabled {
        " disabled"
    } else {
        ""
    }
}

/// Render slides in `theme` with the default renderer.
pub fn render(slides: &[SlideRecord], theme: &ThemeDescriptor) -> String {
    DeckRenderer::new().render(slides, theme)
}
