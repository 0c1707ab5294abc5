//! WASM-compatible wrapper for markdown slide deck generation.
//!
//! This crate exposes deck generation to JavaScript for use in
//! Cloudflare Workers.

use serde::{Deserialize, Serialize};
use slides_core::theme::theme_summaries;
use slides_core::{generate_with, DeckRenderer, ThemeSummary, DEMO_MARKDOWN};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Options accepted by [`generate_slides`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Document `<title>`.
    pub title: Option<String>,
    /// Skip the webfont import.
    pub no_webfonts: bool,
}

/// Result of generating a deck.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResult {
    /// The complete standalone HTML document.
    pub html: String,
    /// Theme actually used after fallback.
    pub theme_used: String,
    /// Number of slides in the document.
    pub slides_count: usize,
}

/// Generate a slide deck from markdown.
///
/// # Arguments
/// * `markdown` - The raw markdown source
/// * `theme` - Theme name; unknown names use `professional`
/// * `options` - Optional `{ title, no_webfonts }` object
///
/// # Returns
/// A JavaScript object `{ html, theme_used, slides_count }`, or throws on
/// invalid options.
#[wasm_bindgen]
pub fn generate_slides(markdown: &str, theme: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options: GenerateOptions = if options.is_undefined() || options.is_null() {
        GenerateOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
    };

    let result = generate_slides_impl(markdown, theme, &options);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn generate_slides_impl(markdown: &str, theme: &str, options: &GenerateOptions) -> GenerateResult {
    let mut renderer = DeckRenderer::new().with_webfonts(!options.no_webfonts);
    if let Some(title) = &options.title {
        renderer = renderer.with_title(title.as_str());
    }

    let deck = generate_with(&renderer, markdown, theme);

    GenerateResult {
        html: deck.html,
        theme_used: deck.theme_used,
        slides_count: deck.slides_count,
    }
}

/// List the available themes as `[{ id, name, description }]`.
#[wasm_bindgen]
pub fn list_themes() -> Result<JsValue, JsValue> {
    let themes: Vec<ThemeSummary> = theme_summaries();

    serde_wasm_bindgen::to_value(&themes)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Sample markdown for trying out the generator.
#[wasm_bindgen]
pub fn demo_markdown() -> String {
    DEMO_MARKDOWN.to_string()
}
