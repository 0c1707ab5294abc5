//! Markdown fragment rendering for slide bodies.

use pulldown_cmark::{html, Event, Options, Parser};
use std::iter;

/// Converts one slide body from markdown to an HTML fragment.
///
/// Implementations only ever see a single slide's body. Their output is
/// embedded as-is, without further sanitizing.
pub trait FragmentRenderer {
    fn to_html_fragment(&self, markdown: &str) -> String;
}

/// CommonMark renderer backed by `pulldown-cmark`.
///
/// No extensions are enabled: headings, paragraphs, lists, emphasis, code and
/// links render as plain CommonMark. Malformed constructs come out as literal
/// text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkRenderer;

impl CommonMarkRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl FragmentRenderer for CommonMarkRenderer {
    fn to_html_fragment(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Options::empty());
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }
}

impl<F> FragmentRenderer for F
where
    F: Fn(&str) -> String,
{
    fn to_html_fragment(&self, markdown: &str) -> String {
        self(markdown)
    }
}

/// Escape text for use inside an HTML element.
///
/// Goes through the same HTML writer as slide bodies, so `&`, `<`, `>` and
/// `"` are escaped exactly as they are in rendered markdown text.
pub(crate) fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    html::push_html(&mut escaped, iter::once(Event::Text(text.into())));
    escaped
}
