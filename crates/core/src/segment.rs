//! Splitting raw markdown into slides.
//!
//! Only level 1 and level 2 ATX headings that start at column 0 open a new
//! slide. Everything else, including deeper headings, is body content of the
//! slide it falls in. Text before the first heading becomes its own slide
//! with an empty title.

use crate::types::SlideRecord;

/// Title of the single slide produced when no slides could be cut.
pub const FALLBACK_TITLE: &str = "Presentation";

/// Deepest heading level that starts a new slide.
const MAX_SLIDE_HEADING_DEPTH: usize = 2;

/// Split markdown into slides at level 1 and 2 headings.
///
/// Never fails. Input without any usable slide yields one slide titled
/// [`FALLBACK_TITLE`] whose body is the untouched input.
pub fn segment(markdown: &str) -> Vec<SlideRecord> {
    let mut state = SegmentState::new();
    let mut span = String::new();

    for line in markdown.split_inclusive('\n') {
        match slide_heading_text(line) {
            Some(title) => {
                state.push_span(&span);
                span.clear();
                state.push_heading(title);
            }
            None => span.push_str(line),
        }
    }
    state.push_span(&span);

    let slides = state.finish();
    if slides.is_empty() {
        log::debug!("No slides found, using a single fallback slide");
        return vec![SlideRecord::new(FALLBACK_TITLE, markdown, 0)];
    }

    log::debug!("Segmented markdown into {} slides", slides.len());
    slides
}

/// Heading text of a line that opens a new slide.
///
/// The line must start with one or two `#`, then at least one whitespace
/// character, then non-blank text.
fn slide_heading_text(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\n').unwrap_or(line);

    let depth = line.bytes().take_while(|&b| b == b'#').count();
    if depth == 0 || depth > MAX_SLIDE_HEADING_DEPTH {
        return None;
    }

    let rest = &line[depth..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let text = rest.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Accumulator for the slide currently being built.
struct SegmentState {
    slides: Vec<SlideRecord>,
    current: SlideRecord,
}

impl SegmentState {
    fn new() -> Self {
        Self {
            slides: Vec::new(),
            current: SlideRecord::default(),
        }
    }

    /// Append a non-heading span to the current body.
    fn push_span(&mut self, span: &str) {
        let text = span.trim();
        if text.is_empty() {
            return;
        }
        self.current.body.push_str(text);
        self.current.body.push('\n');
    }

    /// Close the current slide and start a new one titled `title`.
    fn push_heading(&mut self, title: &str) {
        self.finalize_current();
        self.current.title = title.to_string();
    }

    fn finalize_current(&mut self) {
        let mut slide = std::mem::take(&mut self.current);
        if slide.is_empty() {
            return;
        }
        slide.order = self.slides.len();
        self.slides.push(slide);
    }

    fn finish(mut self) -> Vec<SlideRecord> {
        self.finalize_current();
        self.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(slides: &[SlideRecord]) -> Vec<&str> {
        slides.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_split_on_h1_and_h2() {
        let slides = segment("# One\nfirst\n## Two\nsecond\n");
        assert_eq!(titles(&slides), vec!["One", "Two"]);
        assert_eq!(slides[0].body, "first\n");
        assert_eq!(slides[1].body, "second\n");
    }

    #[test]
    fn test_preamble_becomes_untitled_slide() {
        let slides = segment("intro text\n# Title\nbody");
        assert_eq!(
            slides,
            vec![
                SlideRecord::new("", "intro text\n", 0),
                SlideRecord::new("Title", "body\n", 1),
            ]
        );
    }

    #[test]
    fn test_deeper_headings_stay_in_body() {
        let slides = segment("# Top\n### Detail\n- item\n#### Deeper\ntext");
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "Top");
        assert_eq!(slides[0].body, "### Detail\n- item\n#### Deeper\ntext\n");
    }

    #[test]
    fn test_heading_requires_whitespace_after_hashes() {
        let slides = segment("#hashtag\n## Real\n");
        assert_eq!(titles(&slides), vec!["", "Real"]);
        assert_eq!(slides[0].body, "#hashtag\n");
    }

    #[test]
    fn test_indented_heading_is_body() {
        let slides = segment("# A\n  # not a heading\n");
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].body, "# not a heading\n");
    }

    #[test]
    fn test_heading_without_text_is_body() {
        let slides = segment("# A\n#   \ntext\n");
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].body, "#   \ntext\n");
    }

    #[test]
    fn test_title_only_slides_survive() {
        let slides = segment("# One\n# Two\n\n# Three");
        assert_eq!(titles(&slides), vec!["One", "Two", "Three"]);
        assert!(slides.iter().all(|s| s.body.is_empty()));
    }

    #[test]
    fn test_title_is_trimmed() {
        let slides = segment("##\t  Spaced out  \r\nbody\r\n");
        assert_eq!(slides[0].title, "Spaced out");
        assert_eq!(slides[0].body, "body\n");
    }

    #[test]
    fn test_body_interior_is_preserved() {
        let slides = segment("# A\n\n- one\n\n- two\n\n\n");
        assert_eq!(slides[0].body, "- one\n\n- two\n");
    }

    #[test]
    fn test_empty_input_falls_back() {
        let slides = segment("");
        assert_eq!(slides, vec![SlideRecord::new(FALLBACK_TITLE, "", 0)]);
    }

    #[test]
    fn test_whitespace_only_input_falls_back_with_input_as_body() {
        let input = "  \n\t\n";
        let slides = segment(input);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "Presentation");
        assert_eq!(slides[0].body, input);
    }

    #[test]
    fn test_input_without_headings_is_a_preamble_slide() {
        let slides = segment("just some text\n### small heading\n");
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "");
        assert_eq!(slides[0].body, "just some text\n### small heading\n");
    }

    #[test]
    fn test_order_is_dense_and_zero_based() {
        let input = "pre\n# a\n\n\n## b\nx\n# c\n   \n## d\n";
        let slides = segment(input);
        let orders: Vec<usize> = slides.iter().map(|s| s.order).collect();
        assert_eq!(orders, (0..slides.len()).collect::<Vec<_>>());
        assert_eq!(titles(&slides), vec!["", "a", "b", "c", "d"]);
    }

    #[test]
    fn test_no_fully_empty_slides() {
        let slides = segment("\n\n# a\n\n\n\n## b\n\n");
        assert!(slides.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_every_non_whitespace_character_lands_in_one_slide() {
        let input = "Lead *in*\n# First slide\nalpha `beta`\n### keep\n## Second\n1. gamma\n2. delta\n";
        let slides = segment(input);

        fn strip(s: &str) -> String {
            s.chars().filter(|c| !c.is_whitespace()).collect()
        }

        let expected = strip(
            &input
                .lines()
                .map(|line| match slide_heading_text(line) {
                    Some(title) => title.to_string(),
                    None => line.to_string(),
                })
                .collect::<String>(),
        );
        let actual: String = slides
            .iter()
            .map(|s| format!("{}{}", strip(&s.title), strip(&s.body)))
            .collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_slide_heading_text() {
        assert_eq!(slide_heading_text("# Title"), Some("Title"));
        assert_eq!(slide_heading_text("## Title\n"), Some("Title"));
        assert_eq!(slide_heading_text("### Title"), None);
        assert_eq!(slide_heading_text("#Title"), None);
        assert_eq!(slide_heading_text(" # Title"), None);
        assert_eq!(slide_heading_text("# "), None);
        assert_eq!(slide_heading_text("# # nested"), Some("# nested"));
    }
}
