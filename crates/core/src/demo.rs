//! Sample markdown for trying out the generator.

/// A short deck showing headings, lists and emphasis.
pub const DEMO_MARKDOWN: &str = "# Welcome to Markdown Slides

## What is this?
A small tool that turns your markdown into a slide presentation.

## Key Features
- Slides cut at every `#` and `##` heading
- Three built-in themes
- Keyboard and button navigation
- One standalone HTML file

## Available Themes
- **Professional**: Clean corporate design
- **Creative**: Vibrant modern style
- **Minimal**: Simple and elegant

## How to Use
1. Write your markdown
2. Pick a theme
3. Open the generated HTML in a browser

## Conclusion
### Thank you
*Use the arrow keys to move between slides.*
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;

    #[test]
    fn test_demo_segments_into_six_slides() {
        let slides = segment(DEMO_MARKDOWN);
        let titles: Vec<&str> = slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Welcome to Markdown Slides",
                "What is this?",
                "Key Features",
                "Available Themes",
                "How to Use",
                "Conclusion",
            ]
        );
        assert!(slides[0].body.is_empty());
        assert!(slides[5].body.starts_with("### Thank you\n"));
    }
}
