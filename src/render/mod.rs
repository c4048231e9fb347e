use log::warn;
use pulldown_cmark::{ html, Event, Options, Parser };
use std::panic::{ self, AssertUnwindSafe };

fn renderer_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Converts markdown to HTML with the GFM-ish extension set. Single
/// newlines become `<br>` line breaks. Total: a conversion failure falls
/// back to the input wrapped in one paragraph, so callers never see an
/// error. Sanitization of the output is the caller's concern.
pub fn render_markdown(text: &str) -> String {
    match panic::catch_unwind(AssertUnwindSafe(|| convert(text))) {
        Ok(html) => html,
        Err(_) => {
            warn!("markdown conversion failed, falling back to plain paragraph");
            format!("<p>{}</p>", text)
        }
    }
}

fn convert(text: &str) -> String {
    let parser = Parser::new_ext(text, renderer_options()).map(|event| {
        match event {
            // Soft line breaks render as visible breaks, not paragraph joins.
            Event::SoftBreak => Event::HardBreak,
            other => other,
        }
    });
    let mut out = String::with_capacity(text.len() * 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_renders_as_strong() {
        let html = render_markdown("**Formula:** F=ma");
        assert!(html.contains("<strong>Formula:</strong>"));
    }

    #[test]
    fn level_three_header_renders() {
        let html = render_markdown("### Key Concepts:");
        assert!(html.contains("<h3>"));
        assert!(html.contains("Key Concepts:"));
    }

    #[test]
    fn single_newline_becomes_line_break() {
        let html = render_markdown("first line\nsecond line");
        assert!(html.contains("<br"));
        // Still one paragraph, not two.
        assert_eq!(html.matches("<p>").count(), 1);
    }

    #[test]
    fn gfm_table_renders() {
        let html = render_markdown("| a | b |\n| - | - |\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn strikethrough_renders() {
        let html = render_markdown("~~wrong~~");
        assert!(html.contains("<del>"));
    }

    #[test]
    fn plain_text_is_wrapped_in_a_paragraph() {
        let html = render_markdown("hello");
        assert!(html.contains("<p>hello</p>"));
    }

    #[test]
    fn unterminated_code_fence_still_returns_html() {
        let html = render_markdown("```rust\nfn broken(");
        assert!(!html.is_empty());
    }

    #[test]
    fn deeply_nested_emphasis_still_returns_html() {
        let adversarial = "*".repeat(500) + "text" + &"*".repeat(499);
        let html = render_markdown(&adversarial);
        assert!(!html.is_empty());
    }

    #[test]
    fn raw_html_passes_through_unsanitized() {
        // Sanitization is an external concern applied downstream.
        let html = render_markdown("before <span>inline</span> after");
        assert!(html.contains("<span>inline</span>"));
    }
}
