use once_cell::sync::Lazy;
use regex::Regex;

/// Trigger phrases bolded when they open a line, checked in this order.
/// First match wins; at most one substitution per line.
const EDUCATIONAL_PHRASES: &[(&str, &str)] = &[
    ("note:", "**Note:**"),
    ("important:", "**Important:**"),
    ("remember:", "**Remember:**"),
    ("key concept:", "**Key Concept:**"),
    ("definition:", "**Definition:**"),
    ("example:", "**Example:**"),
    ("formula:", "**Formula:**"),
];

static BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"- ([^\n]+)").expect("bullet pattern is valid")
});

/// Heuristically rewrites a reply into friendlier markdown: `- ` bullets
/// become `•` glyphs, short title-looking lines become `###` headers, and
/// known lead-in phrases ("Note:", "Formula:", ...) are bolded.
///
/// Pure and deterministic. Runs before markdown conversion, on bot replies
/// only.
pub fn format_educational(text: &str) -> String {
    let text = BULLET_RE.replace_all(text, "\u{2022} $1");

    let mut out: Vec<String> = Vec::new();
    for raw in text.split('\n') {
        let line = raw.trim();
        if line.is_empty() {
            out.push(raw.to_string());
            continue;
        }

        // Title candidates become headers and skip the phrase step. A
        // candidate that already carries a header marker falls through.
        if is_title_candidate(line) && !line.starts_with('#') {
            out.push(format!("### {}", line));
            continue;
        }

        match bold_leading_phrase(line) {
            Some(bolded) => out.push(bolded),
            None => out.push(raw.to_string()),
        }
    }
    out.join("\n")
}

/// A line looks like a section title when it is short and ends with a
/// colon, or is short, longer than five characters, and entirely
/// upper-case.
fn is_title_candidate(line: &str) -> bool {
    let len = line.chars().count();
    (len < 50 && line.ends_with(':')) || (len < 30 && len > 5 && line == line.to_uppercase())
}

fn bold_leading_phrase(line: &str) -> Option<String> {
    for (phrase, replacement) in EDUCATIONAL_PHRASES {
        if let Some(rest) = strip_prefix_ignore_case(line, phrase) {
            return Some(format!("{}{}", replacement, rest));
        }
    }
    None
}

fn strip_prefix_ignore_case<'a>(line: &'a str, phrase: &str) -> Option<&'a str> {
    let head = line.get(..phrase.len())?;
    if head.eq_ignore_ascii_case(phrase) {
        line.get(phrase.len()..)
    } else {
        None
    }
}
