//! Turns URLs in plain text into links

use regex::Regex;
use std::sync::OnceLock;

use super::html::escape;

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b(?:[\w-]+://?|www[.])[^\s()<>]+(?:\([\w\d]+\)|[^[:punct:]\s]|/)")
            .unwrap_or_else(|e| panic!("invalid autolink pattern: {e}"))
    })
}

/// Escape `text` and replace every URL in it with an `<a>` labelled "Link".
pub fn autolink(text: &str, title: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for found in url_pattern().find_iter(text) {
        out.push_str(&escape(&text[last..found.start()]));

        let url = found.as_str();
        let href = if url.starts_with("www.") {
            format!("http://{}", url)
        } else {
            url.to_string()
        };
        out.push_str(&format!(
            r#"<a href="{}" target="_blank" title="{}">Link</a>"#,
            escape(&href),
            escape(title)
        ));

        last = found.end();
    }

    out.push_str(&escape(&text[last..]));
    out
}
