//! YouTube embeds for video posts

use std::collections::BTreeMap;

use url::{form_urlencoded, Url};

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// The `v` query parameter of a video link, if present
pub fn video_id(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Player URL with the configured parameters, already HTML-escaped
/// (pairs are joined with `&amp;`)
pub fn embed_url(video_id: &str, params: &BTreeMap<String, String>) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&amp;");

    let mut url = format!("{}{}", EMBED_BASE, encode(video_id));
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
