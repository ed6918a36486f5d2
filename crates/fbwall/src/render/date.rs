//! Post timestamps in the widget's language

use chrono::{DateTime, FixedOffset};

use crate::domain::Language;

/// Parse a Graph API timestamp (`2013-05-04T10:20:30+0000` or RFC 3339)
pub fn parse_graph_time(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
}

/// Format a Graph API timestamp; unparseable values are returned unchanged
pub fn format_date(value: &str, lang: Language) -> String {
    let Some(time) = parse_graph_time(value) else {
        return value.to_string();
    };

    match lang {
        Language::De => time.format("%d.%m.%Y - %H:%M").to_string(),
        Language::En => time.format("%m/%d/%Y - %H:%M").to_string(),
    }
}
