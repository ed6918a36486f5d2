//! HTML helpers

use crate::domain::Connection;

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Display value for a like/comment total.
///
/// Totals above `max` render as `{max}+`. Without a reported total, a
/// fetched list that filled `limit` is also shown as open-ended.
pub fn count_label<T>(connection: &Connection<T>, limit: u32, max: u64) -> String {
    let total = connection.total();
    let saturated = connection.reported_total().is_none()
        && limit > 0
        && connection.data.len() >= limit as usize;

    if total > max {
        format!("{}+", max)
    } else if saturated {
        format!("{}+", total)
    } else {
        total.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Summary;

    fn connection(items: usize, total: Option<u64>) -> Connection<u8> {
        Connection {
            data: vec![0; items],
            count: None,
            summary: total.map(|t| Summary {
                total_count: Some(t),
            }),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_count_label_plain() {
        assert_eq!(count_label(&connection(3, Some(42)), 500, 499), "42");
    }

    #[test]
    fn test_count_label_capped() {
        assert_eq!(count_label(&connection(500, Some(1234)), 500, 499), "499+");
    }

    #[test]
    fn test_count_label_saturated_without_total() {
        assert_eq!(count_label(&connection(25, None), 25, 499), "25+");
        assert_eq!(count_label(&connection(24, None), 25, 499), "24");
    }
}
