use chrono::NaiveDate;

/// Escape a string for insertion into HTML markup.
///
/// Covers the four characters that can open or close markup context:
/// `&`, `<`, `>`, and `"`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a calendar date in long form: "February 10, 2025".
///
/// `NaiveDate` carries no timezone, so the rendered date is always the
/// calendar date as written in the registry.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x & y")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(escape_html("TCP vs UDP"), "TCP vs UDP");
    }

    #[test]
    fn formats_long_date_without_day_padding() {
        let date: NaiveDate = "2025-02-10".parse().unwrap();
        assert_eq!(format_long_date(date), "February 10, 2025");

        let single_digit: NaiveDate = "2025-01-05".parse().unwrap();
        assert_eq!(format_long_date(single_digit), "January 5, 2025");
    }
}
