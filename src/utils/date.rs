use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Display form used in listings and exports, e.g. `Aug 24, 2026`.
/// Unparseable input renders as `N/A`.
pub fn format_display_date(s: &str) -> String {
    match parse_date(s) {
        Some(d) => format!("{} {}, {}", d.format("%b"), d.format("%-d"), d.format("%Y")),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_formats_and_degrades() {
        assert_eq!(format_display_date("2026-08-05"), "Aug 5, 2026");
        assert_eq!(format_display_date(""), "N/A");
        assert_eq!(format_display_date("someday"), "N/A");
    }
}
