use chrono::NaiveDate;

const ISO_DATE: &str = "%Y-%m-%d";

pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE).ok()
}

/// `Jun 1, 2024`, the card date style.
pub fn format_short(value: &str) -> Option<String> {
    parse_iso(value).map(|date| date.format("%b %-d, %Y").to_string())
}

/// `June 1, 2024`, the journal item date style.
pub fn format_long(value: &str) -> Option<String> {
    parse_iso(value).map(|date| date.format("%B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_short("2024-06-01").unwrap(), "Jun 1, 2024");
        assert_eq!(format_long("2024-06-01").unwrap(), "June 1, 2024");
        assert_eq!(format_short("2024-12-25").unwrap(), "Dec 25, 2024");
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_iso(" 2024-06-01 "), parse_iso("2024-06-01"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_iso("").is_none());
        assert!(parse_iso("June 1st").is_none());
        assert!(format_short("2024-13-01").is_none());
    }
}
