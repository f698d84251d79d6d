//! Date and time formatting for table cells.

use contracts::shared::table::parse_date;

/// `"2024-03-15T14:02:26.123Z"` -> `"15.03.2024 14:02"`.
/// Unparseable input is returned unchanged.
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_date(datetime_str) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        None => datetime_str.to_string(),
    }
}

/// `"2024-03-15"` or `"2024-03-15T14:02:26Z"` -> `"15.03.2024"`.
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(dt) => dt.format("%d.%m.%Y").to_string(),
        None => date_str.to_string(),
    }
}

pub fn format_datetime_opt(value: Option<&str>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-03-15T14:02:26+02:00"), "15.03.2024 12:02");
        assert_eq!(format_datetime_opt(None), "-");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
