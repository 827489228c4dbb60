use chrono::NaiveDate;

pub mod products;
pub mod students;

/// Date format produced by HTML `<input type="date">` fields.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date entered in a form field.
pub(crate) fn parse_form_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), FORM_DATE_FORMAT).ok()
}

/// Collapse whitespace runs into single spaces and drop control characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  Gaming \t\n Laptop "), "Gaming Laptop");
    }

    #[test]
    fn parse_form_date_accepts_iso_dates_only() {
        assert_eq!(
            parse_form_date("2024-01-01"),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(parse_form_date("01/01/2024"), None);
        assert_eq!(parse_form_date("2024-02-30"), None);
    }
}
