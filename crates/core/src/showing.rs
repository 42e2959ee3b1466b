//! Interpretation of the `is_showing` query value on movie listings.

/// Values that leave the movie listing unfiltered even when present.
const FALSY_VALUES: &[&str] = &["", "false", "0"];

/// Decide whether a raw `is_showing` query value restricts the listing to
/// movies currently showing.
///
/// Absent values never filter. Present values filter unless they are one of
/// [`FALSY_VALUES`] (compared case-insensitively, surrounding whitespace
/// ignored).
pub fn showing_only(raw: Option<&str>) -> bool {
    match raw {
        None => false,
        Some(value) => {
            let value = value.trim();
            !FALSY_VALUES
                .iter()
                .any(|falsy| value.eq_ignore_ascii_case(falsy))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_does_not_filter() {
        assert!(!showing_only(None));
    }

    #[test]
    fn truthy_values_filter() {
        assert!(showing_only(Some("true")));
        assert!(showing_only(Some("TRUE")));
        assert!(showing_only(Some("1")));
        assert!(showing_only(Some("yes")));
    }

    #[test]
    fn falsy_values_do_not_filter() {
        assert!(!showing_only(Some("")));
        assert!(!showing_only(Some("false")));
        assert!(!showing_only(Some(" False ")));
        assert!(!showing_only(Some("0")));
    }
}
