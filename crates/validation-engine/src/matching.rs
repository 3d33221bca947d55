//! Equivalence strategies between an expected fixture value and a value
//! extracted from PDF text.
//!
//! The strategies are string-normalization heuristics, not semantic
//! comparisons. Dates are compared after stripping separators, so the
//! component order must already agree (`12/03/1980` vs `03/12/1980` does not
//! match). Numbers are compared as stripped character sequences, lenient on
//! thousands separators but strict on the digits themselves (`1,200.00`
//! matches `1200.00`; `1200.0` does not match `1200`).

/// Decides whether `actual` is an acceptable rendition of `expected`.
///
/// Strategies run in a fixed order; the first hit wins.
pub fn matches(expected: &str, actual: &str) -> bool {
    exact_match(expected, actual)
        || substring_match(expected, actual)
        || date_match(expected, actual)
        || numeric_match(expected, actual)
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Exact equality after lowercasing and trimming both sides.
pub fn exact_match(expected: &str, actual: &str) -> bool {
    normalize(expected) == normalize(actual)
}

/// Containment in either direction on the normalized values. Absorbs
/// extraction runs that picked up trailing text around the real value.
pub fn substring_match(expected: &str, actual: &str) -> bool {
    let expected = normalize(expected);
    let actual = normalize(actual);
    actual.contains(&expected) || expected.contains(&actual)
}

/// Date equality across separator styles: `12/03/1980`, `12-03-1980` and
/// `12.03.1980` all agree. No calendar parsing takes place.
pub fn date_match(expected: &str, actual: &str) -> bool {
    let strip = |value: &str| {
        value
            .chars()
            .filter(|c| !matches!(c, '-' | '/' | '.'))
            .collect::<String>()
    };
    let expected = strip(expected);
    let actual = strip(actual);
    !expected.is_empty() && expected == actual
}

/// Numeric equality across formatting: everything but digits and `.` is
/// stripped, then the remainders are compared as strings. Two values with no
/// digits at all never match this way.
pub fn numeric_match(expected: &str, actual: &str) -> bool {
    let strip = |value: &str| {
        value
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect::<String>()
    };
    let expected = strip(expected);
    let actual = strip(actual);
    !expected.is_empty() && expected == actual
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_ignores_case_and_padding() {
        assert!(exact_match("Brazil", "  brazil "));
        assert!(!exact_match("Brazil", "Chile"));
    }

    #[test]
    fn test_substring_match_either_direction() {
        assert!(substring_match("Audi", "Make Audi A4"));
        assert!(substring_match("Make Audi A4", "Audi"));
        assert!(!substring_match("Audi", "BMW"));
    }

    #[test]
    fn test_date_match_tolerates_separator_styles() {
        assert!(date_match("12/03/1980", "12-03-1980"));
        assert!(date_match("12/03/1980", "12.03.1980"));
    }

    #[test]
    fn test_date_match_rejects_reordered_components() {
        assert!(!date_match("12/03/1980", "03/12/1980"));
    }

    #[test]
    fn test_numeric_match_tolerates_thousands_separators() {
        assert!(numeric_match("1,200.00", "1200.00"));
        assert!(numeric_match("30000", "30,000"));
    }

    #[test]
    fn test_numeric_match_is_string_strict() {
        assert!(!numeric_match("1200.00", "1200"));
        assert!(!numeric_match("1200.0", "1200"));
    }

    #[test]
    fn test_non_numeric_values_never_match_numerically() {
        assert!(!numeric_match("Employee", "Unemployed"));
        assert!(!date_match("n/a", "-"));
    }

    #[test]
    fn test_matches_runs_cascade_in_order() {
        assert!(matches("Brazil", "brazil"));
        assert!(matches("12/03/1980", "12-03-1980"));
        assert!(matches("1,200.00", "1200.00"));
        assert!(!matches("Paris", "Lyon"));
    }
}
