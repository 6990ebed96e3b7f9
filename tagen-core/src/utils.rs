//! Owned string casing helpers.
//!
//! Every transform is an explicit function; nothing here changes the
//! behavior of another crate.

/// Upper-case the first character (e.g., "period" -> "Period").
pub fn to_upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Strip hyphens and collapse whitespace runs into a single underscore
/// (e.g., "Time  Period" -> "Time_Period", "Fast-K" -> "FastK").
pub fn to_identifier(s: &str) -> String {
    s.replace('-', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Returns true if `s` starts with `prefix` followed by an uppercase letter
/// (e.g., "inReal" starts with the word "in", "index" does not).
pub fn starts_with_word(s: &str, prefix: &str) -> bool {
    s.strip_prefix(prefix)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_uppercase())
}

/// Returns true if `name` is a valid C identifier (e.g., "talib_binding",
/// not "1abc" or "a-b").
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_upper_first() {
        assert_eq!(to_upper_first("period"), "Period");
        assert_eq!(to_upper_first("Period"), "Period");
        assert_eq!(to_upper_first("t3"), "T3");
        assert_eq!(to_upper_first(""), "");
    }

    #[test]
    fn test_to_identifier() {
        assert_eq!(to_identifier("Time Period"), "Time_Period");
        assert_eq!(to_identifier("  Time \t Period "), "Time_Period");
        assert_eq!(to_identifier("Fast-K Period"), "FastK_Period");
        assert_eq!(to_identifier("inReal"), "inReal");
        assert_eq!(to_identifier(""), "");
    }

    #[test]
    fn test_starts_with_word() {
        assert!(starts_with_word("inReal", "in"));
        assert!(starts_with_word("optInTimePeriod", "opt"));
        assert!(starts_with_word("outMACD", "out"));
        assert!(!starts_with_word("index", "in"));
        assert!(!starts_with_word("in", "in"));
        assert!(!starts_with_word("High", "in"));
    }

    #[test]
    fn test_is_c_identifier() {
        assert!(is_c_identifier("talib_binding"));
        assert!(is_c_identifier("_x1"));
        assert!(is_c_identifier("CDLDOJI"));
        assert!(!is_c_identifier("1abc"));
        assert!(!is_c_identifier("a-b"));
        assert!(!is_c_identifier("MY-FN 2"));
        assert!(!is_c_identifier(""));
    }
}
