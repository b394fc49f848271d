//! Pure string helpers used by the form: email check and phone mask

use regex::Regex;
use std::sync::LazyLock;

/// Maximum rendered length of a formatted phone number, e.g. `(11) 98765-4321`
pub const PHONE_MAX_LEN: usize = 15;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern is valid")
});

static NON_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D").expect("non-digit pattern is valid"));

static AREA_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})\B").expect("area code pattern is valid"));

static SUBSCRIBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1})?(\d{4})(\d{4})").expect("subscriber pattern is valid")
});

/// Check whether `email` looks like `local@domain.tld`
pub fn is_email_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Mask a phone number as `(AA) NNNNN-NNNN` / `(AA) NNNN-NNNN`
///
/// Every non-digit is dropped first, so the mask is idempotent and can be
/// applied to each keystroke's raw value.
pub fn format_phone(raw: &str) -> String {
    let digits = NON_DIGIT_RE.replace_all(raw, "");
    let with_area = AREA_CODE_RE.replace(&digits, "(${1}) ");
    SUBSCRIBER_RE
        .replace(&with_area, "${1}${2}-${3}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_common_addresses() {
        assert!(is_email_valid("ana@example.com"));
        assert!(is_email_valid("ana.souza-1@mail.example.com.br"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_email_valid("bad"));
        assert!(!is_email_valid("ana@"));
        assert!(!is_email_valid("ana@example"));
        assert!(!is_email_valid("@example.com"));
        assert!(!is_email_valid("ana@example.toolong"));
    }

    #[test]
    fn test_phone_mobile_number() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn test_phone_landline_number() {
        assert_eq!(format_phone("1187654321"), "(11) 8765-4321");
    }

    #[test]
    fn test_phone_partial_input() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1198765"), "(11) 98765");
    }

    #[test]
    fn test_phone_strips_non_digits() {
        assert_eq!(format_phone("(11) 9-8765 4321"), "(11) 98765-4321");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn test_phone_format_is_idempotent() {
        for raw in ["", "1", "11", "119", "11987", "1187654321", "11987654321"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_phone_full_number_fits_max_len() {
        assert_eq!(format_phone("11987654321").len(), PHONE_MAX_LEN);
    }
}
