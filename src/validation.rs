//! Contact helpers shared by the stage validator and the normalizer.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Indian mobile numbers are ten digits starting with 6, 7, 8 or 9
static INDIAN_MOBILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());

/// Basic `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

/// Ten-digit Indian mobile, checked after stripping formatting characters
pub fn is_valid_indian_mobile(phone: &str) -> bool {
    INDIAN_MOBILE.is_match(&normalize_phone(phone))
}

/// Keep only the digits of a phone number
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
