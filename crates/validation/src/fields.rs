//! Single-field validators.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

// Loose punctuated phone shape: optional leading +, parenthesized groups,
// dash/space/dot separators between digit runs.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,5}[-\s.]?[0-9]{1,5}$",
    )
    .expect("phone regex")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name regex"));

/// Special characters accepted by the password policy.
const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Returns true if `email` looks like `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns true if `phone` is a plausible phone number.
///
/// Two checks, both required: the digit count (ignoring punctuation) must be
/// within 10..=15, and the string as typed must match the loose punctuated
/// pattern above.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(10..=15).contains(&digits) {
        return false;
    }
    PHONE_RE.is_match(phone)
}

/// Returns true if `name` has at least 2 non-whitespace-trimmed characters
/// and contains only letters, spaces, hyphens and apostrophes.
pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.chars().count() >= 2 && NAME_RE.is_match(trimmed)
}

/// Returns true if the string is empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Password strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

/// Result of checking a password against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCheck {
    /// Whether the password satisfies the full policy.
    pub valid: bool,
    /// Strength label; only [`PasswordStrength::Strong`] passes.
    pub strength: PasswordStrength,
    /// First unmet requirement, as a user-facing message.
    pub message: String,
}

impl PasswordCheck {
    fn fail(strength: PasswordStrength, message: &str) -> Self {
        Self {
            valid: false,
            strength,
            message: message.to_string(),
        }
    }
}

/// Checks `password` against the policy: at least 8 characters with an
/// uppercase letter, a lowercase letter, a digit and a special character.
///
/// The first unmet requirement becomes the message. Strength is `Weak` when
/// the length requirement fails, `Medium` when the length is fine but a
/// character class is missing, and `Strong` (the only valid outcome) when
/// everything is satisfied.
pub fn check_password(password: &str) -> PasswordCheck {
    use PasswordStrength::{Medium, Strong, Weak};

    if password.is_empty() {
        return PasswordCheck::fail(Weak, "Password is required");
    }
    if password.chars().count() < 8 {
        return PasswordCheck::fail(Weak, "Password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return PasswordCheck::fail(Medium, "Password must contain an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return PasswordCheck::fail(Medium, "Password must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return PasswordCheck::fail(Medium, "Password must contain a digit");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return PasswordCheck::fail(Medium, "Password must contain a special character");
    }

    PasswordCheck {
        valid: true,
        strength: Strong,
        message: "Strong password".to_string(),
    }
}
