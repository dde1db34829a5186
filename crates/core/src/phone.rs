//! Saudi phone number normalization.
//!
//! All phone-keyed lookups (users, OTP codes) go through [`normalize`] so
//! the same subscriber always maps to one canonical `+966...` string no
//! matter how the client typed it.

/// Normalize a phone number to E.164-ish `+966` form.
///
/// - `+...` is taken as already international and passed through.
/// - `966...` gets the missing `+` prefix.
/// - `05xxxxxxxx` local form drops the leading zero and gains `+966`.
/// - Anything else is assumed local and prefixed with `+966`.
pub fn normalize(phone: &str) -> String {
    let phone = phone.trim();

    if let Some(rest) = phone.strip_prefix('+') {
        return format!("+{rest}");
    }

    if phone.starts_with("966") {
        return format!("+{phone}");
    }

    if let Some(rest) = phone.strip_prefix('0') {
        return format!("+966{rest}");
    }

    format!("+966{phone}")
}
