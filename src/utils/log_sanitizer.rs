//! Log sanitization utilities for masking sensitive data.
//!
//! Usernames are masked before logging to avoid leaking PII into the
//! server logs.

/// Mask a username for safe logging.
///
/// Shows only the first 3 characters followed by asterisks. Counted in
/// chars, not bytes, so multibyte usernames stay safe to slice.
pub fn mask_username(username: &str) -> String {
    let visible: String = username.chars().take(3).collect();
    format!("{}***", visible)
}
