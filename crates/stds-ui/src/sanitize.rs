//! Character filters for masked inputs
//!
//! Pure functions; the DOM side writes their result straight back into the
//! field on every `input` event.

/// Keep ASCII digits only, then truncate to `max_len` characters.
///
/// # Example
///
/// ```
/// use stds_ui::sanitize::token;
///
/// assert_eq!(token("12a3-45 678", 6), "123456");
/// ```
#[must_use]
pub fn token(input: &str, max_len: usize) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}

/// Keep ASCII digits, spaces, `+` and `-`; no length limit.
///
/// ```
/// use stds_ui::sanitize::phone;
///
/// assert_eq!(phone("+91 (98) 765-4321 ext"), "+91 98 765-4321 ");
/// ```
#[must_use]
pub fn phone(input: &str) -> String {
    input.chars().filter(|c| is_phone_char(*c)).collect()
}

/// Characters a phone field may hold
#[must_use]
pub const fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '+' | '-')
}

/// Whether sanitising changed the value.
///
/// The field is reassigned on every event regardless (which moves the caret
/// to the end); this only decides whether a debug line is worth logging.
#[must_use]
pub fn needs_rewrite(current: &str, sanitized: &str) -> bool {
    current != sanitized
}
