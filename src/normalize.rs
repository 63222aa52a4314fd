use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Produces the canonical comparison key for a place name.
///
/// Lowercases and trims the input, strips accents by dropping the combining
/// marks left over from NFD decomposition, then collapses every run of
/// hyphens and whitespace into a single space. The result never carries a
/// leading or trailing separator, so the function is idempotent. The key is
/// only ever used for joining, never displayed.
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let mut key = String::with_capacity(stripped.len());
    let mut pending_separator = false;
    for ch in stripped.chars() {
        if ch == '-' || ch.is_whitespace() {
            pending_separator = !key.is_empty();
        } else {
            if pending_separator {
                key.push(' ');
                pending_separator = false;
            }
            key.push(ch);
        }
    }
    key
}
