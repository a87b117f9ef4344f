/// Trim surrounding whitespace and lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// First `n` characters of `s`, or `None` when `s` is shorter than `n` characters.
pub fn char_prefix(s: &str, n: usize) -> Option<&str> {
    match s.char_indices().nth(n) {
        Some((idx, _)) => Some(&s[..idx]),
        None if s.chars().count() == n => Some(s),
        None => None,
    }
}
