//! Small helpers for building HTML fragments by hand.

use std::borrow::Cow;

fn entity(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape text for element content or a quoted attribute value.
///
/// Borrows the input when nothing needs escaping.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| entity(c).is_some()) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match entity(c) {
            Some(e) => out.push_str(e),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Link target for user-supplied URLs. Anything that is not http(s) or mailto
/// (e.g. `javascript:`) collapses to `#`.
pub fn safe_href(url: &str) -> Cow<'_, str> {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();

    if lower.starts_with("https://") || lower.starts_with("http://") || lower.starts_with("mailto:")
    {
        escape(trimmed)
    } else {
        Cow::Borrowed("#")
    }
}

/// Image source for the profile photo: inline `data:image/*` or http(s) only.
pub fn safe_image_src(src: &str) -> Option<Cow<'_, str>> {
    let trimmed = src.trim();
    let lower = trimmed.to_ascii_lowercase();

    if lower.starts_with("data:image/") || lower.starts_with("https://") || lower.starts_with("http://")
    {
        Some(escape(trimmed))
    } else {
        None
    }
}
