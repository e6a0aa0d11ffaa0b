//! Slugs: selector-safe names derived from display names.

use deunicode::deunicode;

/// Lowercase, hyphen-separated, word characters only.
///
/// Non-ASCII letters are transliterated first, whitespace runs become a
/// single hyphen, everything outside `[a-z0-9_-]` is dropped, repeated
/// hyphens collapse, and leading/trailing hyphens are trimmed.
///
/// ```rust
/// use game_theme::slugify;
///
/// assert_eq!(slugify("White and Orange!!"), "white-and-orange");
/// assert_eq!(slugify("  Café -- Noir "), "cafe-noir");
/// ```
pub fn slugify(text: &str) -> String {
    let transliterated = deunicode(text).to_lowercase();

    let mut slug = String::with_capacity(transliterated.len());
    let mut in_whitespace = false;
    for c in transliterated.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }

    let mut collapsed = String::with_capacity(slug.len());
    for c in slug.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed.trim_matches('-').to_string()
}

/// Display name recovered from a slug: hyphens become spaces, words capitalized.
///
/// ```rust
/// use game_theme::title_from_slug;
///
/// assert_eq!(title_from_slug("midnight-blue"), "Midnight Blue");
/// ```
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
