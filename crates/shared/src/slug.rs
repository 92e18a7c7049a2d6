//! Slug and file-name helpers.

use regex::Regex;

lazy_static::lazy_static! {
    /// Lowercase ASCII words joined by single hyphens.
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
    static ref UNSAFE_FILENAME_CHARS: Regex = Regex::new(r"[^a-zA-Z0-9._-]").unwrap();
}

/// Returns true when `slug` can be used verbatim in a URL path.
pub fn is_url_safe_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

/// Derives a URL-safe slug from free text (usually a post title).
///
/// Accented Latin letters are folded to ASCII, every other run of
/// non-alphanumeric characters becomes a single hyphen.
///
/// ```
/// use shared::slug::slugify;
///
/// assert_eq!(slugify("Ansiedade: o que é e como lidar?"), "ansiedade-o-que-e-e-como-lidar");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars().flat_map(char::to_lowercase).map(fold_accent) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Replaces every character outside `[A-Za-z0-9._-]` with `_`.
///
/// Empty input yields `fallback`.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }
    UNSAFE_FILENAME_CHARS.replace_all(trimmed, "_").into_owned()
}
