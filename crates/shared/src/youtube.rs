//! YouTube reference normalization.
//!
//! Turns whatever an editor pasted into the video form (a bare ID, a watch
//! link, a share link, a Shorts/embed link...) into the canonical
//! 11-character video ID, and builds the canonical URLs derived from an ID.

use regex::Regex;
use url::Url;

lazy_static::lazy_static! {
    static ref EXACT_ID_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap();
    static ref ANY_ID_REGEX: Regex = Regex::new(r"[A-Za-z0-9_-]{11}").unwrap();
    static ref PATH_SHAPE_REGEXES: [Regex; 4] = [
        Regex::new(r"watch\?v=([A-Za-z0-9_-]{11})").unwrap(),
        Regex::new(r"youtu\.be/([A-Za-z0-9_-]{11})").unwrap(),
        Regex::new(r"shorts/([A-Za-z0-9_-]{11})").unwrap(),
        Regex::new(r"embed/([A-Za-z0-9_-]{11})").unwrap(),
    ];
}

/// Returns true when `candidate` is exactly one video ID.
pub fn is_video_id(candidate: &str) -> bool {
    EXACT_ID_REGEX.is_match(candidate)
}

/// Extracts the video ID from a raw ID or any supported URL shape.
///
/// Precedence:
/// 1. the whole (trimmed) input is an ID;
/// 2. the input parses as a URL: `v` query parameter, `youtu.be/<id>`,
///    `/shorts/<id>`, `/embed/<id>`, `/v/<id>`;
/// 3. the same shapes matched anywhere in the string;
/// 4. the first 11-character run of the ID alphabet.
///
/// Returns `None` when nothing matches.
///
/// # Example
/// ```
/// use shared::youtube::extract_youtube_id;
///
/// assert_eq!(
///     extract_youtube_id("https://youtu.be/dQw4w9WgXcQ?t=5").as_deref(),
///     Some("dQw4w9WgXcQ")
/// );
/// assert_eq!(extract_youtube_id("not a video"), None);
/// ```
pub fn extract_youtube_id(value: &str) -> Option<String> {
    let input = value.trim();
    if input.is_empty() {
        return None;
    }

    if is_video_id(input) {
        return Some(input.to_string());
    }

    if let Ok(url) = Url::parse(input) {
        if let Some(id) = id_from_url(&url) {
            return Some(id);
        }
    }

    for re in PATH_SHAPE_REGEXES.iter() {
        if let Some(caps) = re.captures(input) {
            return Some(caps[1].to_string());
        }
    }

    ANY_ID_REGEX.find(input).map(|m| m.as_str().to_string())
}

/// Looks for the ID in the structured parts of a parsed URL.
///
/// Candidates that are not well-formed IDs are skipped so the textual
/// fallbacks still get a chance.
fn id_from_url(url: &Url) -> Option<String> {
    if let Some((_, v)) = url.query_pairs().find(|(key, _)| key == "v") {
        if let Some(id) = accept(v.as_ref()) {
            return Some(id);
        }
    }

    let host = url
        .host_str()
        .map(|h| h.strip_prefix("www.").unwrap_or(h))
        .unwrap_or_default();

    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    if host == "youtu.be" {
        if let Some(id) = segments.first().and_then(|s| accept(s)) {
            return Some(id);
        }
    }

    for marker in ["shorts", "embed"] {
        if let Some(idx) = segments.iter().position(|s| *s == marker) {
            if let Some(id) = segments.get(idx + 1).and_then(|s| accept(s)) {
                return Some(id);
            }
        }
    }

    if segments.first() == Some(&"v") {
        if let Some(id) = segments.get(1).and_then(|s| accept(s)) {
            return Some(id);
        }
    }

    None
}

fn accept(candidate: &str) -> Option<String> {
    is_video_id(candidate).then(|| candidate.to_string())
}

/// Canonical watch page URL for an ID. The ID is not validated.
pub fn build_watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", id)
}

/// Canonical high-quality thumbnail URL for an ID. The ID is not validated.
pub fn build_thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id)
}

/// Embeddable player URL for an ID. The ID is not validated.
pub fn build_embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", id)
}
