//! `galleryglow://painting/<identifier>` URLs.
//!
//! The identifier is a catalog image name or a Top Shelf id, percent-encoded
//! so names with spaces and non-ASCII letters survive the round trip.

/// URL scheme registered by the app.
pub const SCHEME: &str = "galleryglow";
/// Host for painting links.
pub const PAINTING_HOST: &str = "painting";

/// Extracts the painting identifier from a deep link.
///
/// Returns `None` for any other scheme or host, an empty identifier, or a
/// path that doesn't decode as UTF-8. Scheme and host match
/// case-insensitively.
pub fn parse(url: &str) -> Option<String> {
    let (scheme, rest) = url.trim().split_once("://")?;
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return None;
    }
    let (host, path) = match rest.split_once('/') {
        Some((host, path)) => (host, path),
        None => (rest, ""),
    };
    if !host.eq_ignore_ascii_case(PAINTING_HOST) {
        return None;
    }
    // query and fragment are not part of the identifier
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let decoded = urlencoding::decode(path).ok()?;
    let id = decoded.trim_matches('/');
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Builds the deep link for a painting identifier.
///
/// Each path segment is percent-encoded; `/` separators are kept.
pub fn deep_link_for(id: &str) -> String {
    let path: Vec<String> = id
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("{SCHEME}://{PAINTING_HOST}/{}", path.join("/"))
}
