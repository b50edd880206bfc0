//! Spotify URL normalization.
//!
//! Pages store whatever Spotify link the owner pasted. The public page needs the embed form
//! `https://open.spotify.com/embed/{type}/{id}` to render the player in an iframe.

use std::sync::LazyLock;

use dioxus_logger::tracing;
use regex::Regex;

/// Share links, e.g. `https://open.spotify.com/intl-pt/track/{id}?si=...`
static SHARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?://)?(?:open\.)?spotify\.com/(?:intl-[a-zA-Z-]+/)?(track|playlist|album)/([a-zA-Z0-9]+)",
    )
    .expect("share URL pattern is valid")
});

/// Spotify URIs, e.g. `spotify:track:{id}`
static URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"spotify:(track|playlist|album):([a-zA-Z0-9]+)").expect("URI pattern is valid")
});

/// Converts a Spotify track, playlist or album link to its embed URL.
///
/// # Returns
/// - `None` - `url` is empty
/// - `Some(url)` unchanged - already an embed URL, or not a recognized Spotify link
/// - `Some(embed_url)` - converted share link or URI
pub fn ensure_embed_url(url: &str) -> Option<String> {
    let url = url.trim();

    if url.is_empty() {
        return None;
    }

    if url.contains("embed.spotify.com") || url.contains("/embed/") {
        return Some(url.to_string());
    }

    for pattern in [&*SHARE_URL, &*URI] {
        if let Some(captures) = pattern.captures(url) {
            let embed_url = format!(
                "https://open.spotify.com/embed/{}/{}",
                &captures[1], &captures[2]
            );

            tracing::info!("Converted Spotify URL to embed URL: {}", embed_url);

            return Some(embed_url);
        }
    }

    tracing::warn!("Unrecognized Spotify URL: {}", url);

    Some(url.to_string())
}
