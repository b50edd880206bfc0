use dioxus::prelude::*;

/// Spotify player for an embed URL (`https://open.spotify.com/embed/...`).
#[component]
pub fn SpotifyEmbed(url: String) -> Element {
    rsx!(
        iframe {
            class: "spotify-embed",
            src: "{url}",
            width: "100%",
            height: "152",
            allow: "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture",
            "loading": "lazy",
        }
    )
}
