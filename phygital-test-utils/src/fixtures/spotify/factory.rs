//! Spotify Web API payload factories.

use serde_json::{json, Value};

use crate::constant::TEST_SPOTIFY_ACCESS_TOKEN;

/// Create a client-credentials token response valid for `expires_in` seconds.
pub fn mock_token_response(expires_in: u64) -> Value {
    json!({
        "access_token": TEST_SPOTIFY_ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": expires_in
    })
}

/// Create a fully populated track item.
pub fn mock_track(id: &str, name: &str, artist: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "artists": [{ "id": "artist-1", "name": artist }],
        "album": {
            "name": "Album",
            "images": [
                { "url": format!("https://i.scdn.co/image/{}-640", id), "height": 640, "width": 640 },
                { "url": format!("https://i.scdn.co/image/{}-300", id), "height": 300, "width": 300 }
            ]
        },
        "preview_url": format!("https://p.scdn.co/mp3-preview/{}", id),
        "duration_ms": 215000
    })
}

/// Create a track item missing its name, artists and album images.
pub fn mock_sparse_track(id: &str) -> Value {
    json!({
        "id": id,
        "artists": [],
        "album": { "images": [] },
        "preview_url": null
    })
}

/// Wrap track items in a search response.
pub fn mock_search_response(tracks: Vec<Value>) -> Value {
    json!({
        "tracks": {
            "items": tracks
        }
    })
}
