//! Directus payload factories.
//!
//! Pages and files are built as raw JSON so tests can craft the loosely typed shapes
//! Directus returns (numeric or string ids, expanded or bare photo references).

use serde_json::{json, Value};

/// Page ID used by `mock_page`.
pub const MOCK_PAGE_ID: i64 = 1;

/// Create a mock page item without a password.
///
/// The page has two expanded photos (`file-1`, `file-2`) and a regular Spotify track URL.
pub fn mock_page(slug: &str) -> Value {
    json!({
        "id": MOCK_PAGE_ID,
        "slug": slug,
        "titulo": "Lucas & Gabi",
        "mensagem": "Feliz aniversário de namoro!",
        "cor_fundo": "#FF6B8B",
        "spotify_url": "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc123",
        "senha": null,
        "fotos": [mock_file("file-1"), mock_file("file-2")]
    })
}

/// Create a mock page item protected by `password`.
pub fn mock_page_with_password(slug: &str, password: &str) -> Value {
    let mut page = mock_page(slug);
    page["senha"] = Value::String(password.to_string());
    page
}

/// Create a mock page item holding only the slug and ID.
pub fn mock_bare_page(slug: &str) -> Value {
    json!({
        "id": MOCK_PAGE_ID,
        "slug": slug
    })
}

/// Create a mock Directus file object stored on disk as `{id}.jpg`.
pub fn mock_file(id: &str) -> Value {
    json!({
        "id": id,
        "filename_disk": format!("{}.jpg", id),
        "type": "image/jpeg"
    })
}
