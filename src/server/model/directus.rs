//! Directus wire formats for the `paginas` collection and the file library.
//!
//! Directus items are loosely typed: IDs are integers for collection items and UUID strings
//! for files, and relational fields hold either expanded objects or bare IDs depending on
//! the requested `fields`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generic Directus response envelope.
#[derive(Debug, Deserialize)]
pub struct DirectusResponse<T> {
    pub data: Option<T>,
}

/// Identifier of a Directus item or file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{}", id),
            Self::Str(id) => write!(f, "{}", id),
        }
    }
}

/// A file from the Directus file library.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DirectusFile {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub filename_disk: Option<String>,
}

/// A photo reference on a page, expanded or bare.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PhotoRef {
    File(DirectusFile),
    Id(ItemId),
}

impl PhotoRef {
    pub fn id(&self) -> Option<&ItemId> {
        match self {
            Self::File(file) => file.id.as_ref(),
            Self::Id(id) => Some(id),
        }
    }
}

/// An item of the `paginas` collection.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PageRecord {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub mensagem: Option<String>,
    #[serde(default)]
    pub cor_fundo: Option<String>,
    #[serde(default)]
    pub spotify_url: Option<String>,
    /// Page password, stored as plain text
    #[serde(default)]
    pub senha: Option<String>,
    #[serde(default)]
    pub fotos: Option<Vec<PhotoRef>>,
}

impl PageRecord {
    /// IDs of the photos currently attached to the page, in order.
    pub fn photo_ids(&self) -> Vec<ItemId> {
        self.fotos
            .iter()
            .flatten()
            .filter_map(PhotoRef::id)
            .cloned()
            .collect()
    }
}

/// Body of the dashboard edit `PATCH`.
///
/// `spotify_url` is always serialized so `None` clears the stored URL.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageContentPatch {
    pub titulo: String,
    pub mensagem: String,
    pub cor_fundo: String,
    pub spotify_url: Option<String>,
    pub fotos: Vec<ItemId>,
}

/// Body of the photo upload `PATCH`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PagePhotosPatch {
    pub fotos: Vec<ItemId>,
}
