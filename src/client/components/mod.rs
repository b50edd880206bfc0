pub mod navbar;
pub mod page;
pub mod photo_gallery;
pub mod spotify_embed;
pub mod spotify_search;

pub use navbar::DashboardNavbar;
pub use page::{Footer, Page};
pub use photo_gallery::PhotoGallery;
pub use spotify_embed::SpotifyEmbed;
pub use spotify_search::SpotifySearch;
