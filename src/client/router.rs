use dioxus::prelude::*;

use crate::client::routes::{Dashboard, Home, Login, LovePage, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/:slug")]
    LovePage { slug: String },

    #[route("/:slug/login")]
    Login { slug: String },

    #[route("/:slug/dashboard?:erro")]
    Dashboard { slug: String, erro: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
