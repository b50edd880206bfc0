use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(NotFoundView { slug: segments.first().cloned() })
}

/// Shown for unknown routes and slugs without a page.
#[component]
pub fn NotFoundView(slug: Option<String>) -> Element {
    rsx!(
        Title { "Página não encontrada | Phygital" }
        Page { class: "centered",
            div { class: "card",
                h1 { class: "title", "404" }
                if let Some(slug) = slug {
                    p { "Não encontramos nenhuma página para \"{slug}\"." }
                } else {
                    p { "Não encontramos a página que você procura." }
                }
                Link { to: Route::Home {}, class: "btn", "Voltar ao início" }
            }
        }
    )
}
