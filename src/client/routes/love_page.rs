use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        components::{Footer, Page, PhotoGallery, SpotifyEmbed},
        routes::NotFoundView,
        util::api::ApiError,
    },
    model::page::PageDto,
};

#[component]
pub fn LovePage(slug: String) -> Element {
    #[allow(unused_mut)]
    let mut page = use_signal(|| None::<Result<PageDto, ApiError>>);

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|slug| {
        page.set(None);

        spawn(async move {
            page.set(Some(crate::client::util::api::get_page(&slug).await));
        });
    }));

    match page() {
        None => rsx!(
            Page { class: "centered",
                div { class: "loading", "Carregando..." }
            }
        ),
        Some(Err(ApiError::NotFound)) => rsx!(NotFoundView { slug }),
        Some(Err(e)) => rsx!(
            Page { class: "centered",
                div { class: "card",
                    p { class: "form-error", "{e}" }
                }
            }
        ),
        Some(Ok(page)) => rsx!(
            Title { "{page.titulo}" }
            Meta { name: "description", content: "{page.titulo}" }
            Page { background: page.cor_fundo.clone(),
                main { class: "love-page",
                    h1 { class: "love-title", "{page.titulo}" }
                    if !page.mensagem.is_empty() {
                        p { class: "love-message", "{page.mensagem}" }
                    }
                    PhotoGallery { photos: page.fotos.clone() }
                    if let Some(url) = page.spotify_url.clone() {
                        SpotifyEmbed { url }
                    }
                }
                Footer {}
            }
        ),
    }
}
