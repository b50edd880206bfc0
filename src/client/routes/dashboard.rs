use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCamera;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{DashboardNavbar, Page, PhotoGallery, SpotifyEmbed, SpotifySearch},
        routes::NotFoundView,
        util::api::ApiError,
    },
    model::{
        music::TrackDto,
        page::{PageDto, UpdatePageDto, UPLOAD_FAILED_ERROR, UPLOAD_FAILED_MESSAGE},
    },
};

#[derive(Clone, PartialEq)]
enum SaveStatus {
    Idle,
    Saving,
    Saved,
    Failed(String),
}

#[component]
pub fn Dashboard(slug: String, erro: String) -> Element {
    #[allow(unused_mut)]
    let mut page = use_signal(|| None::<Result<PageDto, ApiError>>);
    let mut titulo = use_signal(String::new);
    let mut mensagem = use_signal(String::new);
    let mut cor_fundo = use_signal(String::new);
    let mut spotify_url = use_signal(String::new);
    #[allow(unused_mut)]
    let mut status = use_signal(|| SaveStatus::Idle);
    #[allow(unused_variables)]
    let navigator = use_navigator();

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|slug| {
        spawn(async move {
            use crate::client::{router::Route, util::api};

            match api::get_admin_page(&slug).await {
                Ok(loaded) => {
                    titulo.set(loaded.titulo.clone());
                    mensagem.set(loaded.mensagem.clone());
                    cor_fundo.set(loaded.cor_fundo.clone());
                    spotify_url.set(loaded.spotify_url.clone().unwrap_or_default());
                    page.set(Some(Ok(loaded)));
                }
                Err(ApiError::Unauthorized(_)) => {
                    navigator.replace(Route::Login { slug });
                }
                Err(e) => page.set(Some(Err(e))),
            }
        });
    }));

    let onsubmit = {
        let slug = slug.clone();

        move |e: FormEvent| {
            e.prevent_default();

            let update = UpdatePageDto {
                titulo: titulo(),
                mensagem: mensagem(),
                cor_fundo: cor_fundo(),
                spotify_url: spotify_url(),
            };

            status.set(SaveStatus::Saving);

            #[cfg(feature = "web")]
            {
                let slug = slug.clone();

                spawn(async move {
                    use crate::client::{router::Route, util::api};

                    match api::update_page(&slug, &update).await {
                        Ok(updated) => {
                            spotify_url.set(updated.spotify_url.clone().unwrap_or_default());
                            page.set(Some(Ok(updated)));
                            status.set(SaveStatus::Saved);
                        }
                        Err(ApiError::Unauthorized(_)) => {
                            navigator.replace(Route::Login { slug });
                        }
                        Err(e) => status.set(SaveStatus::Failed(e.to_string())),
                    }
                });
            }

            #[cfg(not(feature = "web"))]
            let _ = update;
        }
    };

    let on_track_select = move |track: TrackDto| spotify_url.set(track.embed_url);

    let loaded = match page() {
        None => {
            return rsx!(
                Page { class: "centered",
                    div { class: "loading", "Carregando..." }
                }
            )
        }
        Some(Err(ApiError::NotFound)) => return rsx!(NotFoundView { slug }),
        Some(Err(e)) => {
            return rsx!(
                Page { class: "centered",
                    div { class: "card",
                        p { class: "form-error", "{e}" }
                    }
                }
            )
        }
        Some(Ok(loaded)) => loaded,
    };

    let preview_url = spotify_url();

    rsx!(
        Title { "Editar | {loaded.titulo}" }
        DashboardNavbar { slug: slug.clone() }
        Page { class: "dashboard",
            form { class: "card", onsubmit: onsubmit,
                h2 { class: "card-title", "Sua página" }
                label { class: "field",
                    span { "Título" }
                    input {
                        class: "input",
                        name: "titulo",
                        value: "{titulo}",
                        oninput: move |e| titulo.set(e.value()),
                    }
                }
                label { class: "field",
                    span { "Mensagem" }
                    textarea {
                        class: "input",
                        name: "mensagem",
                        rows: 6,
                        value: "{mensagem}",
                        oninput: move |e| mensagem.set(e.value()),
                    }
                }
                label { class: "field",
                    span { "Cor de fundo" }
                    input {
                        class: "color-input",
                        r#type: "color",
                        name: "cor_fundo",
                        value: "{cor_fundo}",
                        oninput: move |e| cor_fundo.set(e.value()),
                    }
                }
                label { class: "field",
                    span { "Música (link do Spotify)" }
                    input {
                        class: "input",
                        name: "spotify_url",
                        placeholder: "https://open.spotify.com/track/...",
                        value: "{spotify_url}",
                        oninput: move |e| spotify_url.set(e.value()),
                    }
                }
                SpotifySearch { on_select: on_track_select }
                if !preview_url.trim().is_empty() {
                    SpotifyEmbed { url: preview_url.clone() }
                }
                {match status() {
                    SaveStatus::Saved => rsx!(p { class: "form-success", "Página atualizada com sucesso!" }),
                    SaveStatus::Failed(message) => rsx!(p { class: "form-error", "{message}" }),
                    _ => rsx!(),
                }}
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: status() == SaveStatus::Saving,
                    "Salvar"
                }
            }
            // Native multipart post, the server redirects back here
            form {
                class: "card",
                action: "/api/page/{slug}/photos",
                method: "post",
                enctype: "multipart/form-data",
                h2 { class: "card-title", "Fotos" }
                PhotoGallery { photos: loaded.fotos.clone() }
                if erro == UPLOAD_FAILED_ERROR {
                    p { class: "form-error", "{UPLOAD_FAILED_MESSAGE}" }
                }
                input {
                    class: "input",
                    r#type: "file",
                    name: "fotos",
                    accept: "image/*",
                    multiple: true,
                }
                button { class: "btn", r#type: "submit",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaCamera
                    }
                    "Enviar fotos"
                }
            }
        }
    )
}
