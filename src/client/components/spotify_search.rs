use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaSpotify;
use dioxus_free_icons::Icon;

use crate::model::music::TrackDto;

/// Live Spotify track search, calls `on_select` with the chosen track.
#[component]
pub fn SpotifySearch(on_select: EventHandler<TrackDto>) -> Element {
    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<TrackDto>::new);
    let mut error = use_signal(|| None::<String>);
    let mut searching = use_signal(|| false);

    let search = move |_: MouseEvent| {
        let query = query.read().trim().to_string();

        if query.chars().count() < 2 {
            error.set(Some("Digite pelo menos 2 caracteres.".to_string()));
            return;
        }

        searching.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            match crate::client::util::api::search_tracks(&query).await {
                Ok(found) => {
                    if found.results.is_empty() {
                        error.set(Some("Nenhuma música encontrada.".to_string()));
                    }
                    results.set(found.results);
                }
                Err(e) => {
                    results.set(Vec::new());
                    error.set(Some(e.to_string()));
                }
            }

            searching.set(false);
        });
    };

    rsx!(
        div { class: "spotify-search",
            div { class: "search-bar",
                input {
                    class: "input",
                    r#type: "search",
                    placeholder: "Buscar música no Spotify",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                button {
                    class: "btn",
                    r#type: "button",
                    disabled: searching(),
                    onclick: search,
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaSpotify
                    }
                    if searching() { "Buscando..." } else { "Buscar" }
                }
            }
            if let Some(error) = error() {
                p { class: "form-error", "{error}" }
            }
            ul { class: "search-results",
                {results.iter().map(|track| {
                    let selected = track.clone();

                    rsx! {
                        li {
                            key: "{track.id}",
                            class: "search-result",
                            onclick: move |_| {
                                on_select.call(selected.clone());
                                results.set(Vec::new());
                            },
                            if let Some(image_url) = &track.image_url {
                                img { class: "search-cover", src: "{image_url}", alt: "{track.name}" }
                            }
                            div {
                                p { class: "search-name", "{track.name}" }
                                p { class: "search-artist", "{track.artist}" }
                            }
                        }
                    }
                })}
            }
        }
    )
}
