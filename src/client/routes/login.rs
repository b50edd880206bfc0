use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{Footer, Page},
    routes::NotFoundView,
    util::api::ApiError,
};

#[component]
pub fn Login(slug: String) -> Element {
    #[allow(unused_mut)]
    let mut title = use_signal(|| None::<Result<String, ApiError>>);
    let mut password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);
    #[allow(unused_variables)]
    let navigator = use_navigator();

    // Sessions already logged into the page go straight to the dashboard
    #[cfg(feature = "web")]
    {
        use_effect(use_reactive!(|slug| {
            spawn(async move {
                use crate::client::{router::Route, util::api};

                match api::get_admin_page(&slug).await {
                    Ok(_) => {
                        navigator.replace(Route::Dashboard {
                            slug,
                            erro: String::new(),
                        });
                    }
                    Err(ApiError::Unauthorized(_)) => {
                        title.set(Some(api::get_page(&slug).await.map(|page| page.titulo)));
                    }
                    Err(e) => title.set(Some(Err(e))),
                }
            });
        }));
    }

    let onsubmit = {
        let slug = slug.clone();

        move |e: FormEvent| {
            e.prevent_default();

            submitting.set(true);
            error.set(None);

            #[cfg(feature = "web")]
            {
                let slug = slug.clone();
                let submitted = password();

                spawn(async move {
                    use crate::client::{router::Route, util::api};

                    match api::login(&slug, &submitted).await {
                        Ok(login) => {
                            navigator.push(Route::Dashboard {
                                slug: login.slug,
                                erro: String::new(),
                            });
                        }
                        Err(e) => {
                            password.set(String::new());
                            error.set(Some(e.to_string()));
                        }
                    }

                    submitting.set(false);
                });
            }
        }
    };

    match title() {
        None => rsx!(
            Page { class: "centered",
                div { class: "loading", "Carregando..." }
            }
        ),
        Some(Err(ApiError::NotFound)) => rsx!(NotFoundView { slug }),
        Some(result) => {
            let page_title = result.unwrap_or_else(|_| slug.clone());

            rsx!(
                Title { "Entrar | {page_title}" }
                Page { class: "centered",
                    form { class: "card", onsubmit: onsubmit,
                        h1 { class: "title", "{page_title}" }
                        p { class: "muted", "Digite a senha para editar esta página." }
                        input {
                            class: "input",
                            r#type: "password",
                            name: "password",
                            placeholder: "Senha",
                            autofocus: true,
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                        if let Some(error) = error() {
                            p { class: "form-error", "{error}" }
                        }
                        button {
                            class: "btn",
                            r#type: "submit",
                            disabled: submitting(),
                            "Entrar"
                        }
                    }
                    Footer {}
                }
            )
        }
    }
}
