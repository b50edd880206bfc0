use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaHeart;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn DashboardNavbar(slug: String) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-start",
                Icon {
                    width: 20,
                    height: 20,
                    icon: FaHeart
                }
                p { class: "navbar-title",
                    "Phygital"
                }
            }
            div {
                class: "navbar-end",
                Link {
                    to: Route::LovePage { slug: slug.clone() },
                    class: "btn btn-outline",
                    "Ver página"
                }
                // Plain link, logout is a server redirect
                a { href: "/api/page/{slug}/logout",
                    class: "btn btn-outline",
                    "Sair"
                }
            }
        }
    }
}
