use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaHeart;
use dioxus_free_icons::Icon;

use crate::client::components::{Footer, Page};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Phygital" }
        Meta {
            name: "description",
            content: "Páginas personalizadas com fotos, mensagem e música, abertas por QR code."
        }
        Page { class: "centered",
            div { class: "card",
                Icon {
                    width: 48,
                    height: 48,
                    icon: FaHeart
                }
                h1 { class: "title", "Phygital" }
                p {
                    "Transforme um presente físico em uma lembrança digital. Cada QR code abre uma página
                    única com fotos, uma mensagem especial e a música do casal."
                }
                p { class: "muted",
                    "Escaneie o QR code do seu presente para abrir a sua página."
                }
            }
            Footer {}
        }
    )
}
