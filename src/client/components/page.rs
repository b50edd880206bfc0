use chrono::{Datelike, Utc};
use dioxus::prelude::*;

#[component]
pub fn Page(
    class: Option<&'static str>,
    background: Option<String>,
    children: Element,
) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };
    let style = background
        .map(|color| format!("background-color: {};", color))
        .unwrap_or_default();

    rsx!(
        div {
            class: "page {class}",
            style: "{style}",
            {children}
        }
    )
}

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx!(
        footer { class: "footer",
            "© {year} Phygital · Feito com amor"
        }
    )
}
