use dioxus::prelude::*;

/// Photos can be attached to a page more than once, so the URL alone is not unique.
fn photo_key(index: usize, url: &str) -> String {
    format!("{}-{}", index, url)
}

#[component]
pub fn PhotoGallery(photos: Vec<String>) -> Element {
    if photos.is_empty() {
        return rsx!();
    }

    rsx!(
        div { class: "gallery",
            {photos.iter().enumerate().map(|(index, url)| {
                let key = photo_key(index, url);
                let number = index + 1;

                rsx! {
                    img {
                        key: "{key}",
                        class: "gallery-photo",
                        src: "{url}",
                        alt: "Foto {number}",
                        loading: "lazy",
                    }
                }
            })}
        }
    )
}
