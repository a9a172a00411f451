//! 带回退链的缩略图组件

use face_fusion_common::{ThumbnailCursor, ThumbnailSource};
use leptos::prelude::*;

#[component]
pub fn ThumbnailImage(
    sources: Vec<ThumbnailSource>,
    alt: String,
    #[prop(default = "template-image")] class: &'static str,
) -> impl IntoView {
    let cursor = RwSignal::new(ThumbnailCursor::new(sources));

    move || match cursor.with(|c| c.current().cloned()) {
        Some(ThumbnailSource::Local(src)) | Some(ThumbnailSource::Remote(src)) => view! {
            <img
                class=class
                src=src
                alt=alt.clone()
                on:error=move |_| cursor.update(|c| {
                    c.advance();
                })
            />
        }
        .into_any(),
        Some(ThumbnailSource::Placeholder { label, name }) => view! {
            <div class="template-placeholder">{label}<br />{name}</div>
        }
        .into_any(),
        None => view! { <div class="template-placeholder">{alt.clone()}</div> }.into_any(),
    }
}
