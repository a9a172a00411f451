//! 模板画廊组件

use face_fusion_common::GalleryTile;
use leptos::prelude::*;

use crate::components::thumbnail::ThumbnailImage;

#[component]
pub fn TemplateGallery<F>(tiles: ReadSignal<Vec<GalleryTile>>, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="templateGrid" class="template-grid">
            // 同一模板可能出现多次，用下标作 key
            <For
                each=move || tiles.get().into_iter().enumerate()
                key=|(index, _)| *index
                children=move |(_, tile)| {
                    let on_select = on_select.clone();
                    view! { <TemplateTile tile=tile on_select=on_select /> }
                }
            />
        </div>
    }
}

#[component]
fn TemplateTile<F>(tile: GalleryTile, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let href = tile.href.clone();

    view! {
        <div
            class="template-item"
            data-template-id=tile.template_id.clone()
            on:click=move |_| on_select(href.clone())
        >
            <div class="template-card">
                <ThumbnailImage sources=tile.thumbnails.clone() alt=tile.name.clone() />
                <div class="template-overlay">
                    <div class="template-name">{tile.name.clone()}</div>
                    <div class="template-desc">{tile.description.clone()}</div>
                </div>
            </div>
        </div>
    }
}
