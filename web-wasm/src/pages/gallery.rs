//! 模板画廊页

use face_fusion_common::{build_tiles, notice, AppConfig, GalleryTile};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::components::{header::Header, template_gallery::TemplateGallery, toast::use_toast};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let toast = use_toast();
    let (tiles, set_tiles) = signal(Vec::<GalleryTile>::new());

    // 加载一次，失败不重试
    spawn_local(async move {
        match api::fetch_templates(&config).await {
            Ok(templates) => {
                gloo::console::log!("templates loaded:", templates.len());
                set_tiles.set(build_tiles(&templates, &config));
            }
            Err(e) => {
                gloo::console::error!("加载模板失败:", e.to_string());
                toast.show(notice::TEMPLATES_LOAD_FAILED);
            }
        }
    });

    let on_select = move |href: String| browser::navigate(&href);

    view! {
        <div class="container">
            <Header subtitle="选择一个模板，开始制作你的定妆照" />
            <TemplateGallery tiles=tiles on_select=on_select />
        </div>
    }
}
