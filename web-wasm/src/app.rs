//! 应用入口组件：按地址选择页面

use face_fusion_common::{resolve_page, AppConfig, Page};
use leptos::prelude::*;

use crate::browser;
use crate::components::toast::{Toast, ToastHandle};
use crate::pages::{fusion::FusionPage, gallery::GalleryPage};

#[component]
pub fn App() -> impl IntoView {
    let config = browser::read_app_config();
    let (path, query) = browser::location();
    let page = resolve_page(&path, &query, &config.default_template_id);

    provide_context(ToastHandle::new(config.toast_millis));
    provide_context::<AppConfig>(config);

    let content = match page {
        Page::Gallery => view! { <GalleryPage /> }.into_any(),
        Page::Fusion { template_id } => view! { <FusionPage template_id=template_id /> }.into_any(),
    };

    view! {
        {content}
        <Toast />
    }
}
