//! 页面标题

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] subtitle: String) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"AI 人脸融合"</h1>
            <p class="subtitle">{subtitle}</p>
        </header>
    }
}
