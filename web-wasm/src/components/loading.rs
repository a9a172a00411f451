//! 处理中提示组件

use face_fusion_common::WorkflowState;
use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into)] state: Signal<WorkflowState>) -> impl IntoView {
    let stage_text = move || match state.get() {
        WorkflowState::Uploading => "正在上传照片...",
        WorkflowState::Fusing => "正在生成融合照片...",
        _ => "",
    };
    let is_loading = move || matches!(state.get(), WorkflowState::Uploading | WorkflowState::Fusing);

    view! {
        <div id="loading" class="loading" style:display=move || if is_loading() { "block" } else { "none" }>
            <div class="spinner"></div>
            <p class="loading-text">{stage_text}</p>
        </div>
    }
}
