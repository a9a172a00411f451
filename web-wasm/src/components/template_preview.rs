//! 模板页顶部的模板预览

use face_fusion_common::{thumbnail_chain, AppConfig, Template};
use leptos::prelude::*;

use crate::components::thumbnail::ThumbnailImage;

#[component]
pub fn TemplatePreview(template: ReadSignal<Option<Template>>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    view! {
        <div class="template-preview">
            <div id="templatePreview" class="template-preview-image">
                {move || {
                    template.get().map(|t| {
                        view! {
                            <ThumbnailImage
                                sources=thumbnail_chain(&t, &config)
                                alt=t.name.clone()
                                class="template-preview-thumb"
                            />
                        }
                    })
                }}
            </div>
            <div class="template-preview-info">
                <div id="templatePreviewName" class="template-preview-name">
                    {move || template.get().map(|t| t.name).unwrap_or_default()}
                </div>
                <div id="templatePreviewDesc" class="template-preview-desc">
                    {move || template.get().map(|t| t.description).unwrap_or_default()}
                </div>
            </div>
        </div>
    }
}
