//! 融合结果区域

use leptos::prelude::*;

#[component]
pub fn ResultPanel<FS, FH>(
    #[prop(into)] image_url: Signal<Option<String>>,
    on_save: FS,
    on_share: FH,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FH: Fn(()) + 'static + Clone,
{
    let has_result = move || image_url.get().is_some();

    view! {
        <div id="resultSection" class="result-section" style:display=move || if has_result() { "block" } else { "none" }>
            <h3 class="result-title">"融合结果"</h3>
            <img
                id="resultImage"
                class="result-image"
                src=move || image_url.get().unwrap_or_default()
                alt="fusion result"
            />
            <div class="result-actions">
                <button
                    id="saveBtn"
                    class="btn btn-primary"
                    disabled=move || !has_result()
                    on:click={
                        let on_save = on_save.clone();
                        move |_| on_save(())
                    }
                >
                    "💾 保存图片"
                </button>
                <button
                    id="shareBtn"
                    class="btn btn-secondary"
                    disabled=move || !has_result()
                    on:click={
                        let on_share = on_share.clone();
                        move |_| on_share(())
                    }
                >
                    "📤 分享"
                </button>
            </div>
        </div>
    }
}
