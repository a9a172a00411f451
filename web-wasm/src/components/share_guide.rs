//! 内置浏览器中的分享引导层

use leptos::prelude::*;

#[component]
pub fn ShareGuide(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="share-guide" on:click=move |_| visible.set(false)>
                <div>
                    <div class="share-guide-icon">"📱"</div>
                    <div>"点击右上角菜单"</div>
                    <div>"选择\"分享到朋友圈\""</div>
                    <div class="share-guide-hint">"点击任意位置关闭"</div>
                </div>
            </div>
        </Show>
    }
}
