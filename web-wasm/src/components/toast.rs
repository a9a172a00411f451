//! 提示消息组件

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

/// 页面级提示，通过 context 共享
#[derive(Clone, Copy)]
pub struct ToastHandle {
    message: RwSignal<String>,
    visible: RwSignal<bool>,
    seq: RwSignal<u64>,
    millis: u32,
}

impl ToastHandle {
    pub fn new(millis: u32) -> Self {
        Self {
            message: RwSignal::new(String::new()),
            visible: RwSignal::new(false),
            seq: RwSignal::new(0),
            millis,
        }
    }

    /// 显示消息，到时自动隐藏；被后来的消息覆盖时由后者负责隐藏
    pub fn show(&self, message: impl Into<String>) {
        self.message.set(message.into());
        self.visible.set(true);

        let seq = self.seq.get_untracked() + 1;
        self.seq.set(seq);

        let current = self.seq;
        let visible = self.visible;
        Timeout::new(self.millis, move || {
            if current.get_untracked() == seq {
                visible.set(false);
            }
        })
        .forget();
    }
}

pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().unwrap_or_else(|| ToastHandle::new(3000))
}

#[component]
pub fn Toast() -> impl IntoView {
    let toast = use_toast();

    view! {
        <div id="toast" class="toast" class:show=move || toast.visible.get()>
            {move || toast.message.get()}
        </div>
    }
}
