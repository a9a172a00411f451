//! 照片上传区域组件

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

#[component]
pub fn UploadArea<F>(
    preview: ReadSignal<Option<String>>,
    file_input: NodeRef<Input>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let has_preview = move || preview.get().is_some();

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // 打开文件选择框
    let on_click = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_change = move |_| {
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file(file);
        }
    };

    view! {
        <div
            id="uploadArea"
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                id="fileInput"
                type="file"
                accept="image/*"
                class="hidden"
                node_ref=file_input
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
            <img
                id="previewImage"
                class="preview-image"
                class:hidden=move || !has_preview()
                src=move || preview.get().unwrap_or_default()
                alt="preview"
            />
            <div class="upload-icon" style:display=move || if has_preview() { "none" } else { "block" }>
                "📷"
            </div>
            <div class="upload-text" style:display=move || if has_preview() { "none" } else { "block" }>
                "点击或拖拽上传照片"
            </div>
            <div class="upload-hint" style:display=move || if has_preview() { "none" } else { "block" }>
                "支持 JPG、PNG 等格式，不超过5MB"
            </div>
        </div>
    }
}

/// 读取为 Data URL 用于预览
pub fn read_preview<F>(file: &File, on_loaded: F) -> Result<(), JsValue>
where
    F: FnOnce(String) + 'static,
{
    let reader = FileReader::new()?;

    let reader_clone = reader.clone();
    let closure = Closure::once(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            on_loaded(data_url);
        }
    });

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    reader.read_as_data_url(file)
}
