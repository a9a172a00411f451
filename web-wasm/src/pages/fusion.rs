//! 模板页：选择照片 → 上传 → 融合 → 保存/分享

use face_fusion_common::share::download_file_name;
use face_fusion_common::{
    notice, share_action, AppConfig, Error, FusionWorkflow, ShareAction, Template, Ticket, UploadedPhoto,
};
use gloo::timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::browser;
use crate::clipboard;
use crate::components::{
    header::Header,
    loading::Loading,
    result_panel::ResultPanel,
    share_guide::ShareGuide,
    template_preview::TemplatePreview,
    toast::{use_toast, ToastHandle},
    upload_area::{read_preview, UploadArea},
};

type Workflow = RwSignal<FusionWorkflow<File>, LocalStorage>;

#[component]
pub fn FusionPage(template_id: String) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let toast = use_toast();

    let workflow: Workflow = RwSignal::new_local(FusionWorkflow::new(template_id.clone(), config.max_upload_bytes));
    let (template, set_template) = signal(None::<Template>);
    let (preview, set_preview) = signal(None::<String>);
    let share_guide = RwSignal::new(false);
    let file_input = NodeRef::<Input>::new();

    // 模板信息
    {
        let config = config.clone();
        spawn_local(async move {
            match api::fetch_template(&config, &template_id).await {
                Ok(info) => {
                    gloo::console::log!("模板信息加载成功:", info.name.clone());
                    set_template.set(Some(info));
                }
                Err(e) => {
                    gloo::console::error!("加载模板信息失败:", e.to_string());
                    toast.show(notice::TEMPLATE_INFO_LOAD_FAILED);
                }
            }
        });
    }

    let on_file = move |file: File| {
        let photo = UploadedPhoto::new(file.name(), file.type_(), file.size() as u64, file.clone());
        match workflow.try_update(|w| w.select_photo(photo).map(|()| w.selection())) {
            Some(Ok(selection)) => {
                let loaded = read_preview(&file, move |data_url| {
                    // 读取期间可能已换了照片或被重置
                    if workflow.with_untracked(|w| w.is_current_selection(selection)) {
                        set_preview.set(Some(data_url));
                    }
                });
                if let Err(e) = loaded {
                    gloo::console::warn!("preview failed", e);
                }
                toast.show(notice::PHOTO_SELECTED);
            }
            Some(Err(e)) => {
                gloo::console::warn!("photo rejected:", e.to_string());
                toast.show(e.to_string());
            }
            None => {}
        }
    };

    let on_generate = {
        let config = config.clone();
        move |_: MouseEvent| {
            let started = workflow.try_update(|w| w.begin_generate().map(|(ticket, photo)| (ticket, photo.payload.clone())));
            match started {
                Some(Ok((ticket, file))) => {
                    spawn_local(run_fusion(config.clone(), workflow, toast, ticket, file));
                }
                Some(Err(Error::NoPhoto)) => toast.show(notice::PHOTO_REQUIRED),
                Some(Err(e)) => {
                    gloo::console::warn!("generate ignored:", e.to_string());
                }
                None => {}
            }
        }
    };

    let on_save = {
        let prefix = config.download_prefix.clone();
        move |_: ()| {
            // 没有结果时不做任何事
            let Some(target) = workflow.with_untracked(|w| w.save_target().map(String::from)) else {
                return;
            };
            let file_name = download_file_name(&prefix, browser::now_millis());
            match browser::trigger_download(&target, &file_name) {
                Ok(()) => toast.show(notice::SAVED),
                Err(e) => {
                    gloo::console::error!("download failed", e);
                }
            }
        }
    };

    let on_share = move |_: ()| {
        let Some(link) = workflow.with_untracked(|w| w.share_link().map(String::from)) else {
            return;
        };
        match share_action(&browser::user_agent(), &link) {
            ShareAction::ShowGuide => share_guide.set(true),
            ShareAction::CopyLink(link) => spawn_local(async move {
                match clipboard::copy_text(&link).await {
                    Ok(()) => toast.show(notice::LINK_COPIED),
                    Err(e) => {
                        gloo::console::warn!(e);
                        toast.show(notice::COPY_FAILED);
                    }
                }
            }),
        }
    };

    let on_reset = move |_: MouseEvent| {
        workflow.update(|w| w.reset());
        set_preview.set(None);
        share_guide.set(false);
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
        browser::scroll_to_top();
        toast.show(notice::RESET_DONE);
    };

    let state = Signal::derive(move || workflow.with(|w| w.state()));
    let is_loading = move || workflow.with(|w| w.is_loading());
    let result_url = Signal::derive(move || workflow.with(|w| w.result().map(|r| r.display_url().to_string())));

    view! {
        <div class="container" data-state=move || state.get().as_str()>
            <Header subtitle="上传一张正脸照片，生成专属定妆照" />
            <TemplatePreview template=template />
            <UploadArea preview=preview file_input=file_input on_file=on_file />

            <div class="actions">
                <button
                    id="generateBtn"
                    class="btn btn-primary btn-generate"
                    disabled=move || !workflow.with(|w| w.can_generate())
                    on:click=on_generate
                >
                    {move || if is_loading() { notice::GENERATING_LABEL } else { notice::GENERATE_LABEL }}
                </button>
                <button id="resetBtn" class="btn btn-tertiary" on:click=on_reset>
                    "🔄 重新制作"
                </button>
            </div>

            <Loading state=state />
            <ResultPanel image_url=result_url on_save=on_save on_share=on_share />
            <ShareGuide visible=share_guide />
        </div>
    }
}

/// 上传并融合；过期的回报直接丢弃
async fn run_fusion(config: AppConfig, workflow: Workflow, toast: ToastHandle, ticket: Ticket, file: File) {
    let uploaded = api::upload_photo(&config, &file).await;
    if let Err(e) = &uploaded {
        gloo::console::error!("上传失败:", e.to_string());
    }

    let request = match workflow.try_update(|w| w.complete_upload(ticket, uploaded)) {
        Some(Ok(request)) => request,
        Some(Err(e)) => return report_failure(toast, e),
        None => return,
    };

    let fused = api::request_fusion(&config, &request).await;
    if let Err(e) = &fused {
        gloo::console::error!("API调用失败:", e.to_string());
    }

    match workflow.try_update(|w| w.complete_fusion(ticket, fused).map(|_| ())) {
        Some(Ok(())) => {
            // 等结果区域显示后再滚动
            Timeout::new(0, || browser::scroll_into_view("resultSection")).forget();
            toast.show(notice::FUSION_DONE);
        }
        Some(Err(e)) => report_failure(toast, e),
        None => {}
    }
}

fn report_failure(toast: ToastHandle, error: Error) {
    match error {
        Error::StaleResponse | Error::InvalidTransition { .. } => {
            gloo::console::log!("discarded completion:", error.to_string());
        }
        _ => {
            gloo::console::error!("融合失败:", error.to_string());
            toast.show(notice::FUSION_FAILED);
        }
    }
}
