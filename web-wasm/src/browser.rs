//! 浏览器环境的辅助函数

use face_fusion_common::AppConfig;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

/// 页面内嵌配置的元素 id
pub const CONFIG_ELEMENT_ID: &str = "app-config";

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("document unavailable"))
}

/// (pathname, search)
pub fn location() -> (String, String) {
    match window() {
        Ok(w) => {
            let location = w.location();
            (
                location.pathname().unwrap_or_default(),
                location.search().unwrap_or_default(),
            )
        }
        Err(_) => (String::new(), String::new()),
    }
}

pub fn navigate(href: &str) {
    if let Err(e) = window().and_then(|w| w.location().set_href(href)) {
        gloo::console::error!("navigation failed", e);
    }
}

pub fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent())
        .unwrap_or_default()
}

pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// 读取 `<script id="app-config" type="application/json">`，缺失或无效时用默认值
pub fn read_app_config() -> AppConfig {
    let text = document()
        .ok()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|t| !t.trim().is_empty());

    let Some(text) = text else {
        return AppConfig::default();
    };

    match AppConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            gloo::console::warn!("invalid app config, using defaults:", e.to_string());
            AppConfig::default()
        }
    }
}

/// 通过临时 <a download> 触发下载
pub fn trigger_download(href: &str, file_name: &str) -> Result<(), JsValue> {
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body unavailable"))?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(href);
    link.set_download(file_name);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}

pub fn scroll_into_view(element_id: &str) {
    let Some(element) = document().ok().and_then(|d| d.get_element_by_id(element_id)) else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn scroll_to_top() {
    if let Ok(w) = window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}
