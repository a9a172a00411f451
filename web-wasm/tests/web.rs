//! 浏览器中运行的测试 (wasm-pack test --headless --chrome)

use face_fusion_common::AppConfig;
use face_fusion_wasm::browser::{read_app_config, CONFIG_ELEMENT_ID};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn set_config_element(text: Option<&str>) {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(existing) = document.get_element_by_id(CONFIG_ELEMENT_ID) {
        existing.remove();
    }
    if let Some(text) = text {
        let script = document.create_element("script").unwrap();
        script.set_id(CONFIG_ELEMENT_ID);
        script.set_attribute("type", "application/json").unwrap();
        script.set_text_content(Some(text));
        document.body().unwrap().append_child(&script).unwrap();
    }
}

#[wasm_bindgen_test]
fn test_config_defaults_without_element() {
    set_config_element(None);
    assert_eq!(read_app_config(), AppConfig::default());
}

#[wasm_bindgen_test]
fn test_config_from_page() {
    set_config_element(Some(r#"{"apiBase": "https://fusion.test", "requestTimeoutMs": 15000}"#));
    let config = read_app_config();
    assert_eq!(config.api_base, "https://fusion.test");
    assert_eq!(config.request_timeout_ms, Some(15000));
    set_config_element(None);
}

#[wasm_bindgen_test]
fn test_invalid_config_falls_back() {
    set_config_element(Some("{not json"));
    assert_eq!(read_app_config(), AppConfig::default());
    set_config_element(None);
}
