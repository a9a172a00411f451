//! 后端接口调用（fetch）
//!
//! 响应体一律按文本读取后交给公共库解析，后端失败时的 JSON 也带 success=false。

use std::future::Future;
use std::pin::pin;

use face_fusion_common::api::{parse_fusion, parse_template, parse_templates, parse_upload, UPLOAD_FIELD};
use face_fusion_common::{AppConfig, Endpoints, Error, FusionRequest, FusionResult, Result, Template};
use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// 模板列表
pub async fn fetch_templates(config: &AppConfig) -> Result<Vec<Template>> {
    let url = Endpoints::new(config).templates();
    let body = with_timeout(config.request_timeout_ms, get_text(&url)).await?;
    parse_templates(&body)
}

/// 单个模板信息
pub async fn fetch_template(config: &AppConfig, template_id: &str) -> Result<Template> {
    let url = Endpoints::new(config).template(template_id);
    let body = with_timeout(config.request_timeout_ms, get_text(&url)).await?;
    parse_template(&body)
}

/// 上传照片，返回远程地址
pub async fn upload_photo(config: &AppConfig, file: &File) -> Result<String> {
    let url = Endpoints::new(config).upload();
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form.into());

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    let body = with_timeout(config.request_timeout_ms, send(request)).await?;
    parse_upload(&body)
}

/// 调用人脸融合
pub async fn request_fusion(config: &AppConfig, fusion: &FusionRequest) -> Result<FusionResult> {
    let url = Endpoints::new(config).fusion();
    let payload = serde_json::to_string(fusion)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let body = with_timeout(config.request_timeout_ms, send(request)).await?;
    parse_fusion(&body)
}

async fn get_text(url: &str) -> Result<String> {
    let request = Request::new_with_str(url).map_err(js_error)?;
    send(request).await
}

async fn send(request: Request) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| Error::Network("window unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    // 后端出错时通常仍返回 JSON，只有非 JSON 的错误页才按 HTTP 状态报错
    if !resp.ok() && serde_json::from_str::<serde_json::Value>(&text).is_err() {
        return Err(Error::Network(format!("HTTP {}", resp.status())));
    }
    Ok(text)
}

/// 配置了超时时与计时器竞争
async fn with_timeout<T>(timeout_ms: Option<u32>, fut: impl Future<Output = Result<T>>) -> Result<T> {
    let Some(ms) = timeout_ms else {
        return fut.await;
    };

    let fut = pin!(fut);
    let timer = pin!(TimeoutFuture::new(ms));
    match select(fut, timer).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => Err(Error::Timeout(ms)),
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
