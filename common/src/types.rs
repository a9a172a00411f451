//! 模板与融合结果的类型定义
//!
//! 前端 (WASM) 与命令行共用:
//! - Template: 后端返回的融合模板
//! - FusionResult: 一次融合成功后的结果图地址
//! - UploadedPhoto: 用户选中、尚未提交的照片

use serde::{Deserialize, Serialize};

/// 融合模板（只读，会话内不变）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// 远程缩略图（OSS），可能为空
    #[serde(default)]
    pub thumbnail_url: Option<String>,

    /// 本地缩略图路径，如 /templates/template1.jpg
    #[serde(default)]
    pub local_thumbnail: Option<String>,

    /// 模板页面地址，如 /fanyi?template=1
    #[serde(default)]
    pub url: String,
}

/// 融合结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionResult {
    pub image_url: String,

    #[serde(default)]
    pub local_image_url: Option<String>,

    #[serde(default)]
    pub download_url: Option<String>,
}

impl FusionResult {
    /// 页面展示用地址：优先本地副本
    pub fn display_url(&self) -> &str {
        non_empty(&self.local_image_url).unwrap_or(&self.image_url)
    }

    /// 保存时下载的地址
    pub fn download_target(&self) -> &str {
        non_empty(&self.download_url).unwrap_or_else(|| self.display_url())
    }

    /// 分享链接
    pub fn share_link(&self) -> &str {
        self.display_url()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// 用户选中的照片
///
/// `payload` 是平台相关的文件句柄（浏览器中为 `web_sys::File`，命令行中为文件内容）。
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedPhoto<P> {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
    pub payload: P,
}

impl<P> UploadedPhoto<P> {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size: u64, payload: P) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size,
            payload,
        }
    }
}
