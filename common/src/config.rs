//! 前端与命令行共用的应用配置

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 上传图片大小上限 (5MB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// API 根地址，空字符串表示同源
    pub api_base: String,
    pub max_upload_bytes: u64,
    /// 提示消息显示时长
    pub toast_millis: u32,
    /// 视为占位图的远程域名，缩略图链会跳过这些地址
    pub placeholder_domains: Vec<String>,
    pub placeholder_label: String,
    pub local_thumbnail_dir: String,
    pub download_prefix: String,
    pub default_template_id: String,
    /// None 表示不设超时
    pub request_timeout_ms: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            toast_millis: 3000,
            placeholder_domains: vec!["example.com".into()],
            placeholder_label: "周繁漪".into(),
            local_thumbnail_dir: "/templates".into(),
            download_prefix: "fanyi_fusion".into(),
            default_template_id: "1".into(),
            request_timeout_ms: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_upload_bytes == 0 {
            return Err(Error::Config("maxUploadBytes must be greater than 0".into()));
        }
        if self.default_template_id.trim().is_empty() {
            return Err(Error::Config("defaultTemplateId is empty".into()));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(Error::Config("requestTimeoutMs must be greater than 0".into()));
        }
        Ok(())
    }

    /// 拼接 API 路径，处理多余的斜杠
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}
