//! 后端 HTTP 接口的请求/响应结构
//!
//! 只描述契约，发送请求由各平台自行实现（WASM 用 fetch，命令行用 reqwest）。

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::types::{FusionResult, Template};

pub const TEMPLATES_PATH: &str = "/api/templates";
pub const TEMPLATE_PATH: &str = "/api/template";
pub const UPLOAD_PATH: &str = "/api/upload";
pub const FUSION_PATH: &str = "/api/face-fusion";

/// 上传接口的表单字段名
pub const UPLOAD_FIELD: &str = "file";

/// 通用响应外壳 `{ success, data, message }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T> {
        if !self.success {
            return Err(Error::Api(failure_message(self.message, "请求失败")));
        }
        self.data
            .ok_or_else(|| Error::Api(failure_message(self.message, "响应缺少 data")))
    }
}

/// 上传接口响应 `{ success, url, message }`
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadResponse {
    pub fn into_url(self) -> Result<String> {
        match self.url {
            Some(url) if self.success && !url.is_empty() => Ok(url),
            _ => Err(Error::Api(failure_message(self.message, "上传失败"))),
        }
    }
}

/// 融合请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionRequest {
    pub user_image_url: String,
    pub template_id: String,
}

fn failure_message(message: Option<String>, fallback: &str) -> String {
    message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn parse_templates(json: &str) -> Result<Vec<Template>> {
    serde_json::from_str::<ApiResponse<Vec<Template>>>(json)?.into_result()
}

pub fn parse_template(json: &str) -> Result<Template> {
    serde_json::from_str::<ApiResponse<Template>>(json)?.into_result()
}

pub fn parse_upload(json: &str) -> Result<String> {
    serde_json::from_str::<UploadResponse>(json)?.into_url()
}

/// 融合响应：成功但 imageUrl 为空也视为失败
pub fn parse_fusion(json: &str) -> Result<FusionResult> {
    let result = serde_json::from_str::<ApiResponse<FusionResult>>(json)?.into_result()?;
    if result.image_url.is_empty() {
        return Err(Error::Api("人脸融合失败".into()));
    }
    Ok(result)
}

/// 按配置拼出四个接口地址
#[derive(Debug, Clone)]
pub struct Endpoints<'a> {
    config: &'a AppConfig,
}

impl<'a> Endpoints<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    pub fn templates(&self) -> String {
        self.config.endpoint(TEMPLATES_PATH)
    }

    pub fn template(&self, id: &str) -> String {
        self.config.endpoint(&format!("{}/{}", TEMPLATE_PATH, id))
    }

    pub fn upload(&self) -> String {
        self.config.endpoint(UPLOAD_PATH)
    }

    pub fn fusion(&self) -> String {
        self.config.endpoint(FUSION_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_templates_success() {
        let json = r#"{"success": true, "data": [
            {"id": "1", "name": "a", "description": "", "url": "/fanyi?template=1", "thumbnailUrl": null},
            {"id": "2", "name": "b", "description": "", "url": "/fanyi?template=2", "thumbnailUrl": null}
        ]}"#;
        let templates = parse_templates(json).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[1].id, "2");
    }

    #[test]
    fn test_parse_templates_failure_uses_message() {
        let json = r#"{"success": false, "message": "模板不存在"}"#;
        let err = parse_templates(json).unwrap_err();
        assert!(matches!(err, Error::Api(ref m) if m == "模板不存在"));
    }

    #[test]
    fn test_parse_template_missing_data() {
        let err = parse_template(r#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, Error::Api(_)));
    }

    #[test]
    fn test_parse_upload() {
        assert_eq!(
            parse_upload(r#"{"success": true, "url": "https://oss.test/u.jpg"}"#).unwrap(),
            "https://oss.test/u.jpg"
        );
        let err = parse_upload(r#"{"success": false, "message": "文件类型不支持"}"#).unwrap_err();
        assert_eq!(err.to_string(), "API error: 文件类型不支持");
        assert!(parse_upload(r#"{"success": true, "url": ""}"#).is_err());
    }

    #[test]
    fn test_parse_fusion() {
        let json = r#"{"success": true, "data": {"imageUrl": "https://oss.test/r.jpg", "requestId": "x"}, "message": "融合成功"}"#;
        let result = parse_fusion(json).unwrap();
        assert_eq!(result.image_url, "https://oss.test/r.jpg");
        assert_eq!(result.download_url, None);

        assert!(parse_fusion(r#"{"success": true, "data": {"imageUrl": ""}}"#).is_err());
        assert!(parse_fusion(r#"{"success": false}"#).is_err());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(parse_fusion("<html>"), Err(Error::Json(_))));
    }

    #[test]
    fn test_fusion_request_body() {
        let request = FusionRequest {
            user_image_url: "https://oss.test/u.jpg".into(),
            template_id: "3".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["userImageUrl"], "https://oss.test/u.jpg");
        assert_eq!(json["templateId"], "3");
    }

    #[test]
    fn test_endpoints() {
        let config = AppConfig {
            api_base: "http://localhost:5000".into(),
            ..Default::default()
        };
        let endpoints = Endpoints::new(&config);
        assert_eq!(endpoints.templates(), "http://localhost:5000/api/templates");
        assert_eq!(endpoints.template("4"), "http://localhost:5000/api/template/4");
        assert_eq!(endpoints.upload(), "http://localhost:5000/api/upload");
        assert_eq!(endpoints.fusion(), "http://localhost:5000/api/face-fusion");
    }
}
