//! 基于 reqwest 的后端接口客户端

use crate::error::{FaceFusionError, Result};
use face_fusion_common::api::{parse_fusion, parse_template, parse_templates, parse_upload, UPLOAD_FIELD};
use face_fusion_common::{AppConfig, Endpoints, FusionRequest, FusionResult, Template, UploadedPhoto};
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

pub struct FusionClient {
    http: reqwest::Client,
    config: AppConfig,
    verbose: bool,
}

impl FusionClient {
    pub fn new(config: AppConfig, verbose: bool) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(u64::from(ms)));
        }
        Ok(Self {
            http: builder.build()?,
            config,
            verbose,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub async fn templates(&self) -> Result<Vec<Template>> {
        let body = self.get_text(&Endpoints::new(&self.config).templates()).await?;
        Ok(parse_templates(&body)?)
    }

    pub async fn template(&self, template_id: &str) -> Result<Template> {
        let body = self.get_text(&Endpoints::new(&self.config).template(template_id)).await?;
        Ok(parse_template(&body)?)
    }

    /// multipart 上传，返回远程地址
    pub async fn upload(&self, photo: &UploadedPhoto<PathBuf>) -> Result<String> {
        let url = Endpoints::new(&self.config).upload();
        self.log(&format!("POST {}", url));

        let bytes = tokio::fs::read(&photo.payload).await?;
        let part = Part::bytes(bytes)
            .file_name(photo.file_name.clone())
            .mime_str(&photo.mime_type)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let body = self.http.post(&url).multipart(form).send().await?.text().await?;
        self.log(&body);
        Ok(parse_upload(&body)?)
    }

    pub async fn fuse(&self, request: &FusionRequest) -> Result<FusionResult> {
        let url = Endpoints::new(&self.config).fusion();
        self.log(&format!("POST {}", url));

        let body = self.http.post(&url).json(request).send().await?.text().await?;
        self.log(&body);
        Ok(parse_fusion(&body)?)
    }

    /// 结果图可能是站内相对路径（/download/...）
    pub async fn download(&self, target: &str) -> Result<Vec<u8>> {
        let url = resolve_url(&self.config.api_base, target)?;
        self.log(&format!("GET {}", url));

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FaceFusionError::Download(format!("HTTP {}", response.status())));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        self.log(&format!("GET {}", url));
        let body = self.http.get(url).send().await?.text().await?;
        self.log(&body);
        Ok(body)
    }

    fn log(&self, message: &str) {
        if self.verbose {
            eprintln!("  [debug] {}", message);
        }
    }
}

/// 相对地址按 api_base 解析
pub fn resolve_url(base: &str, target: &str) -> Result<Url> {
    match Url::parse(target) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Url::parse(base)?.join(target)?),
        Err(e) => Err(e.into()),
    }
}
