use crate::error::{FaceFusionError, Result};
use face_fusion_common::AppConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 环境变量优先于配置文件
pub const SERVER_ENV: &str = "FACE_FUSION_SERVER";

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub server: Option<String>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FaceFusionError::Config("找不到用户主目录".into()))?;
        Ok(home.join(".config").join("face-fusion").join("config.json"))
    }

    pub fn set_server(&mut self, server: String) -> Result<()> {
        let server = normalize_server(&server)?;
        self.server = Some(server);
        self.save()
    }

    /// 命令行参数 > 环境变量 > 配置文件 > 默认值
    pub fn resolve_server(&self, flag: Option<&str>) -> String {
        flag.map(String::from)
            .or_else(|| std::env::var(SERVER_ENV).ok().filter(|s| !s.is_empty()))
            .or_else(|| self.server.clone())
            .unwrap_or_else(|| DEFAULT_SERVER.to_string())
    }

    pub fn app_config(&self, flag: Option<&str>) -> Result<AppConfig> {
        let config = AppConfig {
            api_base: normalize_server(&self.resolve_server(flag))?,
            request_timeout_ms: self
                .timeout_seconds
                .map(|s| u32::try_from(s.saturating_mul(1000)).unwrap_or(u32::MAX)),
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }
}

/// 必须是 http(s) 地址，去掉末尾斜杠
pub fn normalize_server(server: &str) -> Result<String> {
    let parsed = url::Url::parse(server.trim())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FaceFusionError::Config(format!("不支持的协议: {}", parsed.scheme())));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
