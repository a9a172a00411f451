use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaceFusionError {
    #[error("设置错误: {0}")]
    Config(String),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Fusion(#[from] face_fusion_common::Error),

    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("地址无效: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("结果下载失败: {0}")]
    Download(String),

    #[error("JSON 解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FaceFusionError>;
