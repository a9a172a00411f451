//! 错误类型定义

use thiserror::Error;

use crate::workflow::WorkflowState;

/// 公共错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("请选择图片文件")]
    NotAnImage { mime_type: String },

    #[error("图片大小不能超过{}MB", megabytes(.limit))]
    FileTooLarge { size: u64, limit: u64 },

    #[error("请先上传照片")]
    NoPhoto,

    #[error("正在处理中，请稍候")]
    Busy,

    #[error("状态 {state:?} 下不能执行 {action}")]
    InvalidTransition {
        state: WorkflowState,
        action: &'static str,
    },

    #[error("过期的响应已忽略")]
    StaleResponse,

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("请求超时 ({0}ms)")]
    Timeout(u32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// 整数 MB 不带小数，否则保留一位
fn megabytes(bytes: &u64) -> String {
    const MB: u64 = 1024 * 1024;
    if bytes % MB == 0 {
        (bytes / MB).to_string()
    } else {
        format!("{:.1}", *bytes as f64 / MB as f64)
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// 校验类错误（文件类型、大小）
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::NotAnImage { .. } | Error::FileTooLarge { .. })
    }
}
