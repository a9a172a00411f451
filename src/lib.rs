//! 人脸融合命令行客户端
//!
//! 与浏览器前端共用 face-fusion-common 中的接口契约与流程状态机

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod photo;
