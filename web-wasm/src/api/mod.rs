//! 后端接口

mod client;

pub use client::{fetch_template, fetch_templates, request_fusion, upload_photo};
