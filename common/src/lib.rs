//! Face Fusion Common Library
//!
//! 浏览器前端 (WASM) 与命令行共用的类型、接口契约和融合流程状态机

pub mod api;
pub mod config;
pub mod error;
pub mod gallery;
pub mod notice;
pub mod route;
pub mod share;
pub mod thumbnail;
pub mod types;
pub mod validation;
pub mod workflow;

pub use api::{Endpoints, FusionRequest};
pub use config::{AppConfig, MAX_UPLOAD_BYTES};
pub use error::{Error, Result};
pub use gallery::{build_tiles, GalleryTile};
pub use route::{resolve_page, Page};
pub use share::{share_action, ShareAction};
pub use thumbnail::{thumbnail_chain, ThumbnailCursor, ThumbnailSource};
pub use types::{FusionResult, Template, UploadedPhoto};
pub use validation::validate_photo;
pub use workflow::{FusionWorkflow, Ticket, WorkflowState};
