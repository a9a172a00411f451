//! 页面提示文案

pub const TEMPLATES_LOAD_FAILED: &str = "模板加载失败";
pub const TEMPLATE_INFO_LOAD_FAILED: &str = "模板信息加载失败";
pub const PHOTO_SELECTED: &str = "照片上传成功";
pub const PHOTO_REQUIRED: &str = "请先上传照片";
pub const FUSION_DONE: &str = "融合完成！";
pub const FUSION_FAILED: &str = "融合失败，请重试";
pub const SAVED: &str = "图片已保存到相册";
pub const LINK_COPIED: &str = "链接已复制，可在微信中分享";
pub const COPY_FAILED: &str = "复制失败，请长按图片保存";
pub const RESET_DONE: &str = "已重置，可以重新制作";

pub const GENERATE_LABEL: &str = "🎨 开始融合";
pub const GENERATING_LABEL: &str = "处理中...";
