//! 照片选择时的校验

use crate::error::{Error, Result};

/// 允许上传的扩展名（与后端保持一致）
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// MIME 类型必须是 image/*，大小不超过 `limit` 字节
pub fn validate_photo(mime_type: &str, size: u64, limit: u64) -> Result<()> {
    if !is_image_mime(mime_type) {
        return Err(Error::NotAnImage {
            mime_type: mime_type.to_string(),
        });
    }

    if size > limit {
        return Err(Error::FileTooLarge { size, limit });
    }

    Ok(())
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.trim().to_ascii_lowercase().starts_with("image/")
}

/// 根据扩展名推断 MIME 类型，非图片返回 None
pub fn mime_from_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return None;
    }
    Some(match ext.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        _ => "image/jpeg",
    })
}
