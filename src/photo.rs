use crate::error::{FaceFusionError, Result};
use face_fusion_common::validation::mime_from_extension;
use face_fusion_common::UploadedPhoto;
use std::path::{Path, PathBuf};

/// 本地照片，MIME 类型由扩展名推断，大小取自文件元数据
///
/// 内容在上传时才读取，校验不通过的文件不会被读入内存。
pub fn load_photo(path: &Path) -> Result<UploadedPhoto<PathBuf>> {
    if !path.is_file() {
        return Err(FaceFusionError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    // 非图片的扩展名交给校验逻辑报"请选择图片文件"
    let mime_type = path
        .extension()
        .and_then(|ext| mime_from_extension(&ext.to_string_lossy()))
        .unwrap_or("application/octet-stream");

    let size = std::fs::metadata(path)?.len();
    Ok(UploadedPhoto::new(file_name, mime_type, size, path.to_path_buf()))
}
