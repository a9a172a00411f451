//! 模板画廊的瓦片数据

use crate::config::AppConfig;
use crate::thumbnail::{thumbnail_chain, ThumbnailSource};
use crate::types::Template;

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryTile {
    pub template_id: String,
    pub name: String,
    pub description: String,
    /// 点击后跳转的模板页面
    pub href: String,
    pub thumbnails: Vec<ThumbnailSource>,
}

impl GalleryTile {
    pub fn from_template(template: &Template, config: &AppConfig) -> Self {
        Self {
            template_id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            href: template.url.clone(),
            thumbnails: thumbnail_chain(template, config),
        }
    }
}

/// 每个模板一块瓦片，保持输入顺序
pub fn build_tiles(templates: &[Template], config: &AppConfig) -> Vec<GalleryTile> {
    templates
        .iter()
        .map(|t| GalleryTile::from_template(t, config))
        .collect()
}
