pub mod header;
pub mod loading;
pub mod result_panel;
pub mod share_guide;
pub mod template_gallery;
pub mod template_preview;
pub mod thumbnail;
pub mod toast;
pub mod upload_area;
