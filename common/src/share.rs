//! 分享与保存的辅助判断

/// 内置浏览器的 User-Agent 标记
const IN_APP_BROWSER_MARKERS: &[&str] = &["micromessenger"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// 在内置浏览器中显示"点击右上角菜单"引导层
    ShowGuide,
    /// 复制链接到剪贴板
    CopyLink(String),
}

pub fn is_in_app_browser(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    IN_APP_BROWSER_MARKERS.iter().any(|m| ua.contains(m))
}

pub fn share_action(user_agent: &str, link: &str) -> ShareAction {
    if is_in_app_browser(user_agent) {
        ShareAction::ShowGuide
    } else {
        ShareAction::CopyLink(link.to_string())
    }
}

/// 下载文件名，如 fanyi_fusion_1700000000000.jpg
pub fn download_file_name(prefix: &str, epoch_millis: u64) -> String {
    format!("{}_{}.jpg", prefix, epoch_millis)
}
