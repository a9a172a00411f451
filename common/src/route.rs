//! 根据页面地址决定渲染哪个页面

/// 模板页的路径
pub const FUSION_PAGE_PATHS: &[&str] = &["/fanyi", "/fanyi.html"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Gallery,
    Fusion { template_id: String },
}

/// `query` 可带或不带前导 `?`
pub fn resolve_page(path: &str, query: &str, default_template_id: &str) -> Page {
    let path = path.trim_end_matches('/');
    if !FUSION_PAGE_PATHS.contains(&path) {
        return Page::Gallery;
    }

    let template_id = query_param(query, "template")
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| default_template_id.to_string());
    Page::Fusion { template_id }
}

pub fn template_page_url(template_id: &str) -> String {
    format!("{}?template={}", FUSION_PAGE_PATHS[0], template_id)
}

/// 值按 application/x-www-form-urlencoded 解码（`%31`、`+`）
fn query_param(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_gallery() {
        assert_eq!(resolve_page("/", "", "1"), Page::Gallery);
        assert_eq!(resolve_page("/index.html", "?template=2", "1"), Page::Gallery);
    }

    #[test]
    fn test_fusion_page_with_template() {
        assert_eq!(
            resolve_page("/fanyi", "?template=3", "1"),
            Page::Fusion { template_id: "3".into() }
        );
        assert_eq!(
            resolve_page("/fanyi.html", "foo=bar&template=5", "1"),
            Page::Fusion { template_id: "5".into() }
        );
    }

    #[test]
    fn test_fusion_page_defaults_template() {
        assert_eq!(
            resolve_page("/fanyi", "", "1"),
            Page::Fusion { template_id: "1".into() }
        );
        assert_eq!(
            resolve_page("/fanyi/", "?template=", "1"),
            Page::Fusion { template_id: "1".into() }
        );
        assert_eq!(
            resolve_page("/fanyi", "?template", "2"),
            Page::Fusion { template_id: "2".into() }
        );
    }

    #[test]
    fn test_template_param_is_decoded() {
        assert_eq!(
            resolve_page("/fanyi", "?template=%31", "1"),
            Page::Fusion { template_id: "1".into() }
        );
        assert_eq!(
            resolve_page("/fanyi", "?template=fanyi+2", "1"),
            Page::Fusion { template_id: "fanyi 2".into() }
        );
        assert_eq!(
            resolve_page("/fanyi", "?template=%20", "3"),
            Page::Fusion { template_id: "3".into() }
        );
    }

    #[test]
    fn test_template_page_url() {
        assert_eq!(template_page_url("4"), "/fanyi?template=4");
    }
}
