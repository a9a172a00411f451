//! 缩略图回退链
//!
//! 本地缩略图 → 远程缩略图（排除占位域名）→ 文字占位。
//! 图片加载失败时前进到下一项，最后一项总是文字占位。

use crate::config::AppConfig;
use crate::types::Template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailSource {
    Local(String),
    Remote(String),
    Placeholder { label: String, name: String },
}

impl ThumbnailSource {
    /// 可作为 img src 的地址，占位返回 None
    pub fn src(&self) -> Option<&str> {
        match self {
            ThumbnailSource::Local(url) | ThumbnailSource::Remote(url) => Some(url),
            ThumbnailSource::Placeholder { .. } => None,
        }
    }
}

/// 约定的本地缩略图路径
pub fn local_thumbnail_path(template: &Template, config: &AppConfig) -> String {
    match template.local_thumbnail.as_deref() {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => format!(
            "{}/template{}.jpg",
            config.local_thumbnail_dir.trim_end_matches('/'),
            template.id
        ),
    }
}

/// 主机名等于占位域名或是其子域名；相对路径不算
pub fn is_placeholder_url(url: &str, config: &AppConfig) -> bool {
    let Some(host) = url::Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_ascii_lowercase)) else {
        return false;
    };

    config.placeholder_domains.iter().any(|domain| {
        let domain = domain.trim().to_ascii_lowercase();
        !domain.is_empty()
            && (host == domain
                || host
                    .strip_suffix(domain.as_str())
                    .is_some_and(|sub| sub.ends_with('.')))
    })
}

pub fn thumbnail_chain(template: &Template, config: &AppConfig) -> Vec<ThumbnailSource> {
    let local = local_thumbnail_path(template, config);
    let mut chain = vec![ThumbnailSource::Local(local.clone())];

    if let Some(remote) = template.thumbnail_url.as_deref() {
        if !remote.is_empty() && remote != local && !is_placeholder_url(remote, config) {
            chain.push(ThumbnailSource::Remote(remote.to_string()));
        }
    }

    chain.push(ThumbnailSource::Placeholder {
        label: config.placeholder_label.clone(),
        name: template.name.clone(),
    });
    chain
}

/// 回退链上的当前位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailCursor {
    chain: Vec<ThumbnailSource>,
    index: usize,
}

impl ThumbnailCursor {
    pub fn new(chain: Vec<ThumbnailSource>) -> Self {
        Self { chain, index: 0 }
    }

    pub fn for_template(template: &Template, config: &AppConfig) -> Self {
        Self::new(thumbnail_chain(template, config))
    }

    pub fn current(&self) -> Option<&ThumbnailSource> {
        self.chain.get(self.index)
    }

    /// 当前图片加载失败，前进一步；已在末尾时不动
    pub fn advance(&mut self) -> Option<&ThumbnailSource> {
        if self.index + 1 < self.chain.len() {
            self.index += 1;
        }
        self.current()
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.current(), Some(ThumbnailSource::Placeholder { .. }) | None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(id: &str, thumbnail: Option<&str>, local: Option<&str>) -> Template {
        Template {
            id: id.to_string(),
            name: format!("周繁漪定妆照{}", id),
            thumbnail_url: thumbnail.map(String::from),
            local_thumbnail: local.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_chain_local_remote_placeholder() {
        let config = AppConfig::default();
        let t = template("1", Some("https://oss.test/t1.jpg"), None);
        let chain = thumbnail_chain(&t, &config);

        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0], ThumbnailSource::Local("/templates/template1.jpg".into()));
        assert_eq!(chain[1], ThumbnailSource::Remote("https://oss.test/t1.jpg".into()));
        assert!(matches!(chain[2], ThumbnailSource::Placeholder { ref name, .. } if name == "周繁漪定妆照1"));
    }

    #[test]
    fn test_chain_skips_placeholder_domain() {
        let config = AppConfig::default();
        let t = template("2", Some("https://example.com/templates/fanyi2_thumb.jpg"), None);
        let chain = thumbnail_chain(&t, &config);

        assert_eq!(chain.len(), 2);
        assert!(matches!(chain[0], ThumbnailSource::Local(_)));
        assert!(matches!(chain[1], ThumbnailSource::Placeholder { .. }));
    }

    #[test]
    fn test_placeholder_domain_matches_host_only() {
        let config = AppConfig::default();
        assert!(is_placeholder_url("https://example.com/t.jpg", &config));
        assert!(is_placeholder_url("https://cdn.EXAMPLE.com/t.jpg", &config));
        assert!(!is_placeholder_url("https://notexample.com/t.jpg", &config));
        assert!(!is_placeholder_url("https://oss.test/t.jpg?ref=example.com", &config));
        assert!(!is_placeholder_url("/templates/example.com.jpg", &config));
    }

    #[test]
    fn test_chain_keeps_remote_on_lookalike_domain() {
        let config = AppConfig::default();
        let t = template("6", Some("https://notexample.com/t6.jpg"), None);
        let chain = thumbnail_chain(&t, &config);

        assert_eq!(chain.len(), 3);
        assert_eq!(chain[1], ThumbnailSource::Remote("https://notexample.com/t6.jpg".into()));
    }

    #[test]
    fn test_chain_prefers_explicit_local_and_dedups_remote() {
        let config = AppConfig::default();
        let t = template("3", Some("/static/t3.jpg"), Some("/static/t3.jpg"));
        let chain = thumbnail_chain(&t, &config);

        assert_eq!(chain[0], ThumbnailSource::Local("/static/t3.jpg".into()));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_chain_without_remote() {
        let config = AppConfig::default();
        let chain = thumbnail_chain(&template("4", None, None), &config);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].src(), Some("/templates/template4.jpg"));
        assert_eq!(chain[1].src(), None);
    }

    #[test]
    fn test_cursor_advances_and_stops_at_placeholder() {
        let config = AppConfig::default();
        let t = template("5", Some("https://oss.test/t5.jpg"), None);
        let mut cursor = ThumbnailCursor::for_template(&t, &config);

        assert_eq!(cursor.current().and_then(|s| s.src()), Some("/templates/template5.jpg"));
        assert!(!cursor.is_placeholder());

        cursor.advance();
        assert_eq!(cursor.current().and_then(|s| s.src()), Some("https://oss.test/t5.jpg"));

        cursor.advance();
        assert!(cursor.is_placeholder());

        cursor.advance();
        assert!(cursor.is_placeholder());
    }

    #[test]
    fn test_custom_thumbnail_dir() {
        let config = AppConfig {
            local_thumbnail_dir: "/static/thumbs/".into(),
            ..Default::default()
        };
        assert_eq!(
            local_thumbnail_path(&template("7", None, None), &config),
            "/static/thumbs/template7.jpg"
        );
    }
}
