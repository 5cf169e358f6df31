use crate::models::ClassificationResult;
use crate::services::ShareLinks;

/// 结果区要显示的内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    pub subject: String,
    pub description: String,
    /// 带引号的座右铭
    pub motto: String,
    pub image: String,
    pub share: ShareLinks,
    /// 是否为本地兜底结果
    pub is_fallback: bool,
}

impl RenderedResult {
    /// 把分类结果填进结果区
    ///
    /// 没有图片时沿用默认图片
    pub fn render(result: &ClassificationResult, default_image: &str, share_url: &str) -> Self {
        Self {
            subject: result.subject.clone(),
            description: result.description.clone(),
            motto: format!("\"{}\"", result.motto),
            image: result.image().unwrap_or(default_image).to_string(),
            share: ShareLinks::build(result, share_url),
            is_fallback: result.is_fallback(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_quotes_motto_and_keeps_default_image() {
        let result = ClassificationResult {
            subject: "Fox".to_string(),
            description: "Clever".to_string(),
            motto: "Adapt or perish".to_string(),
            image: None,
        };
        let rendered = RenderedResult::render(&result, "img/default.png", "https://x.test");
        assert_eq!(rendered.subject, "Fox");
        assert_eq!(rendered.description, "Clever");
        assert_eq!(rendered.motto, "\"Adapt or perish\"");
        assert_eq!(rendered.image, "img/default.png");
        assert!(!rendered.is_fallback);
    }

    #[test]
    fn test_render_uses_response_image() {
        let mut result = ClassificationResult::fallback();
        result.image = Some("error".to_string());
        let rendered = RenderedResult::render(&result, "img/default.png", "https://x.test");
        assert_eq!(rendered.image, "error");
    }
}
