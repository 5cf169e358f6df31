use serde::{Deserialize, Serialize};

/// 分类结果
///
/// 对应接口返回的 `{"animal", "descripcion", "lema", "imagen"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// 动物名称
    #[serde(rename = "animal")]
    pub subject: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// 座右铭
    #[serde(rename = "lema")]
    pub motto: String,
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ClassificationResult {
    /// 请求失败时在本地生成的兜底结果
    pub fn fallback() -> Self {
        Self {
            subject: "Error".to_string(),
            description: "Hubo un error analizando tus respuestas.".to_string(),
            motto: "La IA se fue a dormir.".to_string(),
            image: Some("error".to_string()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }

    /// 有效图片：空字符串视为没有图片
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_image() {
        let result: ClassificationResult = serde_json::from_str(
            r#"{"animal":"Fox","descripcion":"Clever","lema":"Adapt or perish"}"#,
        )
        .unwrap();
        assert_eq!(result.subject, "Fox");
        assert_eq!(result.description, "Clever");
        assert_eq!(result.motto, "Adapt or perish");
        assert_eq!(result.image(), None);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let parsed =
            serde_json::from_str::<ClassificationResult>(r#"{"animal":"Fox","lema":"x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_fallback_has_no_empty_fields() {
        let fallback = ClassificationResult::fallback();
        assert_eq!(fallback.subject, "Error");
        assert!(!fallback.description.is_empty());
        assert!(!fallback.motto.is_empty());
        assert!(fallback.is_fallback());
        assert_eq!(fallback.image(), Some("error"));
    }

    #[test]
    fn test_blank_image_is_ignored() {
        let mut result = ClassificationResult::fallback();
        result.image = Some("  ".to_string());
        assert_eq!(result.image(), None);
    }
}
