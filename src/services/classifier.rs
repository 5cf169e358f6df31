//! 分类服务 - 业务能力层
//!
//! 只负责"把答案发给后端拿到动物"，失败时的兜底由流程层决定
//!
//! ## 接口约定
//! - `POST {classify_url}`，`Content-Type: application/json`
//! - 请求体：`{"respuestas": {"q1": "A", ...}}`
//! - 响应体：`{"animal", "descripcion", "lema", "imagen"?}`

use async_trait::async_trait;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::{AnswerSet, ClassificationResult, ClassifyRequest};

/// 分类能力
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, answers: &AnswerSet) -> AppResult<ClassificationResult>;
}

/// 基于 HTTP 的分类服务
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.classify_url.clone())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, answers: &AnswerSet) -> AppResult<ClassificationResult> {
        let body = ClassifyRequest {
            respuestas: answers,
        };
        debug!("发送分类请求: {} ({} 个答案)", self.endpoint, answers.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadStatus {
                endpoint: self.endpoint.clone(),
                status,
            }
            .into());
        }

        let result = response
            .json::<ClassificationResult>()
            .await
            .map_err(|source| ApiError::BodyParseFailed {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        debug!("分类结果: {:?}", result);
        Ok(result)
    }
}
