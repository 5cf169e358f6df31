//! 分享服务 - 业务能力层
//!
//! 生成社交分享链接，执行"复制链接"动作

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::infrastructure::{Clipboard, Clock};
use crate::models::ClassificationResult;
use crate::presentation::QuizView;

/// 复制成功提示
pub const COPY_OK_MESSAGE: &str = "¡Enlace copiado!";
/// 复制失败提示
pub const COPY_FAILED_MESSAGE: &str = "No se pudo copiar el enlace.";

/// 结果页上的分享链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub text: String,
    pub twitter: String,
    pub facebook: String,
    /// 复制按钮写入剪贴板的地址
    pub page_url: String,
}

impl ShareLinks {
    /// 根据结果生成分享链接
    pub fn build(result: &ClassificationResult, share_url: &str) -> Self {
        let text = format!(
            "¡Soy un {}! \"{}\" Descubre qué animal eres tú 👉 {}",
            result.subject, result.motto, share_url
        );
        let twitter = format!(
            "https://twitter.com/intent/tweet?text={}",
            urlencoding::encode(&text)
        );
        let facebook = format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            urlencoding::encode(share_url)
        );

        Self {
            text,
            twitter,
            facebook,
            page_url: share_url.to_string(),
        }
    }
}

/// "复制链接" 动作
///
/// 独立于揭晓流程，可以重复执行
pub struct CopyLinkAction {
    clipboard: Arc<dyn Clipboard>,
    clock: Arc<dyn Clock>,
    view: Arc<dyn QuizView>,
    feedback_duration: Duration,
    /// 每次显示提示加一；清除定时器只清除自己那一次的提示
    generation: Arc<AtomicU64>,
}

impl CopyLinkAction {
    pub fn new(
        clipboard: Arc<dyn Clipboard>,
        clock: Arc<dyn Clock>,
        view: Arc<dyn QuizView>,
        feedback_duration: Duration,
    ) -> Self {
        Self {
            clipboard,
            clock,
            view,
            feedback_duration,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// 复制链接并显示提示
    ///
    /// 成功时提示在 `feedback_duration` 后自动清除；失败时提示保留，不重试
    pub async fn run(&self, links: &ShareLinks) -> bool {
        let result = self.clipboard.write_text(&links.page_url).await;
        let shown = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        match result {
            Ok(()) => {
                info!("📋 已复制分享链接");
                self.view.show_copy_feedback(COPY_OK_MESSAGE);

                let clock = Arc::clone(&self.clock);
                let view = Arc::clone(&self.view);
                let generation = Arc::clone(&self.generation);
                let duration = self.feedback_duration;
                tokio::spawn(async move {
                    clock.sleep(duration).await;
                    // 之后又显示过新提示时不清除
                    if generation.load(Ordering::SeqCst) == shown {
                        view.clear_copy_feedback();
                    }
                });
                true
            }
            Err(e) => {
                warn!("⚠️ 复制链接失败: {}", e);
                self.view.show_copy_feedback(COPY_FAILED_MESSAGE);
                false
            }
        }
    }
}
