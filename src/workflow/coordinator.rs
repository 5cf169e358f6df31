//! 提交协调 - 流程层
//!
//! 核心职责：定义"一次提交"的完整流程
//!
//! 流程顺序：
//! 1. 校验答案完整性（不完整则留在答题阶段）
//! 2. 答题区 → 等待区
//! 3. 同时启动倒计时任务和请求任务
//! 4. 两个任务中后完成的那个触发揭晓

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, SubmissionError};
use crate::infrastructure::Clock;
use crate::models::{ClassificationResult, QuizForm};
use crate::presentation::{QuizView, RenderedResult};
use crate::services::Classifier;
use crate::utils::logging::log_revealed;
use crate::workflow::barrier::Signal;
use crate::workflow::submission_ctx::SubmissionCtx;

/// 页面阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Questioning,
    Waiting,
    Revealed,
}

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 答案不完整，仍在答题阶段
    Incomplete { answered: usize, total: usize },
    /// 结果已揭晓
    Revealed(RenderedResult),
}

/// 协调器参数
#[derive(Debug, Clone)]
pub struct CoordinatorSettings {
    pub countdown_secs: u32,
    pub tick: Duration,
    pub fade: Duration,
    pub share_url: String,
    pub default_image: String,
}

impl From<&Config> for CoordinatorSettings {
    fn from(config: &Config) -> Self {
        Self {
            countdown_secs: config.countdown_secs,
            tick: config.tick(),
            fade: config.fade(),
            share_url: config.share_url.clone(),
            default_image: config.default_image.clone(),
        }
    }
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// 提交协调器
///
/// - 持有阶段状态机（答题 → 等待 → 揭晓，不可回退）
/// - 每次提交新建 `SubmissionCtx`
/// - 只依赖能力（classifier / clock / view）
pub struct SubmissionCoordinator {
    classifier: Arc<dyn Classifier>,
    clock: Arc<dyn Clock>,
    view: Arc<dyn QuizView>,
    settings: CoordinatorSettings,
    phase: Phase,
    attempts: u64,
}

impl SubmissionCoordinator {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        clock: Arc<dyn Clock>,
        view: Arc<dyn QuizView>,
        settings: CoordinatorSettings,
    ) -> Self {
        Self {
            classifier,
            clock,
            view,
            settings,
            phase: Phase::Questioning,
            attempts: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 处理表单提交
    pub async fn on_submit(&mut self, form: &QuizForm) -> AppResult<SubmitOutcome> {
        if self.phase != Phase::Questioning {
            return Err(SubmissionError::NotQuestioning { phase: self.phase }.into());
        }

        // ========== 1. 完整性校验 ==========
        let answers = form.answer_set();
        let total = form.group_count();
        if answers.len() < total {
            info!("✋ 答案不完整: {}/{}，留在答题阶段", answers.len(), total);
            self.view.notify_incomplete(answers.len(), total);
            return Ok(SubmitOutcome::Incomplete {
                answered: answers.len(),
                total,
            });
        }

        self.attempts += 1;

        // ========== 2. 答题区 → 等待区 ==========
        self.view.hide_questionnaire();
        self.clock.sleep(self.settings.fade).await;
        self.phase = Phase::Waiting;
        self.view.show_waiting(self.settings.countdown_secs);

        // ========== 3. 两个并发任务 ==========
        let (reveal_tx, mut reveal_rx) = oneshot::channel();
        let ctx = Arc::new(SubmissionCtx::new(
            self.attempts,
            answers,
            self.settings.countdown_secs,
            self.reveal_callback(reveal_tx),
        ));
        info!("{} 📨 进入等待阶段，开始倒计时和分类请求", ctx);

        let countdown = tokio::spawn(run_countdown(
            Arc::clone(&ctx),
            Arc::clone(&self.clock),
            Arc::clone(&self.view),
            self.settings.tick,
        ));
        let request = tokio::spawn(run_request(Arc::clone(&ctx), Arc::clone(&self.classifier)));

        // ========== 4. 等两个任务都跑完 ==========
        let (countdown, request) = futures::future::join(countdown, request).await;
        countdown.map_err(|e| AppError::task_failed("倒计时", e))?;
        request.map_err(|e| AppError::task_failed("分类请求", e))?;

        // 两个任务都结束后屏障必然已经触发
        let rendered = reveal_rx
            .try_recv()
            .map_err(|_| SubmissionError::RevealMissing)?;
        self.phase = Phase::Revealed;

        Ok(SubmitOutcome::Revealed(rendered))
    }

    /// 揭晓回调：渲染结果区并把渲染结果交回给协调器
    fn reveal_callback(
        &self,
        reveal_tx: oneshot::Sender<RenderedResult>,
    ) -> impl FnOnce(ClassificationResult, Duration) + Send + 'static {
        let view = Arc::clone(&self.view);
        let default_image = self.settings.default_image.clone();
        let share_url = self.settings.share_url.clone();

        move |result: ClassificationResult, waited: Duration| {
            let rendered = RenderedResult::render(&result, &default_image, &share_url);
            view.show_result(&rendered);
            log_revealed(&rendered.subject, waited.as_millis());
            let _ = reveal_tx.send(rendered);
        }
    }
}

/// 倒计时任务：每跳更新一次显示，归零后通知屏障
async fn run_countdown(
    ctx: Arc<SubmissionCtx>,
    clock: Arc<dyn Clock>,
    view: Arc<dyn QuizView>,
    tick: Duration,
) {
    while !ctx.countdown_finished() {
        clock.sleep(tick).await;
        let remaining = ctx.tick_countdown();
        debug!("{} ⏱️ 倒计时: {}", ctx, remaining);
        view.update_countdown(remaining);
    }

    if ctx.signal_countdown() == Signal::Pending {
        info!("{} ⏳ 倒计时结束，等待分类结果...", ctx);
    }
}

/// 请求任务：恰好产出一个分类结果，失败时使用兜底结果
async fn run_request(ctx: Arc<SubmissionCtx>, classifier: Arc<dyn Classifier>) {
    let result = match classifier.classify(&ctx.answers).await {
        Ok(result) => {
            info!("{} ✓ 分类完成: {}", ctx, result.subject);
            result
        }
        Err(e) => {
            warn!("{} ⚠️ 分类请求失败，使用兜底结果: {}", ctx, e);
            ClassificationResult::fallback()
        }
    };

    if ctx.signal_result(result) == Signal::Pending {
        info!("{} ⏳ 分类结果已就绪，等待倒计时结束...", ctx);
    }
}
