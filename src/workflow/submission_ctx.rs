//! 提交上下文
//!
//! 每次提交新建一个，持有本次的答案、倒计时状态和揭晓屏障，不跨提交共享

use std::fmt::Display;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::models::{AnswerSet, ClassificationResult};
use crate::workflow::barrier::{RevealBarrier, Signal};
use crate::workflow::countdown::Countdown;

/// 提交上下文
pub struct SubmissionCtx {
    /// 第几次提交（仅用于日志显示）
    pub attempt: u64,
    pub answers: AnswerSet,
    countdown: Mutex<Countdown>,
    barrier: RevealBarrier<ClassificationResult>,
}

impl SubmissionCtx {
    pub fn new(
        attempt: u64,
        answers: AnswerSet,
        countdown_secs: u32,
        on_reveal: impl FnOnce(ClassificationResult, Duration) + Send + 'static,
    ) -> Self {
        // 揭晓回调额外收到从提交开始的等待时长
        let started_at = Instant::now();
        Self {
            attempt,
            answers,
            countdown: Mutex::new(Countdown::new(countdown_secs)),
            barrier: RevealBarrier::new(move |result| on_reveal(result, started_at.elapsed())),
        }
    }

    pub fn countdown_finished(&self) -> bool {
        self.countdown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_finished()
    }

    /// 倒计时走一跳，返回剩余秒数
    pub fn tick_countdown(&self) -> u32 {
        self.countdown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .tick()
    }

    pub fn signal_countdown(&self) -> Signal {
        self.barrier.countdown_finished()
    }

    pub fn signal_result(&self, result: ClassificationResult) -> Signal {
        self.barrier.result_ready(result)
    }

    pub fn is_revealed(&self) -> bool {
        self.barrier.has_fired()
    }
}

impl Display for SubmissionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[提交 #{} 答案数#{}]", self.attempt, self.answers.len())
    }
}
