//! 时钟 - 基础设施层
//!
//! 倒计时和淡出延迟都通过这里等待，测试可以换成假的时钟

use async_trait::async_trait;
use std::time::Duration;

/// 时钟能力
#[async_trait]
pub trait Clock: Send + Sync {
    /// 挂起当前任务 `duration` 时长
    async fn sleep(&self, duration: Duration);
}

/// 基于 tokio 定时器的时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            // 仍然让出一次，保证另一个任务有机会先跑
            tokio::task::yield_now().await;
            return;
        }
        tokio::time::sleep(duration).await;
    }
}
