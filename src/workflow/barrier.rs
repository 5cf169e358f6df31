//! 揭晓屏障
//!
//! 两个来源（倒计时、分类结果）都到齐后，揭晓回调恰好执行一次

use std::fmt::Display;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

/// 信号来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Countdown,
    Classification,
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Countdown => write!(f, "倒计时"),
            Source::Classification => write!(f, "分类结果"),
        }
    }
}

/// 一次信号的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// 还在等另一个来源
    Pending,
    /// 这次信号触发了揭晓
    Fired,
    /// 同一来源重复发信号，已忽略
    Duplicate,
}

type RevealFn<T> = Box<dyn FnOnce(T) + Send>;

struct BarrierState<T> {
    countdown_done: bool,
    value: Option<T>,
    value_received: bool,
    on_reveal: Option<RevealFn<T>>,
}

/// 两路汇合屏障
///
/// 第二个到达的信号触发回调；回调在锁外执行
pub struct RevealBarrier<T> {
    state: Mutex<BarrierState<T>>,
}

impl<T: Send> RevealBarrier<T> {
    pub fn new(on_reveal: impl FnOnce(T) + Send + 'static) -> Self {
        Self {
            state: Mutex::new(BarrierState {
                countdown_done: false,
                value: None,
                value_received: false,
                on_reveal: Some(Box::new(on_reveal)),
            }),
        }
    }

    /// 倒计时结束
    pub fn countdown_finished(&self) -> Signal {
        let ready = {
            let mut state = self.lock();
            if state.countdown_done {
                return self.duplicate(Source::Countdown);
            }
            state.countdown_done = true;
            Self::take_ready(&mut state)
        };
        self.fire(Source::Countdown, ready)
    }

    /// 分类结果到达
    pub fn result_ready(&self, value: T) -> Signal {
        let ready = {
            let mut state = self.lock();
            if state.value_received {
                return self.duplicate(Source::Classification);
            }
            state.value_received = true;
            state.value = Some(value);
            Self::take_ready(&mut state)
        };
        self.fire(Source::Classification, ready)
    }

    /// 揭晓是否已经发生
    pub fn has_fired(&self) -> bool {
        self.lock().on_reveal.is_none()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BarrierState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 两路都到齐时取出回调和结果
    fn take_ready(state: &mut BarrierState<T>) -> Option<(RevealFn<T>, T)> {
        if !state.countdown_done || state.value.is_none() {
            return None;
        }
        match (state.on_reveal.take(), state.value.take()) {
            (Some(on_reveal), Some(value)) => Some((on_reveal, value)),
            _ => None,
        }
    }

    fn fire(&self, source: Source, ready: Option<(RevealFn<T>, T)>) -> Signal {
        match ready {
            Some((on_reveal, value)) => {
                debug!("{} 最后到达，触发揭晓", source);
                on_reveal(value);
                Signal::Fired
            }
            None => {
                debug!("{} 已到达，等待另一路", source);
                Signal::Pending
            }
        }
    }

    fn duplicate(&self, source: Source) -> Signal {
        warn!("⚠️ {} 重复发出完成信号，已忽略", source);
        Signal::Duplicate
    }
}
