//! 广告倒计时

/// 倒计时状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    finished: bool,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            finished: seconds == 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// 走一跳，返回剩余秒数
    ///
    /// 已经结束时保持为 0
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.finished = true;
        }
        self.remaining
    }
}
