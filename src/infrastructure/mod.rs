//! 基础设施层
//!
//! 持有时钟、剪贴板这类外部资源，只暴露能力，不认识问卷和流程

pub mod clipboard;
pub mod clock;

pub use clipboard::{Clipboard, SystemClipboard};
pub use clock::{Clock, TokioClock};
