//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 持有终端、HTTP 客户端、剪贴板等资源，把一次完整的答题会话串起来：
//!
//! ```text
//! App (终端输入循环)
//!     ↓
//! workflow::SubmissionCoordinator (一次提交)
//!     ↓
//! services (能力层：classifier / selection / share)
//!     ↓
//! infrastructure (基础设施：clock / clipboard)
//! ```

pub mod app;

pub use app::App;
