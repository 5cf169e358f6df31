//! # ¿Qué animal eres?
//!
//! 一个终端版的"你是什么动物"问卷客户端
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有时钟、剪贴板，只暴露能力
//!
//! ### ② 业务能力层（Services）
//! - `SelectionTracker` - 每组最多一个"已选中"标记
//! - `HttpClassifier` - 把答案发给分类接口
//! - `ShareLinks` / `CopyLinkAction` - 分享链接与复制
//!
//! ### ③ 流程层（Workflow）
//! - `SubmissionCoordinator` - 答题 → 等待 → 揭晓 状态机
//! - `SubmissionCtx` - 每次提交的上下文（答案、倒计时、屏障）
//! - `RevealBarrier` - 倒计时和分类结果的两路汇合
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 终端答题会话
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod presentation;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerSet, ClassificationResult, Quiz, QuizForm};
pub use orchestrator::App;
pub use workflow::{Phase, RevealBarrier, SubmissionCoordinator, SubmitOutcome};
