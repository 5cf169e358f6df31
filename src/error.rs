use thiserror::Error;

use crate::workflow::Phase;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 分类接口错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 问卷加载/校验错误
    #[error("问卷错误: {0}")]
    Quiz(#[from] QuizError),
    /// 提交流程错误
    #[error("提交错误: {0}")]
    Submission(#[from] SubmissionError),
    /// 剪贴板错误
    #[error("剪贴板错误: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// 分类接口调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 接口返回非 2xx 状态
    #[error("API返回错误状态 ({endpoint}): {status}")]
    BadStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },
    /// 响应体解析失败
    #[error("响应解析失败 ({endpoint}): {source}")]
    BodyParseFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// 问卷错误
#[derive(Debug, Error)]
pub enum QuizError {
    /// 问卷没有任何题目
    #[error("问卷中没有题目")]
    Empty,
    /// 题目ID重复
    #[error("题目ID重复: {id}")]
    DuplicateQuestion { id: String },
    /// 选项不足
    #[error("题目 {id} 至少需要两个选项")]
    TooFewOptions { id: String },
    /// 选项值重复
    #[error("题目 {id} 的选项值重复: {value}")]
    DuplicateOption { id: String, value: String },
    /// 题目不存在
    #[error("题目不存在: {id}")]
    UnknownQuestion { id: String },
    /// 选项不存在
    #[error("题目 {id} 没有选项 {value}")]
    UnknownOption { id: String, value: String },
    /// TOML 解析失败
    #[error("TOML解析失败: {0}")]
    TomlParseFailed(#[from] toml::de::Error),
}

/// 提交流程错误
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// 已离开答题阶段，不能再次提交
    #[error("当前阶段为 {phase:?}，只能在答题阶段提交")]
    NotQuestioning { phase: Phase },
    /// 后台任务异常退出
    #[error("{task} 任务异常退出: {source}")]
    TaskFailed {
        task: &'static str,
        #[source]
        source: tokio::task::JoinError,
    },
    /// 两个任务都结束了但结果没有揭晓
    #[error("结果未能揭晓")]
    RevealMissing,
}

/// 剪贴板错误
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// 没有可用的剪贴板程序
    #[error("没有可用的剪贴板程序 (已尝试: {tried})")]
    Unavailable { tried: String },
    /// 剪贴板程序执行失败
    #[error("剪贴板程序 {program} 执行失败: {source}")]
    CommandFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建任务失败错误
    pub fn task_failed(task: &'static str, source: tokio::task::JoinError) -> Self {
        AppError::Submission(SubmissionError::TaskFailed { task, source })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
