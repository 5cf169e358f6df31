use crate::models::{QuestionGroup, QuizForm};
use crate::presentation::render::RenderedResult;

/// 问卷页面
///
/// 所有方法都是同步的、只做显示；实现方需要自己处理内部可变性
pub trait QuizView: Send + Sync {
    /// 显示答题区
    fn show_questionnaire(&self, form: &QuizForm);
    /// 显示一道题（`position` 从 1 开始）
    fn show_question(&self, group: &QuestionGroup, position: usize, total: usize);
    /// 隐藏答题区
    fn hide_questionnaire(&self);
    /// 显示等待区（广告）
    fn show_waiting(&self, seconds: u32);
    /// 更新倒计时数字
    fn update_countdown(&self, remaining: u32);
    /// 隐藏等待区并显示结果
    fn show_result(&self, result: &RenderedResult);
    /// 提示答案不完整
    fn notify_incomplete(&self, answered: usize, total: usize);
    fn show_copy_feedback(&self, message: &str);
    fn clear_copy_feedback(&self);
}
