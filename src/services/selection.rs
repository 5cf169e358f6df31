//! 选中标记服务 - 业务能力层
//!
//! 只负责"每组最多一个已选中标记"，不影响答案本身

use tracing::debug;

use crate::error::QuizError;
use crate::models::form::{InputRef, QuizForm};

/// 选中标记追踪器
///
/// 职责：
/// - 选项变化时清除同组其他选项的标记
/// - 只给当前勾选的选项加标记
/// - 答案集合始终从原始勾选状态读取，与标记无关
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionTracker;

impl SelectionTracker {
    pub fn new() -> Self {
        Self
    }

    /// 处理一次选项变化
    pub fn on_option_changed(
        &self,
        form: &mut QuizForm,
        changed: &InputRef,
    ) -> Result<(), QuizError> {
        form.clear_marks(&changed.group)?;

        let now_checked = form.input(changed).map(|i| i.is_checked()).unwrap_or(false);
        if now_checked {
            form.set_marked(changed)?;
        }

        debug!("选项变化: {} (勾选: {})", changed, now_checked);
        Ok(())
    }

    /// 勾选并同步标记
    pub fn select(&self, form: &mut QuizForm, group: &str, value: &str) -> Result<InputRef, QuizError> {
        let changed = form.check(group, value)?;
        self.on_option_changed(form, &changed)?;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quiz;

    fn form() -> QuizForm {
        QuizForm::from_quiz(&Quiz::builtin().unwrap())
    }

    #[test]
    fn test_marker_follows_most_recent_check() {
        let tracker = SelectionTracker::new();
        let mut form = form();

        let sequence = [("q1", "A"), ("q2", "B"), ("q1", "D"), ("q1", "B"), ("q2", "C")];
        for (group, value) in sequence {
            tracker.select(&mut form, group, value).unwrap();
        }

        assert_eq!(form.marked_in("q1"), vec!["B"]);
        assert_eq!(form.marked_in("q2"), vec!["C"]);
        assert!(form.marked_in("q3").is_empty());

        for group in form.groups() {
            let marked: Vec<_> = group.inputs().iter().filter(|i| i.is_marked()).collect();
            assert!(marked.len() <= 1);
            if let Some(input) = marked.first() {
                assert!(input.is_checked());
            }
        }
    }

    #[test]
    fn test_reselecting_same_option_is_noop() {
        let tracker = SelectionTracker::new();
        let mut form = form();

        tracker.select(&mut form, "q1", "C").unwrap();
        let before = form.clone();
        tracker.select(&mut form, "q1", "C").unwrap();

        assert_eq!(form, before);
    }

    #[test]
    fn test_change_event_on_unchecked_input_clears_group() {
        let tracker = SelectionTracker::new();
        let mut form = form();

        tracker.select(&mut form, "q1", "A").unwrap();
        // B 从未被勾选，收到它的变化事件时只清除标记
        tracker
            .on_option_changed(&mut form, &InputRef::new("q1", "B"))
            .unwrap();

        assert!(form.marked_in("q1").is_empty());
        assert_eq!(form.answer_set().get("q1"), Some("A"));
    }

    #[test]
    fn test_unknown_group_is_error() {
        let tracker = SelectionTracker::new();
        let mut form = form();
        assert!(tracker
            .on_option_changed(&mut form, &InputRef::new("nope", "A"))
            .is_err());
    }
}
