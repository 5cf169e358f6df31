//! 问卷表单
//!
//! 终端里的"页面"：每道题一组互斥选项，记录原始勾选状态和"已选中"标记

use std::fmt::Display;

use crate::error::QuizError;
use crate::models::answer::AnswerSet;
use crate::models::question::Quiz;

/// 单个选项输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceInput {
    pub value: String,
    pub label: String,
    checked: bool,
    marked: bool,
}

impl ChoiceInput {
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// 是否带有"已选中"视觉标记
    pub fn is_marked(&self) -> bool {
        self.marked
    }
}

/// 一道题对应的选项组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionGroup {
    pub id: String,
    pub prompt: String,
    inputs: Vec<ChoiceInput>,
}

impl QuestionGroup {
    pub fn inputs(&self) -> &[ChoiceInput] {
        &self.inputs
    }

    pub fn checked_value(&self) -> Option<&str> {
        self.inputs
            .iter()
            .find(|i| i.checked)
            .map(|i| i.value.as_str())
    }

    pub fn is_answered(&self) -> bool {
        self.checked_value().is_some()
    }
}

/// 指向某个选项输入
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputRef {
    pub group: String,
    pub value: String,
}

impl InputRef {
    pub fn new(group: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            value: value.into(),
        }
    }
}

impl Display for InputRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.group, self.value)
    }
}

/// 问卷表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizForm {
    title: String,
    groups: Vec<QuestionGroup>,
}

impl QuizForm {
    pub fn from_quiz(quiz: &Quiz) -> Self {
        let groups = quiz
            .questions
            .iter()
            .map(|q| QuestionGroup {
                id: q.id.clone(),
                prompt: q.prompt.clone(),
                inputs: q
                    .options
                    .iter()
                    .map(|o| ChoiceInput {
                        value: o.value.clone(),
                        label: o.label.clone(),
                        checked: false,
                        marked: false,
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: quiz.title.clone(),
            groups,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn groups(&self) -> &[QuestionGroup] {
        &self.groups
    }

    /// 页面上的题目组数量（完整性校验的基准）
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn group(&self, id: &str) -> Option<&QuestionGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// 尚未作答的题目组
    pub fn unanswered(&self) -> impl Iterator<Item = &QuestionGroup> {
        self.groups.iter().filter(|g| !g.is_answered())
    }

    /// 勾选一个选项（单选语义：同组其他选项取消勾选）
    ///
    /// 返回发生变化的输入，交给 `SelectionTracker` 处理标记
    pub fn check(&mut self, group: &str, value: &str) -> Result<InputRef, QuizError> {
        let target = self.group_mut(group)?;
        if !target.inputs.iter().any(|i| i.value == value) {
            return Err(QuizError::UnknownOption {
                id: group.to_string(),
                value: value.to_string(),
            });
        }
        for input in target.inputs.iter_mut() {
            input.checked = input.value == value;
        }
        Ok(InputRef::new(group, value))
    }

    pub fn input(&self, input: &InputRef) -> Option<&ChoiceInput> {
        self.group(&input.group)
            .and_then(|g| g.inputs.iter().find(|i| i.value == input.value))
    }

    /// 组内带标记的选项值
    pub fn marked_in(&self, group: &str) -> Vec<&str> {
        self.group(group)
            .map(|g| {
                g.inputs
                    .iter()
                    .filter(|i| i.marked)
                    .map(|i| i.value.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 从原始勾选状态构建答案集合
    pub fn answer_set(&self) -> AnswerSet {
        self.groups
            .iter()
            .filter_map(|g| g.checked_value().map(|v| (g.id.clone(), v.to_string())))
            .collect()
    }

    pub(crate) fn clear_marks(&mut self, group: &str) -> Result<(), QuizError> {
        for input in self.group_mut(group)?.inputs.iter_mut() {
            input.marked = false;
        }
        Ok(())
    }

    pub(crate) fn set_marked(&mut self, input: &InputRef) -> Result<(), QuizError> {
        let target = self
            .group_mut(&input.group)?
            .inputs
            .iter_mut()
            .find(|i| i.value == input.value)
            .ok_or_else(|| QuizError::UnknownOption {
                id: input.group.clone(),
                value: input.value.clone(),
            })?;
        target.marked = true;
        Ok(())
    }

    fn group_mut(&mut self, id: &str) -> Result<&mut QuestionGroup, QuizError> {
        self.groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| QuizError::UnknownQuestion { id: id.to_string() })
    }
}
