use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// 内置问卷（与后端的八道题一致）
const BUILTIN_QUIZ: &str = include_str!("../../quiz/que_animal_eres.toml");

/// 单个选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// 提交给后端的选项值（如 "A"）
    pub value: String,
    /// 展示给用户的文字
    pub label: String,
}

/// 单道题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// 按用户输入查找选项
    ///
    /// 支持选项值（不区分大小写）或从 1 开始的序号
    pub fn resolve_option(&self, input: &str) -> Option<&AnswerOption> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if let Some(option) = self
            .options
            .iter()
            .find(|o| o.value.eq_ignore_ascii_case(input))
        {
            return Some(option);
        }
        input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.options.get(idx))
    }
}

/// 问卷
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// 内置问卷
    pub fn builtin() -> Result<Self, QuizError> {
        Self::from_toml_str(BUILTIN_QUIZ)
    }

    /// 从 TOML 文本解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self, QuizError> {
        let quiz: Quiz = toml::from_str(content)?;
        quiz.validate()?;
        Ok(quiz)
    }

    /// 校验问卷结构
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::Empty);
        }

        let mut ids = HashSet::new();
        for question in &self.questions {
            if !ids.insert(question.id.as_str()) {
                return Err(QuizError::DuplicateQuestion {
                    id: question.id.clone(),
                });
            }
            if question.options.len() < 2 {
                return Err(QuizError::TooFewOptions {
                    id: question.id.clone(),
                });
            }
            let mut values = HashSet::new();
            for option in &question.options {
                if !values.insert(option.value.as_str()) {
                    return Err(QuizError::DuplicateOption {
                        id: question.id.clone(),
                        value: option.value.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
