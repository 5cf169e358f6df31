#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use que_animal_eres::error::{ApiError, AppResult};
use que_animal_eres::infrastructure::{Clipboard, Clock, TokioClock};
use que_animal_eres::models::{AnswerSet, ClassificationResult, Quiz, QuestionGroup, QuizForm};
use que_animal_eres::presentation::{QuizView, RenderedResult};
use que_animal_eres::services::Classifier;
use que_animal_eres::workflow::{CoordinatorSettings, SubmissionCoordinator};
use que_animal_eres::error::ClipboardError;
use tokio::time::Instant;

/// 页面事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    HideQuestionnaire,
    Waiting(u32),
    Countdown(u32),
    Result(RenderedResult),
    Incomplete { answered: usize, total: usize },
    CopyFeedback(String),
    CopyFeedbackCleared,
}

/// 记录所有显示事件及发生时间
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<(ViewEvent, Instant)>>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().iter().map(|(e, _)| e.clone()).collect()
    }

    pub fn timed_events(&self) -> Vec<(ViewEvent, Instant)> {
        self.events.lock().unwrap().clone()
    }

    pub fn results(&self) -> Vec<(RenderedResult, Instant)> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(e, at)| match e {
                ViewEvent::Result(r) => Some((r.clone(), *at)),
                _ => None,
            })
            .collect()
    }

    pub fn countdown_values(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Countdown(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push((event, Instant::now()));
    }
}

impl QuizView for RecordingView {
    fn show_questionnaire(&self, _form: &QuizForm) {}

    fn show_question(&self, _group: &QuestionGroup, _position: usize, _total: usize) {}

    fn hide_questionnaire(&self) {
        self.push(ViewEvent::HideQuestionnaire);
    }

    fn show_waiting(&self, seconds: u32) {
        self.push(ViewEvent::Waiting(seconds));
    }

    fn update_countdown(&self, remaining: u32) {
        self.push(ViewEvent::Countdown(remaining));
    }

    fn show_result(&self, result: &RenderedResult) {
        self.push(ViewEvent::Result(result.clone()));
    }

    fn notify_incomplete(&self, answered: usize, total: usize) {
        self.push(ViewEvent::Incomplete { answered, total });
    }

    fn show_copy_feedback(&self, message: &str) {
        self.push(ViewEvent::CopyFeedback(message.to_string()));
    }

    fn clear_copy_feedback(&self) {
        self.push(ViewEvent::CopyFeedbackCleared);
    }
}

/// 延迟一段时间后返回固定结果
pub struct DelayedClassifier {
    pub latency: Duration,
    pub result: ClassificationResult,
    pub calls: Mutex<Vec<AnswerSet>>,
}

impl DelayedClassifier {
    pub fn new(latency: Duration, result: ClassificationResult) -> Arc<Self> {
        Arc::new(Self {
            latency,
            result,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Classifier for DelayedClassifier {
    async fn classify(&self, answers: &AnswerSet) -> AppResult<ClassificationResult> {
        self.calls.lock().unwrap().push(answers.clone());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.result.clone())
    }
}

/// 总是返回错误状态
pub struct FailingClassifier;

#[async_trait]
impl Classifier for FailingClassifier {
    async fn classify(&self, _answers: &AnswerSet) -> AppResult<ClassificationResult> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        Err(ApiError::BadStatus {
            endpoint: "/analizar".to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        }
        .into())
    }
}

/// 可控成功/失败的剪贴板
pub struct FakeClipboard {
    pub fail: AtomicBool,
    pub written: Mutex<Vec<String>>,
}

impl FakeClipboard {
    pub fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            fail: AtomicBool::new(fail),
            written: Mutex::new(Vec::new()),
        })
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClipboardError::Unavailable {
                tried: "fake".to_string(),
            });
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub fn fox() -> ClassificationResult {
    ClassificationResult {
        subject: "Fox".to_string(),
        description: "Clever".to_string(),
        motto: "Adapt or perish".to_string(),
        image: None,
    }
}

/// 两道题的小问卷：q1 / q2，选项 a / b
pub fn two_question_form() -> QuizForm {
    let quiz = Quiz::from_toml_str(
        r#"
        title = "Mini"
        [[questions]]
        id = "q1"
        prompt = "¿Día o noche?"
        options = [{ value = "a", label = "Día" }, { value = "b", label = "Noche" }]
        [[questions]]
        id = "q2"
        prompt = "¿Mar o montaña?"
        options = [{ value = "a", label = "Mar" }, { value = "b", label = "Montaña" }]
        "#,
    )
    .unwrap();
    QuizForm::from_quiz(&quiz)
}

pub fn settings(countdown_secs: u32, tick: Duration) -> CoordinatorSettings {
    CoordinatorSettings {
        countdown_secs,
        tick,
        fade: Duration::ZERO,
        share_url: "https://que-animal-eres.onrender.com".to_string(),
        default_image: "static/img/animal.png".to_string(),
    }
}

pub fn coordinator(
    classifier: Arc<dyn Classifier>,
    view: Arc<RecordingView>,
    settings: CoordinatorSettings,
) -> SubmissionCoordinator {
    let clock: Arc<dyn Clock> = Arc::new(TokioClock);
    SubmissionCoordinator::new(classifier, clock, view, settings)
}
