//! 答题会话 - 编排层
//!
//! 1. **应用初始化**：加载问卷、创建各项能力
//! 2. **答题循环**：逐题读取终端输入，不完整时只重问未答的题
//! 3. **提交**：委托 `SubmissionCoordinator` 完成等待和揭晓
//! 4. **分享**：揭晓后可以复制链接

use std::sync::Arc;

use anyhow::{bail, Result};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info};

use crate::config::Config;
use crate::infrastructure::{SystemClipboard, TokioClock};
use crate::models::{load_quiz, Quiz, QuizForm};
use crate::presentation::{QuizView, RenderedResult, TerminalView};
use crate::services::{CopyLinkAction, HttpClassifier, SelectionTracker};
use crate::utils::logging::{log_quiz_loaded, log_startup, truncate_text};
use crate::workflow::{CoordinatorSettings, SubmissionCoordinator, SubmitOutcome};

type InputLines = Lines<BufReader<Stdin>>;

/// 应用主结构
pub struct App {
    config: Config,
    quiz: Quiz,
    view: Arc<TerminalView>,
    tracker: SelectionTracker,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let quiz = load_quiz(config.quiz_file.as_deref()).await?;
        log_quiz_loaded(&quiz.title, quiz.questions.len());

        Ok(Self {
            config,
            quiz,
            view: Arc::new(TerminalView::new()),
            tracker: SelectionTracker::new(),
        })
    }

    /// 运行一次完整的答题会话
    pub async fn run(&self) -> Result<()> {
        let mut form = QuizForm::from_quiz(&self.quiz);
        let mut input = BufReader::new(tokio::io::stdin()).lines();

        let clock = Arc::new(TokioClock);
        let mut coordinator = SubmissionCoordinator::new(
            Arc::new(HttpClassifier::new(&self.config)),
            clock.clone(),
            self.view.clone(),
            CoordinatorSettings::from(&self.config),
        );

        self.view.show_questionnaire(&form);
        let mut pending: Vec<String> = form.groups().iter().map(|g| g.id.clone()).collect();

        loop {
            self.ask(&mut form, &pending, &mut input).await?;

            match coordinator.on_submit(&form).await? {
                SubmitOutcome::Incomplete { .. } => {
                    // 只重问还没回答的题，已填的答案保持不变
                    pending = form.unanswered().map(|g| g.id.clone()).collect();
                }
                SubmitOutcome::Revealed(rendered) => {
                    let copy = CopyLinkAction::new(
                        Arc::new(SystemClipboard::new()),
                        clock.clone(),
                        self.view.clone(),
                        self.config.copy_feedback(),
                    );
                    self.share_loop(&rendered, &copy, &mut input).await?;
                    info!("👋 会话结束");
                    return Ok(());
                }
            }
        }
    }

    /// 依次询问给定的题目
    async fn ask(&self, form: &mut QuizForm, pending: &[String], input: &mut InputLines) -> Result<()> {
        let total = form.group_count();

        for id in pending {
            let Some(position) = form.groups().iter().position(|g| &g.id == id) else {
                continue;
            };

            loop {
                let group = form.groups()[position].clone();
                self.view.show_question(&group, position + 1, total);

                let Some(line) = input.next_line().await? else {
                    bail!("输入已结束，答题未完成");
                };
                let line = line.trim();
                if line.is_empty() {
                    debug!("跳过题目 {}", id);
                    break;
                }

                let question = &self.quiz.questions[position];
                match question.resolve_option(line) {
                    Some(option) => {
                        self.tracker.select(form, id, &option.value)?;
                        debug!("{} → {} ({})", id, option.value, truncate_text(&option.label, 30));
                        break;
                    }
                    None => println!("Opción no válida: {}", line),
                }
            }
        }

        Ok(())
    }

    /// 揭晓后的分享循环：`c` 复制链接，回车退出
    async fn share_loop(
        &self,
        rendered: &RenderedResult,
        copy: &CopyLinkAction,
        input: &mut InputLines,
    ) -> Result<()> {
        loop {
            println!("\n[c] Copiar enlace · [Enter] Salir");
            let Some(line) = input.next_line().await? else {
                return Ok(());
            };
            if line.trim().eq_ignore_ascii_case("c") {
                copy.run(&rendered.share).await;
            } else {
                return Ok(());
            }
        }
    }
}
