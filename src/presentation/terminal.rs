//! 终端页面
//!
//! 问卷和结果写到 stdout，日志走 stderr

use std::io::Write;

use crate::models::{QuestionGroup, QuizForm};
use crate::presentation::render::RenderedResult;
use crate::presentation::view::QuizView;

/// 终端实现
#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl QuizView for TerminalView {
    fn show_questionnaire(&self, form: &QuizForm) {
        println!("\n{}", "=".repeat(60));
        println!("  {}", form.title());
        println!("{}", "=".repeat(60));
        println!("Responde con la letra o el número de la opción. Enter para saltar.\n");
    }

    fn show_question(&self, group: &QuestionGroup, position: usize, total: usize) {
        println!("\n[{}/{}] {}", position, total, group.prompt);
        for (idx, input) in group.inputs().iter().enumerate() {
            let marker = if input.is_marked() { "●" } else { "○" };
            println!("  {} {}) {}. {}", marker, idx + 1, input.value, input.label);
        }
        print!("> ");
        let _ = std::io::stdout().flush();
    }

    fn hide_questionnaire(&self) {
        println!("\n{}", "─".repeat(60));
    }

    fn show_waiting(&self, seconds: u32) {
        println!("📺 Tu resultado llegará después de este anuncio...");
        print!("   {} ", seconds);
        let _ = std::io::stdout().flush();
    }

    fn update_countdown(&self, remaining: u32) {
        print!("{} ", remaining);
        let _ = std::io::stdout().flush();
    }

    fn show_result(&self, result: &RenderedResult) {
        println!("\n\n{}", "=".repeat(60));
        println!("  🐾 {}", result.subject);
        println!("{}", "=".repeat(60));
        println!("{}", result.description);
        println!("\n  {}", result.motto);
        println!("\n🖼️  {}", result.image);
        println!("\nComparte tu resultado:");
        println!("  Twitter:  {}", result.share.twitter);
        println!("  Facebook: {}", result.share.facebook);
    }

    fn notify_incomplete(&self, answered: usize, total: usize) {
        println!(
            "\n⚠️  Por favor responde todas las preguntas ({}/{} respondidas).",
            answered, total
        );
    }

    fn show_copy_feedback(&self, message: &str) {
        println!("{}", message);
    }

    fn clear_copy_feedback(&self) {}
}
