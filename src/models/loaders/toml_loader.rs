use crate::models::question::Quiz;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载问卷
pub async fn load_quiz_file(toml_file_path: &Path) -> Result<Quiz> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取问卷文件: {}", toml_file_path.display()))?;

    let quiz = Quiz::from_toml_str(&content)
        .with_context(|| format!("无法解析问卷文件: {}", toml_file_path.display()))?;

    tracing::info!(
        "正在使用问卷文件: {}",
        toml_file_path.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(quiz)
}

/// 加载问卷：指定了文件就读文件，否则使用内置问卷
pub async fn load_quiz(quiz_file: Option<&str>) -> Result<Quiz> {
    match quiz_file {
        Some(path) => load_quiz_file(Path::new(path)).await,
        None => {
            tracing::debug!("未指定问卷文件，使用内置问卷");
            Quiz::builtin().context("内置问卷无效")
        }
    }
}
