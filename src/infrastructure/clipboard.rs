//! 剪贴板 - 基础设施层
//!
//! 通过系统自带的剪贴板程序写入文本

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::ClipboardError;

/// 剪贴板能力
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// 系统剪贴板
///
/// 按顺序尝试 `wl-copy`、`xclip`、`pbcopy`，第一个能启动的程序生效
pub struct SystemClipboard {
    candidates: Vec<(String, Vec<String>)>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::with_candidates(vec![
            ("wl-copy".to_string(), vec![]),
            (
                "xclip".to_string(),
                vec!["-selection".to_string(), "clipboard".to_string()],
            ),
            ("pbcopy".to_string(), vec![]),
        ])
    }

    /// 使用自定义程序列表创建
    pub fn with_candidates(candidates: Vec<(String, Vec<String>)>) -> Self {
        Self { candidates }
    }

    async fn pipe_into(program: &str, args: &[String], text: &str) -> std::io::Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            // 关闭 stdin，程序才会结束
            drop(stdin);
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(std::io::Error::other(format!("退出状态 {}", status)))
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        for (program, args) in &self.candidates {
            match Self::pipe_into(program, args, text).await {
                Ok(()) => {
                    debug!("已通过 {} 写入剪贴板", program);
                    return Ok(());
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("剪贴板程序 {} 不存在，尝试下一个", program);
                }
                Err(source) => {
                    return Err(ClipboardError::CommandFailed {
                        program: program.clone(),
                        source,
                    });
                }
            }
        }

        Err(ClipboardError::Unavailable {
            tried: self
                .candidates
                .iter()
                .map(|(p, _)| p.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_programs_report_unavailable() {
        let clipboard = SystemClipboard::with_candidates(vec![(
            "definitely-not-a-clipboard-tool".to_string(),
            vec![],
        )]);
        let err = clipboard.write_text("hola").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable { tried } if tried.contains("definitely")));
    }
}
