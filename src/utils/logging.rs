/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

use crate::config::Config;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - 你是什么动物？ ({})",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 分类接口: {}", config.classify_url);
    info!(
        "⏱️ 广告倒计时: {} 跳 x {}ms",
        config.countdown_secs, config.tick_millis
    );
    info!("{}", "=".repeat(60));
}

/// 记录问卷加载信息
///
/// # 参数
/// - `title`: 问卷标题
/// - `total`: 题目总数
pub fn log_quiz_loaded(title: &str, total: usize) {
    info!("✓ 已加载问卷《{}》，共 {} 题", title, total);
}

/// 记录揭晓信息
pub fn log_revealed(subject: &str, waited_millis: u128) {
    info!("\n{}", "─".repeat(60));
    info!("🎉 结果已揭晓: {} (等待 {}ms)", subject, waited_millis);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars_not_bytes() {
        assert_eq!(truncate_text("¿Cómo reaccionas?", 6), "¿Cómo ...");
        assert_eq!(truncate_text("corto", 10), "corto");
    }
}
