use std::time::Duration;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 分类接口完整地址
    pub classify_url: String,
    /// 广告倒计时秒数
    pub countdown_secs: u32,
    /// 倒计时每一跳的间隔（毫秒）
    pub tick_millis: u64,
    /// 答题区淡出到等待区出现的延迟（毫秒）
    pub fade_millis: u64,
    /// 分享链接指向的地址
    pub share_url: String,
    /// 接口没有返回图片时使用的默认图片
    pub default_image: String,
    /// "已复制" 提示的显示时长（毫秒）
    pub copy_feedback_millis: u64,
    /// 问卷 TOML 文件，为空时使用内置问卷
    pub quiz_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classify_url: "http://127.0.0.1:5000/analizar".to_string(),
            countdown_secs: 7,
            tick_millis: 1000,
            fade_millis: 300,
            share_url: "https://que-animal-eres.onrender.com".to_string(),
            default_image: "static/img/animal.png".to_string(),
            copy_feedback_millis: 2000,
            quiz_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            classify_url: std::env::var("CLASSIFY_URL").unwrap_or(default.classify_url),
            countdown_secs: std::env::var("COUNTDOWN_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.countdown_secs),
            tick_millis: std::env::var("TICK_MILLIS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.tick_millis),
            fade_millis: std::env::var("FADE_MILLIS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.fade_millis),
            share_url: std::env::var("SHARE_URL").unwrap_or(default.share_url),
            default_image: std::env::var("DEFAULT_IMAGE").unwrap_or(default.default_image),
            copy_feedback_millis: std::env::var("COPY_FEEDBACK_MILLIS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.copy_feedback_millis),
            quiz_file: std::env::var("QUIZ_FILE").ok().filter(|v| !v.trim().is_empty()),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 倒计时一跳的时长
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_millis)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = Config::default();
        assert_eq!(config.countdown_secs, 7);
        assert_eq!(config.tick(), Duration::from_secs(1));
        assert_eq!(config.copy_feedback(), Duration::from_secs(2));
        assert!(config.classify_url.ends_with("/analizar"));
        assert!(config.quiz_file.is_none());
    }
}
