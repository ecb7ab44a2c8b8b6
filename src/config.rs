use crate::error::{AppResult, ConfigError};

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 题库文件路径（.json 或 .toml）
    pub questions_file: String,
    /// 试卷输出目录
    pub output_dir: String,
    /// 考试时长（显示在试卷头部）
    pub exam_duration: String,
    /// 每页正文行数
    pub lines_per_page: usize,
    /// 每行最大字符数
    pub page_width: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_file: "questions.json".to_string(),
            output_dir: ".".to_string(),
            exam_duration: "2:00 hours".to_string(),
            lines_per_page: 50,
            page_width: 80,
            verbose_logging: false,
            output_log_file: "paper_log.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            questions_file: std::env::var("QUESTIONS_FILE").unwrap_or(default.questions_file),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            exam_duration: std::env::var("EXAM_DURATION").unwrap_or(default.exam_duration),
            lines_per_page: std::env::var("LINES_PER_PAGE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.lines_per_page),
            page_width: std::env::var("PAGE_WIDTH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.page_width),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 校验排版相关配置
    pub fn validate(&self) -> AppResult<()> {
        if self.lines_per_page < 10 {
            return Err(ConfigError::InvalidValue {
                name: "LINES_PER_PAGE".to_string(),
                value: self.lines_per_page.to_string(),
                reason: "每页至少 10 行".to_string(),
            }
            .into());
        }
        if self.page_width < 40 {
            return Err(ConfigError::InvalidValue {
                name: "PAGE_WIDTH".to_string(),
                value: self.page_width.to_string(),
                reason: "每行至少 40 个字符".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
