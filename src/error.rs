use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 用户输入错误
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// 组卷错误
    #[error("组卷错误: {0}")]
    Paper(#[from] PaperError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 不支持的题库格式
    #[error("不支持的题库格式: {path} (仅支持 .json / .toml)")]
    UnsupportedFormat { path: String },
    /// 文件名过滤规则无法编译
    #[error("文件名过滤规则无效: {source}")]
    InvalidFileNamePattern {
        #[source]
        source: regex::Error,
    },
}

/// 用户输入错误
#[derive(Debug, Error)]
pub enum InputError {
    /// 输入不是整数
    #[error("{field} 必须是整数, 实际输入: '{value}'")]
    NotANumber { field: String, value: String },
    /// 题目总数必须为正
    #[error("题目总数必须大于 0, 实际输入: {value}")]
    NonPositiveTotal { value: i64 },
    /// 百分比之和不为 100
    #[error("难度百分比之和必须为 100, 实际为 {total}")]
    PercentageSumMismatch { total: i64 },
    /// 科目为空
    #[error("科目不能为空")]
    EmptySubject,
    /// 输入提前结束
    #[error("读取 {field} 时输入已结束")]
    UnexpectedEof { field: String },
    /// 终端读写失败
    #[error("终端读写失败: {0}")]
    Io(#[source] std::io::Error),
}

/// 组卷错误
#[derive(Debug, Error)]
pub enum PaperError {
    /// 没有选中任何题目
    #[error("科目 {subject} 没有生成任何题目")]
    EmptyResult { subject: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置值不合法
    #[error("配置项 {name} 的值 {value} 不合法: {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建空试卷错误
    pub fn empty_result(subject: impl Into<String>) -> Self {
        AppError::Paper(PaperError::EmptyResult {
            subject: subject.into(),
        })
    }

    /// 是否为"空试卷"这一致命情况
    pub fn is_empty_result(&self) -> bool {
        matches!(self, AppError::Paper(PaperError::EmptyResult { .. }))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
