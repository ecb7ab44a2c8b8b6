use crate::error::{AppError, AppResult, FileError};
use crate::models::question::{Difficulty, QuestionRecord};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// TOML 题库文件结构: `[[questions]]` 数组
#[derive(Debug, Deserialize)]
struct QuestionBank {
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

/// 从文件加载题库，按扩展名选择 JSON 或 TOML
pub async fn load_question_pool(path: &Path) -> AppResult<Vec<QuestionRecord>> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(FileError::NotFound { path: display }.into());
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(&display, e))?;

    let records = match extension.as_deref() {
        Some("json") => parse_json_pool(&content, &display)?,
        Some("toml") => parse_toml_pool(&content, &display)?,
        _ => return Err(FileError::UnsupportedFormat { path: display }.into()),
    };

    Ok(sanitize_pool(records, &display))
}

/// 解析 JSON 数组格式
pub fn parse_json_pool(content: &str, path: &str) -> AppResult<Vec<QuestionRecord>> {
    let records = serde_json::from_str(content).map_err(|source| FileError::JsonParseFailed {
        path: path.to_string(),
        source,
    })?;
    Ok(records)
}

/// 解析 TOML 格式
pub fn parse_toml_pool(content: &str, path: &str) -> AppResult<Vec<QuestionRecord>> {
    let bank: QuestionBank = toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
        path: path.to_string(),
        source,
    })?;
    Ok(bank.questions)
}

/// 去掉科目或题干为空的记录
fn sanitize_pool(records: Vec<QuestionRecord>, path: &str) -> Vec<QuestionRecord> {
    let total = records.len();
    let mut unknown = 0;

    let pool: Vec<QuestionRecord> = records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            if record.subject.trim().is_empty() || record.question.trim().is_empty() {
                tracing::warn!("跳过第 {} 条记录: 科目或题干为空 ({})", idx + 1, path);
                return None;
            }
            if let Difficulty::Unknown(label) = &record.difficulty {
                tracing::debug!("第 {} 条记录难度未知: {}", idx + 1, label);
                unknown += 1;
            }
            Some(record)
        })
        .collect();

    tracing::info!(
        "成功加载 {} / {} 个题目 ({})",
        pool.len(),
        total,
        path
    );
    if unknown > 0 {
        tracing::warn!("⚠️ {} 个题目的难度无法识别，将不会被选中", unknown);
    }

    pool
}
