//! 试卷排版服务 - 业务能力层
//!
//! 把选题结果排成分页的纯文本试卷并写入文件。
//! 每题分值和总分都来自 `tier_classifier`，两者不会不一致。

use chrono::{DateTime, Local};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tokio::fs;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use crate::models::paper::SelectionResult;
use crate::services::tier_classifier::points_for;

/// 分页符
const PAGE_BREAK: &str = "\u{000C}";

/// 文件名中不允许出现的字符
static UNSAFE_FILE_CHARS: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"[^\w\-]+"));

/// 排版参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperLayout {
    pub lines_per_page: usize,
    pub page_width: usize,
    pub exam_duration: String,
}

impl From<&Config> for PaperLayout {
    fn from(config: &Config) -> Self {
        Self {
            lines_per_page: config.lines_per_page,
            page_width: config.page_width,
            exam_duration: config.exam_duration.clone(),
        }
    }
}

/// 试卷排版服务
pub struct PaperRenderer {
    layout: PaperLayout,
}

impl PaperRenderer {
    pub fn new(config: &Config) -> Self {
        Self::with_layout(PaperLayout::from(config))
    }

    pub fn with_layout(layout: PaperLayout) -> Self {
        Self { layout }
    }

    /// 排版并写入 `<output_dir>/<subject>_question_paper.txt`
    pub async fn render_to_file(
        &self,
        subject: &str,
        selection: &SelectionResult,
        output_dir: &Path,
    ) -> AppResult<PathBuf> {
        let document = self.render(subject, selection, Local::now())?;

        let path = output_dir.join(output_file_name(subject)?);
        let path_display = path.display().to_string();

        fs::create_dir_all(output_dir)
            .await
            .map_err(|e| AppError::file_write_failed(output_dir.display().to_string(), e))?;
        fs::write(&path, document)
            .await
            .map_err(|e| AppError::file_write_failed(&path_display, e))?;

        info!("✓ {} 试卷已保存: {}", subject, path_display);
        Ok(path)
    }

    /// 排版成完整文档，页与页之间用分页符分隔
    ///
    /// 选题结果为空时拒绝生成。
    pub fn render(
        &self,
        subject: &str,
        selection: &SelectionResult,
        generated_at: DateTime<Local>,
    ) -> AppResult<String> {
        if selection.is_empty() {
            return Err(AppError::empty_result(subject));
        }

        let total_marks: u32 = selection
            .records()
            .iter()
            .map(|r| points_for(&r.difficulty))
            .sum();
        debug_assert_eq!(total_marks, selection.total_score());

        let width = self.layout.page_width;
        let mut blocks = vec![vec![
            center(&format!("Generated {} Question Paper", subject), width),
            String::new(),
            format!("Generated at: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
            format!("Time: {}", self.layout.exam_duration),
            format!("Total Marks: {}", total_marks),
            String::new(),
        ]];

        blocks.extend(selection.records().iter().enumerate().map(|(idx, record)| {
            let line = format!(
                "Ques.{} : {} -({})",
                idx + 1,
                record.question,
                format_marks(points_for(&record.difficulty))
            );
            wrap_text(&line, width, 4)
        }));

        let pages = paginate(blocks, self.layout.lines_per_page);
        let page_count = pages.len();
        debug!("{} 试卷共 {} 页", subject, page_count);

        let rendered: Vec<String> = pages
            .into_iter()
            .enumerate()
            .map(|(idx, lines)| {
                let footer = center(&format!("Page {} of {}", idx + 1, page_count), width);
                format!("{}\n\n{}\n", lines.join("\n"), footer)
            })
            .collect();

        Ok(rendered.join(PAGE_BREAK))
    }
}

/// 分值显示格式：两位补零，仅用于展示
pub fn format_marks(points: u32) -> String {
    format!("{:02} marks", points)
}

/// 输出文件名，科目中的特殊字符替换为下划线
pub fn output_file_name(subject: &str) -> AppResult<String> {
    let re = UNSAFE_FILE_CHARS
        .as_ref()
        .map_err(|source| FileError::InvalidFileNamePattern {
            source: source.clone(),
        })?;

    let stem = re.replace_all(subject.trim(), "_");
    let stem = match stem.trim_matches('_') {
        "" => "paper",
        stem => stem,
    };
    Ok(format!("{}_question_paper.txt", stem))
}

fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
        .trim_end()
        .to_string()
}

/// 按字符宽度折行，续行缩进 `indent` 个空格；超长单词硬切
///
/// 宽度不足以容纳缩进时按 `indent + 1` 处理，保证每行至少放下一个字符。
fn wrap_text(text: &str, width: usize, indent: usize) -> Vec<String> {
    let width = width.max(indent + 1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let pad = " ".repeat(indent);

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        loop {
            let limit = if lines.is_empty() { width } else { width - indent };
            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };

            if needed <= limit {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.extend(word.iter());
                current_len += word.len();
                break;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }

            let rest = word.split_off(limit);
            lines.push(word.into_iter().collect());
            word = rest;
        }
    }
    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| if idx == 0 { line } else { format!("{}{}", pad, line) })
        .collect()
}

/// 把内容块分配到各页，块尽量不跨页，块之间空一行
fn paginate(blocks: Vec<Vec<String>>, lines_per_page: usize) -> Vec<Vec<String>> {
    let lines_per_page = lines_per_page.max(1);
    let mut pages = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for block in blocks {
        if !current.is_empty() && current.len() + block.len() > lines_per_page {
            pages.push(std::mem::take(&mut current));
        }
        for line in block {
            if current.len() == lines_per_page {
                pages.push(std::mem::take(&mut current));
            }
            current.push(line);
        }
        if current.last().is_some_and(|l| !l.is_empty()) && current.len() < lines_per_page {
            current.push(String::new());
        }
    }
    if !current.is_empty() {
        pages.push(current);
    }

    pages
}
