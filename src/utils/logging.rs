//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数
use crate::error::{AppError, AppResult};
use crate::models::paper::{PaperAssembly, Shortfall};
use crate::models::question::Tier;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 订阅器
///
/// `RUST_LOG` 优先；否则默认 info，详细模式下为 debug。重复调用无副作用。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> AppResult<()> {
    let log_header = format!(
        "{}\n组卷日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .map_err(|e| AppError::file_write_failed(log_file_path, e))?;
    Ok(())
}

/// 向日志文件追加一次组卷的摘要
pub fn append_run_summary(
    log_file_path: &str,
    assembly: &PaperAssembly,
    output_path: Option<&str>,
) -> AppResult<()> {
    let mut lines = vec![
        format!(
            "[{}] 科目: {}",
            chrono::Local::now().format("%H:%M:%S"),
            assembly.subject
        ),
        format!("科目题量: {}", assembly.subject_pool_size),
        format!(
            "选中题目: {} | 总分: {}",
            assembly.selection.len(),
            assembly.selection.total_score()
        ),
    ];
    lines.extend(assembly.shortfalls.iter().map(format_shortfall));
    if let Some(path) = output_path {
        lines.push(format!("输出文件: {}", path));
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .map_err(|e| AppError::file_write_failed(log_file_path, e))?;

    writeln!(file, "{}\n", lines.join("\n"))
        .map_err(|e| AppError::file_write_failed(log_file_path, e))?;

    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(questions_file: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 随机组卷模式");
    info!("📁 题库文件: {}", questions_file);
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
pub fn log_pool_loaded(total: usize) {
    info!("✓ 题库共 {} 道题目", total);
}

/// 记录单个难度的可用 / 需要题量
pub fn log_tier_plan(subject: &str, tier: Tier, available: usize, required: usize) {
    info!("[{} - {}] 可用题目: {}", subject, tier, available);
    info!("[{} - {}] 需要题目: {}", subject, tier, required);
}

/// 记录题量不足
pub fn log_shortfall(subject: &str, tier: Tier, required: usize, available: usize) {
    warn!(
        "[{} - {}] ⚠️ 题目不足: 需要 {}, 仅有 {}，该难度不出题",
        subject, tier, required, available
    );
}

/// 缺口的一行描述
pub fn format_shortfall(shortfall: &Shortfall) -> String {
    format!(
        "题目不足: {} 需要 {} 题, 仅有 {} 题",
        shortfall.tier, shortfall.required, shortfall.available
    )
}

/// 打印最终统计信息
///
/// # 参数
/// - `assembly`: 组卷结果
/// - `output_path`: 试卷输出路径
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(assembly: &PaperAssembly, output_path: &str, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 组卷完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📚 科目: {}", assembly.subject);
    info!("✅ 题目数: {}", assembly.selection.len());
    info!("💯 总分: {}", assembly.selection.total_score());
    if assembly.has_shortfalls() {
        info!("❌ 题量不足的难度: {}", assembly.shortfalls.len());
    }
    info!("{}", "=".repeat(60));
    info!("\n试卷已保存至: {}", output_path);
    info!("日志已保存至: {}", log_file_path);
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
