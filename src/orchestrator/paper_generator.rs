//! 组卷应用 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：校验配置、初始化日志文件
//! 2. **加载题库**：读取 JSON / TOML 题库（`Vec<QuestionRecord>`）
//! 3. **收集参数**：在阻塞线程上向终端询问题量、难度分布和科目
//! 4. **组卷**：委托 workflow 完成筛选 + 抽样
//! 5. **输出**：题量不足只告警；一道题都没有则终止，不生成试卷
//! 6. **统计**：写入运行日志并打印最终统计

use crate::config::Config;
use crate::error::AppError;
use crate::models::{load_question_pool, PaperRequest, QuestionRecord};
use crate::services::input_collector::collect_paper_request;
use crate::services::PaperRenderer;
use crate::utils::logging::{
    append_run_summary, init_log_file, log_pool_loaded, log_startup, print_final_stats,
};
use crate::workflow::assemble_request;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    renderer: PaperRenderer,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config.questions_file);

        let renderer = PaperRenderer::new(&config);
        Ok(Self { config, renderer })
    }

    /// 运行应用主逻辑：加载题库 → 询问参数 → 组卷 → 输出
    pub async fn run(&self) -> Result<PathBuf> {
        let pool = self.load_pool().await?;

        let request = tokio::task::spawn_blocking(|| {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            collect_paper_request(&mut input, &mut output)
        })
        .await??;

        self.generate(&pool, &request).await
    }

    /// 按给定请求组卷并写出试卷
    pub async fn generate(&self, pool: &[QuestionRecord], request: &PaperRequest) -> Result<PathBuf> {
        info!(
            "\n📝 开始组卷: 科目 {} | 题目总数 {}",
            request.subject, request.total_questions
        );

        let assembly = assemble_request(pool, request);
        info!(
            "科目 {} 在题库中共有 {} 道题目",
            assembly.subject, assembly.subject_pool_size
        );
        if assembly.has_shortfalls() {
            warn!(
                "⚠️ {} 个难度题量不足，试卷题目数将少于 {}",
                assembly.shortfalls.len(),
                request.total_questions
            );
        }

        if assembly.selection.is_empty() {
            append_run_summary(&self.config.output_log_file, &assembly, None)?;
            error!("❌ 科目 {} 没有生成任何题目，程序结束", assembly.subject);
            return Err(AppError::empty_result(&assembly.subject).into());
        }

        let output_path = self
            .renderer
            .render_to_file(
                &assembly.subject,
                &assembly.selection,
                Path::new(&self.config.output_dir),
            )
            .await?;
        let output_display = output_path.display().to_string();

        append_run_summary(&self.config.output_log_file, &assembly, Some(&output_display))?;
        print_final_stats(&assembly, &output_display, &self.config.output_log_file);

        Ok(output_path)
    }

    /// 加载题库
    async fn load_pool(&self) -> Result<Vec<QuestionRecord>> {
        info!("\n📁 正在加载题库...");
        let pool = load_question_pool(Path::new(&self.config.questions_file)).await?;
        log_pool_loaded(pool.len());
        Ok(pool)
    }
}
