//! # Question Paper Gen
//!
//! 按科目和难度分布从题库中随机抽题，生成分页试卷
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、难度、难度分布、选题结果
//! - `loaders` - 从 JSON / TOML 文件加载题库
//!
//! ### ② 业务能力层（Services）
//! - `tier_classifier` - 难度分值（唯一来源）
//! - `pool_filter` - 按科目 + 难度筛选
//! - `quota_sampler` - 不放回等概率抽样
//! - `input_collector` - 终端参数收集
//! - `paper_renderer` - 分页排版并写文件
//!
//! ### ③ 流程层（Workflow）
//! - `paper_assembler` - 对难度分布折叠，得到选题结果和缺口诊断
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator::App` - 一次完整运行
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{
    DistributionSpec, PaperAssembly, PaperRequest, QuestionRecord, SelectionResult, Shortfall,
    Tier,
};
pub use orchestrator::App;
pub use workflow::{assemble, assemble_request};
