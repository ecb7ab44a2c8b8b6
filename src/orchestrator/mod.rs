//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 负责一次完整的组卷运行：加载题库、收集参数、调用流程层、输出试卷。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (加载题库 / 收集参数 / 输出)
//!     ↓
//! workflow::paper_assembler (按难度分布组卷)
//!     ↓
//! services (能力层：分值 / 筛选 / 抽样 / 排版)
//!     ↓
//! models (数据：题目 / 难度分布 / 选题结果)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：App 只做调度和统计，不做筛选或抽样
//! 2. **向下依赖**：编排层 → workflow → services → models
//! 3. **致命与可恢复分开**：题量不足只告警，空试卷才终止

pub mod paper_generator;

pub use paper_generator::App;
