use crate::error::{AppError, AppResult};
use crate::models::question::{QuestionRecord, Tier};
use crate::services::tier_classifier::points_for;

/// 某个难度题量不足的诊断信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub tier: Tier,
    pub required: usize,
    pub available: usize,
}

/// 最终选中的题目及总分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    records: Vec<QuestionRecord>,
    total_score: u32,
}

impl SelectionResult {
    /// 总分始终由题目难度重新计算
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        let total_score = records.iter().map(|r| points_for(&r.difficulty)).sum();
        Self {
            records,
            total_score,
        }
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 一次组卷的完整输出：结果 + 诊断
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperAssembly {
    pub subject: String,
    /// 该科目在题库中的题目总数（仅用于诊断）
    pub subject_pool_size: usize,
    pub selection: SelectionResult,
    pub shortfalls: Vec<Shortfall>,
}

impl PaperAssembly {
    pub fn has_shortfalls(&self) -> bool {
        !self.shortfalls.is_empty()
    }

    /// 取出非空的选题结果；一道题都没有时返回 `EmptyResult`
    pub fn into_selection(self) -> AppResult<SelectionResult> {
        if self.selection.is_empty() {
            return Err(AppError::empty_result(self.subject));
        }
        Ok(self.selection)
    }
}
