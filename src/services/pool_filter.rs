//! 题库筛选服务 - 业务能力层
//!
//! 科目精确匹配（大小写敏感），保持题库原有顺序

use crate::models::question::{QuestionRecord, Tier};

/// 按科目 + 难度筛选
pub fn filter_by_subject_and_tier<'a>(
    pool: &'a [QuestionRecord],
    subject: &str,
    tier: Tier,
) -> Vec<&'a QuestionRecord> {
    pool.iter()
        .filter(|r| r.subject == subject && r.difficulty.tier() == Some(tier))
        .collect()
}

/// 只按科目筛选，用于统计该科目题量
pub fn filter_by_subject<'a>(pool: &'a [QuestionRecord], subject: &str) -> Vec<&'a QuestionRecord> {
    pool.iter().filter(|r| r.subject == subject).collect()
}
