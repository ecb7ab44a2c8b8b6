use crate::models::question::Tier;
use serde::{Deserialize, Serialize};

/// 单个难度的占比
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierShare {
    pub tier: Tier,
    pub percentage: i32,
}

impl TierShare {
    pub fn new(tier: Tier, percentage: i32) -> Self {
        Self { tier, percentage }
    }

    /// 本难度需要的题目数: floor(percentage / 100 * total)
    ///
    /// 负百分比按 0 处理。乘积用 i128 计算，任何 i32 × usize 都不会溢出。
    pub fn required_count(&self, total_questions: usize) -> usize {
        let scaled = i128::from(self.percentage) * total_questions as i128;
        let count = scaled.div_euclid(100);
        if count <= 0 {
            0
        } else {
            usize::try_from(count).unwrap_or(usize::MAX)
        }
    }
}

/// 难度分布，按出题顺序排列
///
/// 百分比之和应为 100，但这里不做强制校验，由输入端负责。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSpec {
    shares: Vec<TierShare>,
}

impl DistributionSpec {
    pub fn new(shares: Vec<TierShare>) -> Self {
        Self { shares }
    }

    /// 按 Easy / Medium / Hard 顺序构造
    pub fn from_percentages(easy: i32, medium: i32, hard: i32) -> Self {
        Self::new(vec![
            TierShare::new(Tier::Easy, easy),
            TierShare::new(Tier::Medium, medium),
            TierShare::new(Tier::Hard, hard),
        ])
    }

    pub fn shares(&self) -> &[TierShare] {
        &self.shares
    }

    pub fn total_percentage(&self) -> i64 {
        self.shares.iter().map(|s| i64::from(s.percentage)).sum()
    }
}

/// 一次组卷请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRequest {
    pub total_questions: usize,
    pub distribution: DistributionSpec,
    pub subject: String,
}
