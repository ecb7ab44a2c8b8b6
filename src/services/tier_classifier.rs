//! 难度分值服务 - 业务能力层
//!
//! 分值的唯一来源：总分计算和试卷上每题的分值标注都走这里。

use crate::models::question::{Difficulty, Tier};

/// 难度对应的分值
pub const fn tier_points(tier: Tier) -> u32 {
    match tier {
        Tier::Easy => 2,
        Tier::Medium => 5,
        Tier::Hard => 10,
    }
}

/// 题目难度对应的分值，无法识别的难度计 0 分
pub fn points_for(difficulty: &Difficulty) -> u32 {
    match difficulty {
        Difficulty::Known(tier) => tier_points(*tier),
        Difficulty::Unknown(_) => 0,
    }
}

/// 直接按标签取分值
pub fn points_for_label(label: &str) -> u32 {
    Tier::from_label(label).map(tier_points).unwrap_or(0)
}
