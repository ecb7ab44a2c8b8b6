use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 难度等级（可参与配额的封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

static TIER_LABELS: phf::Map<&'static str, Tier> = phf_map! {
    "Easy" => Tier::Easy,
    "Medium" => Tier::Medium,
    "Hard" => Tier::Hard,
};

impl Tier {
    /// 全部难度，按默认出题顺序排列
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    /// 标准标签
    pub fn label(self) -> &'static str {
        match self {
            Tier::Easy => "Easy",
            Tier::Medium => "Medium",
            Tier::Hard => "Hard",
        }
    }

    /// 从标签解析（大小写敏感，不做任何归一化）
    pub fn from_label(label: &str) -> Option<Self> {
        TIER_LABELS.get(label).copied()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 题目记录上的难度
///
/// 题库里可能出现不认识的难度标签，原样保留为 `Unknown`，
/// 这类题目计 0 分且不会被任何难度筛选命中。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Known(Tier),
    Unknown(String),
}

impl Difficulty {
    pub fn from_label(label: &str) -> Self {
        Self::from(label.to_string())
    }

    pub fn tier(&self) -> Option<Tier> {
        match self {
            Difficulty::Known(tier) => Some(*tier),
            Difficulty::Unknown(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Difficulty::Known(tier) => tier.label(),
            Difficulty::Unknown(label) => label,
        }
    }
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        Difficulty::Known(tier)
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        match Tier::from_label(&label) {
            Some(tier) => Difficulty::Known(tier),
            None => Difficulty::Unknown(label),
        }
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Known(tier) => tier.label().to_string(),
            Difficulty::Unknown(label) => label,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 题库中的一道题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub subject: String,
    pub difficulty: Difficulty,
    pub question: String,
}

impl QuestionRecord {
    pub fn new(
        subject: impl Into<String>,
        difficulty: impl Into<Difficulty>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            difficulty: difficulty.into(),
            question: question.into(),
        }
    }
}
