//! 配额抽样服务 - 业务能力层
//!
//! 从候选题中等概率、不放回地抽取指定数量。
//! 候选不足时不抽任何题，把缺口交给调用方记录。

use rand::seq::index;
use rand::Rng;

/// 抽样结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleOutcome<T> {
    /// 抽样成功，顺序即抽样顺序
    Selected(Vec<T>),
    /// 候选不足
    Shortfall { required: usize, available: usize },
}

impl<T> SampleOutcome<T> {
    pub fn is_shortfall(&self) -> bool {
        matches!(self, SampleOutcome::Shortfall { .. })
    }
}

/// 使用线程本地随机源抽样（不可复现）
pub fn sample<T: Clone>(subset: &[T], required: usize) -> SampleOutcome<T> {
    sample_with(&mut rand::rng(), subset, required)
}

/// 使用指定随机源抽样
pub fn sample_with<T, R>(rng: &mut R, subset: &[T], required: usize) -> SampleOutcome<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if subset.len() < required {
        return SampleOutcome::Shortfall {
            required,
            available: subset.len(),
        };
    }

    let picked = index::sample(rng, subset.len(), required)
        .into_iter()
        .map(|i| subset[i].clone())
        .collect();

    SampleOutcome::Selected(picked)
}
