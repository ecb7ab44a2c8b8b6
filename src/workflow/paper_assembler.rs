//! 组卷流程 - 流程层
//!
//! 对难度分布做一次折叠：每个难度依次 筛选 → 抽样 → 追加，
//! 得到 (选中题目, 总分, 缺口诊断)。难度之间互不影响，
//! 输出顺序只由分布顺序决定。

use rand::Rng;

use crate::models::distribution::{DistributionSpec, PaperRequest, TierShare};
use crate::models::paper::{PaperAssembly, SelectionResult, Shortfall};
use crate::models::question::QuestionRecord;
use crate::services::pool_filter::{filter_by_subject, filter_by_subject_and_tier};
use crate::services::quota_sampler::{sample_with, SampleOutcome};
use crate::services::tier_classifier::tier_points;
use crate::utils::logging::{log_shortfall, log_tier_plan, truncate_text};

#[derive(Default)]
struct Accumulator {
    records: Vec<QuestionRecord>,
    tier_score: u32,
    shortfalls: Vec<Shortfall>,
}

/// 按请求组卷
pub fn assemble_request(pool: &[QuestionRecord], request: &PaperRequest) -> PaperAssembly {
    assemble(
        pool,
        request.total_questions,
        &request.distribution,
        &request.subject,
    )
}

/// 组卷（线程本地随机源）
pub fn assemble(
    pool: &[QuestionRecord],
    total_questions: usize,
    distribution: &DistributionSpec,
    subject: &str,
) -> PaperAssembly {
    assemble_with(&mut rand::rng(), pool, total_questions, distribution, subject)
}

/// 组卷（指定随机源）
pub fn assemble_with<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[QuestionRecord],
    total_questions: usize,
    distribution: &DistributionSpec,
    subject: &str,
) -> PaperAssembly {
    let subject_pool_size = filter_by_subject(pool, subject).len();

    let acc = distribution
        .shares()
        .iter()
        .fold(Accumulator::default(), |acc, share| {
            apply_share(rng, acc, pool, total_questions, share, subject)
        });

    let selection = SelectionResult::new(acc.records);
    debug_assert_eq!(acc.tier_score, selection.total_score());

    PaperAssembly {
        subject: subject.to_string(),
        subject_pool_size,
        selection,
        shortfalls: acc.shortfalls,
    }
}

fn apply_share<R: Rng + ?Sized>(
    rng: &mut R,
    mut acc: Accumulator,
    pool: &[QuestionRecord],
    total_questions: usize,
    share: &TierShare,
    subject: &str,
) -> Accumulator {
    let required = share.required_count(total_questions);
    let subset = filter_by_subject_and_tier(pool, subject, share.tier);

    log_tier_plan(subject, share.tier, subset.len(), required);

    match sample_with(rng, &subset, required) {
        SampleOutcome::Selected(picked) => {
            for record in &picked {
                tracing::debug!("  [{}] {}", share.tier, truncate_text(&record.question, 40));
            }
            acc.records.extend(picked.into_iter().cloned());
            acc.tier_score += required as u32 * tier_points(share.tier);
        }
        SampleOutcome::Shortfall {
            required,
            available,
        } => {
            log_shortfall(subject, share.tier, required, available);
            acc.shortfalls.push(Shortfall {
                tier: share.tier,
                required,
                available,
            });
        }
    }

    acc
}
