pub mod input_collector;
pub mod paper_renderer;
pub mod pool_filter;
pub mod quota_sampler;
pub mod tier_classifier;

pub use input_collector::collect_paper_request;
pub use paper_renderer::{PaperLayout, PaperRenderer};
pub use pool_filter::{filter_by_subject, filter_by_subject_and_tier};
pub use quota_sampler::{sample, sample_with, SampleOutcome};
pub use tier_classifier::{points_for, points_for_label, tier_points};
