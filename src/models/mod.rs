pub mod distribution;
pub mod loaders;
pub mod paper;
pub mod question;

pub use distribution::{DistributionSpec, PaperRequest, TierShare};
pub use loaders::load_question_pool;
pub use paper::{PaperAssembly, SelectionResult, Shortfall};
pub use question::{Difficulty, QuestionRecord, Tier};
