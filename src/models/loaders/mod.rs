pub mod pool_loader;

pub use pool_loader::{load_question_pool, parse_json_pool, parse_toml_pool};
