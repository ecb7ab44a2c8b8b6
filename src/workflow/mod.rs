pub mod paper_assembler;

pub use paper_assembler::{assemble, assemble_request, assemble_with};
