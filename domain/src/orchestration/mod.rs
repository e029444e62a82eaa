//! Orchestration domain: execution modes, results and synthesis.

pub mod mode;
pub mod synthesis;
pub mod value_objects;
