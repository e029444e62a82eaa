//! Application-level configuration.
//!
//! - [`ModeSelector`]: the once-per-process simulated/delegated decision

pub mod mode_selector;

pub use mode_selector::ModeSelector;
