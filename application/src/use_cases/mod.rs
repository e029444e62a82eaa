//! Use cases (application services)
//!
//! - [`handle_question`]: the gateway: validate, execute, map failures
//! - [`simulate`]: canned three-agent fan-out with artificial latency
//! - [`delegate`]: hand the question to the external computation

pub mod delegate;
pub mod handle_question;
pub mod simulate;
