//! Agent domain: the fixed set of contributors to a composite answer.
//!
//! - [`role::AgentRole`]: which step an agent performs
//! - [`result::AgentResult`]: one agent's output for one request
//! - [`canned`]: placeholder texts used by simulated execution

pub mod canned;
pub mod result;
pub mod role;
