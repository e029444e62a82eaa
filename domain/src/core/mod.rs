//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated question posed to the agents
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
pub mod string;
