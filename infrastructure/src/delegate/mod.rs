//! External delegate adapter
//!
//! Implements DelegateInvoker by running a one-shot child process.

pub mod error;
pub mod process;
