//! Progress indicators for console use

pub mod spinner;
