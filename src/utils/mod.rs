//! Utility functions for token generation and URL checks.
//!
//! - [`code_generator`] - Short token generation
//! - [`url_validator`] - Syntactic URL validation

pub mod code_generator;
pub mod url_validator;
