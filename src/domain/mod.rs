//! Domain layer containing entities and the seams to the outside world.
//!
//! - [`entities`] - Transient link request and result records
//! - [`random_source`] - Injectable randomness for token generation
//! - [`clipboard`] - Fire-and-forget clipboard access

pub mod clipboard;
pub mod entities;
pub mod random_source;
