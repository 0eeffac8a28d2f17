//! HTML template rendering handlers.

mod demo;
mod home;

pub use demo::demo_handler;
pub use home::{index_handler, submit_handler};
