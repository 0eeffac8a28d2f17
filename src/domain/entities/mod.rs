//! Core domain entities.
//!
//! Both entities are transient: nothing is persisted and neither carries an
//! identity beyond the submission that produced it.
//!
//! - [`LinkRequest`] - A URL submitted for shortening
//! - [`ShortLinkResult`] - The original URL with its issued short URL

pub mod link_request;
pub mod short_link;

pub use link_request::LinkRequest;
pub use short_link::ShortLinkResult;
