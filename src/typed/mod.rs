//! The typed rendition: statuses and payloads as a Rust enum.

pub(crate) mod chain;
pub(crate) mod hlist;
pub(crate) mod state;
pub(crate) mod variant;
