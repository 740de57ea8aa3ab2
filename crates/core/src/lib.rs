//! Domain logic for the vitrine landing-page manager.
//!
//! This crate has no database or HTTP dependencies so the resolution,
//! normalization, and link-composition rules can be exercised in plain
//! unit tests and reused by any future CLI tooling.

pub mod domain;
pub mod error;
pub mod link;
pub mod lookup;
pub mod slug;
pub mod theme;
pub mod types;
