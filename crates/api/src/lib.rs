//! HTTP surface for the vitrine landing-page manager.
//!
//! Public routes resolve the request host to a showcase and serve its
//! render context; admin routes (bearer-token gated) manage showcases,
//! cards, and logos.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
