//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod card_repo;
pub mod logo_repo;
pub mod showcase_repo;

pub use card_repo::CardRepo;
pub use logo_repo::LogoRepo;
pub use showcase_repo::ShowcaseRepo;
