//! Entity structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod card;
pub mod logo;
pub mod page;
pub mod showcase;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
