//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the (joined) database row
//! - A `Deserialize` create DTO for inserts
//! - Where the entity is editable, an update DTO

pub mod project;
pub mod project_operations;
pub mod project_value;
pub mod user;
pub mod weekly_status;
