//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. List methods take a
//! [`ListScope`](alliswell_core::access::ListScope) and apply it in SQL.

pub mod operations_repo;
pub mod project_repo;
pub mod project_value_repo;
pub mod user_repo;
pub mod weekly_status_repo;

pub use operations_repo::OperationsRepo;
pub use project_repo::ProjectRepo;
pub use project_value_repo::ProjectValueRepo;
pub use user_repo::UserRepo;
pub use weekly_status_repo::WeeklyStatusRepo;
