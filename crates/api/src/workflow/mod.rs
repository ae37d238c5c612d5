//! Reporting workflow operations.
//!
//! Every operation takes the pool and an explicit [`Caller`], asks
//! [`alliswell_core::access::check`] (or derives a [`ListScope`]) before
//! touching the store, and returns [`AppResult`]. HTTP handlers are thin
//! wrappers around these functions.
//!
//! [`Caller`]: alliswell_core::access::Caller
//! [`ListScope`]: alliswell_core::access::ListScope
//! [`AppResult`]: crate::error::AppResult

pub mod directory;
pub mod identity;
pub mod operations;
pub mod projects;
pub mod statuses;
pub mod values;

pub use directory::list_directors;
pub use operations::{
    delete_operations, list_operations, operations_for_month, upsert_operations, SaveOperations,
};
pub use projects::{create_project, delete_project, get_project, list_projects, update_project};
pub use statuses::{
    delete_status, get_status, latest_statuses, list_statuses, previous_status,
    statuses_for_week, update_status, upsert_status, SaveStatus, UpdateStatus,
};
pub use values::{create_value, delete_value, list_project_values, list_values, NewValue};

use alliswell_core::access::{check, AccessDecision, Caller, Operation, ResourceFacts};
use alliswell_core::error::CoreError;
use alliswell_core::types::DbId;

/// Run the policy check and convert the decision, logging denials.
fn authorize(
    caller: &Caller,
    operation: Operation,
    facts: &ResourceFacts,
    entity: &'static str,
    id: DbId,
) -> Result<(), CoreError> {
    let decision = check(caller, operation, facts);
    if decision != AccessDecision::Allowed {
        tracing::debug!(
            user_id = ?caller.user_id(),
            ?operation,
            ?decision,
            entity,
            id,
            "Access denied"
        );
    }
    decision.into_result(operation, entity, id)
}
