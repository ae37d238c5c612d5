//! Access policy for the reporting workflow.
//!
//! Every read and write path asks [`check`] for a decision and converts it
//! with [`AccessDecision::into_result`]. List paths use [`ListScope`]
//! instead and filter rows silently. The two must agree: a row passes the
//! list filter exactly when a direct read of it is [`AccessDecision::Allowed`].
//!
//! Summary of the rules:
//!
//! | Operation        | Admin | PracticeHead | DeliveryDirector            | Anonymous |
//! |------------------|-------|--------------|-----------------------------|-----------|
//! | `ReadProject`    | yes   | yes          | assigned, else not found    | not found |
//! | `ReadStatus`     | yes   | yes          | submitted or assigned, else not found | not found |
//! | `ManageProjects` | yes   | forbidden    | forbidden                   | forbidden |
//! | `WriteToProject` | yes   | yes          | assigned or own row, else forbidden | forbidden |
//! | `DeleteOwned`    | yes   | own rows     | own rows                    | forbidden |
//! | `ViewDirectory`  | yes   | yes          | forbidden                   | forbidden |

use serde::Serialize;

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;

/// An authenticated, active user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: DbId,
    pub name: String,
    pub role: Role,
}

/// Who is asking. Resolved once per request and passed explicitly to every
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// No credential, an unknown user, or an inactive user.
    Anonymous,
    User(Principal),
}

impl Caller {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Caller::Anonymous => None,
            Caller::User(p) => Some(p),
        }
    }

    pub fn user_id(&self) -> Option<DbId> {
        self.principal().map(|p| p.id)
    }

    pub fn role(&self) -> Option<Role> {
        self.principal().map(|p| p.role)
    }

    /// Like [`Caller::principal`] but a hard denial for anonymous callers.
    pub fn require_user(&self) -> Result<&Principal, CoreError> {
        self.principal()
            .ok_or_else(|| CoreError::Forbidden("An active user is required".into()))
    }

    fn is(&self, id: Option<DbId>) -> bool {
        matches!((self.user_id(), id), (Some(me), Some(other)) if me == other)
    }
}

/// A logical operation subject to the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ReadProject,
    ReadStatus,
    /// Create, update or delete project master data.
    ManageProjects,
    /// Create or overwrite a weekly status (or value entry) on a project.
    /// With record facts, the submitter of an existing row may overwrite it.
    WriteToProject,
    /// Delete a status or value entry.
    DeleteOwned,
    /// List users for the acting-director picker.
    ViewDirectory,
}

impl Operation {
    fn denial_message(self) -> &'static str {
        match self {
            Operation::ManageProjects => "Admin role required",
            Operation::WriteToProject => "Not authorized for this project",
            Operation::DeleteOwned => "Not authorized to delete this record",
            Operation::ViewDirectory => "Admin or Practice Head role required",
            Operation::ReadProject | Operation::ReadStatus => "Access denied",
        }
    }
}

/// Ownership facts about the resource an operation targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceFacts {
    /// Delivery Director assigned to the (owning) project.
    pub assigned_director: Option<DbId>,
    /// User who submitted the record, for statuses and value entries.
    pub submitted_by: Option<DbId>,
}

impl ResourceFacts {
    pub fn project(assigned_director: Option<DbId>) -> Self {
        Self {
            assigned_director,
            submitted_by: None,
        }
    }

    pub fn record(assigned_director: Option<DbId>, submitted_by: DbId) -> Self {
        Self {
            assigned_director,
            submitted_by: Some(submitted_by),
        }
    }
}

/// Outcome of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    /// Deny while pretending the resource does not exist.
    NotFound,
    Forbidden,
}

impl AccessDecision {
    /// Convert into the error the caller should see.
    ///
    /// `NotFound` produces exactly the same error a missing row would, so
    /// out-of-scope resources cannot be told apart from absent ones.
    pub fn into_result(
        self,
        operation: Operation,
        entity: &'static str,
        id: DbId,
    ) -> Result<(), CoreError> {
        match self {
            AccessDecision::Allowed => Ok(()),
            AccessDecision::NotFound => Err(CoreError::NotFound { entity, id }),
            AccessDecision::Forbidden => {
                Err(CoreError::Forbidden(operation.denial_message().into()))
            }
        }
    }
}

/// Decide whether `caller` may perform `operation` on a resource with the
/// given ownership `facts`.
pub fn check(caller: &Caller, operation: Operation, facts: &ResourceFacts) -> AccessDecision {
    let Some(principal) = caller.principal() else {
        return match operation {
            Operation::ReadProject | Operation::ReadStatus => AccessDecision::NotFound,
            _ => AccessDecision::Forbidden,
        };
    };
    let assigned = caller.is(facts.assigned_director);
    let submitted = caller.is(facts.submitted_by);

    let allowed = match operation {
        Operation::ReadProject => principal.role.sees_everything() || assigned,
        Operation::ReadStatus => principal.role.sees_everything() || assigned || submitted,
        Operation::ManageProjects => principal.role == Role::Admin,
        Operation::WriteToProject => principal.role.sees_everything() || assigned || submitted,
        Operation::DeleteOwned => principal.role == Role::Admin || submitted,
        Operation::ViewDirectory => principal.role.sees_everything(),
    };

    match (allowed, operation) {
        (true, _) => AccessDecision::Allowed,
        (false, Operation::ReadProject | Operation::ReadStatus) => AccessDecision::NotFound,
        (false, _) => AccessDecision::Forbidden,
    }
}

/// Row filter applied by list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    /// Every row.
    All,
    /// Projects assigned to this director, and statuses/values that belong
    /// to those projects or that this director submitted.
    Director(DbId),
    /// No rows at all.
    Nothing,
}

impl ListScope {
    pub fn for_caller(caller: &Caller) -> Self {
        match caller.principal() {
            None => ListScope::Nothing,
            Some(p) if p.role.sees_everything() => ListScope::All,
            Some(p) => ListScope::Director(p.id),
        }
    }

    pub fn admits_project(&self, assigned_director: Option<DbId>) -> bool {
        match self {
            ListScope::All => true,
            ListScope::Director(me) => assigned_director == Some(*me),
            ListScope::Nothing => false,
        }
    }

    pub fn admits_record(&self, assigned_director: Option<DbId>, submitted_by: DbId) -> bool {
        match self {
            ListScope::All => true,
            ListScope::Director(me) => assigned_director == Some(*me) || submitted_by == *me,
            ListScope::Nothing => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const D1: DbId = 10;
    const D2: DbId = 20;

    fn user(id: DbId, role: Role) -> Caller {
        Caller::User(Principal {
            id,
            name: format!("user-{id}"),
            role,
        })
    }

    fn admin() -> Caller {
        user(1, Role::Admin)
    }

    fn head() -> Caller {
        user(2, Role::PracticeHead)
    }

    fn d1() -> Caller {
        user(D1, Role::DeliveryDirector)
    }

    #[test]
    fn test_leadership_reads_everything() {
        let facts = ResourceFacts::record(Some(D2), D2);
        for caller in [admin(), head()] {
            assert_eq!(check(&caller, Operation::ReadProject, &facts), AccessDecision::Allowed);
            assert_eq!(check(&caller, Operation::ReadStatus, &facts), AccessDecision::Allowed);
        }
    }

    #[test]
    fn test_director_reads_only_assigned_projects() {
        assert_eq!(
            check(&d1(), Operation::ReadProject, &ResourceFacts::project(Some(D1))),
            AccessDecision::Allowed
        );
        assert_eq!(
            check(&d1(), Operation::ReadProject, &ResourceFacts::project(Some(D2))),
            AccessDecision::NotFound
        );
        assert_eq!(
            check(&d1(), Operation::ReadProject, &ResourceFacts::project(None)),
            AccessDecision::NotFound
        );
    }

    #[test]
    fn test_director_reads_own_submission_after_reassignment() {
        let facts = ResourceFacts::record(Some(D2), D1);
        assert_eq!(check(&d1(), Operation::ReadStatus, &facts), AccessDecision::Allowed);
    }

    #[test]
    fn test_out_of_scope_read_is_disguised_as_not_found() {
        let facts = ResourceFacts::record(Some(D2), D2);
        let decision = check(&d1(), Operation::ReadStatus, &facts);
        assert_matches!(
            decision.into_result(Operation::ReadStatus, "WeeklyStatus", 7),
            Err(CoreError::NotFound { entity: "WeeklyStatus", id: 7 })
        );
    }

    #[test]
    fn test_only_admin_manages_projects() {
        let facts = ResourceFacts::default();
        assert_eq!(check(&admin(), Operation::ManageProjects, &facts), AccessDecision::Allowed);
        assert_eq!(check(&head(), Operation::ManageProjects, &facts), AccessDecision::Forbidden);
        assert_eq!(check(&d1(), Operation::ManageProjects, &facts), AccessDecision::Forbidden);
    }

    #[test]
    fn test_director_write_denied_on_foreign_project() {
        assert_eq!(
            check(&d1(), Operation::WriteToProject, &ResourceFacts::project(Some(D2))),
            AccessDecision::Forbidden
        );
        assert_eq!(
            check(&d1(), Operation::WriteToProject, &ResourceFacts::project(Some(D1))),
            AccessDecision::Allowed
        );
    }

    #[test]
    fn test_submitter_may_overwrite_own_row_after_reassignment() {
        let mine = ResourceFacts::record(Some(D2), D1);
        let theirs = ResourceFacts::record(Some(D2), D2);
        assert_eq!(check(&d1(), Operation::WriteToProject, &mine), AccessDecision::Allowed);
        assert_eq!(check(&d1(), Operation::WriteToProject, &theirs), AccessDecision::Forbidden);
    }

    #[test]
    fn test_delete_requires_admin_or_submitter() {
        let mine = ResourceFacts::record(Some(D1), D1);
        let theirs = ResourceFacts::record(Some(D1), D2);
        assert_eq!(check(&d1(), Operation::DeleteOwned, &mine), AccessDecision::Allowed);
        assert_eq!(check(&d1(), Operation::DeleteOwned, &theirs), AccessDecision::Forbidden);
        assert_eq!(check(&head(), Operation::DeleteOwned, &theirs), AccessDecision::Forbidden);
        assert_eq!(check(&admin(), Operation::DeleteOwned, &theirs), AccessDecision::Allowed);
    }

    #[test]
    fn test_anonymous_reads_nothing_and_writes_nothing() {
        let facts = ResourceFacts::record(None, D1);
        let anon = Caller::Anonymous;
        assert_eq!(check(&anon, Operation::ReadProject, &facts), AccessDecision::NotFound);
        assert_eq!(check(&anon, Operation::ReadStatus, &facts), AccessDecision::NotFound);
        for op in [
            Operation::ManageProjects,
            Operation::WriteToProject,
            Operation::DeleteOwned,
            Operation::ViewDirectory,
        ] {
            assert_eq!(check(&anon, op, &facts), AccessDecision::Forbidden);
        }
        assert_eq!(ListScope::for_caller(&anon), ListScope::Nothing);
    }

    #[test]
    fn test_forbidden_message_names_the_operation() {
        let err = AccessDecision::Forbidden
            .into_result(Operation::WriteToProject, "Project", 3)
            .unwrap_err();
        assert_matches!(err, CoreError::Forbidden(msg) if msg == "Not authorized for this project");
    }

    #[test]
    fn test_list_scope_agrees_with_direct_reads() {
        let callers = [admin(), head(), d1(), user(D2, Role::DeliveryDirector), Caller::Anonymous];
        let assignments = [None, Some(D1), Some(D2)];
        let submitters = [1, D1, D2];

        for caller in &callers {
            let scope = ListScope::for_caller(caller);
            for assigned in assignments {
                let facts = ResourceFacts::project(assigned);
                let project_allowed =
                    check(caller, Operation::ReadProject, &facts) == AccessDecision::Allowed;
                assert_eq!(scope.admits_project(assigned), project_allowed);

                for submitter in submitters {
                    let facts = ResourceFacts::record(assigned, submitter);
                    let record_allowed =
                        check(caller, Operation::ReadStatus, &facts) == AccessDecision::Allowed;
                    assert_eq!(scope.admits_record(assigned, submitter), record_allowed);
                }
            }
        }
    }
}
