use crate::{MergeError, MergeErrorResult};

use am_core::{ErrorLocation, RoleAssignment, RoleReconciliation, account_principal};
use am_db::{DbError, RoleAssignmentRepository, UnitOfWork};

use std::collections::HashSet;
use std::panic::Location;

use log::debug;

/// Folds the consumed account's permission grants into the base account.
///
/// A consumed grant whose `(definition point, role)` the base account
/// already holds is dropped; the base grant wins and nothing is copied from
/// the loser. Every other consumed grant is re-addressed to the base account.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoleAssignmentReconciler;

impl RoleAssignmentReconciler {
    /// Reject any grant that is not addressed to an account. Runs before
    /// anything is written.
    #[track_caller]
    pub fn ensure_account_assignees(assignments: &[RoleAssignment]) -> MergeErrorResult<()> {
        match assignments.iter().find(|a| !a.is_account_assignee()) {
            Some(assignment) => Err(MergeError::InvalidAssigneeKind {
                assignee: assignment.assignee_identifier.clone(),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }

    pub async fn reconcile(
        &self,
        uow: &mut UnitOfWork,
        base_identifier: &str,
        consumed_identifier: &str,
        base_assignments: &[RoleAssignment],
        consumed_assignments: &[RoleAssignment],
    ) -> MergeErrorResult<RoleReconciliation> {
        let base_principal = account_principal(base_identifier);
        let mut outcome = RoleReconciliation::default();

        // Grants the base account holds once this pass is done, including
        // the ones it picks up along the way.
        let mut held: HashSet<(i64, &str)> =
            base_assignments.iter().map(RoleAssignment::grant_key).collect();

        for assignment in consumed_assignments {
            if !held.insert(assignment.grant_key()) {
                debug!(
                    "Dropping duplicate grant {} on {} from {}",
                    assignment.role, assignment.definition_point_id, assignment.assignee_identifier
                );
                outcome.dropped += 1;
                continue;
            }

            let repointed = RoleAssignment {
                assignee_identifier: base_principal.clone(),
                ..assignment.clone()
            };
            if !RoleAssignmentRepository::update_assignee(uow.conn(), &repointed).await? {
                return Err(DbError::not_found("role assignment", assignment.id).into());
            }
            outcome.repointed += 1;
        }

        outcome.deleted = RoleAssignmentRepository::delete_by_assignee(
            uow.conn(),
            &account_principal(consumed_identifier),
        )
        .await?;

        debug!(
            "Role assignments reconciled: {} repointed, {} dropped, {} deleted",
            outcome.repointed, outcome.dropped, outcome.deleted
        );

        Ok(outcome)
    }
}
