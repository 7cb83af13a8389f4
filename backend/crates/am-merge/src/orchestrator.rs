use crate::{
    CleanupFinalizer, EntityReassigner, MergeError, MergeErrorResult, RoleAssignmentReconciler,
};

use am_core::{AccountIdentity, ConsumedAccount, ErrorLocation, MergeResult, RoleAssignment};
use am_db::UnitOfWork;

use std::panic::Location;

use log::{debug, info, warn};
use sqlx::SqlitePool;

/// Everything a merge needs, gathered by the caller beforehand.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// The surviving account
    pub base: AccountIdentity,
    /// The account being merged away
    pub consumed: ConsumedAccount,
    pub base_assignments: Vec<RoleAssignment>,
    pub consumed_assignments: Vec<RoleAssignment>,
}

impl MergeRequest {
    pub fn base_identifier(&self) -> &str {
        &self.base.user_identifier
    }

    pub fn consumed_identifier(&self) -> &str {
        &self.consumed.identity().user_identifier
    }

    /// Reject a request whose base and consumed accounts are the same.
    #[track_caller]
    pub fn ensure_distinct_accounts(&self) -> MergeErrorResult<()> {
        if self.base.id == self.consumed.id() || self.base_identifier() == self.consumed_identifier() {
            return Err(MergeError::SelfMerge {
                identifier: self.base_identifier().to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Completion {
    Commit,
    Rollback,
}

/// Runs a whole merge in one transaction: grants, then owned records, then
/// the consumed account itself. A failure anywhere leaves the store as it was.
pub struct MergeOrchestrator {
    pool: SqlitePool,
    reconciler: RoleAssignmentReconciler,
    reassigner: EntityReassigner,
    finalizer: CleanupFinalizer,
}

impl MergeOrchestrator {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            reconciler: RoleAssignmentReconciler,
            reassigner: EntityReassigner::new(),
            finalizer: CleanupFinalizer,
        }
    }

    /// Merge and commit. The consumed account is gone afterwards.
    pub async fn merge(&self, request: &MergeRequest) -> MergeErrorResult<MergeResult> {
        self.execute(request, Completion::Commit).await
    }

    /// Run the same steps and roll them back, reporting what a merge would do.
    pub async fn preview(&self, request: &MergeRequest) -> MergeErrorResult<MergeResult> {
        self.execute(request, Completion::Rollback).await
    }

    async fn execute(
        &self,
        request: &MergeRequest,
        completion: Completion,
    ) -> MergeErrorResult<MergeResult> {
        request.ensure_distinct_accounts()?;
        RoleAssignmentReconciler::ensure_account_assignees(&request.consumed_assignments)?;

        debug!(
            "Starting merge of {} into {}",
            request.consumed_identifier(),
            request.base_identifier()
        );

        let mut uow = UnitOfWork::begin(&self.pool).await?;

        let mut result = match self.run_steps(&mut uow, request).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    "Merge of {} into {} failed, rolling back: {}",
                    request.consumed_identifier(),
                    request.base_identifier(),
                    e
                );
                if let Err(rollback_error) = uow.rollback().await {
                    warn!("Rollback failed: {}", rollback_error);
                }
                return Err(e);
            }
        };

        match completion {
            Completion::Commit => {
                uow.commit().await?;
                result.committed = true;
                info!(
                    "Merged {} into {}: {} grants repointed, {} dropped, {} records reassigned",
                    result.consumed_identifier,
                    result.base_identifier,
                    result.roles.repointed,
                    result.roles.dropped,
                    result.reassigned.total()
                );
            }
            Completion::Rollback => {
                uow.rollback().await?;
                info!(
                    "Previewed merge of {} into {}: {} grants repointed, {} dropped, {} records reassigned",
                    result.consumed_identifier,
                    result.base_identifier,
                    result.roles.repointed,
                    result.roles.dropped,
                    result.reassigned.total()
                );
            }
        }

        Ok(result)
    }

    async fn run_steps(
        &self,
        uow: &mut UnitOfWork,
        request: &MergeRequest,
    ) -> MergeErrorResult<MergeResult> {
        let mut result = MergeResult::new(request.base_identifier(), request.consumed_identifier());

        result.roles = self
            .reconciler
            .reconcile(
                uow,
                request.base_identifier(),
                request.consumed_identifier(),
                &request.base_assignments,
                &request.consumed_assignments,
            )
            .await?;

        result.reassigned = self
            .reassigner
            .reassign_all(uow, request.consumed.id(), request.base.id)
            .await?;

        self.finalizer.finalize(uow, &request.consumed).await?;

        Ok(result)
    }
}
