use crate::{CliError, CliErrorResult};

use am_core::{ACCOUNT_PREFIX, AccountIdentity, ConsumedAccount};
use am_db::{AccountIdentityRepository, LegacyCredentialRepository, RoleAssignmentRepository};
use am_merge::MergeRequest;

use log::debug;
use sqlx::SqlitePool;

/// Look up both accounts and everything the merge needs up front.
///
/// Identifiers are accepted with or without the leading `@`.
pub async fn build_request(
    pool: &SqlitePool,
    base_identifier: &str,
    consumed_identifier: &str,
) -> CliErrorResult<MergeRequest> {
    let base_identifier = bare_identifier(base_identifier);
    let consumed_identifier = bare_identifier(consumed_identifier);

    if base_identifier == consumed_identifier {
        return Err(CliError::self_merge(base_identifier));
    }

    let base = find_account(pool, base_identifier).await?;
    let consumed_identity = find_account(pool, consumed_identifier).await?;

    let legacy_credential =
        LegacyCredentialRepository::find_by_user_name(pool, &consumed_identity.user_identifier)
            .await?;
    let consumed = ConsumedAccount::new(consumed_identity, legacy_credential)?;

    let base_assignments = RoleAssignmentRepository::find_by_assignee(pool, &base.principal()).await?;
    let consumed_assignments =
        RoleAssignmentRepository::find_by_assignee(pool, &consumed.identity().principal()).await?;

    debug!(
        "Resolved merge of {} ({} grants) into {} ({} grants)",
        consumed.identity().user_identifier,
        consumed_assignments.len(),
        base.user_identifier,
        base_assignments.len()
    );

    Ok(MergeRequest {
        base,
        consumed,
        base_assignments,
        consumed_assignments,
    })
}

async fn find_account(pool: &SqlitePool, identifier: &str) -> CliErrorResult<AccountIdentity> {
    AccountIdentityRepository::find_by_identifier(pool, identifier)
        .await?
        .ok_or_else(|| CliError::account_not_found(identifier))
}

fn bare_identifier(identifier: &str) -> &str {
    let identifier = identifier.trim();
    identifier.strip_prefix(ACCOUNT_PREFIX).unwrap_or(identifier)
}
