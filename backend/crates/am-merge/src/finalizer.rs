use crate::{MergeError, MergeErrorResult};

use am_core::{ConsumedAccount, ErrorLocation};
use am_db::{
    AccountIdentityRepository, ApiTokenRepository, ConfirmEmailRepository, DbError,
    IdentityLookupRepository, LegacyCredentialRepository, UnitOfWork,
};

use std::panic::Location;

use log::{debug, warn};

/// Destroys the consumed account once nothing points at it any more.
///
/// Auxiliary rows go first, then the identity, then its legacy credential.
/// Each auxiliary kind may be absent, but more than one row is ambiguous and
/// aborts the merge.
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanupFinalizer;

impl CleanupFinalizer {
    pub async fn finalize(
        &self,
        uow: &mut UnitOfWork,
        consumed: &ConsumedAccount,
    ) -> MergeErrorResult<()> {
        let identity_id = consumed.id();

        let confirmations = ConfirmEmailRepository::find_by_identity(uow.conn(), identity_id).await?;
        if let Some(confirmation) = at_most_one("email confirmation", identity_id, confirmations)? {
            ConfirmEmailRepository::delete(uow.conn(), confirmation.id).await?;
        }

        let tokens = ApiTokenRepository::find_by_identity(uow.conn(), identity_id).await?;
        if let Some(token) = at_most_one("API token", identity_id, tokens)? {
            ApiTokenRepository::delete(uow.conn(), token.id).await?;
        }

        let lookups = IdentityLookupRepository::find_by_identity(uow.conn(), identity_id).await?;
        match at_most_one("identity lookup", identity_id, lookups)? {
            Some(lookup) => {
                IdentityLookupRepository::delete(uow.conn(), lookup.id).await?;
            }
            None => warn!(
                "Account {} has no identity lookup",
                consumed.identity().user_identifier
            ),
        }

        if !AccountIdentityRepository::delete(uow.conn(), identity_id).await? {
            return Err(DbError::not_found("account identity", identity_id).into());
        }

        if let Some(credential) = consumed.legacy_credential()
            && !LegacyCredentialRepository::delete(uow.conn(), credential.id).await?
        {
            return Err(DbError::not_found("legacy credential", credential.id).into());
        }

        debug!(
            "Removed account {} and its auxiliary records",
            consumed.identity().user_identifier
        );

        Ok(())
    }
}

#[track_caller]
fn at_most_one<T>(record: &'static str, identity_id: i64, rows: Vec<T>) -> MergeErrorResult<Option<T>> {
    if rows.len() > 1 {
        return Err(MergeError::MissingAuxiliaryRecord {
            record,
            identity_id,
            count: rows.len(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(rows.into_iter().next())
}
