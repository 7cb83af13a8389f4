use crate::models::account_identity::AccountIdentity;
use crate::models::legacy_credential::LegacyCredential;
use crate::{CoreError, CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// The account being merged away: its identity plus, for accounts created
/// through the built-in login path, the legacy credential that shares its
/// user name. Both are destroyed together at the end of a merge.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumedAccount {
    identity: AccountIdentity,
    legacy_credential: Option<LegacyCredential>,
}

impl ConsumedAccount {
    #[track_caller]
    pub fn new(
        identity: AccountIdentity,
        legacy_credential: Option<LegacyCredential>,
    ) -> CoreErrorResult<Self> {
        if let Some(credential) = &legacy_credential
            && credential.user_name != identity.user_identifier
        {
            return Err(CoreError::CredentialMismatch {
                user_name: credential.user_name.clone(),
                user_identifier: identity.user_identifier.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            identity,
            legacy_credential,
        })
    }

    pub fn id(&self) -> i64 {
        self.identity.id
    }

    pub fn identity(&self) -> &AccountIdentity {
        &self.identity
    }

    pub fn legacy_credential(&self) -> Option<&LegacyCredential> {
        self.legacy_credential.as_ref()
    }
}
