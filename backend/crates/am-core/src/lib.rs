pub mod error;
pub mod merge;
pub mod models;


pub use error::{CoreError, CoreErrorResult};
pub use merge::merge_result::MergeResult;
pub use merge::reassignment_counts::ReassignmentCounts;
pub use merge::record_category::RecordCategory;
pub use merge::role_reconciliation::RoleReconciliation;
pub use models::account_identity::AccountIdentity;
pub use models::api_token::ApiToken;
pub use models::confirm_email_data::ConfirmEmailData;
pub use models::consumed_account::ConsumedAccount;
pub use models::dataset_lock::DatasetLock;
pub use models::dataset_version_user::DatasetVersionUser;
pub use models::dv_object::DvObject;
pub use models::dv_object_type::DvObjectType;
pub use models::guestbook_response::GuestbookResponse;
pub use models::identity_lookup::IdentityLookup;
pub use models::legacy_credential::LegacyCredential;
pub use models::lock_reason::LockReason;
pub use models::owned_record::OwnedRecord;
pub use models::principal_kind::{
    ACCOUNT_PREFIX, BUILTIN_PREFIX, GROUP_PREFIX, PrincipalKind, account_principal,
    is_account_principal,
};
pub use models::role_assignment::RoleAssignment;
pub use models::saved_search::SavedSearch;
pub use models::user_notification::UserNotification;
pub use models::workflow_comment::WorkflowComment;

pub use error_location::ErrorLocation;
