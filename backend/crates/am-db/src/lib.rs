pub mod connection;
pub mod error;
pub mod repositories;

mod decode;

pub use connection::database::{MIGRATOR, PoolSettings, open_pool, run_migrations};
pub use connection::unit_of_work::UnitOfWork;
pub use error::{DbError, DbErrorResult};
pub use repositories::access_request_repository::AccessRequestRepository;
pub use repositories::account_identity_repository::AccountIdentityRepository;
pub use repositories::api_token_repository::ApiTokenRepository;
pub use repositories::confirm_email_repository::ConfirmEmailRepository;
pub use repositories::dataset_lock_repository::DatasetLockRepository;
pub use repositories::dataset_version_user_repository::DatasetVersionUserRepository;
pub use repositories::dv_object_repository::DvObjectRepository;
pub use repositories::guestbook_response_repository::GuestbookResponseRepository;
pub use repositories::identity_lookup_repository::IdentityLookupRepository;
pub use repositories::legacy_credential_repository::LegacyCredentialRepository;
pub use repositories::role_assignment_repository::RoleAssignmentRepository;
pub use repositories::saved_search_repository::SavedSearchRepository;
pub use repositories::user_notification_repository::UserNotificationRepository;
pub use repositories::workflow_comment_repository::WorkflowCommentRepository;
