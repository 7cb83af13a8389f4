pub mod access_request_repository;
pub mod account_identity_repository;
pub mod api_token_repository;
pub mod confirm_email_repository;
pub mod dataset_lock_repository;
pub mod dataset_version_user_repository;
pub mod dv_object_repository;
pub mod guestbook_response_repository;
pub mod identity_lookup_repository;
pub mod legacy_credential_repository;
pub mod role_assignment_repository;
pub mod saved_search_repository;
pub mod user_notification_repository;
pub mod workflow_comment_repository;
