pub mod account_identity;
pub mod api_token;
pub mod confirm_email_data;
pub mod consumed_account;
pub mod dataset_lock;
pub mod dataset_version_user;
pub mod dv_object;
pub mod dv_object_type;
pub mod guestbook_response;
pub mod identity_lookup;
pub mod legacy_credential;
pub mod lock_reason;
pub mod owned_record;
pub mod principal_kind;
pub mod role_assignment;
pub mod saved_search;
pub mod user_notification;
pub mod workflow_comment;
