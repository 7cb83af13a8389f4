use crate::MergeErrorResult;

use am_core::{
    DatasetLock, DatasetVersionUser, DvObject, GuestbookResponse, OwnedRecord, ReassignmentCounts,
    RecordCategory, SavedSearch, UserNotification, WorkflowComment,
};
use am_db::{
    AccessRequestRepository, DatasetLockRepository, DatasetVersionUserRepository, DbError,
    DbErrorResult, DvObjectRepository, GuestbookResponseRepository, SavedSearchRepository,
    UnitOfWork, UserNotificationRepository, WorkflowCommentRepository,
};

use std::marker::PhantomData;

use async_trait::async_trait;
use log::debug;
use sqlx::SqliteConnection;

/// Read and write access to one category of records that attribute
/// themselves to an account.
#[async_trait]
pub trait OwnedRepository: Send + Sync {
    type Record: OwnedRecord + Send + Sync;

    const CATEGORY: RecordCategory;

    async fn fetch_owned(
        conn: &mut SqliteConnection,
        owner_id: i64,
    ) -> DbErrorResult<Vec<Self::Record>>;

    async fn persist_owner(conn: &mut SqliteConnection, record: &Self::Record)
    -> DbErrorResult<bool>;
}

/// Set-based owner rewrite for rows that are not entities. Only the number
/// of affected rows comes back.
#[async_trait]
pub trait BulkOwnerRewrite: Send + Sync {
    const CATEGORY: RecordCategory;

    async fn rewrite_owner(conn: &mut SqliteConnection, from: i64, to: i64) -> DbErrorResult<u64>;
}

/// One entry of the category table.
#[async_trait]
pub trait OwnerSweep: Send + Sync {
    fn category(&self) -> RecordCategory;

    async fn reassign_owner(
        &self,
        conn: &mut SqliteConnection,
        consumed_id: i64,
        ongoing_id: i64,
    ) -> MergeErrorResult<u64>;
}

/// Loads every record of `R` owned by the consumed account, re-points it and
/// persists only the records that actually changed. A record that vanished
/// before it could be written is a not-found store error.
pub struct EntitySweep<R>(PhantomData<fn() -> R>);

impl<R> EntitySweep<R> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for EntitySweep<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R> OwnerSweep for EntitySweep<R>
where
    R: OwnedRepository + 'static,
{
    fn category(&self) -> RecordCategory {
        R::CATEGORY
    }

    async fn reassign_owner(
        &self,
        conn: &mut SqliteConnection,
        consumed_id: i64,
        ongoing_id: i64,
    ) -> MergeErrorResult<u64> {
        let records = R::fetch_owned(&mut *conn, consumed_id).await?;

        let mut count = 0;
        for mut record in records {
            if record.reassign_owner(consumed_id, ongoing_id) {
                if !R::persist_owner(&mut *conn, &record).await? {
                    return Err(DbError::not_found(R::CATEGORY.as_str(), record.id()).into());
                }
                count += 1;
            }
        }

        Ok(count)
    }
}

pub struct BulkSweep<B>(PhantomData<fn() -> B>);

impl<B> BulkSweep<B> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<B> Default for BulkSweep<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<B> OwnerSweep for BulkSweep<B>
where
    B: BulkOwnerRewrite + 'static,
{
    fn category(&self) -> RecordCategory {
        B::CATEGORY
    }

    async fn reassign_owner(
        &self,
        conn: &mut SqliteConnection,
        consumed_id: i64,
        ongoing_id: i64,
    ) -> MergeErrorResult<u64> {
        Ok(B::rewrite_owner(conn, consumed_id, ongoing_id).await?)
    }
}

/// Every category a merge re-points, in the order it runs them.
pub static CATEGORY_SWEEPS: &[&dyn OwnerSweep] = &[
    &EntitySweep::<DatasetVersionUserRepository>::new(),
    &EntitySweep::<DatasetLockRepository>::new(),
    &EntitySweep::<DvObjectRepository>::new(),
    &EntitySweep::<GuestbookResponseRepository>::new(),
    &EntitySweep::<UserNotificationRepository>::new(),
    &EntitySweep::<SavedSearchRepository>::new(),
    &EntitySweep::<WorkflowCommentRepository>::new(),
    &BulkSweep::<AccessRequestRepository>::new(),
];

/// Re-points everything the consumed account owns to the ongoing account.
#[derive(Clone, Copy)]
pub struct EntityReassigner {
    sweeps: &'static [&'static dyn OwnerSweep],
}

impl Default for EntityReassigner {
    fn default() -> Self {
        Self {
            sweeps: CATEGORY_SWEEPS,
        }
    }
}

impl EntityReassigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every sweep. Re-running against records already owned by
    /// `ongoing_id` counts zero.
    pub async fn reassign_all(
        &self,
        uow: &mut UnitOfWork,
        consumed_id: i64,
        ongoing_id: i64,
    ) -> MergeErrorResult<ReassignmentCounts> {
        let mut counts = ReassignmentCounts::default();

        for sweep in self.sweeps {
            let count = sweep
                .reassign_owner(uow.conn(), consumed_id, ongoing_id)
                .await?;
            debug!("Reassigned {} {}", count, sweep.category());
            counts.record(sweep.category(), count);
        }

        Ok(counts)
    }

    /// Run the sweep for a single category.
    pub async fn reassign_category(
        &self,
        uow: &mut UnitOfWork,
        category: RecordCategory,
        consumed_id: i64,
        ongoing_id: i64,
    ) -> MergeErrorResult<u64> {
        let mut count = 0;
        for sweep in self.sweeps.iter().filter(|s| s.category() == category) {
            count += sweep
                .reassign_owner(uow.conn(), consumed_id, ongoing_id)
                .await?;
        }
        Ok(count)
    }
}

#[async_trait]
impl OwnedRepository for DatasetVersionUserRepository {
    type Record = DatasetVersionUser;

    const CATEGORY: RecordCategory = RecordCategory::DatasetVersionUsers;

    async fn fetch_owned(
        conn: &mut SqliteConnection,
        owner_id: i64,
    ) -> DbErrorResult<Vec<DatasetVersionUser>> {
        Self::find_by_owner(conn, owner_id).await
    }

    async fn persist_owner(
        conn: &mut SqliteConnection,
        record: &DatasetVersionUser,
    ) -> DbErrorResult<bool> {
        Self::update_owner(conn, record).await
    }
}

#[async_trait]
impl OwnedRepository for DatasetLockRepository {
    type Record = DatasetLock;

    const CATEGORY: RecordCategory = RecordCategory::DatasetLocks;

    async fn fetch_owned(
        conn: &mut SqliteConnection,
        owner_id: i64,
    ) -> DbErrorResult<Vec<DatasetLock>> {
        Self::find_by_owner(conn, owner_id).await
    }

    async fn persist_owner(conn: &mut SqliteConnection, record: &DatasetLock) -> DbErrorResult<bool> {
        Self::update_owner(conn, record).await
    }
}

#[async_trait]
impl OwnedRepository for DvObjectRepository {
    type Record = DvObject;

    const CATEGORY: RecordCategory = RecordCategory::DvObjects;

    // Creator and releaser are matched independently.
    async fn fetch_owned(conn: &mut SqliteConnection, owner_id: i64) -> DbErrorResult<Vec<DvObject>> {
        Self::find_by_account(conn, owner_id).await
    }

    async fn persist_owner(conn: &mut SqliteConnection, record: &DvObject) -> DbErrorResult<bool> {
        Self::update_attribution(conn, record).await
    }
}

#[async_trait]
impl OwnedRepository for GuestbookResponseRepository {
    type Record = GuestbookResponse;

    const CATEGORY: RecordCategory = RecordCategory::GuestbookResponses;

    async fn fetch_owned(
        conn: &mut SqliteConnection,
        owner_id: i64,
    ) -> DbErrorResult<Vec<GuestbookResponse>> {
        Self::find_by_owner(conn, owner_id).await
    }

    async fn persist_owner(
        conn: &mut SqliteConnection,
        record: &GuestbookResponse,
    ) -> DbErrorResult<bool> {
        Self::update_owner(conn, record).await
    }
}

#[async_trait]
impl OwnedRepository for UserNotificationRepository {
    type Record = UserNotification;

    const CATEGORY: RecordCategory = RecordCategory::UserNotifications;

    async fn fetch_owned(
        conn: &mut SqliteConnection,
        owner_id: i64,
    ) -> DbErrorResult<Vec<UserNotification>> {
        Self::find_by_owner(conn, owner_id).await
    }

    async fn persist_owner(
        conn: &mut SqliteConnection,
        record: &UserNotification,
    ) -> DbErrorResult<bool> {
        Self::update_owner(conn, record).await
    }
}

#[async_trait]
impl OwnedRepository for SavedSearchRepository {
    type Record = SavedSearch;

    const CATEGORY: RecordCategory = RecordCategory::SavedSearches;

    async fn fetch_owned(
        conn: &mut SqliteConnection,
        owner_id: i64,
    ) -> DbErrorResult<Vec<SavedSearch>> {
        Self::find_by_owner(conn, owner_id).await
    }

    async fn persist_owner(conn: &mut SqliteConnection, record: &SavedSearch) -> DbErrorResult<bool> {
        Self::update_owner(conn, record).await
    }
}

#[async_trait]
impl OwnedRepository for WorkflowCommentRepository {
    type Record = WorkflowComment;

    const CATEGORY: RecordCategory = RecordCategory::WorkflowComments;

    async fn fetch_owned(
        conn: &mut SqliteConnection,
        owner_id: i64,
    ) -> DbErrorResult<Vec<WorkflowComment>> {
        Self::find_by_owner(conn, owner_id).await
    }

    async fn persist_owner(
        conn: &mut SqliteConnection,
        record: &WorkflowComment,
    ) -> DbErrorResult<bool> {
        Self::update_owner(conn, record).await
    }
}

#[async_trait]
impl BulkOwnerRewrite for AccessRequestRepository {
    const CATEGORY: RecordCategory = RecordCategory::AccessRequests;

    async fn rewrite_owner(conn: &mut SqliteConnection, from: i64, to: i64) -> DbErrorResult<u64> {
        Self::reassign_identity(conn, from, to).await
    }
}
