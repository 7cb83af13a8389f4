use crate::DbErrorResult;

use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

/// One database transaction shared by every step of a multi-entity change.
///
/// Nothing inside commits on its own: the owner calls [`UnitOfWork::commit`]
/// once at the end, or [`UnitOfWork::rollback`] (dropping it also rolls back).
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    pub async fn begin(pool: &SqlitePool) -> DbErrorResult<Self> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Connection to run statements on. Reborrow per call (`uow.conn()`).
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> DbErrorResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> DbErrorResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}
