use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

/// Transaction that commits and reopens itself every `batch_size` recorded writes
///
/// Bounds transaction size for large write sequences. Batches committed before a failure
/// stay committed, only the open batch is lost on rollback.
pub struct BatchTransaction<'a> {
    db: &'a DatabaseConnection,
    txn: Option<DatabaseTransaction>,
    batch_size: usize,
    pending: usize,
    committed: usize,
}

impl<'a> BatchTransaction<'a> {
    /// Begin the first batch
    pub async fn begin(db: &'a DatabaseConnection, batch_size: usize) -> Result<Self, DbErr> {
        Ok(Self {
            db,
            txn: Some(db.begin().await?),
            batch_size: batch_size.max(1),
            pending: 0,
            committed: 0,
        })
    }

    /// Get a reference to the open transaction
    pub fn txn(&self) -> Result<&DatabaseTransaction, DbErr> {
        self.txn
            .as_ref()
            .ok_or_else(|| DbErr::Custom("batch transaction is closed".to_string()))
    }

    /// Count one successful write, committing the batch once it is full
    pub async fn record(&mut self) -> Result<(), DbErr> {
        self.pending += 1;

        if self.pending >= self.batch_size {
            // The previous batch must be committed before the next one begins, SQLite
            // only has one connection
            self.flush().await?;
            self.txn = Some(self.db.begin().await?);
        }

        Ok(())
    }

    /// Commit the open batch, returning the total number of committed writes
    pub async fn commit(mut self) -> Result<usize, DbErr> {
        self.flush().await?;
        Ok(self.committed)
    }

    /// Roll back the open batch, returning the number of writes committed by earlier batches
    pub async fn rollback(mut self) -> Result<usize, DbErr> {
        if let Some(txn) = self.txn.take() {
            txn.rollback().await?;
        }
        self.pending = 0;

        Ok(self.committed)
    }

    async fn flush(&mut self) -> Result<(), DbErr> {
        if let Some(txn) = self.txn.take() {
            txn.commit().await?;
            tracing::debug!("Committed batch of {} writes", self.pending);
            self.committed += self.pending;
            self.pending = 0;
        }

        Ok(())
    }
}
