//! PostgreSQL implementation of the seeding store.

use crate::error::{to_write_error, PostgreSQLStoreError};
use crate::insert::{generate_create_table, generate_drop_table, generate_insert};
use async_trait::async_trait;
use seed_core::{validate_table_name, EmployeeRecord, WorkerId};
use seed_store::{Store, StoreTransaction, WriteError};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_postgres::{Client, NoTls, Statement};
use tracing::{debug, info};

/// PostgreSQL store that opens one connection per transaction.
pub struct PostgreSQLStore {
    connection_string: String,
    table_name: String,
    slots: Arc<Semaphore>,
    pool_size: usize,
}

impl PostgreSQLStore {
    /// Create a new PostgreSQL store.
    ///
    /// # Arguments
    ///
    /// * `connection_string` - PostgreSQL connection string (e.g., "host=localhost user=postgres password=postgres dbname=testdb")
    /// * `table_name` - Table the employee rows are inserted into
    /// * `pool_size` - Maximum number of transactions open at the same time
    ///
    /// The connection is tested once before returning.
    pub async fn new(
        connection_string: &str,
        table_name: &str,
        pool_size: usize,
    ) -> Result<Self, PostgreSQLStoreError> {
        validate_table_name(table_name)
            .map_err(|e| PostgreSQLStoreError::Config(e.to_string()))?;
        if pool_size == 0 {
            return Err(PostgreSQLStoreError::Config(
                "pool size must be at least 1".to_string(),
            ));
        }

        let store = Self {
            connection_string: connection_string.to_string(),
            table_name: table_name.to_string(),
            slots: Arc::new(Semaphore::new(pool_size)),
            pool_size,
        };

        // Test connection
        let client = store.connect().await?;
        client.simple_query("SELECT 1").await?;

        Ok(store)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    async fn connect(&self) -> Result<Client, tokio_postgres::Error> {
        let (client, connection) = tokio_postgres::connect(&self.connection_string, NoTls).await?;

        // Spawn the connection task
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        Ok(client)
    }

    /// Drop the employees table if it exists.
    pub async fn drop_table(&self) -> Result<(), PostgreSQLStoreError> {
        let client = self.connect().await?;
        info!("Dropping table: {}", self.table_name);
        client
            .execute(&generate_drop_table(&self.table_name), &[])
            .await?;
        Ok(())
    }

    /// Create the employees table if it does not exist.
    pub async fn create_table(&self) -> Result<(), PostgreSQLStoreError> {
        let client = self.connect().await?;
        let sql = generate_create_table(&self.table_name);
        info!("Creating table: {}", self.table_name);
        debug!("DDL: {}", sql);
        client.execute(&sql, &[]).await?;
        Ok(())
    }

    /// Drop and recreate the employees table.
    pub async fn recreate_table(&self) -> Result<(), PostgreSQLStoreError> {
        self.drop_table().await?;
        self.create_table().await?;
        Ok(())
    }

    /// Get the row count of the employees table.
    pub async fn row_count(&self) -> Result<u64, PostgreSQLStoreError> {
        let client = self.connect().await?;
        let sql = format!("SELECT COUNT(*) FROM \"{}\"", self.table_name);
        let row = client.query_one(&sql, &[]).await?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }
}

#[async_trait]
impl Store for PostgreSQLStore {
    async fn begin_transaction(
        &self,
        worker_id: WorkerId,
    ) -> Result<Box<dyn StoreTransaction>, WriteError> {
        let slot = Arc::clone(&self.slots)
            .acquire_owned()
            .await
            .map_err(|_| WriteError::Connection("connection pool closed".to_string()))?;

        let client = self.connect().await.map_err(|e| {
            WriteError::Connection(format!("failed to connect to PostgreSQL: {e}"))
        })?;
        client.batch_execute("BEGIN").await.map_err(to_write_error)?;
        let statement = client
            .prepare(&generate_insert(&self.table_name))
            .await
            .map_err(to_write_error)?;

        debug!("Worker {} opened PostgreSQL transaction", worker_id);

        Ok(Box::new(PostgreSQLTransaction {
            client,
            statement,
            _slot: slot,
        }))
    }
}

/// An open PostgreSQL transaction.
///
/// The transaction owns its connection. Dropping it closes the connection,
/// which makes the server abort anything not yet committed.
struct PostgreSQLTransaction {
    client: Client,
    statement: Statement,
    _slot: OwnedSemaphorePermit,
}

#[async_trait]
impl StoreTransaction for PostgreSQLTransaction {
    async fn insert(&mut self, record: &EmployeeRecord) -> Result<(), WriteError> {
        let gender = record.gender.as_str();
        let status = record.emp_status_code.code();
        self.client
            .execute(
                &self.statement,
                &[
                    &record.full_name,
                    &record.phone_number,
                    &record.email_address,
                    &gender,
                    &record.job_role_id,
                    &record.employment_date,
                    &record.termination_date,
                    &status,
                ],
            )
            .await
            .map_err(to_write_error)?;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), WriteError> {
        self.client
            .batch_execute("COMMIT")
            .await
            .map_err(to_write_error)
    }

    async fn rollback(self: Box<Self>) -> Result<(), WriteError> {
        self.client
            .batch_execute("ROLLBACK")
            .await
            .map_err(to_write_error)
    }
}
