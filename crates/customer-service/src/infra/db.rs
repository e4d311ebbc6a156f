//! Database connection pool and per-call connection scopes.
//!
//! Every store operation runs inside [`Database::scoped`]: one pooled
//! connection is held for the duration of a single transaction, which is
//! committed on success and rolled back on error. If the future is dropped
//! mid-flight the transaction is dropped with it and the connection returns
//! to the pool.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection,
    DatabaseTransaction, DbErr, Statement, TransactionTrait,
};

use common::DatabaseConfig;

use crate::repository::{StoreError, StoreResult};

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

/// A single acquired connection, valid for one scoped call.
pub struct ConnectionScope<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> ConnectionScope<'a> {
    /// Connection to run statements on.
    pub fn conn(&self) -> &'a DatabaseTransaction {
        self.txn
    }
}

impl Database {
    /// Open the connection pool described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!(
            max_connections = config.max_connections,
            "Database pool connected"
        );

        Ok(Self { connection })
    }

    /// Wrap an already established connection pool.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Get a reference to the underlying pool.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Run `f` against one connection acquired for this call only.
    pub async fn scoped<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: for<'a> FnOnce(
                ConnectionScope<'a>,
            ) -> Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>
            + Send,
        T: Send,
    {
        let txn = self.connection.begin().await.map_err(StoreError::from)?;
        let scope = ConnectionScope { txn: &txn };

        match f(scope).await {
            Ok(result) => {
                txn.commit().await.map_err(StoreError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
