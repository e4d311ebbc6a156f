//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::error::StoreResult;
use crate::infra::Database;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user row, returning the number of rows written.
    ///
    /// A second row with the same email fails with `StoreError::DuplicateKey`.
    async fn insert(&self, name: String, email: String, password_hash: String) -> StoreResult<u64>;

    /// Find user by exact email address
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Database,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, name: String, email: String, password_hash: String) -> StoreResult<u64> {
        self.db
            .scoped(|scope| {
                Box::pin(async move {
                    let active_model = ActiveModel {
                        id: NotSet,
                        name: Set(name),
                        email: Set(email),
                        password: Set(password_hash),
                    };

                    let rows = UserEntity::insert(active_model)
                        .exec_without_returning(scope.conn())
                        .await?;
                    Ok(rows)
                })
            })
            .await
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let email = email.to_string();
        self.db
            .scoped(|scope| {
                Box::pin(async move {
                    let result = UserEntity::find()
                        .filter(user::Column::Email.eq(email))
                        .one(scope.conn())
                        .await?;
                    Ok(result.map(User::from))
                })
            })
            .await
    }
}
