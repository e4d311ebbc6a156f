//! Customer repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::customer::{self, ActiveModel, Entity as CustomerEntity};
use super::error::StoreResult;
use crate::infra::Database;
use domain::Customer;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
///
/// Mutations report the number of affected rows; interpreting zero is the
/// caller's concern.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List every customer in storage order
    async fn find_all(&self) -> StoreResult<Vec<Customer>>;

    /// Insert a customer; `customer.id` is ignored
    async fn insert(&self, customer: Customer) -> StoreResult<u64>;

    /// Check whether a customer row with this id exists
    async fn exists_by_id(&self, id: i32) -> StoreResult<bool>;

    /// Overwrite every field of the row identified by `customer.id`
    async fn update(&self, customer: Customer) -> StoreResult<u64>;

    /// Remove the row identified by `id`
    async fn delete(&self, id: i32) -> StoreResult<u64>;
}

/// Concrete implementation of CustomerRepository
pub struct CustomerStore {
    db: Database,
}

impl CustomerStore {
    /// Create new repository instance
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn find_all(&self) -> StoreResult<Vec<Customer>> {
        self.db
            .scoped(|scope| {
                Box::pin(async move {
                    let models = CustomerEntity::find()
                        .order_by_asc(customer::Column::Id)
                        .all(scope.conn())
                        .await?;
                    Ok(models.into_iter().map(Customer::from).collect())
                })
            })
            .await
    }

    async fn insert(&self, customer: Customer) -> StoreResult<u64> {
        self.db
            .scoped(|scope| {
                Box::pin(async move {
                    let active_model = ActiveModel {
                        id: NotSet,
                        name: Set(customer.name),
                        contact: Set(customer.contact),
                        city: Set(customer.city),
                        email: Set(customer.email),
                    };

                    let rows = CustomerEntity::insert(active_model)
                        .exec_without_returning(scope.conn())
                        .await?;
                    Ok(rows)
                })
            })
            .await
    }

    async fn exists_by_id(&self, id: i32) -> StoreResult<bool> {
        self.db
            .scoped(|scope| {
                Box::pin(async move {
                    let found = CustomerEntity::find_by_id(id).one(scope.conn()).await?;
                    Ok(found.is_some())
                })
            })
            .await
    }

    async fn update(&self, customer: Customer) -> StoreResult<u64> {
        self.db
            .scoped(|scope| {
                Box::pin(async move {
                    let result = CustomerEntity::update_many()
                        .col_expr(customer::Column::Name, Expr::value(customer.name))
                        .col_expr(customer::Column::Contact, Expr::value(customer.contact))
                        .col_expr(customer::Column::City, Expr::value(customer.city))
                        .col_expr(customer::Column::Email, Expr::value(customer.email))
                        .filter(customer::Column::Id.eq(customer.id))
                        .exec(scope.conn())
                        .await?;
                    Ok(result.rows_affected)
                })
            })
            .await
    }

    async fn delete(&self, id: i32) -> StoreResult<u64> {
        self.db
            .scoped(|scope| {
                Box::pin(async move {
                    let result = CustomerEntity::delete_by_id(id).exec(scope.conn()).await?;
                    Ok(result.rows_affected)
                })
            })
            .await
    }
}
