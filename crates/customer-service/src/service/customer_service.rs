//! Customer service - validated CRUD over the customer store.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use common::{AppError, AppResult};
use domain::{validate_customer, Customer};

use crate::repository::CustomerRepository;

/// Customer service trait for dependency injection.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// List all customers (may be empty)
    async fn list_customers(&self) -> AppResult<Vec<Customer>>;

    /// Validate and insert a new customer
    async fn create_customer(&self, input: Customer) -> AppResult<()>;

    /// Validate and overwrite an existing customer
    async fn update_customer(&self, input: Customer) -> AppResult<()>;

    /// Remove an existing customer
    async fn delete_customer(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of CustomerService using repository.
pub struct CustomerManager {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerManager {
    /// Create new customer service instance with repository
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    async fn ensure_exists(&self, id: i32) -> AppResult<()> {
        if self.repo.exists_by_id(id).await? {
            Ok(())
        } else {
            warn!(customer_id = id, "Customer not found");
            Err(AppError::not_found(format!(
                "Customer with Id {} does not exist.",
                id
            )))
        }
    }
}

fn rejected(err: domain::DomainError) -> AppError {
    warn!(reason = %err, "Customer rejected");
    AppError::from(err)
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        let customers = self.repo.find_all().await?;
        info!(count = customers.len(), "Customers listed");
        Ok(customers)
    }

    async fn create_customer(&self, input: Customer) -> AppResult<()> {
        let customer = validate_customer(Some(&input)).map_err(rejected)?.trimmed();

        let rows = self.repo.insert(customer).await?;
        if rows == 0 {
            error!("Customer insert affected no rows");
            return Err(AppError::internal("Customer creation failed."));
        }

        info!("Customer created");
        Ok(())
    }

    async fn update_customer(&self, input: Customer) -> AppResult<()> {
        let customer = validate_customer(Some(&input)).map_err(rejected)?.trimmed();
        let id = customer.id;

        self.ensure_exists(id).await?;

        // The row can vanish between the existence check and the update
        let rows = self.repo.update(customer).await?;
        if rows == 0 {
            error!(customer_id = id, "Customer update affected no rows");
            return Err(AppError::internal("Update failed unexpectedly."));
        }

        info!(customer_id = id, "Customer updated");
        Ok(())
    }

    async fn delete_customer(&self, id: i32) -> AppResult<()> {
        if id <= 0 {
            warn!(customer_id = id, "Invalid customer id");
            return Err(AppError::validation("Valid customer Id is required."));
        }

        self.ensure_exists(id).await?;

        let rows = self.repo.delete(id).await?;
        if rows == 0 {
            error!(customer_id = id, "Customer delete affected no rows");
            return Err(AppError::internal("Customer deletion failed."));
        }

        info!(customer_id = id, "Customer deleted");
        Ok(())
    }
}
