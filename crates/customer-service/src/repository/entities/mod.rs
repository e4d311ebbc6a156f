//! SeaORM entities for the `Users` and `Customers` tables.

pub mod customer;
pub mod user;
