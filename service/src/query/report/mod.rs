//! Report [`Query`] definitions.
//!
//! [`Query`]: crate::Query

pub mod best_customers;
pub mod customer_spend;

pub use self::{
    best_customers::BestCustomers, customer_spend::CustomerSpend,
};
