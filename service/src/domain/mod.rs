//! Domain definitions.

pub mod billing;
pub mod customer;
pub mod handbag;
pub mod rental;

pub use self::{customer::Customer, handbag::Handbag, rental::Rental};
