//! [`Command`] definition.

pub mod create_customer;
pub mod create_handbag;
pub mod delete_customer;
pub mod delete_handbag;
pub mod delete_rental;
pub mod open_rental;
pub mod return_rental;
pub mod update_customer;
pub mod update_handbag;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_customer::CreateCustomer, create_handbag::CreateHandbag,
    delete_customer::DeleteCustomer, delete_handbag::DeleteHandbag,
    delete_rental::DeleteRental, open_rental::OpenRental,
    return_rental::ReturnRental, update_customer::UpdateCustomer,
    update_handbag::UpdateHandbag,
};
