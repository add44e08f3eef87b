//! [`Rental`] read model definitions.

use common::Money;

use crate::domain::handbag;
#[cfg(doc)]
use crate::domain::{Customer, Handbag, Rental};

/// Spending report row of a single [`Rental`].
///
/// Assembled on each report request from the live [`Rental`] and [`Handbag`]
/// records, never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Spending {
    /// [`Manufacturer`] of the rented [`Handbag`].
    ///
    /// [`Manufacturer`]: handbag::Manufacturer
    pub manufacturer: handbag::Manufacturer,

    /// [`Name`] of the rented [`Handbag`].
    ///
    /// [`Name`]: handbag::Name
    pub bag_name: handbag::Name,

    /// Amount the [`Customer`] is charged for the [`Rental`].
    pub amount: Money,
}
