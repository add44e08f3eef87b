//! Billing calculation for [`Rental`] charges.

use common::Money;

use crate::domain::{handbag::PricePerDay, rental::Days};
#[cfg(doc)]
use crate::domain::{Handbag, Rental};

/// Calculates the total charge for renting a [`Handbag`] with the provided
/// daily price over the provided number of days.
///
/// Fixed-point arithmetic with 2 decimal digits of precision, so charges
/// aggregate without floating-point drift. The insurance flag of a [`Rental`]
/// never enters the calculation.
#[must_use]
pub fn charge(days: Days, price_per_day: PricePerDay) -> Money {
    price_per_day.money() * days
}
