//! [`BestCustomers`] report definition.

use std::{cmp, collections::HashMap};

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{customer, rental, Customer, Rental},
    infra::{database, Database},
    Query, Service,
};

/// [`Query`] ranking all [`Customer`]s by their total rental length.
#[derive(Clone, Copy, Debug)]
pub struct BestCustomers;

/// Row in the output of the [`BestCustomers`] [`Query`].
#[derive(Clone, Debug)]
pub struct Row {
    /// Ranked [`Customer`].
    pub customer: Customer,

    /// Total length of all the [`Customer`]'s [`Rental`]s in whole days.
    ///
    /// Still-open [`Rental`]s contribute their full planned duration.
    pub total_days: rental::Days,
}

impl<Db> Query<BestCustomers> for Service<Db>
where
    Db: Database<
            Select<By<Vec<Customer>, ()>>,
            Ok = Vec<Customer>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Rental>, ()>>,
            Ok = Vec<Rental>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Vec<Row>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: BestCustomers) -> Result<Self::Ok, Self::Err> {
        let customers = self
            .database()
            .execute(Select(By::<Vec<Customer>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        let rentals = self
            .database()
            .execute(Select(By::<Vec<Rental>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        let mut total_days = HashMap::<customer::Id, rental::Days>::new();
        for rental in &rentals {
            *total_days.entry(rental.customer_id).or_default() +=
                rental.length();
        }

        let mut rows = customers
            .into_iter()
            .map(|customer| Row {
                total_days: total_days
                    .get(&customer.id)
                    .copied()
                    .unwrap_or_default(),
                customer,
            })
            .collect::<Vec<_>>();
        // Stable, so tied `Customer`s keep the store's order.
        rows.sort_by_key(|row| cmp::Reverse(row.total_days));

        Ok(rows)
    }
}
