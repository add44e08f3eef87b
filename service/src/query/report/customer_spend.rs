//! [`CustomerSpend`] report definition.

use std::collections::HashMap;

use common::{
    operations::{By, Select},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{billing, customer, handbag, Customer, Handbag, Rental},
    infra::{database, Database},
    read, Query, Service,
};

/// [`Query`] reporting the spending of a single [`Customer`] across all of
/// their [`Rental`]s.
#[derive(Clone, Copy, Debug)]
pub struct CustomerSpend {
    /// ID of the [`Customer`] to report on.
    pub customer_id: customer::Id,
}

/// Output of the [`CustomerSpend`] [`Query`].
#[derive(Clone, Debug)]
pub struct Output {
    /// Per-[`Rental`] [`Spending`] rows.
    ///
    /// Empty if the [`Customer`] has no [`Rental`]s, which is a regular
    /// outcome rather than an error.
    ///
    /// [`Spending`]: read::rental::Spending
    pub rows: Vec<read::rental::Spending>,

    /// Sum of all the [`rows`] amounts.
    ///
    /// [`rows`]: Output::rows
    pub total: Money,
}

impl<Db> Query<CustomerSpend> for Service<Db>
where
    Db: Database<
            Select<By<Option<Customer>, customer::Id>>,
            Ok = Option<Customer>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Rental>, customer::Id>>,
            Ok = Vec<Rental>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<HashMap<handbag::Id, Handbag>, Vec<handbag::Id>>>,
            Ok = HashMap<handbag::Id, Handbag>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        query: CustomerSpend,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CustomerSpend { customer_id } = query;

        self.database()
            .execute(Select(By::<Option<Customer>, _>::new(customer_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CustomerNotExists(customer_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let rentals = self
            .database()
            .execute(Select(By::<Vec<Rental>, _>::new(customer_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let bag_ids = rentals.iter().map(|r| r.bag_id).collect::<Vec<_>>();
        let handbags = self
            .database()
            .execute(Select(
                By::<HashMap<handbag::Id, Handbag>, _>::new(bag_ids),
            ))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let rows = rentals
            .iter()
            .map(|rental| {
                let bag = handbags
                    .get(&rental.bag_id)
                    .ok_or(E::HandbagNotExists(rental.bag_id))
                    .map_err(tracerr::wrap!())?;

                // The `Handbag`'s current price applies: no price is
                // snapshotted at the rental time.
                Ok(read::rental::Spending {
                    manufacturer: bag.manufacturer.clone(),
                    bag_name: bag.name.clone(),
                    amount: billing::charge(
                        rental.length(),
                        bag.price_per_day,
                    ),
                })
            })
            .collect::<Result<Vec<_>, Traced<E>>>()?;

        let total = rows.iter().map(|row| row.amount).sum();

        Ok(Output { rows, total })
    }
}

/// Error of [`CustomerSpend`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Customer`] with the provided ID does not exist.
    #[display("`Customer(id: {_0})` does not exist")]
    CustomerNotExists(#[error(not(source))] customer::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Handbag`] with the provided ID does not exist.
    #[display("`Handbag(id: {_0})` does not exist")]
    HandbagNotExists(#[error(not(source))] handbag::Id),
}

#[cfg(test)]
mod spec {
    use common::Money;
    use futures::executor::block_on;

    use crate::{
        domain::customer,
        infra::database::in_memory::{sample, InMemory},
        Query as _, Service,
    };

    use super::CustomerSpend;

    #[test]
    fn rows_and_total_cover_all_rentals() {
        let customer = sample::customer();
        let cheap = sample::handbag("10.00");
        let dear = sample::handbag("20.00");

        let rentals = [
            sample::rental(customer.id, cheap.id, 3),
            sample::rental(customer.id, dear.id, 2),
        ];
        let db = InMemory::with(
            [customer.clone()],
            [cheap.clone(), dear.clone()],
            rentals,
        );
        let service = Service::new(db);

        let output = block_on(service.execute(CustomerSpend {
            customer_id: customer.id,
        }))
        .unwrap();

        assert_eq!(output.rows.len(), 2);
        assert_eq!(output.rows[0].bag_name, cheap.name);
        assert_eq!(output.rows[0].amount, "30.00".parse().unwrap());
        assert_eq!(output.rows[1].bag_name, dear.name);
        assert_eq!(output.rows[1].amount, "40.00".parse().unwrap());
        assert_eq!(output.total, "70.00".parse().unwrap());
    }

    #[test]
    fn no_rentals_is_an_empty_report() {
        let customer = sample::customer();
        let db = InMemory::with([customer.clone()], [], []);
        let service = Service::new(db);

        let output = block_on(service.execute(CustomerSpend {
            customer_id: customer.id,
        }))
        .unwrap();

        assert!(output.rows.is_empty());
        assert_eq!(output.total, Money::ZERO);
    }

    #[test]
    fn unknown_customer_is_reported() {
        let service = Service::new(InMemory::default());

        let err = block_on(service.execute(CustomerSpend {
            customer_id: customer::Id::new(),
        }))
        .unwrap_err();

        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn other_customers_spending_is_not_counted() {
        let reported = sample::customer();
        let other = sample::customer();
        let bag = sample::handbag("10.00");

        let rentals = [
            sample::rental(reported.id, bag.id, 1),
            sample::rental(other.id, bag.id, 9),
        ];
        let db = InMemory::with(
            [reported.clone(), other],
            [bag],
            rentals,
        );
        let service = Service::new(db);

        let output = block_on(service.execute(CustomerSpend {
            customer_id: reported.id,
        }))
        .unwrap();

        assert_eq!(output.rows.len(), 1);
        assert_eq!(output.total, "10.00".parse().unwrap());
    }
}
