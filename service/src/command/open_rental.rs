//! [`Command`] for opening a new [`Rental`].

use common::operations::{
    By, Commit, Insert, Lock, Transact, Transacted, Update,
};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{customer, handbag, rental, Handbag, Rental},
    infra::{database, Database},
    read,
    Service,
};
#[cfg(doc)]
use crate::domain::Customer;
#[cfg(doc)]
use common::DateTime;

use super::Command;

/// [`Command`] for opening a new [`Rental`].
#[derive(Clone, Copy, Debug)]
pub struct OpenRental {
    /// ID of the [`Customer`] renting the [`Handbag`].
    pub customer_id: customer::Id,

    /// ID of the [`Handbag`] to be rented out.
    pub bag_id: handbag::Id,

    /// [`DateTime`] when the [`Handbag`] is rented out.
    pub rented_at: rental::RentedDateTime,

    /// [`DateTime`] when the [`Handbag`] is planned to be returned.
    ///
    /// Must lie in the future, which is validated by the calling form, not
    /// here.
    pub returned_at: rental::ReturnDateTime,

    /// Whether the insurance is purchased for the new [`Rental`].
    pub insurance: bool,
}

impl<Db> Command<OpenRental> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Handbag, handbag::Id>>,
            Err = Traced<database::Error>,
        > + Database<Insert<Rental>, Err = Traced<database::Error>>
        + Database<
            Update<read::handbag::Availability>,
            Err = Traced<database::Error>,
        > + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Rental;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: OpenRental) -> Result<Self::Ok, Self::Err> {
        let OpenRental {
            customer_id,
            bag_id,
            rented_at,
            returned_at,
            insurance,
        } = cmd;

        let rental = Rental {
            id: rental::Id::new(),
            customer_id,
            bag_id,
            rented_at,
            returned_at,
            insurance,
            status: rental::Status::Open,
        };

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::wrap!())?;

        // Avoid concurrent rentals of the same `Handbag`.
        tx.execute(Lock(By::new(bag_id)))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)?;

        tx.execute(Insert(rental))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)?;

        tx.execute(Update(read::handbag::Availability {
            id: bag_id,
            status: handbag::Status::Rented,
        }))
        .await
        .map_err(tracerr::wrap!())
        .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::wrap!())
            .map(drop)?;

        log::info!(
            "`Rental(id: {})` opened: `Handbag(id: {bag_id})` rented out to \
             `Customer(id: {customer_id})`",
            rental.id,
        );

        Ok(rental)
    }
}

/// Error of [`OpenRental`] [`Command`] execution.
pub type ExecutionError = database::Error;

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use futures::executor::block_on;

    use crate::{
        domain::{handbag, rental},
        infra::database::in_memory::{sample, InMemory},
        Command as _, Service,
    };

    use super::OpenRental;

    #[test]
    fn opens_rental_and_marks_handbag_rented() {
        let customer = sample::customer();
        let bag = sample::handbag("15.50");
        let db = InMemory::with([customer.clone()], [bag.clone()], []);
        let service = Service::new(db.clone());

        let rented_at = rental::RentedDateTime::UNIX_EPOCH;
        let rental = block_on(service.execute(OpenRental {
            customer_id: customer.id,
            bag_id: bag.id,
            rented_at,
            returned_at: (rented_at + Duration::from_secs(4 * 86_400))
                .coerce(),
            insurance: true,
        }))
        .unwrap();

        assert_eq!(rental.status, rental::Status::Open);
        assert_eq!(rental.customer_id, customer.id);
        assert_eq!(rental.bag_id, bag.id);

        let stored = db.rental(rental.id).unwrap();
        assert_eq!(stored.status, rental::Status::Open);
        assert!(stored.insurance);

        assert_eq!(
            db.handbag(bag.id).unwrap().status,
            handbag::Status::Rented,
        );
    }

    #[test]
    fn planned_duration_is_recorded_verbatim() {
        let customer = sample::customer();
        let bag = sample::handbag("10.00");
        let db = InMemory::with([customer.clone()], [bag.clone()], []);
        let service = Service::new(db.clone());

        let rented_at = rental::RentedDateTime::UNIX_EPOCH;
        let rental = block_on(service.execute(OpenRental {
            customer_id: customer.id,
            bag_id: bag.id,
            rented_at,
            returned_at: (rented_at + Duration::from_secs(7 * 86_400))
                .coerce(),
            insurance: false,
        }))
        .unwrap();

        assert_eq!(db.rental(rental.id).unwrap().length(), 7);
    }
}
