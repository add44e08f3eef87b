//! [`Command`] for returning a rented [`Handbag`].

use common::{
    operations::{By, Commit, Lock, Select, Transact, Transacted, Update},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{billing, handbag, rental, Handbag, Rental},
    infra::{database, Database},
    read,
    Service,
};

use super::Command;

/// [`Command`] for returning a rented [`Handbag`], closing its [`Rental`].
#[derive(Clone, Copy, Debug)]
pub struct ReturnRental {
    /// ID of the [`Rental`] to be closed.
    pub rental_id: rental::Id,
}

/// Output of a [`ReturnRental`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Output {
    /// Length of the closed [`Rental`] in whole days.
    pub days: rental::Days,

    /// Total charge for the closed [`Rental`].
    ///
    /// Calculated from the [`Handbag`]'s current daily price, displayed to
    /// the operator and never persisted.
    pub charge: Money,
}

impl<Db> Command<ReturnRental> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<Rental>, rental::Id>>,
            Ok = Option<Rental>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Handbag>, handbag::Id>>,
            Ok = Option<Handbag>,
            Err = Traced<database::Error>,
        >,
    Transacted<Db>: Database<
            Lock<By<Rental, rental::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Rental>, rental::Id>>,
            Ok = Option<Rental>,
            Err = Traced<database::Error>,
        > + Database<Update<Rental>, Err = Traced<database::Error>>
        + Database<
            Update<read::handbag::Availability>,
            Err = Traced<database::Error>,
        > + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: ReturnRental) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ReturnRental { rental_id } = cmd;

        let rental = self
            .database()
            .execute(Select(By::<Option<Rental>, _>::new(rental_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RentalNotExists(rental_id))
            .map_err(tracerr::wrap!())?;

        let handbag = self
            .database()
            .execute(Select(By::<Option<Handbag>, _>::new(rental.bag_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::HandbagNotExists(rental.bag_id))
            .map_err(tracerr::wrap!())?;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent returns of the same `Rental`.
        tx.execute(Lock(By::new(rental.id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let mut rental = tx
            .execute(Select(By::<Option<Rental>, _>::new(rental_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RentalNotExists(rental_id))
            .map_err(tracerr::wrap!())?;

        rental.status = rental::Status::Returned;

        tx.execute(Update(rental))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Update(read::handbag::Availability {
            id: rental.bag_id,
            status: handbag::Status::InStock,
        }))
        .await
        .map_err(tracerr::map_from_and_wrap!(=> E))
        .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let days = rental.length();
        let charge = billing::charge(days, handbag.price_per_day);

        log::info!(
            "`Rental(id: {rental_id})` returned after {days} day(s), \
             charging {charge}",
        );

        Ok(Output { days, charge })
    }
}

/// Error of [`ReturnRental`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Handbag`] with the provided ID does not exist.
    #[display("`Handbag(id: {_0})` does not exist")]
    HandbagNotExists(#[error(not(source))] handbag::Id),

    /// [`Rental`] with the provided ID does not exist.
    #[display("`Rental(id: {_0})` does not exist")]
    RentalNotExists(#[error(not(source))] rental::Id),
}
