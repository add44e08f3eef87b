//! [`Command`] for updating a [`Handbag`]'s descriptive attributes.

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{handbag, Handbag},
    infra::{database, Database},
    Service,
};
#[cfg(doc)]
use crate::domain::handbag::{
    Category, Color, Designer, Manufacturer, Name, PricePerDay,
};
#[cfg(doc)]
use crate::domain::Rental;

use super::Command;

/// [`Command`] for updating a [`Handbag`]'s descriptive attributes.
///
/// The availability flag is not an attribute: it is owned by the [`Rental`]
/// lifecycle and carried over unchanged.
#[derive(Clone, Debug)]
pub struct UpdateHandbag {
    /// ID of the [`Handbag`] to be updated.
    pub bag_id: handbag::Id,

    /// New [`Name`] of the [`Handbag`].
    pub name: handbag::Name,

    /// New [`Manufacturer`] of the [`Handbag`].
    pub manufacturer: handbag::Manufacturer,

    /// New [`Designer`] of the [`Handbag`].
    pub designer: handbag::Designer,

    /// New [`Category`] of the [`Handbag`].
    pub category: handbag::Category,

    /// New [`Color`] of the [`Handbag`].
    pub color: handbag::Color,

    /// New [`PricePerDay`] of the [`Handbag`].
    pub price_per_day: handbag::PricePerDay,
}

impl<Db> Command<UpdateHandbag> for Service<Db>
where
    Db: Database<
            Select<By<Option<Handbag>, handbag::Id>>,
            Ok = Option<Handbag>,
            Err = Traced<database::Error>,
        > + Database<Update<Handbag>, Err = Traced<database::Error>>,
{
    type Ok = Handbag;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateHandbag,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateHandbag {
            bag_id,
            name,
            manufacturer,
            designer,
            category,
            color,
            price_per_day,
        } = cmd;

        let existing = self
            .database()
            .execute(Select(By::<Option<Handbag>, _>::new(bag_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::HandbagNotExists(bag_id))
            .map_err(tracerr::wrap!())?;

        let handbag = Handbag {
            id: bag_id,
            name,
            manufacturer,
            designer,
            category,
            color,
            price_per_day,
            status: existing.status,
        };

        self.database()
            .execute(Update(handbag.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(handbag)
    }
}

/// Error of [`UpdateHandbag`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
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
    use futures::executor::block_on;

    use crate::{
        domain::handbag,
        infra::database::in_memory::{sample, InMemory},
        Command as _, Service,
    };

    use super::UpdateHandbag;

    fn command(bag_id: handbag::Id) -> UpdateHandbag {
        UpdateHandbag {
            bag_id,
            name: "bag02".parse().unwrap(),
            manufacturer: "Chanel".parse().unwrap(),
            designer: "Coco".parse().unwrap(),
            category: "clutch".parse().unwrap(),
            color: "beige".parse().unwrap(),
            price_per_day: "42.00".parse().unwrap(),
        }
    }

    #[test]
    fn rewrites_attributes_but_not_the_status() {
        let mut bag = sample::handbag("15.50");
        bag.status = handbag::Status::Rented;
        let db = InMemory::with([], [bag.clone()], []);
        let service = Service::new(db.clone());

        let updated = block_on(service.execute(command(bag.id))).unwrap();

        assert_eq!(updated.price_per_day, "42.00".parse().unwrap());

        let stored = db.handbag(bag.id).unwrap();
        assert_eq!(stored.name, "bag02".parse().unwrap());
        // The flag stays with the rental lifecycle.
        assert_eq!(stored.status, handbag::Status::Rented);
    }

    #[test]
    fn unknown_handbag_is_reported() {
        let service = Service::new(InMemory::default());

        let err = block_on(service.execute(command(handbag::Id::new())))
            .unwrap_err();

        assert!(err.to_string().contains("does not exist"));
    }
}
