//! [`Command`] for adding a new [`Handbag`] to the catalog.

use common::operations::Insert;
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

use super::Command;

/// [`Command`] for adding a new [`Handbag`] to the catalog.
#[derive(Clone, Debug)]
pub struct CreateHandbag {
    /// [`Name`] of a new [`Handbag`].
    pub name: handbag::Name,

    /// [`Manufacturer`] of a new [`Handbag`].
    pub manufacturer: handbag::Manufacturer,

    /// [`Designer`] of a new [`Handbag`].
    pub designer: handbag::Designer,

    /// [`Category`] of a new [`Handbag`].
    pub category: handbag::Category,

    /// [`Color`] of a new [`Handbag`].
    pub color: handbag::Color,

    /// [`PricePerDay`] of a new [`Handbag`].
    pub price_per_day: handbag::PricePerDay,
}

impl<Db> Command<CreateHandbag> for Service<Db>
where
    Db: Database<Insert<Handbag>, Err = Traced<database::Error>>,
{
    type Ok = Handbag;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateHandbag,
    ) -> Result<Self::Ok, Self::Err> {
        let CreateHandbag {
            name,
            manufacturer,
            designer,
            category,
            color,
            price_per_day,
        } = cmd;

        let handbag = Handbag {
            id: handbag::Id::new(),
            name,
            manufacturer,
            designer,
            category,
            color,
            price_per_day,
            status: handbag::Status::InStock,
        };

        self.database()
            .execute(Insert(handbag.clone()))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)?;

        Ok(handbag)
    }
}

/// Error of [`CreateHandbag`] [`Command`] execution.
pub type ExecutionError = database::Error;

#[cfg(test)]
mod spec {
    use futures::executor::block_on;

    use crate::{
        domain::handbag, infra::database::in_memory::InMemory, Command as _,
        Service,
    };

    use super::CreateHandbag;

    #[test]
    fn new_handbag_starts_in_stock() {
        let db = InMemory::default();
        let service = Service::new(db.clone());

        let handbag = block_on(service.execute(CreateHandbag {
            name: "bag01".parse().unwrap(),
            manufacturer: "Prada".parse().unwrap(),
            designer: "Miuccia".parse().unwrap(),
            category: "tote".parse().unwrap(),
            color: "black".parse().unwrap(),
            price_per_day: "15.50".parse().unwrap(),
        }))
        .unwrap();

        let stored = db.handbag(handbag.id).unwrap();
        assert_eq!(stored.status, handbag::Status::InStock);
        assert_eq!(stored.price_per_day, "15.50".parse().unwrap());
    }
}
