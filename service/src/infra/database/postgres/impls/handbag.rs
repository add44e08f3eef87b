//! [`Handbag`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::operations::{By, Delete, Insert, Lock, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{handbag, Handbag},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

impl<C, IDs> Database<Select<By<HashMap<handbag::Id, Handbag>, IDs>>>
    for Postgres<C>
where
    C: Connection,
    IDs: AsRef<[handbag::Id]>,
{
    type Ok = HashMap<handbag::Id, Handbag>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<handbag::Id, Handbag>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        // Avoid subtle change for SQL.
        let ids: &[handbag::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let limit = i32::try_from(ids.len()).unwrap();

        const SQL: &str = "\
            SELECT id, name, \
                   manufacturer, designer, category, color, \
                   price_per_day, status \
            FROM handbags \
            WHERE id IN (SELECT unnest($1::UUID[]) LIMIT $2::INT4) \
            LIMIT $2::INT4";
        Ok(self
            .query(SQL, &[&ids, &limit])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| {
                let id = row.get("id");
                (
                    id,
                    Handbag {
                        id,
                        name: row.get("name"),
                        manufacturer: row.get("manufacturer"),
                        designer: row.get("designer"),
                        category: row.get("category"),
                        color: row.get("color"),
                        price_per_day: row.get("price_per_day"),
                        status: row.get("status"),
                    },
                )
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<Handbag>, handbag::Id>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<HashMap<handbag::Id, Handbag>, [handbag::Id; 1]>>,
        Ok = HashMap<handbag::Id, Handbag>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Handbag>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Handbag>, handbag::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .execute(Select(By::new([id])))
            .await
            .map_err(tracerr::wrap!())?
            .remove(&id))
    }
}

impl<C> Database<Select<By<Vec<Handbag>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Handbag>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<Handbag>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, name, \
                   manufacturer, designer, category, color, \
                   price_per_day, status \
            FROM handbags \
            ORDER BY id ASC";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| Handbag {
                id: row.get("id"),
                name: row.get("name"),
                manufacturer: row.get("manufacturer"),
                designer: row.get("designer"),
                category: row.get("category"),
                color: row.get("color"),
                price_per_day: row.get("price_per_day"),
                status: row.get("status"),
            })
            .collect())
    }
}

impl<C> Database<Insert<Handbag>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Handbag>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(handbag): Insert<Handbag>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(handbag))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Handbag>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(handbag): Update<Handbag>,
    ) -> Result<Self::Ok, Self::Err> {
        let Handbag {
            id,
            name,
            manufacturer,
            designer,
            category,
            color,
            price_per_day,
            status,
        } = handbag;

        const SQL: &str = "\
            INSERT INTO handbags (\
                id, name, \
                manufacturer, designer, category, color, \
                price_per_day, status\
            ) \
            VALUES (\
                $1::UUID, $2::VARCHAR, \
                $3::VARCHAR, $4::VARCHAR, $5::VARCHAR, $6::VARCHAR, \
                $7::NUMERIC, $8::INT2\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET name = EXCLUDED.name, \
                manufacturer = EXCLUDED.manufacturer, \
                designer = EXCLUDED.designer, \
                category = EXCLUDED.category, \
                color = EXCLUDED.color, \
                price_per_day = EXCLUDED.price_per_day, \
                status = EXCLUDED.status";
        self.exec(
            SQL,
            &[
                &id,
                &name,
                &manufacturer,
                &designer,
                &category,
                &color,
                &price_per_day,
                &status,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Update<read::handbag::Availability>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(availability): Update<read::handbag::Availability>,
    ) -> Result<Self::Ok, Self::Err> {
        let read::handbag::Availability { id, status } = availability;

        // Unconditional: a missing ID affects zero rows and is not an error
        // of this operation.
        const SQL: &str = "\
            UPDATE handbags \
            SET status = $2::INT2 \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id, &status])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Lock<By<Handbag, handbag::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Handbag, handbag::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: handbag::Id = by.into_inner();

        const SQL: &str = "\
            INSERT INTO handbags_lock \
            VALUES ($1::UUID) \
            ON CONFLICT (id) DO NOTHING";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Delete<By<Handbag, handbag::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Handbag, handbag::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: handbag::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM handbags \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
