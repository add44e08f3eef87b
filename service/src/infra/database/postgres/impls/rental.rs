//! [`Rental`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::operations::{By, Delete, Insert, Lock, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{customer, rental, Rental},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

impl<C, IDs> Database<Select<By<HashMap<rental::Id, Rental>, IDs>>>
    for Postgres<C>
where
    C: Connection,
    IDs: AsRef<[rental::Id]>,
{
    type Ok = HashMap<rental::Id, Rental>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<rental::Id, Rental>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        // Avoid subtle change for SQL.
        let ids: &[rental::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let limit = i32::try_from(ids.len()).unwrap();

        const SQL: &str = "\
            SELECT id, customer_id, bag_id, \
                   rented_at, returned_at, \
                   insurance, status \
            FROM rentals \
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
                    Rental {
                        id,
                        customer_id: row.get("customer_id"),
                        bag_id: row.get("bag_id"),
                        rented_at: row.get("rented_at"),
                        returned_at: row.get("returned_at"),
                        insurance: row.get("insurance"),
                        status: row.get("status"),
                    },
                )
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<Rental>, rental::Id>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<HashMap<rental::Id, Rental>, [rental::Id; 1]>>,
        Ok = HashMap<rental::Id, Rental>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Rental>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Rental>, rental::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .execute(Select(By::new([id])))
            .await
            .map_err(tracerr::wrap!())?
            .remove(&id))
    }
}

impl<C> Database<Select<By<Vec<Rental>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Rental>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<Rental>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, customer_id, bag_id, \
                   rented_at, returned_at, \
                   insurance, status \
            FROM rentals \
            ORDER BY id ASC";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| Rental {
                id: row.get("id"),
                customer_id: row.get("customer_id"),
                bag_id: row.get("bag_id"),
                rented_at: row.get("rented_at"),
                returned_at: row.get("returned_at"),
                insurance: row.get("insurance"),
                status: row.get("status"),
            })
            .collect())
    }
}

impl<C> Database<Select<By<Vec<Rental>, customer::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Rental>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Rental>, customer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let customer_id: customer::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, customer_id, bag_id, \
                   rented_at, returned_at, \
                   insurance, status \
            FROM rentals \
            WHERE customer_id = $1::UUID \
            ORDER BY id ASC";
        Ok(self
            .query(SQL, &[&customer_id])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| Rental {
                id: row.get("id"),
                customer_id: row.get("customer_id"),
                bag_id: row.get("bag_id"),
                rented_at: row.get("rented_at"),
                returned_at: row.get("returned_at"),
                insurance: row.get("insurance"),
                status: row.get("status"),
            })
            .collect())
    }
}

impl<C> Database<Insert<Rental>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Rental>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(rental): Insert<Rental>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(rental)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Rental>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(rental): Update<Rental>,
    ) -> Result<Self::Ok, Self::Err> {
        let Rental {
            id,
            customer_id,
            bag_id,
            rented_at,
            returned_at,
            insurance,
            status,
        } = rental;

        const SQL: &str = "\
            INSERT INTO rentals (\
                id, customer_id, bag_id, \
                rented_at, returned_at, \
                insurance, status\
            ) \
            VALUES (\
                $1::UUID, $2::UUID, $3::UUID, \
                $4::TIMESTAMPTZ, $5::TIMESTAMPTZ, \
                $6::BOOLEAN, $7::INT2\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET customer_id = EXCLUDED.customer_id, \
                bag_id = EXCLUDED.bag_id, \
                rented_at = EXCLUDED.rented_at, \
                returned_at = EXCLUDED.returned_at, \
                insurance = EXCLUDED.insurance, \
                status = EXCLUDED.status";
        self.exec(
            SQL,
            &[
                &id,
                &customer_id,
                &bag_id,
                &rented_at,
                &returned_at,
                &insurance,
                &status,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Lock<By<Rental, rental::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Rental, rental::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: rental::Id = by.into_inner();

        const SQL: &str = "\
            INSERT INTO rentals_lock \
            VALUES ($1::UUID) \
            ON CONFLICT (id) DO NOTHING";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Delete<By<Rental, rental::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Rental, rental::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: rental::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM rentals \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
