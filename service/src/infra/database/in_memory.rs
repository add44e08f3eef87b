//! In-memory [`Database`] double for tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use common::operations::{
    By, Commit, Delete, Insert, Lock, Select, Transact, Update,
};
use tracerr::Traced;

use crate::{
    domain::{customer, handbag, rental, Customer, Handbag, Rental},
    infra::{database, Database},
    read,
};

/// In-memory [`Database`] double backed by a store shared between clones, so
/// a [`Transact`]ed client writes to the same records.
#[derive(Clone, Debug, Default)]
pub(crate) struct InMemory {
    /// Shared stored records.
    state: Arc<Mutex<State>>,
}

/// Records stored in an [`InMemory`] database.
#[derive(Debug, Default)]
struct State {
    /// Stored [`Customer`]s, in insertion order.
    customers: Vec<Customer>,

    /// Stored [`Handbag`]s, in insertion order.
    handbags: Vec<Handbag>,

    /// Stored [`Rental`]s, in insertion order.
    rentals: Vec<Rental>,
}

impl InMemory {
    /// Creates a new [`InMemory`] database containing the provided records.
    pub(crate) fn with(
        customers: impl IntoIterator<Item = Customer>,
        handbags: impl IntoIterator<Item = Handbag>,
        rentals: impl IntoIterator<Item = Rental>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                customers: customers.into_iter().collect(),
                handbags: handbags.into_iter().collect(),
                rentals: rentals.into_iter().collect(),
            })),
        }
    }

    /// Locks the shared [`State`] of this [`InMemory`] database.
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("`InMemory` lock is not poisoned")
    }

    /// Returns the stored [`Customer`] with the provided ID.
    pub(crate) fn customer(&self, id: customer::Id) -> Option<Customer> {
        self.state().customers.iter().find(|c| c.id == id).cloned()
    }

    /// Returns the stored [`Handbag`] with the provided ID.
    pub(crate) fn handbag(&self, id: handbag::Id) -> Option<Handbag> {
        self.state().handbags.iter().find(|h| h.id == id).cloned()
    }

    /// Returns the stored [`Rental`] with the provided ID.
    pub(crate) fn rental(&self, id: rental::Id) -> Option<Rental> {
        self.state().rentals.iter().find(|r| r.id == id).copied()
    }

    /// Upserts the provided [`Handbag`] directly into the store.
    pub(crate) fn put_handbag(&self, handbag: Handbag) {
        let mut state = self.state();
        if let Some(stored) =
            state.handbags.iter_mut().find(|h| h.id == handbag.id)
        {
            *stored = handbag;
        } else {
            state.handbags.push(handbag);
        }
    }
}

impl Database<Transact> for InMemory {
    type Ok = Self;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(self.clone())
    }
}

impl Database<Commit> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        Ok(())
    }
}

impl Database<Lock<By<Rental, rental::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Lock<By<Rental, rental::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Single-threaded tests need no locking.
        Ok(())
    }
}

impl Database<Lock<By<Handbag, handbag::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Lock<By<Handbag, handbag::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Single-threaded tests need no locking.
        Ok(())
    }
}

impl Database<Select<By<Option<Customer>, customer::Id>>> for InMemory {
    type Ok = Option<Customer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Customer>, customer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.customer(by.into_inner()))
    }
}

impl Database<Select<By<Vec<Customer>, ()>>> for InMemory {
    type Ok = Vec<Customer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Customer>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state().customers.clone())
    }
}

impl Database<Insert<Customer>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(customer): Insert<Customer>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(customer)).await
    }
}

impl Database<Update<Customer>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(customer): Update<Customer>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state();
        if let Some(stored) =
            state.customers.iter_mut().find(|c| c.id == customer.id)
        {
            *stored = customer;
        } else {
            state.customers.push(customer);
        }
        Ok(())
    }
}

impl Database<Delete<By<Customer, customer::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Customer, customer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.state().customers.retain(|c| c.id != id);
        Ok(())
    }
}

impl Database<Select<By<Option<Handbag>, handbag::Id>>> for InMemory {
    type Ok = Option<Handbag>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Handbag>, handbag::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.handbag(by.into_inner()))
    }
}

impl Database<Select<By<Vec<Handbag>, ()>>> for InMemory {
    type Ok = Vec<Handbag>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Handbag>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state().handbags.clone())
    }
}

impl Database<Select<By<HashMap<handbag::Id, Handbag>, Vec<handbag::Id>>>>
    for InMemory
{
    type Ok = HashMap<handbag::Id, Handbag>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<HashMap<handbag::Id, Handbag>, Vec<handbag::Id>>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        Ok(self
            .state()
            .handbags
            .iter()
            .filter(|h| ids.contains(&h.id))
            .map(|h| (h.id, h.clone()))
            .collect())
    }
}

impl Database<Insert<Handbag>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(handbag): Insert<Handbag>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(handbag)).await
    }
}

impl Database<Update<Handbag>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(handbag): Update<Handbag>,
    ) -> Result<Self::Ok, Self::Err> {
        self.put_handbag(handbag);
        Ok(())
    }
}

impl Database<Update<read::handbag::Availability>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(availability): Update<read::handbag::Availability>,
    ) -> Result<Self::Ok, Self::Err> {
        // A missing ID affects zero records, same as the SQL `UPDATE`.
        if let Some(stored) = self
            .state()
            .handbags
            .iter_mut()
            .find(|h| h.id == availability.id)
        {
            stored.status = availability.status;
        }
        Ok(())
    }
}

impl Database<Delete<By<Handbag, handbag::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Handbag, handbag::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.state().handbags.retain(|h| h.id != id);
        Ok(())
    }
}

impl Database<Select<By<Option<Rental>, rental::Id>>> for InMemory {
    type Ok = Option<Rental>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Rental>, rental::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.rental(by.into_inner()))
    }
}

impl Database<Select<By<Vec<Rental>, ()>>> for InMemory {
    type Ok = Vec<Rental>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Rental>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state().rentals.clone())
    }
}

impl Database<Select<By<Vec<Rental>, customer::Id>>> for InMemory {
    type Ok = Vec<Rental>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Rental>, customer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let customer_id = by.into_inner();
        Ok(self
            .state()
            .rentals
            .iter()
            .filter(|r| r.customer_id == customer_id)
            .copied()
            .collect())
    }
}

impl Database<Insert<Rental>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(rental): Insert<Rental>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(rental)).await
    }
}

impl Database<Update<Rental>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(rental): Update<Rental>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state();
        if let Some(stored) =
            state.rentals.iter_mut().find(|r| r.id == rental.id)
        {
            *stored = rental;
        } else {
            state.rentals.push(rental);
        }
        Ok(())
    }
}

impl Database<Delete<By<Rental, rental::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Rental, rental::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.state().rentals.retain(|r| r.id != id);
        Ok(())
    }
}

/// Factories of sample domain records for tests.
pub(crate) mod sample {
    use std::time::Duration;

    use crate::domain::{customer, handbag, rental, Customer, Handbag, Rental};

    /// Creates a [`Customer`] with a fresh ID and fixed attributes.
    pub(crate) fn customer() -> Customer {
        Customer {
            id: customer::Id::new(),
            first_name: "Grace".parse().unwrap(),
            last_name: "Hopper".parse().unwrap(),
            phone: "5550012345".parse().unwrap(),
            address: "1 Navy Yard".parse().unwrap(),
            email: "grace@navy.mil".parse().unwrap(),
            credit_card: "424242424242".parse().unwrap(),
        }
    }

    /// Creates an in-stock [`Handbag`] with the provided daily price.
    pub(crate) fn handbag(price_per_day: &str) -> Handbag {
        Handbag {
            id: handbag::Id::new(),
            name: "bag01".parse().unwrap(),
            manufacturer: "Prada".parse().unwrap(),
            designer: "Miuccia".parse().unwrap(),
            category: "tote".parse().unwrap(),
            color: "black".parse().unwrap(),
            price_per_day: price_per_day.parse().unwrap(),
            status: handbag::Status::InStock,
        }
    }

    /// Creates an open [`Rental`] of `days` whole days starting at the Unix
    /// epoch.
    pub(crate) fn rental(
        customer_id: customer::Id,
        bag_id: handbag::Id,
        days: u64,
    ) -> Rental {
        let rented_at = rental::RentedDateTime::UNIX_EPOCH;
        Rental {
            id: rental::Id::new(),
            customer_id,
            bag_id,
            rented_at,
            returned_at: (rented_at + Duration::from_secs(days * 86_400))
                .coerce(),
            insurance: false,
            status: rental::Status::Open,
        }
    }
}
