//! [`Command`] for registering a new [`Customer`].

use common::operations::Insert;
use tracerr::Traced;

use crate::{
    domain::{customer, Customer},
    infra::{database, Database},
    Service,
};
#[cfg(doc)]
use crate::domain::customer::{
    Address, CreditCardNumber, EmailAddress, FirstName, LastName, Phone,
};

use super::Command;

/// [`Command`] for registering a new [`Customer`].
#[derive(Clone, Debug)]
pub struct CreateCustomer {
    /// [`FirstName`] of a new [`Customer`].
    pub first_name: customer::FirstName,

    /// [`LastName`] of a new [`Customer`].
    pub last_name: customer::LastName,

    /// [`Phone`] number of a new [`Customer`].
    pub phone: customer::Phone,

    /// Mailing [`Address`] of a new [`Customer`].
    pub address: customer::Address,

    /// [`EmailAddress`] of a new [`Customer`].
    pub email: customer::EmailAddress,

    /// [`CreditCardNumber`] of a new [`Customer`].
    pub credit_card: customer::CreditCardNumber,
}

impl<Db> Command<CreateCustomer> for Service<Db>
where
    Db: Database<Insert<Customer>, Err = Traced<database::Error>>,
{
    type Ok = Customer;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateCustomer,
    ) -> Result<Self::Ok, Self::Err> {
        let CreateCustomer {
            first_name,
            last_name,
            phone,
            address,
            email,
            credit_card,
        } = cmd;

        let customer = Customer {
            id: customer::Id::new(),
            first_name,
            last_name,
            phone,
            address,
            email,
            credit_card,
        };

        self.database()
            .execute(Insert(customer.clone()))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)?;

        Ok(customer)
    }
}

/// Error of [`CreateCustomer`] [`Command`] execution.
pub type ExecutionError = database::Error;

#[cfg(test)]
mod spec {
    use futures::executor::block_on;

    use crate::{
        infra::database::in_memory::InMemory, Command as _, Service,
    };

    use super::CreateCustomer;

    #[test]
    fn stores_the_new_customer() {
        let db = InMemory::default();
        let service = Service::new(db.clone());

        let customer = block_on(service.execute(CreateCustomer {
            first_name: "Grace".parse().unwrap(),
            last_name: "Hopper".parse().unwrap(),
            phone: "5550012345".parse().unwrap(),
            address: "1 Navy Yard".parse().unwrap(),
            email: "grace@navy.mil".parse().unwrap(),
            credit_card: "424242424242".parse().unwrap(),
        }))
        .unwrap();

        let stored = db.customer(customer.id).unwrap();
        assert_eq!(stored.first_name, customer.first_name);
        assert_eq!(stored.credit_card, customer.credit_card);
    }
}
