//! [`Command`] for updating a [`Customer`]'s attributes.

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
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

/// [`Command`] for updating a [`Customer`]'s attributes.
#[derive(Clone, Debug)]
pub struct UpdateCustomer {
    /// ID of the [`Customer`] to be updated.
    pub customer_id: customer::Id,

    /// New [`FirstName`] of the [`Customer`].
    pub first_name: customer::FirstName,

    /// New [`LastName`] of the [`Customer`].
    pub last_name: customer::LastName,

    /// New [`Phone`] number of the [`Customer`].
    pub phone: customer::Phone,

    /// New mailing [`Address`] of the [`Customer`].
    pub address: customer::Address,

    /// New [`EmailAddress`] of the [`Customer`].
    pub email: customer::EmailAddress,

    /// New [`CreditCardNumber`] of the [`Customer`].
    pub credit_card: customer::CreditCardNumber,
}

impl<Db> Command<UpdateCustomer> for Service<Db>
where
    Db: Database<
            Select<By<Option<Customer>, customer::Id>>,
            Ok = Option<Customer>,
            Err = Traced<database::Error>,
        > + Database<Update<Customer>, Err = Traced<database::Error>>,
{
    type Ok = Customer;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateCustomer,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateCustomer {
            customer_id,
            first_name,
            last_name,
            phone,
            address,
            email,
            credit_card,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<Customer>, _>::new(customer_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CustomerNotExists(customer_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let customer = Customer {
            id: customer_id,
            first_name,
            last_name,
            phone,
            address,
            email,
            credit_card,
        };

        self.database()
            .execute(Update(customer.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(customer)
    }
}

/// Error of [`UpdateCustomer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Customer`] with the provided ID does not exist.
    #[display("`Customer(id: {_0})` does not exist")]
    CustomerNotExists(#[error(not(source))] customer::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}
