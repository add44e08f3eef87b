//! [`Command`] for deleting a [`Customer`] record.

use common::operations::{By, Delete};
use tracerr::Traced;

use crate::{
    domain::{customer, Customer},
    infra::{database, Database},
    Service,
};
#[cfg(doc)]
use crate::domain::Rental;

use super::Command;

/// [`Command`] for deleting a [`Customer`] record.
///
/// Unconditional: a [`Customer`] still referenced by [`Rental`]s is rejected
/// by the storage itself, surfacing as a [`database::Error`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteCustomer {
    /// ID of the [`Customer`] to be deleted.
    pub customer_id: customer::Id,
}

impl<Db> Command<DeleteCustomer> for Service<Db>
where
    Db: Database<
            Delete<By<Customer, customer::Id>>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteCustomer,
    ) -> Result<Self::Ok, Self::Err> {
        let DeleteCustomer { customer_id } = cmd;

        self.database()
            .execute(Delete(By::new(customer_id)))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)?;

        Ok(())
    }
}

/// Error of [`DeleteCustomer`] [`Command`] execution.
pub type ExecutionError = database::Error;
