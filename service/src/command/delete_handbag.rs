//! [`Command`] for deleting a [`Handbag`] record.

use common::operations::{By, Delete};
use tracerr::Traced;

use crate::{
    domain::{handbag, Handbag},
    infra::{database, Database},
    Service,
};
#[cfg(doc)]
use crate::domain::Rental;

use super::Command;

/// [`Command`] for deleting a [`Handbag`] record.
///
/// Unconditional: a [`Handbag`] still referenced by [`Rental`]s is rejected
/// by the storage itself, surfacing as a [`database::Error`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteHandbag {
    /// ID of the [`Handbag`] to be deleted.
    pub bag_id: handbag::Id,
}

impl<Db> Command<DeleteHandbag> for Service<Db>
where
    Db: Database<
            Delete<By<Handbag, handbag::Id>>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteHandbag,
    ) -> Result<Self::Ok, Self::Err> {
        let DeleteHandbag { bag_id } = cmd;

        self.database()
            .execute(Delete(By::new(bag_id)))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)?;

        Ok(())
    }
}

/// Error of [`DeleteHandbag`] [`Command`] execution.
pub type ExecutionError = database::Error;
