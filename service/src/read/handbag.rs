//! [`Handbag`] read model definitions.

use crate::domain::handbag;
#[cfg(doc)]
use crate::domain::{Handbag, Rental};

/// Availability record of a single [`Handbag`].
///
/// Writing it sets the [`handbag::Status`] flag unconditionally, leaving the
/// rest of the [`Handbag`] untouched. Issued only by [`Rental`] lifecycle
/// transitions; nothing ever reconciles the flag backwards from the rental
/// history.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Availability {
    /// ID of the [`Handbag`].
    pub id: handbag::Id,

    /// [`handbag::Status`] to be recorded.
    pub status: handbag::Status,
}
