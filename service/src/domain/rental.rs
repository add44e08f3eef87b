//! [`Rental`] definitions.

use common::{define_kind, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{customer, handbag};
#[cfg(doc)]
use crate::domain::{Customer, Handbag};
#[cfg(doc)]
use common::DateTime;

/// One transaction of a [`Customer`] renting a [`Handbag`] for a planned
/// period of days.
///
/// Immutable after creation, except for its [`Status`].
#[derive(Clone, Copy, Debug)]
pub struct Rental {
    /// ID of this [`Rental`].
    pub id: Id,

    /// ID of the [`Customer`] renting the [`Handbag`].
    pub customer_id: customer::Id,

    /// ID of the rented [`Handbag`].
    pub bag_id: handbag::Id,

    /// [`DateTime`] when the [`Handbag`] is rented out.
    pub rented_at: RentedDateTime,

    /// [`DateTime`] when the [`Handbag`] is planned to be returned.
    ///
    /// There is no separate actual-return timestamp, so billing always uses
    /// this planned date.
    pub returned_at: ReturnDateTime,

    /// Whether the insurance is purchased for this [`Rental`].
    ///
    /// Recorded for the paperwork only, never affects the charge.
    pub insurance: bool,

    /// Return [`Status`] of this [`Rental`].
    pub status: Status,
}

impl Rental {
    /// Returns the length of this [`Rental`] in whole calendar days.
    ///
    /// Computed from the planned [`ReturnDateTime`], so a still-
    /// [`Status::Open`] [`Rental`] contributes its full planned duration.
    #[expect(clippy::missing_panics_doc, reason = "dates are ordered")]
    #[must_use]
    pub fn length(&self) -> Days {
        self.returned_at
            .whole_days_since(self.rented_at)
            .try_into()
            .expect("planned return cannot precede the rented date")
    }
}

/// ID of a [`Rental`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Number of whole calendar days a [`Rental`] spans.
pub type Days = u32;

define_kind! {
    #[doc = "Return status of a [`Rental`]."]
    enum Status {
        #[doc = "The [`Handbag`] is still out with the [`Customer`]."]
        Open = 0,

        #[doc = "The [`Handbag`] has been returned."]
        Returned = 1,
    }
}

/// Marker type indicating the renting out of a [`Handbag`].
#[derive(Clone, Copy, Debug)]
pub struct Rented;

/// Marker type indicating the planned return of a [`Handbag`].
#[derive(Clone, Copy, Debug)]
pub struct Return;

/// [`DateTime`] when a [`Rental`] starts.
pub type RentedDateTime = DateTimeOf<(Rental, Rented)>;

/// [`DateTime`] when a [`Rental`] is planned to end.
pub type ReturnDateTime = DateTimeOf<(Rental, Return)>;

#[cfg(test)]
mod spec {
    use super::{customer, handbag, Id, Rental, RentedDateTime, Status};

    fn rental(rented_at: &str, returned_at: &str) -> Rental {
        Rental {
            id: Id::new(),
            customer_id: customer::Id::new(),
            bag_id: handbag::Id::new(),
            rented_at: RentedDateTime::from_rfc3339(rented_at).unwrap(),
            returned_at: super::ReturnDateTime::from_rfc3339(returned_at)
                .unwrap(),
            insurance: false,
            status: Status::Open,
        }
    }

    #[test]
    fn length_is_whole_calendar_days() {
        assert_eq!(
            rental("1970-01-01T00:00:00Z", "1970-01-05T00:00:00Z").length(),
            4,
        );
        assert_eq!(
            rental("2024-02-27T18:00:00Z", "2024-03-01T09:00:00Z").length(),
            3,
        );
        assert_eq!(
            rental("2024-03-01T09:00:00Z", "2024-03-01T18:00:00Z").length(),
            0,
        );
    }

    #[test]
    fn length_ignores_status() {
        let mut r = rental("1970-01-01T00:00:00Z", "1970-01-04T00:00:00Z");
        assert_eq!(r.length(), 3);

        r.status = Status::Returned;
        assert_eq!(r.length(), 3);
    }
}
