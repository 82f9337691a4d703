//! Eras and era year arithmetic.
//!
//! Calendar dates store an astronomical year. The era year counts away from
//! the boundary between the two eras: astronomical year `0` is year 1 of the
//! era before the common era, there is no year zero in either era.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use tinystr::{tinystr, TinyAsciiStr};

use crate::{error::ErrorMessage, options::EraLabels, DateCalendarError, DateCalendarResult};

/// The era of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Era {
    /// Astronomical years `0` and below (BC or BCE).
    BeforeCommon,
    /// Astronomical years `1` and above (AD or CE).
    Common,
}

impl Era {
    /// Returns the era of an astronomical year.
    #[must_use]
    pub fn from_year(year: &BigInt) -> Self {
        if year < &BigInt::one() {
            Self::BeforeCommon
        } else {
            Self::Common
        }
    }

    /// Returns a stable machine readable code for the era.
    #[must_use]
    pub const fn code(self) -> TinyAsciiStr<16> {
        match self {
            Self::BeforeCommon => tinystr!(16, "bce"),
            Self::Common => tinystr!(16, "ce"),
        }
    }

    /// Returns the era label written after a year.
    #[must_use]
    pub const fn label(self, labels: EraLabels) -> &'static str {
        match (self, labels) {
            (Self::BeforeCommon, EraLabels::Christian) => "BC",
            (Self::Common, EraLabels::Christian) => "AD",
            (Self::BeforeCommon, EraLabels::Common) => "BCE",
            (Self::Common, EraLabels::Common) => "CE",
        }
    }

    /// Converts a year of this era to an astronomical year.
    ///
    /// Era years start at 1, so `0` and negative values are rejected.
    pub fn astronomical_year(self, era_year: BigInt) -> DateCalendarResult<BigInt> {
        if era_year < BigInt::one() {
            return Err(DateCalendarError::range().with_enum(ErrorMessage::EraYearNotPositive));
        }
        Ok(match self {
            Self::BeforeCommon => BigInt::one() - era_year,
            Self::Common => era_year,
        })
    }
}

/// Returns the year within its era of an astronomical year.
pub(crate) fn era_year(year: &BigInt) -> BigInt {
    match Era::from_year(year) {
        Era::BeforeCommon => BigInt::one() - year,
        Era::Common => year.clone(),
    }
}

/// Returns the ordinal century of an era year.
pub(crate) fn century(era_year: &BigInt) -> BigInt {
    (era_year - 1u8).div_floor(&BigInt::from(100u8)) + 1u8
}
