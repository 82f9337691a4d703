//! This module implements `DateTokenIndex`.
//!
//! The date token index (DTI) is the unique identifier used by the registry
//! to keep track of date tokens. It spans the full `uint256` range and its
//! midpoint (`2^255`) is linked to the Julian Date `(0, .5)`:
//!
//! ```text
//! DTI         0                2^255             2^256 - 1
//!             |----------------|-----------------|
//! JD  (-2^255, .5)         (0, .5)      (2^255 - 1, .5)
//! ```
//!
//! The difference between two indices is therefore the number of whole days
//! between the two dates they identify.

use core::fmt;

use num_bigint::BigInt;

use crate::{
    calendar::{CalendarDate, CalendarSystem, GregorianCalendarDate, JulianCalendarDate},
    primitive::{BoundedInt, IntKind},
    DateCalendarResult, JulianDate, DAY_FRACTION_MIDNIGHT,
};

/// An index identifying one day on the absolute timeline.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTokenIndex(BigInt);

impl DateTokenIndex {
    /// The integer kind of a date token index.
    pub const KIND: IntKind = IntKind::UINT256;

    /// Creates a new `DateTokenIndex`, failing when `value` is outside the
    /// `uint256` range.
    pub fn try_new(value: impl Into<BigInt>) -> DateCalendarResult<Self> {
        BoundedInt::try_new(value, Self::KIND).map(|v| Self(v.into_inner()))
    }

    /// Returns the index linked to the Julian Day Number `0`, i.e. `2^255`.
    #[must_use]
    pub fn midpoint() -> BigInt {
        Self::KIND.midpoint()
    }

    /// Returns the smallest and largest valid index.
    #[must_use]
    pub fn bounds() -> (BigInt, BigInt) {
        Self::KIND.bounds()
    }

    /// Creates a `DateTokenIndex` from a Julian Date. The day fraction of
    /// the Julian Date is ignored.
    pub fn from_jd(jd: &JulianDate) -> DateCalendarResult<Self> {
        Self::try_new(jd.jdn() + Self::midpoint())
    }

    /// Creates a `DateTokenIndex` from a calendar date.
    pub fn from_calendar_date<C: CalendarSystem>(
        date: &CalendarDate<C>,
    ) -> DateCalendarResult<Self> {
        Self::from_jd(&date.to_jd()?)
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    /// Converts this index to the Julian Date of the day it identifies, taken
    /// at 00:00 UT.
    #[must_use]
    pub fn to_jd(&self) -> JulianDate {
        // Every uint256 value shifted by 2^255 lands inside int256.
        JulianDate::new_unchecked(&self.0 - Self::midpoint(), DAY_FRACTION_MIDNIGHT)
    }

    #[must_use]
    pub fn to_gregorian(&self) -> GregorianCalendarDate {
        self.to_jd().to_gregorian()
    }

    #[must_use]
    pub fn to_julian_calendar(&self) -> JulianCalendarDate {
        self.to_jd().to_julian_calendar()
    }

    /// Returns the index `days` days away from this one.
    pub fn checked_add_days(&self, days: impl Into<BigInt>) -> DateCalendarResult<Self> {
        Self::try_new(&self.0 + days.into())
    }

    /// Returns the signed number of days from this index to `other`.
    #[must_use]
    pub fn days_until(&self, other: &Self) -> BigInt {
        &other.0 - &self.0
    }
}

impl fmt::Display for DateTokenIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<DateTokenIndex> for BigInt {
    fn from(value: DateTokenIndex) -> Self {
        value.0
    }
}
