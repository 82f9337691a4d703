//! This module implements `JulianDate`.
//!
//! Astronomers count the days elapsed since a fixed point in history with
//! the Julian Day Number (JDN): the number of solar days since the Julian
//! epoch, 12:00 UT (noon) on 1 January 4713 BC of the proleptic Julian
//! calendar. A Julian Date (JD) is the JDN plus the fraction of a day since
//! the preceding noon.
//!
//! Dates in this crate are taken at 00:00 UT, so every Julian Date produced
//! by a conversion carries the day fraction `.5`.

use core::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{
    calendar::{
        CalendarDate, CalendarSystem, Gregorian, GregorianCalendarDate, Julian, JulianCalendarDate,
    },
    primitive::{BoundedInt, IntKind},
    DateCalendarResult, DateTokenIndex,
};

/// A Julian Date, composed of a Julian Day Number and a day fraction.
///
/// The day fraction is a fixed point value holding the digits after the
/// decimal point: `5` is `.5`, `51` is `.51`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JulianDate {
    jdn: BigInt,
    day_fraction: u16,
}

impl JulianDate {
    /// The integer kind of a Julian Day Number.
    pub const JDN_KIND: IntKind = IntKind::INT256;

    /// Creates a new `JulianDate`, failing when `jdn` is outside the `int256`
    /// range.
    pub fn try_new(jdn: impl Into<BigInt>, day_fraction: u16) -> DateCalendarResult<Self> {
        let jdn = BoundedInt::try_new(jdn, Self::JDN_KIND)?;
        Ok(Self {
            jdn: jdn.into_inner(),
            day_fraction,
        })
    }

    pub(crate) fn new_unchecked(jdn: BigInt, day_fraction: u16) -> Self {
        Self {
            jdn: BoundedInt::new_unchecked(jdn, Self::JDN_KIND).into_inner(),
            day_fraction,
        }
    }

    /// Creates a `JulianDate` from a date token index.
    #[must_use]
    pub fn from_dti(dti: &DateTokenIndex) -> Self {
        dti.to_jd()
    }

    /// Returns the Julian Day Number.
    #[inline]
    #[must_use]
    pub fn jdn(&self) -> &BigInt {
        &self.jdn
    }

    /// Returns the day fraction digits.
    #[inline]
    #[must_use]
    pub fn day_fraction(&self) -> u16 {
        self.day_fraction
    }

    /// Converts this Julian Date to a date token index.
    pub fn to_dti(&self) -> DateCalendarResult<DateTokenIndex> {
        DateTokenIndex::from_jd(self)
    }

    /// Converts this Julian Date to a floating point value.
    ///
    /// Large Julian Day Numbers cannot be represented exactly, so this is
    /// only useful for display and for comparison with floating point tools.
    #[must_use]
    pub fn to_float(&self) -> f64 {
        let jdn = self.jdn.to_f64().unwrap_or(f64::NAN);
        let digits = fraction_digits(self.day_fraction);
        jdn + f64::from(self.day_fraction) / f64::from(10u32.pow(digits))
    }

    /// Converts this Julian Date to a date of the calendar `C`.
    #[must_use]
    pub fn to_calendar<C: CalendarSystem>(&self) -> CalendarDate<C> {
        CalendarDate::from_jd(self)
    }

    #[must_use]
    pub fn to_gregorian(&self) -> GregorianCalendarDate {
        self.to_calendar::<Gregorian>()
    }

    #[must_use]
    pub fn to_julian_calendar(&self) -> JulianCalendarDate {
        self.to_calendar::<Julian>()
    }

    /// Returns the Julian Date `days` days away from this one, keeping the
    /// day fraction.
    pub fn checked_add_days(&self, days: impl Into<BigInt>) -> DateCalendarResult<Self> {
        Self::try_new(&self.jdn + days.into(), self.day_fraction)
    }
}

// The number of decimal digits in the day fraction; zero still has one.
fn fraction_digits(fraction: u16) -> u32 {
    fraction.checked_ilog10().map_or(1, |d| d + 1)
}

// Written as the `(jdn, .fraction)` pair so that negative day numbers are
// not mistaken for a decimal value.
impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, .{})", self.jdn, self.day_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::JulianDate;
    use crate::{error::ErrorKind, primitive::IntKind};
    use alloc::string::ToString;

    #[test]
    fn jd_bounds() {
        let (lower, upper) = IntKind::INT256.bounds();

        // JD works at upper and lower bounds but breaks beyond that point
        assert!(JulianDate::try_new(lower.clone(), 5).is_ok());
        assert!(JulianDate::try_new(upper.clone(), 5).is_ok());

        let err = JulianDate::try_new(lower - 1u8, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = JulianDate::try_new(upper + 1u8, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn to_float() {
        assert_eq!(JulianDate::try_new(2_451_544, 5).unwrap().to_float(), 2_451_544.5);
        assert_eq!(JulianDate::try_new(-1, 5).unwrap().to_float(), -0.5);
        assert_eq!(JulianDate::try_new(10, 51).unwrap().to_float(), 10.51);
        assert_eq!(JulianDate::try_new(10, 0).unwrap().to_float(), 10.0);
        assert_eq!(JulianDate::try_new(0, 25).unwrap().to_float(), 0.25);
    }

    #[test]
    fn display() {
        assert_eq!(JulianDate::try_new(2_451_544, 5).unwrap().to_string(), "(2451544, .5)");
        assert_eq!(JulianDate::try_new(-1, 51).unwrap().to_string(), "(-1, .51)");
        assert_eq!(JulianDate::try_new(3, 0).unwrap().to_string(), "(3, .0)");
    }

    #[test]
    fn add_days_keeps_fraction() {
        let jd = JulianDate::try_new(100, 5).unwrap();
        let later = jd.checked_add_days(-250).unwrap();
        assert_eq!(later, JulianDate::try_new(-150, 5).unwrap());

        let (_, upper) = IntKind::INT256.bounds();
        let last = JulianDate::try_new(upper, 5).unwrap();
        assert_eq!(last.checked_add_days(1).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn structural_equality() {
        let a = JulianDate::try_new(7, 5).unwrap();
        assert_eq!(a, JulianDate::try_new(7, 5).unwrap());
        assert_ne!(a, JulianDate::try_new(7, 0).unwrap());
        assert_ne!(a, JulianDate::try_new(8, 5).unwrap());
    }
}
