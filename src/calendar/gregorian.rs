//! The proleptic Gregorian calendar.

use num_bigint::BigInt;
use num_integer::Integer;

use super::{
    floor_div, march_based_year, sealed, ymd_from_march_based, CalendarDate, CalendarSystem,
    JulianCalendarDate,
};
use crate::DateCalendarResult;

// The Julian Day Number of day 0 of the March-based year 0, i.e. 29 February 0.
const MARCH_EPOCH: i64 = 1_721_118;

/// The proleptic Gregorian calendar.
///
/// Leap years are the years divisible by 4, except the century years that
/// are not divisible by 400.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gregorian;

/// A date in the proleptic Gregorian calendar.
pub type GregorianCalendarDate = CalendarDate<Gregorian>;

impl sealed::Sealed for Gregorian {}

impl CalendarSystem for Gregorian {
    const IDENTIFIER: &'static str = "gregory";

    fn jdn_from_ymd(year: &BigInt, month: u8, day: u8) -> BigInt {
        let (z, days_before_month) = march_based_year(year, month);
        BigInt::from(day) + days_before_month + &z * 365u16 + floor_div(&z, 4)
            - floor_div(&z, 100)
            + floor_div(&z, 400)
            + MARCH_EPOCH
    }

    fn ymd_from_jdn(jdn: &BigInt) -> (BigInt, u8, u8) {
        let z = jdn - MARCH_EPOCH;
        let a = floor_div(&(&z * 100u8 - 25u8), 3_652_425);
        let a_div_4 = floor_div(&a, 4);
        let y = floor_div(&(&z * 100u8 - 25u8 + &a * 100u8 - &a_div_4 * 100u8), 36_525);
        let c = z + a - a_div_4 - floor_div(&(&y * 36_525u16), 100);
        ymd_from_march_based(y, &c)
    }

    fn is_leap_year(year: &BigInt) -> bool {
        year.is_multiple_of(&BigInt::from(4u8))
            && (!year.is_multiple_of(&BigInt::from(100u8))
                || year.is_multiple_of(&BigInt::from(400u16)))
    }
}

impl CalendarDate<Gregorian> {
    /// Converts this date to the Julian calendar date of the same day.
    pub fn to_julian_calendar(&self) -> DateCalendarResult<JulianCalendarDate> {
        self.to_calendar()
    }
}
