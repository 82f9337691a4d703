//! The proleptic Julian calendar.

use num_bigint::BigInt;
use num_integer::Integer;

use super::{
    floor_div, march_based_year, sealed, ymd_from_march_based, CalendarDate, CalendarSystem,
    GregorianCalendarDate,
};
use crate::DateCalendarResult;

// The Julian Day Number of day 0 of the March-based year 0, i.e. 29 February 0.
const MARCH_EPOCH: i64 = 1_721_116;

/// The proleptic Julian calendar, where every fourth year is a leap year.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Julian;

/// A date in the proleptic Julian calendar.
pub type JulianCalendarDate = CalendarDate<Julian>;

impl sealed::Sealed for Julian {}

impl CalendarSystem for Julian {
    const IDENTIFIER: &'static str = "julian";

    fn jdn_from_ymd(year: &BigInt, month: u8, day: u8) -> BigInt {
        let (z, days_before_month) = march_based_year(year, month);
        BigInt::from(day) + days_before_month + &z * 365u16 + floor_div(&z, 4) + MARCH_EPOCH
    }

    fn ymd_from_jdn(jdn: &BigInt) -> (BigInt, u8, u8) {
        let z = jdn - MARCH_EPOCH;
        let y = floor_div(&(&z * 100u8 - 25u8), 36_525);
        let c = z - floor_div(&(&y * 36_525u16), 100);
        ymd_from_march_based(y, &c)
    }

    fn is_leap_year(year: &BigInt) -> bool {
        year.is_multiple_of(&BigInt::from(4u8))
    }
}

impl CalendarDate<Julian> {
    /// Converts this date to the Gregorian calendar date of the same day.
    pub fn to_gregorian(&self) -> DateCalendarResult<GregorianCalendarDate> {
        self.to_calendar()
    }
}

#[cfg(test)]
mod tests {
    use super::{Julian, JulianCalendarDate};
    use crate::{calendar::CalendarSystem, DateTokenIndex, GregorianCalendarDate, JulianDate};
    use alloc::string::ToString;
    use num_bigint::BigInt;

    fn ymd(jdn: i64) -> (BigInt, u8, u8) {
        Julian::ymd_from_jdn(&BigInt::from(jdn))
    }

    #[test]
    fn jdn_table() {
        let table: [(i64, i64, u8, u8); 18] = [
            (-39, -4713, 11, 24),
            (-38, -4713, 11, 25),
            (-1, -4712, 1, 1),
            (0, -4712, 1, 2),
            (29, -4712, 1, 31),
            (1_721_057, 0, 1, 1),
            (1_721_116, 0, 2, 29),
            (1_721_117, 0, 3, 1),
            (1_721_422, 0, 12, 31),
            (1_721_423, 1, 1, 1),
            (2_299_159, 1582, 10, 4),
            (2_299_170, 1582, 10, 15),
            (2_393_482, 1840, 12, 31),
            (2_400_012, 1858, 11, 17),
            (2_415_032, 1900, 1, 1),
            (2_415_398, 1901, 1, 1),
            (2_440_600, 1970, 1, 1),
            (2_444_252, 1980, 1, 1),
        ];
        for (jdn, year, month, day) in table {
            assert_eq!(ymd(jdn), (BigInt::from(year), month, day), "jdn {jdn}");
            assert_eq!(
                Julian::jdn_from_ymd(&BigInt::from(year), month, day),
                BigInt::from(jdn),
                "{year}-{month}-{day}"
            );
        }
    }

    #[test]
    fn leap_years() {
        for year in [1900, 2000, 1700, 0, -4, -4712, 4] {
            assert!(Julian::is_leap_year(&BigInt::from(year)), "{year}");
        }
        for year in [1901, 2021, 1, -1, -4713] {
            assert!(!Julian::is_leap_year(&BigInt::from(year)), "{year}");
        }
    }

    #[test]
    fn strings_around_epoch() {
        let expected = [
            "Monday 1 January 4713 BC",
            "Tuesday 2 January 4713 BC",
            "Wednesday 3 January 4713 BC",
            "Thursday 4 January 4713 BC",
            "Friday 5 January 4713 BC",
            "Saturday 6 January 4713 BC",
            "Sunday 7 January 4713 BC",
        ];
        for (jdn, expected) in (-1..).zip(expected) {
            let jd = JulianDate::try_new(jdn, 5).unwrap();
            assert_eq!(jd.to_julian_calendar().to_string(), expected);
        }
    }

    #[test]
    fn calendars_diverge_on_same_day() {
        // The Gregorian reform: 4 October 1582 (Julian) was followed by
        // 15 October 1582 (Gregorian).
        let last_julian = JulianCalendarDate::from_dmy(4, 10, 1582).unwrap();
        let first_gregorian = GregorianCalendarDate::from_dmy(15, 10, 1582).unwrap();
        assert_eq!(
            last_julian.checked_add_days(1).unwrap().to_gregorian().unwrap(),
            first_gregorian
        );
        assert_eq!(last_julian.to_string(), "Thursday 4 October 1582");
        assert_eq!(first_gregorian.to_string(), "Friday 15 October 1582");

        let jd = JulianDate::try_new(2_440_587, 5).unwrap();
        assert_eq!(jd.to_gregorian().to_string(), "Thursday 1 January 1970");
        assert_eq!(jd.to_julian_calendar().to_string(), "Thursday 19 December 1969");
        assert_eq!(jd.to_julian_calendar().to_gregorian().unwrap(), jd.to_gregorian());
        assert_eq!(jd.to_gregorian().to_julian_calendar().unwrap(), jd.to_julian_calendar());
    }

    #[test]
    fn parse_and_display() {
        let date = JulianCalendarDate::from_string("1 January 4713 BC").unwrap();
        assert_eq!(date.year(), &BigInt::from(-4712));
        assert_eq!(date.to_jd().unwrap(), JulianDate::try_new(-1, 5).unwrap());
        assert_eq!(date.to_string(), "Monday 1 January 4713 BC");
    }

    #[test]
    fn validity() {
        // 1900 is a leap year in the Julian calendar.
        assert!(JulianCalendarDate::from_dmy(29, 2, 1900).unwrap().is_valid());
        assert!(!JulianCalendarDate::from_dmy(30, 2, 1900).unwrap().is_valid());
        assert!(!JulianCalendarDate::from_dmy(29, 2, 1901).unwrap().is_valid());
        assert!(!JulianCalendarDate::from_dmy(31, 4, 1).unwrap().is_valid());
    }

    #[test]
    fn bounds() {
        let (lower, upper) = DateTokenIndex::bounds();
        let lower_year: BigInt =
            "-158510731331028330490856926774384541893593408166516857001310861064905041865"
                .parse()
                .unwrap();
        let upper_year: BigInt =
            "158510731331028330490856926774384541893593408166516857001310861064905032440"
                .parse()
                .unwrap();

        let first = DateTokenIndex::try_new(lower).unwrap();
        let date = first.to_julian_calendar();
        assert_eq!(date, JulianCalendarDate::try_new(1, 16, 6, lower_year.clone()).unwrap());
        assert_eq!(date.to_dti().unwrap(), first);
        assert!(date.is_valid());

        let last = DateTokenIndex::try_new(upper).unwrap();
        let date = last.to_julian_calendar();
        assert_eq!(date, JulianCalendarDate::try_new(2, 19, 7, upper_year.clone()).unwrap());
        assert_eq!(date.to_dti().unwrap(), last);
        assert!(date.is_valid());

        for i in 1u8..=10 {
            let date = first.checked_add_days(i).unwrap().to_julian_calendar();
            assert_eq!((date.year(), date.month(), date.day()), (&lower_year, 6, 16 + i));
            let date = last.checked_add_days(-i32::from(i)).unwrap().to_julian_calendar();
            assert_eq!((date.year(), date.month(), date.day()), (&upper_year, 7, 19 - i));
        }

        let date = first.checked_add_days(365).unwrap().to_julian_calendar();
        assert_eq!(date.year(), &(&lower_year + 1u8));
        let date = first.checked_add_days(3650).unwrap().to_julian_calendar();
        assert_eq!(date.year(), &(&lower_year + 10u8));
        let date = last.checked_add_days(-365).unwrap().to_julian_calendar();
        assert_eq!(date.year(), &(&upper_year - 1u8));
        let date = last.checked_add_days(-3650).unwrap().to_julian_calendar();
        assert_eq!(date.year(), &(&upper_year - 10u8));
    }
}
