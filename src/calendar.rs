//! This module implements `CalendarDate` and the calendar systems it is
//! generic over.
//!
//! A `CalendarDate<C>` holds a day of the week, a day of the month, a month
//! and an astronomical year (year `0` is 1 BC, year `-1` is 2 BC). The
//! calendar system `C` decides how those fields map to a Julian Date, so a
//! [`GregorianCalendarDate`] and a [`JulianCalendarDate`] with the same
//! fields are different types describing different days.
//!
//! Both calendars are proleptic: they are extended backward before their
//! historical adoption and applied uniformly across the whole timeline.

use alloc::string::String;
use core::{cmp::Ordering, fmt, hash::Hash, marker::PhantomData, str::FromStr};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;
use writeable::Writeable;

use crate::{
    error::ErrorMessage,
    options::FormatOptions,
    parsers::{self, FormattableCalendarDate},
    primitive::{BoundedInt, IntKind},
    DateCalendarError, DateCalendarResult, DateTokenIndex, JulianDate, DAY_FRACTION_MIDNIGHT,
};

mod era;
mod gregorian;
mod julian;

pub use era::Era;
pub(crate) use era::era_year;
pub use gregorian::{Gregorian, GregorianCalendarDate};
pub use julian::{Julian, JulianCalendarDate};

/// Full day names, indexed by day of week with 0 being Sunday.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Full month names, indexed by month - 1.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Days preceding each month of a year that starts in March, indexed by
// `month - 1`. January and February belong to the previous March-based year.
const TO_JD_TABLE: [i32; 12] = [306, 337, 0, 31, 61, 92, 122, 153, 184, 214, 245, 275];

// Days preceding each month of a March-based year, indexed by `month - 3`.
const CUMULATIVE_DAYS: [i32; 12] = [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337];

mod sealed {
    pub trait Sealed {}
}

/// The calendar arithmetic behind a [`CalendarDate`].
///
/// This trait is sealed; the crate provides [`Gregorian`] and [`Julian`].
pub trait CalendarSystem:
    sealed::Sealed + fmt::Debug + Default + Copy + Eq + Hash + Send + Sync + 'static
{
    /// A short lowercase identifier for the calendar.
    const IDENTIFIER: &'static str;

    /// Returns the Julian Day Number of the given day.
    ///
    /// This is total: a day of `0` is the last day of the previous month and
    /// months outside `1..=12` roll into the adjacent years.
    fn jdn_from_ymd(year: &BigInt, month: u8, day: u8) -> BigInt;

    /// Returns the `(year, month, day)` of the given Julian Day Number.
    fn ymd_from_jdn(jdn: &BigInt) -> (BigInt, u8, u8);

    /// Returns whether `year` is a leap year.
    fn is_leap_year(year: &BigInt) -> bool;
}

#[inline]
pub(crate) fn floor_div(numerator: &BigInt, denominator: i64) -> BigInt {
    numerator.div_floor(&BigInt::from(denominator))
}

/// Returns the day of week of a Julian Day Number, 0 being Sunday.
///
/// Days are taken at 00:00 UT, so the Julian Day Number `0` is Tuesday
/// 25 November 4714 BC and `-1` is a Monday.
#[must_use]
pub fn day_of_week(jdn: &BigInt) -> u8 {
    let dow = (jdn + 2u8).mod_floor(&BigInt::from(7u8));
    // mod_floor by 7 is always within 0..=6
    dow.to_u8().unwrap_or_default()
}

/// Returns the March-based year and the `TO_JD_TABLE` offset for a year and
/// month, normalizing months outside of `1..=12` into the adjacent years.
pub(crate) fn march_based_year(year: &BigInt, month: u8) -> (BigInt, i32) {
    let months = i32::from(month) - 1;
    let year = year + months.div_euclid(12);
    let index = months.rem_euclid(12) as usize;
    let z = if index < 2 { year - 1u8 } else { year };
    (z, TO_JD_TABLE[index])
}

/// Splits the day number `c` of a March-based year `y` into the calendar
/// `(year, month, day)`.
pub(crate) fn ymd_from_march_based(y: BigInt, c: &BigInt) -> (BigInt, u8, u8) {
    // `c` is always a day of the March-based year: 1..=366.
    let c = c.to_i32().unwrap_or_default();
    debug_assert!((1..=366).contains(&c));
    let mut m = (5 * c + 456).div_euclid(153);
    let d = c - CUMULATIVE_DAYS[(m - 3) as usize];
    let mut y = y;
    if m > 12 {
        y += 1u8;
        m -= 12;
    }
    (y, m as u8, d as u8)
}

/// A date in the calendar system `C`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarDate<C: CalendarSystem> {
    day_of_week: u8,
    day: u8,
    month: u8,
    year: BigInt,
    calendar: PhantomData<C>,
}

impl<C: CalendarSystem> CalendarDate<C> {
    /// The integer kind of a calendar year.
    pub const YEAR_KIND: IntKind = IntKind::INT256;

    fn new_unchecked(day_of_week: u8, day: u8, month: u8, year: BigInt) -> Self {
        Self {
            day_of_week,
            day,
            month,
            year: BoundedInt::new_unchecked(year, Self::YEAR_KIND).into_inner(),
            calendar: PhantomData,
        }
    }

    /// Creates a new `CalendarDate` from all four fields.
    ///
    /// The fields are only checked against their ranges; a date such as
    /// 30 February, month `0` or one with the wrong day of week can be
    /// created and is reported by [`CalendarDate::is_valid`]. Month `0`
    /// stands for December of the previous year.
    pub fn try_new(
        day_of_week: u8,
        day: u8,
        month: u8,
        year: impl Into<BigInt>,
    ) -> DateCalendarResult<Self> {
        if day_of_week > 6 {
            return Err(DateCalendarError::range().with_enum(ErrorMessage::DayOfWeekOutOfRange));
        }
        if month > 12 {
            return Err(DateCalendarError::range().with_enum(ErrorMessage::MonthOutOfRange));
        }
        let year = BoundedInt::try_new(year, Self::YEAR_KIND)?;
        Ok(Self::new_unchecked(
            day_of_week,
            day,
            month,
            year.into_inner(),
        ))
    }

    /// Creates a new `CalendarDate` from a day, month and year, deriving the
    /// day of week from the day the fields describe.
    pub fn from_dmy(day: u8, month: u8, year: impl Into<BigInt>) -> DateCalendarResult<Self> {
        let year = year.into();
        let dow = day_of_week(&C::jdn_from_ymd(&year, month, day));
        Self::try_new(dow, day, month, year)
    }

    /// Creates the `CalendarDate` of a Julian Date.
    ///
    /// The day is determined by the Julian Day Number taken at 00:00 UT; the
    /// day fraction is not consulted.
    #[must_use]
    pub fn from_jd(jd: &JulianDate) -> Self {
        let (year, month, day) = C::ymd_from_jdn(jd.jdn());
        Self::new_unchecked(day_of_week(jd.jdn()), day, month, year)
    }

    /// Creates the `CalendarDate` identified by a date token index.
    #[must_use]
    pub fn from_dti(dti: &DateTokenIndex) -> Self {
        Self::from_jd(&dti.to_jd())
    }

    /// Parses a date from free-form or ISO 8601 text.
    ///
    /// The day of week is derived from the parsed day, month and year; a
    /// weekday name in the text is ignored.
    pub fn from_string(source: &str) -> DateCalendarResult<Self> {
        let parsed = parsers::parse_date(source)?;
        Self::from_dmy(parsed.day, parsed.month, parsed.year)
    }

    /// Returns the day of week, 0 being Sunday.
    #[inline]
    #[must_use]
    pub fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the astronomical year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> &BigInt {
        &self.year
    }

    /// Converts this date to a Julian Date at 00:00 UT.
    ///
    /// Fails when the day lies beyond the `int256` range of Julian Day
    /// Numbers, which is possible for years close to the `int256` bounds.
    pub fn to_jd(&self) -> DateCalendarResult<JulianDate> {
        JulianDate::try_new(
            C::jdn_from_ymd(&self.year, self.month, self.day),
            DAY_FRACTION_MIDNIGHT,
        )
    }

    /// Converts this date to its date token index.
    pub fn to_dti(&self) -> DateCalendarResult<DateTokenIndex> {
        DateTokenIndex::from_calendar_date(self)
    }

    /// Converts this date to the date describing the same day in the
    /// calendar `D`.
    pub fn to_calendar<D: CalendarSystem>(&self) -> DateCalendarResult<CalendarDate<D>> {
        Ok(self.to_jd()?.to_calendar())
    }

    #[must_use]
    pub fn leap_year(&self) -> bool {
        C::is_leap_year(&self.year)
    }

    /// Returns whether this date round trips through its Julian Date.
    ///
    /// Impossible day and month combinations (30 February) and dates with a
    /// day of week that does not match their day are not valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.to_jd()
            .map(|jd| Self::from_jd(&jd) == *self)
            .unwrap_or(false)
    }

    /// Compares two dates by `(year, month, day)`. The day of week is not
    /// part of the ordering.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then(self.month.cmp(&other.month))
            .then(self.day.cmp(&other.day))
    }

    /// Returns the era of this date.
    #[must_use]
    pub fn era(&self) -> Era {
        Era::from_year(&self.year)
    }

    /// Returns the year counted within the era: 1 BC for the astronomical
    /// year `0`, 2 BC for `-1`.
    #[must_use]
    pub fn era_year(&self) -> BigInt {
        era::era_year(&self.year)
    }

    /// Returns the ordinal century of the era year: the years 1 to 100 of an
    /// era make up its 1st century, 1901 to 2000 the 20th.
    #[must_use]
    pub fn century(&self) -> BigInt {
        era::century(&self.era_year())
    }

    /// Returns whether the astronomical year is divisible by 100.
    #[must_use]
    pub fn is_century_year(&self) -> bool {
        self.year.is_multiple_of(&BigInt::from(100u8))
    }

    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        if self.leap_year() {
            366
        } else {
            365
        }
    }

    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        let start = C::jdn_from_ymd(&self.year, self.month, 1);
        let end = C::jdn_from_ymd(&self.year, self.month + 1, 1);
        // Month lengths are 28..=31.
        (end - start).to_u8().unwrap_or_default()
    }

    /// Returns the date `days` days away from this one.
    pub fn checked_add_days(&self, days: impl Into<BigInt>) -> DateCalendarResult<Self> {
        Ok(self.to_jd()?.checked_add_days(days)?.to_calendar())
    }

    /// Renders this date with the given display options.
    #[must_use]
    pub fn to_string_with_options(&self, options: FormatOptions) -> String {
        self.formattable(options).write_to_string().into_owned()
    }

    fn formattable(&self, options: FormatOptions) -> FormattableCalendarDate<'_> {
        FormattableCalendarDate {
            day_of_week: self.day_of_week,
            day: self.day,
            month: self.month,
            year: &self.year,
            options,
        }
    }
}

impl<C: CalendarSystem> PartialOrd for CalendarDate<C> {
    /// Orders dates by `(year, month, day)`. Dates with the same fields but a
    /// different day of week are not comparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare(other) {
            Ordering::Equal if self.day_of_week != other.day_of_week => None,
            ordering => Some(ordering),
        }
    }
}

impl<C: CalendarSystem> Writeable for CalendarDate<C> {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.formattable(FormatOptions::default()).write_to(sink)
    }
}

impl<C: CalendarSystem> fmt::Display for CalendarDate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl<C: CalendarSystem> FromStr for CalendarDate<C> {
    type Err = DateCalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}
