//! The `date_calendar` crate converts between the date representations used
//! by the DateCalendar registry: date token indices, Julian Dates, and
//! proleptic Gregorian and Julian calendar dates.
//!
//! ```rust
//! use date_calendar::{DateTokenIndex, GregorianCalendarDate, JulianDate};
//!
//! // The Unix epoch as a Julian Date taken at 00:00 UT.
//! let jd = JulianDate::try_new(2_440_587, 5).unwrap();
//! let date = jd.to_gregorian();
//! assert_eq!(date.to_string(), "Thursday 1 January 1970");
//!
//! // Every day on the timeline has exactly one date token index.
//! let dti = jd.to_dti().unwrap();
//! assert_eq!(dti.to_jd(), jd);
//!
//! // Dates can be parsed and checked for validity.
//! let christmas: GregorianCalendarDate = "2021 12 25".parse().unwrap();
//! assert_eq!(christmas.to_string(), "Saturday 25 December 2021");
//! assert!(!GregorianCalendarDate::from_dmy(30, 2, 2000).unwrap().is_valid());
//! ```
//!
//! Dates in the calendar are taken at 00:00 UT. The midpoint of the
//! `uint256` token index range is linked to the Julian Date `0.5`, so the
//! difference between two token indices is the number of whole days between
//! them. All arithmetic is carried out on arbitrary precision integers with
//! floor division, which keeps every conversion exact across the full
//! `int256` range of Julian Day Numbers.
//!
//! The calendar algorithms follow Peter Baum's "Date Algorithms".
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod calendar;
pub mod dti;
pub mod error;
pub mod julian_date;
pub mod options;
pub mod parsers;
pub mod primitive;

/// Re-export of `BigInt` from `num_bigint`, the integer type behind every
/// bounded value in this crate.
pub use num_bigint::BigInt;

#[doc(inline)]
pub use error::DateCalendarError;

/// The `date_calendar` result type
pub type DateCalendarResult<T> = Result<T, DateCalendarError>;

pub use crate::{
    calendar::{
        CalendarDate, CalendarSystem, Era, Gregorian, GregorianCalendarDate, Julian,
        JulianCalendarDate,
    },
    dti::DateTokenIndex,
    julian_date::JulianDate,
    primitive::{BoundedInt, IntKind},
};

/// A library specific trait for unwrapping assertions.
pub(crate) trait DateCalendarUnwrap {
    type Output;

    /// `date_calendar` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn date_calendar_unwrap(self) -> DateCalendarResult<Self::Output>;
}

impl<T> DateCalendarUnwrap for Option<T> {
    type Output = T;

    fn date_calendar_unwrap(self) -> DateCalendarResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(DateCalendarError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! date_calendar_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::DateCalendarError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::DateCalendarError::assert());
        }
    };
}

/// The day fraction that places a Julian Date at 00:00 UT (`.5`).
pub const DAY_FRACTION_MIDNIGHT: u16 = 5;
