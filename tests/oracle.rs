//! Conversions checked against the Reingold & Dershowitz implementation in
//! `calendrical_calculations` and against `jiff`'s civil dates.

use calendrical_calculations::{gregorian, julian, rata_die::RataDie};
use date_calendar::{
    BigInt, CalendarDate, CalendarSystem, Gregorian, GregorianCalendarDate, Julian,
    JulianCalendarDate, JulianDate,
};
use jiff::civil::Date;

// The Julian Day Number of the day before 1 January 1 (Gregorian), RD 0.
const RD_EPOCH_JDN: i64 = 1_721_424;

// The Julian Day Number of 1 January 1970.
const UNIX_EPOCH_JDN: i64 = 2_440_587;

type Oracle = fn(i32, u8, u8) -> RataDie;

fn check_days<C: CalendarSystem>(start: i64, end: i64, oracle: Oracle) {
    let mut previous: Option<CalendarDate<C>> = None;
    for jdn in start..end {
        let jd = JulianDate::try_new(jdn, 5).unwrap();
        let date = jd.to_calendar::<C>();

        let year = i32::try_from(date.year()).unwrap();
        let expected = oracle(year, date.month(), date.day()).to_i64_date() + RD_EPOCH_JDN;
        assert_eq!(expected, jdn, "{} {date}", C::IDENTIFIER);
        assert_eq!(date.to_jd().unwrap(), jd);
        assert!(date.is_valid());

        if let Some(previous) = previous {
            assert!(previous < date);
            assert_eq!((previous.day_of_week() + 1) % 7, date.day_of_week());
        }
        previous = Some(date);
    }
}

fn check_years<C: CalendarSystem>(years: core::ops::Range<i32>, oracle: Oracle) {
    for year in years {
        for month in 1..=12u8 {
            let first = CalendarDate::<C>::from_dmy(1, month, year).unwrap();
            for day in 1..=first.days_in_month() {
                let date = CalendarDate::<C>::from_dmy(day, month, year).unwrap();
                let expected = oracle(year, month, day).to_i64_date() + RD_EPOCH_JDN;
                assert_eq!(
                    *date.to_jd().unwrap().jdn(),
                    BigInt::from(expected),
                    "{} {date}",
                    C::IDENTIFIER
                );
            }
        }
    }
}

#[test]
fn gregorian_days_around_epochs() {
    check_days::<Gregorian>(-50_000, 50_000, gregorian::fixed_from_gregorian);
    check_days::<Gregorian>(2_299_160 - 50_000, 2_299_160 + 50_000, gregorian::fixed_from_gregorian);
    check_days::<Gregorian>(2_440_587 - 50_000, 2_440_587 + 50_000, gregorian::fixed_from_gregorian);
}

#[test]
fn julian_days_around_epochs() {
    check_days::<Julian>(-50_000, 50_000, julian::fixed_from_julian);
    check_days::<Julian>(1_721_423 - 50_000, 1_721_423 + 50_000, julian::fixed_from_julian);
    check_days::<Julian>(2_299_160 - 50_000, 2_299_160 + 50_000, julian::fixed_from_julian);
}

#[test]
fn month_lengths_agree() {
    check_years::<Gregorian>(-401..401, gregorian::fixed_from_gregorian);
    check_years::<Gregorian>(1_580..2_420, gregorian::fixed_from_gregorian);
    check_years::<Julian>(-4_713..-4_300, julian::fixed_from_julian);
    check_years::<Julian>(-5..5, julian::fixed_from_julian);
}

#[test]
fn leap_years_agree() {
    for year in (-1_000_000..-999_000).chain(-2_000..2_000).chain(999_000..1_000_000) {
        let big = BigInt::from(year);
        assert_eq!(Gregorian::is_leap_year(&big), gregorian::is_leap_year(year), "{year}");
        assert_eq!(Julian::is_leap_year(&big), julian::is_leap_year(year), "{year}");
    }
}

#[test]
fn julian_epoch_is_monday_1_january_4713_bc() {
    let date = JulianCalendarDate::from_dmy(1, 1, -4712).unwrap();
    let rd = julian::fixed_from_julian(-4712, 1, 1).to_i64_date();
    assert_eq!(rd + RD_EPOCH_JDN, -1);
    assert_eq!(*date.to_jd().unwrap().jdn(), BigInt::from(-1));
    assert_eq!(date.to_string(), "Monday 1 January 4713 BC");
}

// Every day of the years -100 000 to 100 000. Slow in debug builds.
#[test]
#[ignore]
fn full_sweep() {
    let start = gregorian::fixed_from_gregorian(-100_000, 1, 1).to_i64_date() + RD_EPOCH_JDN;
    let end = gregorian::fixed_from_gregorian(100_000, 1, 1).to_i64_date() + RD_EPOCH_JDN;
    check_days::<Gregorian>(start, end, gregorian::fixed_from_gregorian);
    check_days::<Julian>(start, end, julian::fixed_from_julian);
}

fn check_civil(civil: Date, jdn: i64) {
    let date = JulianDate::try_new(jdn, 5).unwrap().to_gregorian();
    assert_eq!(i16::try_from(date.year()).unwrap(), civil.year(), "{civil} {date}");
    assert_eq!(i8::try_from(date.month()).unwrap(), civil.month(), "{civil} {date}");
    assert_eq!(i8::try_from(date.day()).unwrap(), civil.day(), "{civil} {date}");
    assert_eq!(
        i8::try_from(date.day_of_week()).unwrap(),
        civil.weekday().to_sunday_zero_offset(),
        "{civil} {date}"
    );

    let from_fields = GregorianCalendarDate::from_dmy(
        u8::try_from(civil.day()).unwrap(),
        u8::try_from(civil.month()).unwrap(),
        civil.year(),
    )
    .unwrap();
    assert_eq!(*from_fields.to_jd().unwrap().jdn(), BigInt::from(jdn), "{civil}");
}

// Steps one day at a time with jiff from `civil`, the day `jdn`, to `end`.
fn check_civil_range(mut civil: Date, mut jdn: i64, end: Date) {
    loop {
        check_civil(civil, jdn);
        if civil == end {
            break;
        }
        (civil, jdn) = if end > civil {
            (civil.tomorrow().unwrap(), jdn + 1)
        } else {
            (civil.yesterday().unwrap(), jdn - 1)
        };
    }
}

fn jdn_of_civil_min() -> i64 {
    gregorian::fixed_from_gregorian(-9_999, 1, 1).to_i64_date() + RD_EPOCH_JDN
}

#[test]
fn jiff_days_around_unix_epoch() {
    let epoch = Date::constant(1970, 1, 1);
    check_civil_range(epoch, UNIX_EPOCH_JDN, Date::constant(1800, 1, 1));
    check_civil_range(epoch, UNIX_EPOCH_JDN, Date::constant(2200, 12, 31));
}

#[test]
fn jiff_days_at_civil_bounds() {
    let min_jdn = jdn_of_civil_min();
    check_civil_range(Date::MIN, min_jdn, Date::constant(-9_997, 12, 31));
    let max_jdn = gregorian::fixed_from_gregorian(9_999, 12, 31).to_i64_date() + RD_EPOCH_JDN;
    check_civil_range(Date::MAX, max_jdn, Date::constant(9_997, 1, 1));
}

// Every day jiff can represent, -9999-01-01 to 9999-12-31.
#[test]
#[ignore]
fn jiff_full_range() {
    check_civil_range(Date::MIN, jdn_of_civil_min(), Date::MAX);
}
