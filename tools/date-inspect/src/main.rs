//! Prints every representation of a day.
//!
//! ```text
//! date-inspect dti <index>
//! date-inspect jd <julian day number>
//! date-inspect gregorian <date text>
//! date-inspect julian <date text>
//! ```
//!
//! `DISPLAY_ERA` (`auto`, `always`, `never`) and `ERA_LABELS` (`christian`,
//! `common`) select how years are written.

use std::{env, process::ExitCode};

use date_calendar::{
    options::{DisplayEra, EraLabels, FormatOptions},
    BigInt, CalendarDate, CalendarSystem, DateCalendarResult, DateTokenIndex,
    GregorianCalendarDate, JulianCalendarDate, JulianDate, DAY_FRACTION_MIDNIGHT,
};

macro_rules! format_line(
    ($a:expr, $b:expr, $c: expr) => {
        println!("{:<12} {:<20} {}", $a, $b, $c)
    };
    ($a:expr, $b:expr) => {
        println!("{:<12} {}", $a, $b)
    };
);

const USAGE: &str = "usage: date-inspect <dti|jd|gregorian|julian> <value>";

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let (Some(mode), rest) = (args.next(), args.collect::<Vec<_>>().join(" ")) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let options = match format_options() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let jd = match resolve(&mode, &rest) {
        Ok(Some(jd)) => jd,
        Ok(None) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match inspect(&jd, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn format_options() -> Result<FormatOptions, String> {
    let mut options = FormatOptions::default();
    if let Ok(value) = env::var("DISPLAY_ERA") {
        let era = value
            .parse::<DisplayEra>()
            .map_err(|e| format!("DISPLAY_ERA: {e}"))?;
        options = options.with_display_era(era);
    }
    if let Ok(value) = env::var("ERA_LABELS") {
        let labels = value
            .parse::<EraLabels>()
            .map_err(|e| format!("ERA_LABELS: {e}"))?;
        options = options.with_era_labels(labels);
    }
    Ok(options)
}

fn resolve(mode: &str, value: &str) -> DateCalendarResult<Option<JulianDate>> {
    let integer = || {
        value.parse::<BigInt>().map_err(|_| {
            date_calendar::DateCalendarError::syntax().with_message("expected an integer.")
        })
    };
    let jd = match mode {
        "dti" => DateTokenIndex::try_new(integer()?)?.to_jd(),
        "jd" => JulianDate::try_new(integer()?, DAY_FRACTION_MIDNIGHT)?,
        "gregorian" => value.parse::<GregorianCalendarDate>()?.to_jd()?,
        "julian" => value.parse::<JulianCalendarDate>()?.to_jd()?,
        _ => return Ok(None),
    };
    Ok(Some(jd))
}

fn inspect(jd: &JulianDate, options: FormatOptions) -> DateCalendarResult<()> {
    let gregorian = jd.to_gregorian();
    let julian = jd.to_julian_calendar();

    format_line!("dti", jd.to_dti()?);
    format_line!("jd", jd);
    format_line!("jd (float)", jd.to_float());
    print_date("gregorian", &gregorian, options);
    print_date("julian", &julian, options);
    Ok(())
}

fn print_date<C: CalendarSystem>(name: &str, date: &CalendarDate<C>, options: FormatOptions) {
    format_line!(name, C::IDENTIFIER, date.to_string_with_options(options));
    format_line!(
        "",
        "era",
        format!("{} ({})", date.era().code().as_str(), date.era_year())
    );
    format_line!("", "century", date.century());
    format_line!("", "leap year", date.leap_year());
    format_line!("", "days in month", date.days_in_month());
}
