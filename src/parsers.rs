//! This module implements date text parsing and formatting.
//!
//! ISO 8601 date strings (`2021-12-25`, `+002021-12-25`) are handed to the
//! `ixdtf` parser. Days past the Gregorian month length are read again by
//! the tokenizer so that the calendar decides whether they exist. Everything else is read by a small tokenizer that accepts
//! the forms dates are commonly written in:
//!
//! - `15 October 1582`, `15th of Oct 1582`, `September 11, 2001`
//! - `Monday 24 November 4714 BC`, `1 January 4713 B.C.`
//! - `2021 12 25`, `12/25/2021`, `25-12-2021`, `-4713 11 24`

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use ixdtf::{parsers::IxdtfParser, ParseError};
use num_bigint::BigInt;
use writeable::{impl_display_with_writeable, Writeable};

use crate::{
    calendar::{era_year, Era, DAY_NAMES, MONTH_NAMES},
    date_calendar_assert,
    error::ErrorMessage,
    options::{DisplayEra, FormatOptions},
    DateCalendarError, DateCalendarResult, DateCalendarUnwrap,
};

/// The day, month and astronomical year read from date text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDate {
    pub day: u8,
    pub month: u8,
    pub year: BigInt,
}

/// Parses date text into its day, month and astronomical year.
///
/// The result is not checked against a calendar: `30 February 2000` parses.
pub fn parse_date(source: &str) -> DateCalendarResult<ParsedDate> {
    let source = source.trim();
    if looks_like_iso(source) {
        return parse_iso_date(source);
    }
    parse_free_form(source).inspect_err(|_e| {
        #[cfg(feature = "log")]
        log::debug!("rejected date text {source:?}: {_e}");
    })
}

// ==== ISO 8601 ====

// A single word opening with a year of four or more digits.
fn looks_like_iso(source: &str) -> bool {
    let body = source.strip_prefix(['+', '-']).unwrap_or(source);
    body.bytes().take_while(u8::is_ascii_digit).count() >= 4
        && !source.contains(char::is_whitespace)
        && !source.contains(['/', ','])
}

fn parse_iso_date(source: &str) -> DateCalendarResult<ParsedDate> {
    let record = match IxdtfParser::from_utf8(source.as_bytes()).parse() {
        Ok(record) => record,
        // ixdtf checks days against Gregorian month lengths, which would
        // reject Julian leap days such as 1900-02-29.
        Err(ParseError::InvalidDayRange) => {
            let date_part = source.split(['T', 't']).next().unwrap_or(source);
            return parse_free_form(date_part);
        }
        Err(e) => {
            #[cfg(feature = "log")]
            log::debug!("ixdtf rejected {source:?}: {e:?}");
            return Err(e.into());
        }
    };
    let date = record
        .date
        .ok_or(DateCalendarError::syntax().with_enum(ErrorMessage::ParserNeedsDate))?;
    Ok(ParsedDate {
        day: date.day,
        month: date.month,
        year: BigInt::from(date.year),
    })
}

// ==== Free-form text ====

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(NumberToken),
    Month(u8),
    Era(Era),
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
struct NumberToken {
    value: BigInt,
    digits: usize,
    signed: bool,
    ordinal: bool,
}

impl NumberToken {
    // Days and months are never signed, longer than two digits or above 31.
    fn is_yearish(&self) -> bool {
        self.signed || self.digits >= 3 || self.value > BigInt::from(31u8)
    }
}

fn unknown_token() -> DateCalendarError {
    DateCalendarError::syntax().with_enum(ErrorMessage::UnknownDateToken)
}

fn tokenize(source: &str) -> DateCalendarResult<Vec<Token>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut cursor = 0;
    // A sign only counts at the start of a word.
    let mut at_word_start = true;
    while let Some(&byte) = bytes.get(cursor) {
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' | b',' | b'/' => {
                cursor += 1;
                at_word_start = true;
            }
            // Separates fields, as in `25-12-2021`.
            b'-' if !at_word_start => cursor += 1,
            b'0'..=b'9' => {
                let (token, end) = read_number(source, cursor)?;
                tokens.push(Token::Number(token));
                cursor = end;
                at_word_start = false;
            }
            b'+' | b'-' if next_is_digit(bytes, cursor) => {
                let (token, end) = read_number(source, cursor)?;
                tokens.push(Token::Number(token));
                cursor = end;
                at_word_start = false;
            }
            b'-' => cursor += 1,
            b'A'..=b'Z' | b'a'..=b'z' => {
                let end = bytes[cursor..]
                    .iter()
                    .position(|b| !(b.is_ascii_alphabetic() || *b == b'.'))
                    .map_or(bytes.len(), |p| cursor + p);
                tokens.push(read_word(&source[cursor..end])?);
                cursor = end;
                at_word_start = false;
            }
            _ => return Err(unknown_token()),
        }
    }
    Ok(tokens)
}

fn next_is_digit(bytes: &[u8], cursor: usize) -> bool {
    bytes.get(cursor + 1).is_some_and(u8::is_ascii_digit)
}

fn read_number(source: &str, start: usize) -> DateCalendarResult<(NumberToken, usize)> {
    let bytes = source.as_bytes();
    let signed = matches!(bytes[start], b'+' | b'-');
    let digits_start = if signed { start + 1 } else { start };
    let digits_end = bytes[digits_start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |p| digits_start + p);
    date_calendar_assert!(digits_end > digits_start);

    let value = BigInt::parse_bytes(&bytes[start..digits_end], 10).date_calendar_unwrap()?;

    // Ordinal suffixes: 1st, 2nd, 3rd, 4th.
    let suffix = source[digits_end..]
        .get(..2)
        .filter(|s| ["st", "nd", "rd", "th"].contains(&s.to_ascii_lowercase().as_str()));
    let end = digits_end + suffix.map_or(0, str::len);
    if bytes.get(end).is_some_and(u8::is_ascii_alphanumeric) {
        return Err(unknown_token());
    }

    Ok((
        NumberToken {
            value,
            digits: digits_end - digits_start,
            signed,
            ordinal: suffix.is_some(),
        },
        end,
    ))
}

fn read_word(word: &str) -> DateCalendarResult<Token> {
    let word: String = word
        .chars()
        .filter(|c| *c != '.')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let word = word.as_str();

    match word {
        "bc" | "bce" => return Ok(Token::Era(Era::BeforeCommon)),
        "ad" | "ce" => return Ok(Token::Era(Era::Common)),
        "of" | "the" => return Ok(Token::Ignored),
        _ => {}
    }

    if let Some(month) = match_name(word, &MONTH_NAMES).or((word == "sept").then_some(8)) {
        return Ok(Token::Month(month + 1));
    }
    if match_name(word, &DAY_NAMES).is_some() {
        return Ok(Token::Ignored);
    }

    #[cfg(feature = "log")]
    log::debug!("unknown word {word:?} in date text");
    Err(unknown_token())
}

// Matches a full name or its three letter abbreviation, returning the index.
fn match_name(word: &str, names: &[&str]) -> Option<u8> {
    names
        .iter()
        .position(|name| {
            let name = name.to_ascii_lowercase();
            word == name || (word.len() == 3 && name.starts_with(word))
        })
        .map(|i| i as u8)
}

fn parse_free_form(source: &str) -> DateCalendarResult<ParsedDate> {
    let mut numbers = Vec::new();
    let mut month = None;
    let mut era = None;
    for token in tokenize(source)? {
        match token {
            Token::Number(n) => numbers.push(n),
            Token::Month(m) if month.is_none() => month = Some(m),
            Token::Month(_) => {
                return Err(DateCalendarError::syntax().with_enum(ErrorMessage::AmbiguousDate))
            }
            Token::Era(e) if era.is_none() => era = Some(e),
            Token::Era(_) => {
                return Err(DateCalendarError::syntax().with_enum(ErrorMessage::ConflictingEra))
            }
            Token::Ignored => {}
        }
    }

    let (day, month, year) = match (month, numbers.as_slice()) {
        (Some(month), [first, second]) => {
            let (day, year) = match (first.is_yearish(), second.is_yearish()) {
                (true, false) => (second, first),
                (false, true) => (first, second),
                (true, true) => {
                    return Err(DateCalendarError::syntax().with_enum(ErrorMessage::AmbiguousDate))
                }
                // `12 October 15th` is the 15th day of the year 12.
                (false, false) if second.ordinal && !first.ordinal => (second, first),
                (false, false) => (first, second),
            };
            (day, Some(month), year)
        }
        (None, [first, second, third]) if first.is_yearish() => {
            (third, u8_field(&second.value), first)
        }
        (None, [first, second, third]) if first.value > BigInt::from(12u8) => {
            (first, u8_field(&second.value), third)
        }
        (None, [first, second, third]) => (second, u8_field(&first.value), third),
        _ => return Err(DateCalendarError::syntax().with_enum(ErrorMessage::ParserNeedsDate)),
    };

    let month = month.filter(|m| (1..=12).contains(m)).ok_or(
        DateCalendarError::syntax().with_enum(ErrorMessage::MonthOutOfRange),
    )?;
    if day.signed {
        return Err(DateCalendarError::syntax().with_enum(ErrorMessage::DayOutOfRange));
    }
    let day = u8_field(&day.value)
        .filter(|d| (1..=31).contains(d))
        .ok_or(DateCalendarError::syntax().with_enum(ErrorMessage::DayOutOfRange))?;

    let year = match era {
        None => year.value.clone(),
        Some(_) if year.signed => {
            return Err(DateCalendarError::syntax().with_enum(ErrorMessage::ConflictingEra))
        }
        Some(era) => era
            .astronomical_year(year.value.clone())
            .map_err(|_| DateCalendarError::syntax().with_enum(ErrorMessage::EraYearNotPositive))?,
    };

    Ok(ParsedDate { day, month, year })
}

fn u8_field(value: &BigInt) -> Option<u8> {
    u8::try_from(value).ok()
}

// ==== Formatting ====

/// A calendar date ready to be written with a set of [`FormatOptions`].
#[derive(Debug)]
pub struct FormattableCalendarDate<'a> {
    pub day_of_week: u8,
    pub day: u8,
    pub month: u8,
    pub year: &'a BigInt,
    pub options: FormatOptions,
}

impl Writeable for FormattableCalendarDate<'_> {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let day_name = DAY_NAMES
            .get(usize::from(self.day_of_week))
            .ok_or(fmt::Error)?;
        sink.write_str(day_name)?;
        sink.write_char(' ')?;
        self.day.write_to(sink)?;
        sink.write_char(' ')?;
        // Month 0 has no name and is written as a number.
        match MONTH_NAMES.get(usize::from(self.month).wrapping_sub(1)) {
            Some(month_name) => sink.write_str(month_name)?,
            None => self.month.write_to(sink)?,
        }
        sink.write_char(' ')?;
        write_year(self.year, self.options, sink)
    }
}

impl_display_with_writeable!(FormattableCalendarDate<'_>);

fn write_year<W: Write + ?Sized>(
    year: &BigInt,
    options: FormatOptions,
    sink: &mut W,
) -> fmt::Result {
    let era = Era::from_year(year);
    let labelled = match options.display_era {
        DisplayEra::Never => false,
        DisplayEra::Always => true,
        DisplayEra::Auto => era == Era::BeforeCommon,
    };
    if !labelled {
        return write!(sink, "{year}");
    }
    write!(sink, "{} {}", era_year(year), era.label(options.era_labels))
}
