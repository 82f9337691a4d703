//! This module implements `DateCalendarError`.

use core::fmt;
use ixdtf::ParseError;

/// `DateCalendarError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// A value fell outside the bounds of its integer kind (OutOfRange).
    Range,
    /// Date text could not be parsed.
    Syntax,
    /// Assert
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
        })
    }
}

/// The error type for `date_calendar`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateCalendarError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl DateCalendarError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    #[cfg_attr(debug_assertions, track_caller)]
    pub(crate) const fn assert() -> Self {
        #[cfg(not(debug_assertions))]
        {
            Self::new(ErrorKind::Assert)
        }
        #[cfg(debug_assertions)]
        Self {
            kind: ErrorKind::Assert,
            msg: ErrorMessage::String(core::panic::Location::caller().file()),
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = ErrorMessage::String(msg);
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> &'static str {
        self.msg.to_str()
    }
}

impl fmt::Display for DateCalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.to_str();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DateCalendarError {}

impl From<ParseError> for DateCalendarError {
    fn from(error: ParseError) -> Self {
        DateCalendarError::syntax().with_enum(ErrorMessage::Ixdtf(error))
    }
}

/// The error message
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum ErrorMessage {
    // Range
    IntegerOutOfRange,
    InvalidIntegerWidth,
    DayOfWeekOutOfRange,
    MonthOutOfRange,
    DayOutOfRange,
    EraYearNotPositive,

    // Parsing
    ParserNeedsDate,
    UnknownDateToken,
    AmbiguousDate,
    ConflictingEra,

    // Typed
    None,
    String(&'static str),
    Ixdtf(ParseError),
}

impl ErrorMessage {
    pub(crate) fn to_str(self) -> &'static str {
        match self {
            Self::IntegerOutOfRange => "integer is outside the allowable range for its kind.",
            Self::InvalidIntegerWidth => {
                "integer width must be a multiple of 8 between 8 and 256 bits."
            }
            Self::DayOfWeekOutOfRange => "day of week must be between 0 (Sunday) and 6.",
            Self::MonthOutOfRange => "month must be between 1 and 12.",
            Self::DayOutOfRange => "day must be between 1 and 31.",
            Self::EraYearNotPositive => "a year qualified by an era must be positive.",
            Self::ParserNeedsDate => "Could not find a day, month and year in the date text.",
            Self::UnknownDateToken => "Date text contains an unrecognized word.",
            Self::AmbiguousDate => "Could not determine which value in the date text is the year.",
            Self::ConflictingEra => "Date text contains more than one era or a signed era year.",
            Self::None => "",
            Self::String(s) => s,
            Self::Ixdtf(e) => ixdtf_error_to_static_str(e),
        }
    }
}

fn ixdtf_error_to_static_str(error: ParseError) -> &'static str {
    match error {
        ParseError::AbruptEnd { .. } => "Parsing ended abruptly.",
        ParseError::InvalidEnd => "Unexpected character found after parsing was completed.",
        ParseError::InvalidMonthRange => "Parsed month value not in a valid range.",
        ParseError::InvalidDayRange => "Parsed day value not in a valid range.",
        ParseError::DateYear => "Invalid character while parsing year value.",
        ParseError::DateMonth => "Invalid character while parsing month value.",
        ParseError::DateDay => "Invalid character while parsing day value.",
        _ => "General IXDTF parsing error",
    }
}
