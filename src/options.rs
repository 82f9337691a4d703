//! Options for rendering calendar dates.
//!
//! A date is written as `"{day name} {day} {month name} {year}"`. The era
//! label that may follow the year is controlled by [`FormatOptions`].

use core::{fmt, str::FromStr};

// ==== FormatOptions ====

/// Options used when writing a calendar date.
///
/// The default writes an era label only for years before the common era,
/// using the `BC` label.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub display_era: DisplayEra,
    pub era_labels: EraLabels,
}

impl FormatOptions {
    #[must_use]
    pub const fn new(display_era: DisplayEra, era_labels: EraLabels) -> Self {
        Self {
            display_era,
            era_labels,
        }
    }

    #[must_use]
    pub const fn with_display_era(mut self, display_era: DisplayEra) -> Self {
        self.display_era = display_era;
        self
    }

    #[must_use]
    pub const fn with_era_labels(mut self, era_labels: EraLabels) -> Self {
        self.era_labels = era_labels;
        self
    }
}

// ==== DisplayEra ====

/// When to write the era label after the year.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEra {
    /// Only years before the common era are labelled.
    #[default]
    Auto,
    /// Every year is labelled.
    Always,
    /// No year is labelled. Years before the common era are written as
    /// signed astronomical years.
    Never,
}

/// A parsing error for `DisplayEra`.
#[derive(Debug, Clone, Copy)]
pub struct ParseDisplayEraError;

impl fmt::Display for ParseDisplayEraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid DisplayEra")
    }
}

impl FromStr for DisplayEra {
    type Err = ParseDisplayEraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(ParseDisplayEraError),
        }
    }
}

impl fmt::Display for DisplayEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

// ==== EraLabels ====

/// The pair of labels used for the two eras.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EraLabels {
    /// `BC` and `AD`.
    #[default]
    Christian,
    /// `BCE` and `CE`.
    Common,
}

/// A parsing error for `EraLabels`.
#[derive(Debug, Clone, Copy)]
pub struct ParseEraLabelsError;

impl fmt::Display for ParseEraLabelsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid EraLabels")
    }
}

impl FromStr for EraLabels {
    type Err = ParseEraLabelsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "christian" | "bc" => Ok(Self::Christian),
            "common" | "bce" => Ok(Self::Common),
            _ => Err(ParseEraLabelsError),
        }
    }
}

impl fmt::Display for EraLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Christian => "christian",
            Self::Common => "common",
        })
    }
}
