//! Implementation of the `BoundedInt` primitive.
//!
//! A `BoundedInt` is an arbitrary precision integer that is guaranteed to
//! fit one of the fixed width integer kinds of the registry contract
//! (`uint8`, `uint16`, `int256`, ...). The kind is described by an
//! [`IntKind`] value rather than by a distinct type per width.

use core::fmt;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::{error::ErrorMessage, DateCalendarError, DateCalendarResult};

/// The signedness and width of a fixed width integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntKind {
    signed: bool,
    bits: u16,
}

impl IntKind {
    /// `uint8`
    pub const UINT8: Self = Self::new_unchecked(false, 8);
    /// `uint16`
    pub const UINT16: Self = Self::new_unchecked(false, 16);
    /// `uint256`
    pub const UINT256: Self = Self::new_unchecked(false, 256);
    /// `int256`
    pub const INT256: Self = Self::new_unchecked(true, 256);

    const fn new_unchecked(signed: bool, bits: u16) -> Self {
        Self { signed, bits }
    }

    /// Creates a new `IntKind`, rejecting widths that are not a multiple of
    /// 8 in `8..=256`.
    pub fn try_new(signed: bool, bits: u16) -> DateCalendarResult<Self> {
        if !(8..=256).contains(&bits) || bits % 8 != 0 {
            return Err(DateCalendarError::range().with_enum(ErrorMessage::InvalidIntegerWidth));
        }
        Ok(Self::new_unchecked(signed, bits))
    }

    #[inline]
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    #[inline]
    #[must_use]
    pub const fn bits(&self) -> u16 {
        self.bits
    }

    /// Returns the smallest value of this kind.
    #[must_use]
    pub fn lower(&self) -> BigInt {
        if self.signed {
            -(BigInt::one() << (self.bits - 1))
        } else {
            BigInt::zero()
        }
    }

    /// Returns the largest value of this kind.
    #[must_use]
    pub fn upper(&self) -> BigInt {
        let shift = if self.signed { self.bits - 1 } else { self.bits };
        (BigInt::one() << shift) - 1u8
    }

    /// Returns the `(lower, upper)` bounds of this kind.
    #[must_use]
    pub fn bounds(&self) -> (BigInt, BigInt) {
        (self.lower(), self.upper())
    }

    /// Returns the value nearest to the middle of the bounds. A tie is
    /// resolved toward the upper bound.
    #[must_use]
    pub fn midpoint(&self) -> BigInt {
        let (lower, upper) = self.bounds();
        ((&upper - &lower) + 1u8) / 2u8 + lower
    }

    /// Returns whether `value` lies within the bounds of this kind.
    #[must_use]
    pub fn contains(&self, value: &BigInt) -> bool {
        let (lower, upper) = self.bounds();
        (lower..=upper).contains(value)
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.signed {
            f.write_str("u")?;
        }
        write!(f, "int{}", self.bits)
    }
}

/// An integer value checked against the bounds of an [`IntKind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedInt {
    value: BigInt,
    kind: IntKind,
}

impl BoundedInt {
    /// Creates a new `BoundedInt`, failing with a range error when `value`
    /// lies outside the bounds of `kind`.
    pub fn try_new(value: impl Into<BigInt>, kind: IntKind) -> DateCalendarResult<Self> {
        let value = value.into();
        if !kind.contains(&value) {
            #[cfg(feature = "log")]
            log::trace!("{value} is outside allowable range for {kind}");
            return Err(DateCalendarError::range().with_enum(ErrorMessage::IntegerOutOfRange));
        }
        Ok(Self { value, kind })
    }

    /// Creates a `BoundedInt` whose value is already known to be in range.
    pub(crate) fn new_unchecked(value: BigInt, kind: IntKind) -> Self {
        debug_assert!(kind.contains(&value));
        Self { value, kind }
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> IntKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> BigInt {
        self.value
    }
}

impl fmt::Display for BoundedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
