//! Canonical text encodings of field elements.
//!
//! Two encodings exist:
//! - binary: exactly 173 `0`/`1` characters, coefficient of x^172 first;
//! - hexadecimal: minimal-length digits (no leading zeros, `"0"` for zero),
//!   nibbles aligned to bit 0.
//!
//! Parsing is lenient about width in one direction only: short inputs are
//! zero-extended on the left, long inputs are rejected.

#[cfg(feature = "alloc")]
use alloc::{format, string::String};
use core::fmt::{self, Write};
use core::str::FromStr;

use crate::structures::gf2m::FieldElement;
use crate::structures::modulus::{Narrow, M};
use crate::utils::{hex_char, hex_value};

/// Error type for rejected text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character other than `0` or `1` in a binary string.
    InvalidBinaryDigit { position: usize, found: char },
    /// A binary string longer than 173 digits.
    BinaryTooLong { len: usize },
    /// A character outside `[0-9a-fA-F]` in a hex string.
    InvalidHexDigit { position: usize, found: char },
    /// A hex string whose value needs more than 173 bits.
    HexTooWide { bits: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidBinaryDigit { position, found } => {
                write!(f, "invalid binary digit {:?} at position {}", found, position)
            }
            ParseError::BinaryTooLong { len } => {
                write!(f, "binary string has {} digits, at most {} allowed", len, M)
            }
            ParseError::InvalidHexDigit { position, found } => {
                write!(f, "invalid hex digit {:?} at position {}", found, position)
            }
            ParseError::HexTooWide { bits } => {
                write!(f, "hex value is {} bits wide, at most {} allowed", bits, M)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl FieldElement {
    /// Parse a string of `0`/`1` digits, most significant first.
    ///
    /// Strings shorter than 173 digits are zero-extended on the left; the
    /// empty string is zero.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidBinaryDigit` for any other character and
    /// `ParseError::BinaryTooLong` for more than 173 digits, even if the
    /// excess digits are leading zeros.
    ///
    /// # Example
    ///
    /// ```
    /// use gf2m173::{FieldElement, Ring};
    ///
    /// assert_eq!(FieldElement::from_bin_str("1").unwrap(), FieldElement::ONE);
    /// assert_eq!(FieldElement::from_bin_str("101").unwrap(), FieldElement::from(5));
    /// assert!(FieldElement::from_bin_str("102").is_err());
    /// ```
    pub fn from_bin_str(s: &str) -> Result<Self, ParseError> {
        for (position, found) in s.char_indices() {
            if found != '0' && found != '1' {
                return Err(ParseError::InvalidBinaryDigit { position, found });
            }
        }
        if s.len() > M {
            return Err(ParseError::BinaryTooLong { len: s.len() });
        }

        let mut bits = Narrow::ZERO;
        for (i, digit) in s.bytes().rev().enumerate() {
            if digit == b'1' {
                bits.set(i);
            }
        }
        Ok(Self::from_bits(bits))
    }

    /// Parse hexadecimal digits (either case), most significant first.
    ///
    /// Leading zero digits are insignificant, so any number of them is
    /// accepted; the empty string is zero. No `0x` prefix is recognised.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidHexDigit` for a non-hex character and
    /// `ParseError::HexTooWide` when the value has more than 173
    /// significant bits.
    ///
    /// # Example
    ///
    /// ```
    /// use gf2m173::FieldElement;
    ///
    /// let a = FieldElement::from_hex_str("1ad6f26d48849e96d7cb5852de86c4a425b698a35b3e").unwrap();
    /// assert_eq!(a.to_string(), "1AD6F26D48849E96D7CB5852DE86C4A425B698A35B3E");
    ///
    /// // 44 digits, but the top digit needs two bits: 174 bits total.
    /// assert!(FieldElement::from_hex_str("2AD6F26D48849E96D7CB5852DE86C4A425B698A35B3E").is_err());
    /// ```
    pub fn from_hex_str(s: &str) -> Result<Self, ParseError> {
        for (position, found) in s.char_indices() {
            if !found.is_ascii() || hex_value(found as u8).is_none() {
                return Err(ParseError::InvalidHexDigit { position, found });
            }
        }

        let significant = s.trim_start_matches('0').as_bytes();
        let Some(&top) = significant.first() else {
            return Ok(Self::from_bits(Narrow::ZERO));
        };

        // Every digit is valid here, so the lookups cannot fail.
        let top_value = hex_value(top).unwrap_or(0);
        let width = (significant.len() - 1) * 4 + (8 - top_value.leading_zeros() as usize);
        if width > M {
            return Err(ParseError::HexTooWide { bits: width });
        }

        let mut bits = Narrow::ZERO;
        for (k, &digit) in significant.iter().rev().enumerate() {
            let nibble = hex_value(digit).unwrap_or(0);
            for b in 0..4 {
                if (nibble >> b) & 1 == 1 {
                    bits.set(4 * k + b);
                }
            }
        }
        Ok(Self::from_bits(bits))
    }

    /// The fixed-width binary encoding: exactly 173 characters.
    ///
    /// Requires the `alloc` feature.
    #[cfg(feature = "alloc")]
    pub fn to_bin_string(&self) -> String {
        format!("{:b}", self)
    }

    /// The minimal uppercase hexadecimal encoding (`"0"` for zero).
    ///
    /// Requires the `alloc` feature.
    #[cfg(feature = "alloc")]
    pub fn to_hex_string(&self) -> String {
        format!("{:X}", self)
    }

    fn nibble(&self, k: usize) -> u8 {
        let mut n = 0u8;
        for b in 0..4 {
            if self.bit(4 * k + b) {
                n |= 1 << b;
            }
        }
        n
    }

    fn write_hex(&self, f: &mut fmt::Formatter<'_>, upper: bool, prefix: bool) -> fmt::Result {
        if prefix {
            f.write_str("0x")?;
        }
        let Some(degree) = self.degree() else {
            return f.write_char('0');
        };
        for k in (0..=degree / 4).rev() {
            f.write_char(hex_char(self.nibble(k), upper))?;
        }
        Ok(())
    }
}

/// Always 173 digits, x^172 first. `{:#b}` adds a `0b` prefix.
impl fmt::Binary for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        for i in (0..M).rev() {
            f.write_char(if self.bits().test(i) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, true, f.alternate())
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, false, f.alternate())
    }
}

/// Displays the canonical hex encoding.
impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, true, false)
    }
}

/// Parses the hex encoding, the inverse of `Display`.
impl FromStr for FieldElement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}
