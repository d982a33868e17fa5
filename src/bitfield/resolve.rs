//! Conversion of loosely-typed inputs into raw bits.
//!
//! [`Resolve`] is implemented for integers, strings, flag sets, other
//! bitfields and any sequence of those. Mixed sequences go through the owned
//! [`Bit`] enum.

use super::{BitField, BitFieldError, FlagSet};
use crate::types::Permissions;

/// Something that can be turned into bits against the vocabulary `F`.
pub trait Resolve<F: FlagSet> {
    /// Resolve `self` into its raw bits.
    fn resolve_bits(&self) -> Result<u128, BitFieldError>;
}

impl<F: FlagSet, T: Resolve<F> + ?Sized> Resolve<F> for &T {
    fn resolve_bits(&self) -> Result<u128, BitFieldError> {
        (**self).resolve_bits()
    }
}

macro_rules! resolve_unsigned {
    ($($ty:ty),*) => {
        $(
            impl<F: FlagSet> Resolve<F> for $ty {
                fn resolve_bits(&self) -> Result<u128, BitFieldError> {
                    Ok(*self as u128)
                }
            }
        )*
    };
}

macro_rules! resolve_signed {
    ($($ty:ty),*) => {
        $(
            impl<F: FlagSet> Resolve<F> for $ty {
                fn resolve_bits(&self) -> Result<u128, BitFieldError> {
                    u128::try_from(*self).map_err(|_| BitFieldError::Negative(i128::from(*self)))
                }
            }
        )*
    };
}

resolve_unsigned!(u8, u16, u32, u64, u128, usize);
resolve_signed!(i8, i16, i32, i64, i128);

impl<F: FlagSet> Resolve<F> for str {
    fn resolve_bits(&self) -> Result<u128, BitFieldError> {
        resolve_text::<F>(self)
    }
}

impl<F: FlagSet> Resolve<F> for String {
    fn resolve_bits(&self) -> Result<u128, BitFieldError> {
        resolve_text::<F>(self)
    }
}

impl<F: FlagSet> Resolve<F> for Permissions {
    fn resolve_bits(&self) -> Result<u128, BitFieldError> {
        Ok(u128::from(self.bits()))
    }
}

impl<F: FlagSet, G> Resolve<F> for BitField<G> {
    fn resolve_bits(&self) -> Result<u128, BitFieldError> {
        Ok(self.bits())
    }
}

impl<F: FlagSet, T: Resolve<F>> Resolve<F> for [T] {
    fn resolve_bits(&self) -> Result<u128, BitFieldError> {
        self.iter()
            .try_fold(0, |total, bit| Ok(total | bit.resolve_bits()?))
    }
}

impl<F: FlagSet, T: Resolve<F>, const N: usize> Resolve<F> for [T; N] {
    fn resolve_bits(&self) -> Result<u128, BitFieldError> {
        self.as_slice().resolve_bits()
    }
}

impl<F: FlagSet, T: Resolve<F>> Resolve<F> for Vec<T> {
    fn resolve_bits(&self) -> Result<u128, BitFieldError> {
        self.as_slice().resolve_bits()
    }
}

/// Owned, heterogeneous bit input.
///
/// Lets a single list mix integers, flag names and nested lists:
///
/// ```
/// use slash_forge::bitfield::{Bit, PermissionBitField};
///
/// let input = vec![Bit::from(8u64), Bit::from("KICK_MEMBERS")];
/// assert_eq!(PermissionBitField::resolve(&input).unwrap(), 10);
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Bit {
    /// Raw bits.
    Raw(u128),
    /// A numeric string or a flag name.
    Text(String),
    /// Union of every element.
    List(Vec<Bit>),
}

impl<F: FlagSet> Resolve<F> for Bit {
    fn resolve_bits(&self) -> Result<u128, BitFieldError> {
        match self {
            Self::Raw(bits) => Ok(*bits),
            Self::Text(text) => resolve_text::<F>(text),
            Self::List(bits) => Resolve::<F>::resolve_bits(bits.as_slice()),
        }
    }
}

macro_rules! bit_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Bit {
                fn from(bits: $ty) -> Self {
                    Self::Raw(bits as u128)
                }
            }
        )*
    };
}

bit_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<&str> for Bit {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Bit {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Permissions> for Bit {
    fn from(permissions: Permissions) -> Self {
        Self::Raw(u128::from(permissions.bits()))
    }
}

impl<G> From<BitField<G>> for Bit {
    fn from(field: BitField<G>) -> Self {
        Self::Raw(field.bits())
    }
}

impl From<Vec<Bit>> for Bit {
    fn from(bits: Vec<Bit>) -> Self {
        Self::List(bits)
    }
}

/// Numeric strings win over flag names, then the vocabulary is consulted.
fn resolve_text<F: FlagSet>(text: &str) -> Result<u128, BitFieldError> {
    match parse_numeric(text) {
        Some(bits) => bits,
        None => F::lookup(text).ok_or_else(|| BitFieldError::UnknownBit(text.to_owned())),
    }
}

/// Decimal (optionally signed), `0x`, `0o` or `0b` integers. Blank input
/// counts as zero.
///
/// `None` means the text isn't numeric at all; digits that don't fit or carry
/// a minus sign are errors rather than candidate flag names.
fn parse_numeric(text: &str) -> Option<Result<u128, BitFieldError>> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Some(Ok(0));
    }

    let (negative, digits, radix) = match trimmed.get(..2) {
        Some("0x" | "0X") => (false, &trimmed[2..], 16),
        Some("0o" | "0O") => (false, &trimmed[2..], 8),
        Some("0b" | "0B") => (false, &trimmed[2..], 2),
        _ => match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest, 10),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed), 10),
        },
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let Ok(value) = u128::from_str_radix(digits, radix) else {
        return Some(Err(BitFieldError::Overflow(trimmed.to_owned())));
    };

    if !negative || value == 0 {
        return Some(Ok(value));
    }

    Some(Err(match i128::try_from(value) {
        Ok(value) => BitFieldError::Negative(-value),
        Err(_) => BitFieldError::Overflow(trimmed.to_owned()),
    }))
}
