//! Named bit sets backed by a wide unsigned integer.
//!
//! [`BitField`] stores raw bits and resolves loosely-typed inputs (integers,
//! numeric strings, flag names, other bitfields, lists of any of those)
//! through [`Resolve`]. The vocabulary of flag names comes from a [`FlagSet`];
//! [`NoFlags`] is the empty vocabulary and [`PermissionBitField`] binds the
//! Discord permission flags.
//!
//! ```
//! use slash_forge::bitfield::PermissionBitField;
//!
//! let mut perms = PermissionBitField::new();
//! perms.add(["KICK_MEMBERS", "BAN_MEMBERS"])?;
//! assert!(perms.has("KICK_MEMBERS")?);
//!
//! perms.remove("KICK_MEMBERS")?;
//! assert_eq!(perms.bits(), 4);
//! # Ok::<(), slash_forge::bitfield::BitFieldError>(())
//! ```

mod error;
mod permission;
mod resolve;

pub use self::{
    error::BitFieldError,
    permission::PermissionBitField,
    resolve::{Bit, Resolve},
};

use serde::{Serialize, Serializer};
use std::{
    collections::BTreeMap,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

/// Key under which [`BitField::json`] stores the raw total.
pub const BITS_KEY: &str = "_bits";

/// Vocabulary of named flags.
pub trait FlagSet {
    /// Every named flag with its bits, in declaration order.
    fn named() -> Vec<(&'static str, u128)>;

    /// Bits of the flag called `name`.
    ///
    /// Exact names win; otherwise names are compared ignoring case and
    /// underscores, so `ManageGuild` finds `MANAGE_GUILD`.
    fn lookup(name: &str) -> Option<u128> {
        let named = Self::named();

        if let Some((_, bits)) = named.iter().find(|(flag, _)| *flag == name) {
            return Some(*bits);
        }

        let wanted = fold_name(name);

        named
            .into_iter()
            .find(|(flag, _)| fold_name(flag) == wanted)
            .map(|(_, bits)| bits)
    }
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// The empty vocabulary; only numeric input resolves.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct NoFlags;

impl FlagSet for NoFlags {
    fn named() -> Vec<(&'static str, u128)> {
        Vec::new()
    }
}

/// A set of bits, optionally named through the vocabulary `F`.
pub struct BitField<F = NoFlags> {
    bits: u128,
    flags: PhantomData<fn() -> F>,
}

impl<F> BitField<F> {
    /// Empty bitfield.
    pub const fn new() -> Self {
        Self::from_bits(0)
    }

    /// Bitfield holding exactly `bits`.
    pub const fn from_bits(bits: u128) -> Self {
        Self {
            bits,
            flags: PhantomData,
        }
    }

    /// Raw bits.
    pub const fn bits(&self) -> u128 {
        self.bits
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Whether every bit of `bits` is set.
    pub const fn contains_bits(&self, bits: u128) -> bool {
        self.bits & bits == bits
    }
}

impl<F: FlagSet> BitField<F> {
    /// Bitfield holding the resolved value of `bits`.
    pub fn try_new<B: Resolve<F>>(bits: B) -> Result<Self, BitFieldError> {
        Self::resolve(bits).map(Self::from_bits)
    }

    /// Resolve `bits` against this vocabulary without touching any bitfield.
    pub fn resolve<B: Resolve<F>>(bits: B) -> Result<u128, BitFieldError> {
        bits.resolve_bits()
    }

    /// Whether *all* resolved bits are set.
    pub fn has<B: Resolve<F>>(&self, bits: B) -> Result<bool, BitFieldError> {
        Self::resolve(bits).map(|bits| self.contains_bits(bits))
    }

    /// Set the resolved bits. Bits already set stay set.
    pub fn add<B: Resolve<F>>(&mut self, bits: B) -> Result<&mut Self, BitFieldError> {
        self.bits |= Self::resolve(bits)?;

        Ok(self)
    }

    /// Clear the resolved bits, leaving every other bit untouched.
    pub fn remove<B: Resolve<F>>(&mut self, bits: B) -> Result<&mut Self, BitFieldError> {
        self.bits &= !Self::resolve(bits)?;

        Ok(self)
    }

    /// Every named flag that is fully set, plus the raw total under
    /// [`BITS_KEY`].
    pub fn json(&self) -> BTreeMap<String, u128> {
        let mut map: BTreeMap<String, u128> = F::named()
            .into_iter()
            .filter(|(_, bits)| *bits != 0 && self.contains_bits(*bits))
            .map(|(name, bits)| (name.to_owned(), bits))
            .collect();

        map.insert(BITS_KEY.to_owned(), self.bits);

        map
    }
}

impl<F> Clone for BitField<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for BitField<F> {}

impl<F> Default for BitField<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> PartialEq for BitField<F> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<F> Eq for BitField<F> {}

impl<F> Hash for BitField<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<F> Debug for BitField<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("BitField").field(&self.bits).finish()
    }
}

impl<F> Display for BitField<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.bits, f)
    }
}

impl<F: FlagSet> FromStr for BitField<F> {
    type Err = BitFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

// Bits are sent as decimal strings, the same way Discord encodes permissions.
impl<F> Serialize for BitField<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.bits)
    }
}
