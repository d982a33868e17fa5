//! Bitfield bound to the Discord permission vocabulary.

use bitflags::Flags;

use super::{BitField, BitFieldError, FlagSet, Resolve};
use crate::types::Permissions;

impl FlagSet for Permissions {
    fn named() -> Vec<(&'static str, u128)> {
        Self::FLAGS
            .iter()
            .filter(|flag| flag.is_named())
            .map(|flag| (flag.name(), u128::from(flag.value().bits())))
            .collect()
    }
}

/// Permission bits with Discord's flag names.
pub type PermissionBitField = BitField<Permissions>;

impl BitField<Permissions> {
    /// Every known permission bit.
    pub const ALL: u128 = Permissions::all().bits() as u128;

    /// Whether the administrator bit is set.
    pub const fn is_admin(&self) -> bool {
        self.contains_bits(Permissions::ADMINISTRATOR.bits() as u128)
    }

    /// The items of `bits` that are not fully set, in input order.
    ///
    /// Each item is resolved on its own and returned as given, not as its
    /// resolved integer.
    pub fn missing<B, I>(&self, bits: I) -> Result<Vec<B>, BitFieldError>
    where
        B: Resolve<Permissions>,
        I: IntoIterator<Item = B>,
    {
        let mut missing = Vec::new();

        for bit in bits {
            if !self.has(&bit)? {
                missing.push(bit);
            }
        }

        Ok(missing)
    }

    /// The typed permission set, dropping bits Discord doesn't define.
    pub fn permissions(&self) -> Permissions {
        Permissions::from_bits_truncate(self.bits as u64)
    }
}

impl From<Permissions> for PermissionBitField {
    fn from(permissions: Permissions) -> Self {
        Self::from_bits(u128::from(permissions.bits()))
    }
}
