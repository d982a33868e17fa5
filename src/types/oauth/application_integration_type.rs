use serde_repr::{Deserialize_repr, Serialize_repr};

/// Installation target of an application.
#[derive(Clone, Copy, Debug, Default, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ApplicationIntegrationType {
    /// Installed to a guild.
    #[default]
    GuildInstall = 0,
    /// Installed to a user account.
    UserInstall = 1,
}
