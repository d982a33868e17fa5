use serde_repr::{Deserialize_repr, Serialize_repr};

/// Where a command can be used.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum InteractionContextType {
    /// Inside a guild.
    Guild = 0,
    /// Direct messages with the bot user.
    BotDm = 1,
    /// Group DMs and DMs other than the bot's own.
    PrivateChannel = 2,
}

impl InteractionContextType {
    /// Contexts a command gets when none are set explicitly.
    pub const DEFAULTS: [Self; 3] = [Self::Guild, Self::BotDm, Self::PrivateChannel];
}
