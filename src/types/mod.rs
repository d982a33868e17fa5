//! Discord API vocabulary used by command registration.
//!
//! The numeric discriminants here must match the v10 wire contract exactly;
//! they are serialized as plain integers through `serde_repr`. Only the slice
//! of the API that command registration touches is modelled:
//!
//! | Module | Contents |
//! |---|---|
//! | [`command`] | `CommandType`, `CommandOptionType` and the registration documents |
//! | [`channel`] | `ChannelType` for channel option allow-lists |
//! | [`guild`] | The `Permissions` bit set |
//! | [`interaction`] | `InteractionContextType` |
//! | [`oauth`] | `ApplicationIntegrationType` |

// ===========================================================================
// Sub-modules
// ===========================================================================

/// Command kinds, option kinds and registration documents.
pub mod command;

/// Channel kinds.
pub mod channel;

/// Guild permissions.
pub mod guild;

/// Interaction contexts.
pub mod interaction;

/// Installation targets.
pub mod oauth;

// ===========================================================================
// Convenience re-exports
// ===========================================================================

pub use self::channel::ChannelType;
pub use self::command::{
    Command, CommandOption, CommandOptionChoice, CommandOptionChoiceValue, CommandOptionType,
    CommandOptionValue, CommandType,
};
pub use self::guild::Permissions;
pub use self::interaction::InteractionContextType;
pub use self::oauth::ApplicationIntegrationType;
