//! Application command registration documents.
//!
//! These mirror the JSON bodies accepted by
//! `PUT /applications/{application.id}/commands`. They are what
//! [`SlashCommand::compile`] produces; nothing here performs validation.
//!
//! [`SlashCommand::compile`]: crate::builder::SlashCommand::compile

use serde::{Deserialize, Deserializer, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::types::{
    channel::ChannelType, interaction::InteractionContextType,
    oauth::ApplicationIntegrationType,
};

// ---------------------------------------------------------------------------
// Discriminants
// ---------------------------------------------------------------------------

/// Kind of a top-level command.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum CommandType {
    /// Slash command.
    ChatInput = 1,
    /// Context menu entry on a user.
    User = 2,
    /// Context menu entry on a message.
    Message = 3,
    /// Activity launcher entry point.
    PrimaryEntryPoint = 4,
}

/// Kind of a command option.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum CommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Attachment = 11,
}

impl CommandOptionType {
    /// Whether options of this kind may carry `choices` and `autocomplete`.
    pub const fn supports_choices(self) -> bool {
        matches!(self, Self::String | Self::Integer | Self::Number)
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// Command-root document.
///
/// `default_member_permissions` is a tri-state: `None` leaves the field out of
/// the body, `Some(None)` sends an explicit `null`, and `Some(Some(bits))`
/// sends the permission integer as a decimal string.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Command {
    #[serde(rename = "type")]
    pub kind: CommandType,
    pub integration_types: Vec<ApplicationIntegrationType>,
    pub contexts: Vec<InteractionContextType>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_member_permissions: Option<Option<String>>,
    /// Superseded by `contexts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dm_permission: Option<bool>,
    #[serde(default)]
    pub nsfw: bool,
}

/// A single option record.
///
/// Leaf options (strings, users, ...) fill in the kind-specific fields;
/// subcommands and subcommand groups only carry `options`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CommandOption {
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<CommandOptionChoice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<CommandOptionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<CommandOptionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Vec<ChannelType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<CommandOption>>,
}

impl CommandOption {
    /// Bare leaf record with only the fields every option kind shares.
    pub fn leaf(
        kind: CommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            required: Some(required),
            autocomplete: None,
            choices: None,
            min_length: None,
            max_length: None,
            min_value: None,
            max_value: None,
            channel_types: None,
            options: None,
        }
    }

    /// Subcommand or subcommand group record wrapping `options`.
    pub fn nested(
        kind: CommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
        options: Vec<CommandOption>,
    ) -> Self {
        Self {
            required: None,
            options: Some(options),
            ..Self::leaf(kind, name, description, false)
        }
    }
}

/// A predefined value for a string, integer or number option.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CommandOptionChoice {
    pub name: String,
    pub value: CommandOptionChoiceValue,
}

/// Value of a [`CommandOptionChoice`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOptionChoiceValue {
    String(String),
    Integer(i64),
    Number(f64),
}

/// Bound used by `min_value` / `max_value`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOptionValue {
    Integer(i64),
    Number(f64),
}

impl From<i64> for CommandOptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CommandOptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Keeps an explicit `null` distinct from a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
