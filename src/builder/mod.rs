//! Chainable builder that compiles into registration documents.
//!
//! A single recursive [`SlashCommand`] stands for the command itself and for
//! every subcommand or subcommand group below it. Which document a node
//! compiles to is decided by its [`NodeKind`]. Leaf options (strings, users,
//! channels, ...) are not nodes; they are stored as finished
//! [`CommandOption`] records.
//!
//! # Examples
//!
//! ```
//! use slash_forge::builder::{SlashCommand, StringOptionParams};
//! use serde_json::json;
//!
//! let mut ping = SlashCommand::chat_input("ping", "Replies with pong");
//! ping.add_string_option(
//!     "target",
//!     "Who to ping",
//!     true,
//!     StringOptionParams::new().choices(["Everyone", "Admins"]),
//! )?;
//!
//! let body = ping.to_json()?;
//! assert_eq!(
//!     body["options"][0]["choices"],
//!     json!([
//!         {"name": "Everyone", "value": "everyone"},
//!         {"name": "Admins", "value": "admins"},
//!     ])
//! );
//! # Ok::<(), slash_forge::builder::BuilderError>(())
//! ```
//!
//! # Which builder is returned
//!
//! | Method | Returns |
//! |---|---|
//! | `add_*` | the node it was called on |
//! | `insert_subcommand`, `insert_subcommand_group` | the new child |
//! | `set_*` | the node it was called on |

mod choice;
mod error;

pub use self::{
    choice::{
        Choice, IntegerOptionParams, NumberOptionParams, NumericOptionParams, StringOptionParams,
        MAX_CHOICES,
    },
    error::BuilderError,
};

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::{
    bitfield::{PermissionBitField, Resolve},
    types::{
        ApplicationIntegrationType, ChannelType, Command, CommandOption, CommandOptionChoice,
        CommandOptionType, CommandOptionValue, CommandType, InteractionContextType, Permissions,
    },
};

/// What a [`SlashCommand`] compiles to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum NodeKind {
    /// Nothing set yet; compiles to an empty document.
    #[default]
    Unset,
    /// A top-level command.
    Command(CommandType),
    /// A group of subcommands.
    SubcommandGroup,
    /// A subcommand holding leaf options.
    Subcommand,
}

/// An element of a node's option list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Child<'a> {
    /// A nested subcommand or subcommand group.
    Node(&'a SlashCommand),
    /// A finished leaf option, emitted unchanged.
    Option(&'a CommandOption),
}

/// Position of a child in `nodes` or `options`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    Node(usize),
    Option(usize),
}

/// Default member permission requirement of a command.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MemberPermissions {
    /// Not specified; the field is left out of the document.
    #[default]
    Unspecified,
    /// Explicitly no requirement; sent as `null`.
    Cleared,
    /// Members need every bit set here.
    Required(PermissionBitField),
}

impl MemberPermissions {
    fn to_wire(self) -> Option<Option<String>> {
        match self {
            Self::Unspecified => None,
            Self::Cleared => Some(None),
            Self::Required(bits) => Some(Some(bits.to_string())),
        }
    }
}

/// The compiled form of a [`SlashCommand`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Compiled {
    /// A command-root document.
    Command(Command),
    /// A subcommand or subcommand group document.
    CommandOption(CommandOption),
    /// The node had no kind.
    Empty(EmptyDocument),
}

impl Compiled {
    pub fn into_command(self) -> Option<Command> {
        match self {
            Self::Command(command) => Some(command),
            _ => None,
        }
    }

    pub fn into_command_option(self) -> Option<CommandOption> {
        match self {
            Self::CommandOption(option) => Some(option),
            _ => None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

/// Serializes as `{}`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EmptyDocument {}

/// A command, subcommand group or subcommand under construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SlashCommand {
    name: String,
    description: String,
    kind: NodeKind,
    nodes: Vec<SlashCommand>,
    options: Vec<CommandOption>,
    order: Vec<Slot>,
    contexts: Option<Vec<InteractionContextType>>,
    integration_types: Option<Vec<ApplicationIntegrationType>>,
    default_member_permissions: MemberPermissions,
    dm_permission: Option<bool>,
    nsfw: bool,
    min_choices: usize,
}

impl SlashCommand {
    /// Node without a kind. Set one with [`set_command_type`] before
    /// compiling, or it compiles to `{}`.
    ///
    /// [`set_command_type`]: Self::set_command_type
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(name, description, NodeKind::Unset)
    }

    pub fn with_kind(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: NodeKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            nodes: Vec::new(),
            options: Vec::new(),
            order: Vec::new(),
            contexts: None,
            integration_types: None,
            default_member_permissions: MemberPermissions::Unspecified,
            dm_permission: None,
            nsfw: false,
            min_choices: 1,
        }
    }

    /// Start building a CHAT_INPUT (slash) command.
    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(name, description, NodeKind::Command(CommandType::ChatInput))
    }

    /// Start building a USER context-menu command.
    pub fn user(name: impl Into<String>) -> Self {
        Self::with_kind(name, String::new(), NodeKind::Command(CommandType::User))
    }

    /// Start building a MESSAGE context-menu command.
    pub fn message(name: impl Into<String>) -> Self {
        Self::with_kind(name, String::new(), NodeKind::Command(CommandType::Message))
    }

    /// The older, stricter builder: non-empty choice lists need at least two
    /// entries. Nodes added below it inherit the rule.
    #[deprecated(note = "use `SlashCommand::with_kind`; it accepts single-entry choice lists")]
    pub fn legacy(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: Option<NodeKind>,
    ) -> Self {
        Self {
            min_choices: 2,
            ..Self::with_kind(name, description, kind.unwrap_or_default())
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Options in insertion order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = Child<'_>> + '_ {
        self.order.iter().map(move |slot| match *slot {
            Slot::Node(index) => Child::Node(&self.nodes[index]),
            Slot::Option(index) => Child::Option(&self.options[index]),
        })
    }

    pub const fn member_permissions(&self) -> MemberPermissions {
        self.default_member_permissions
    }

    // -----------------------------------------------------------------------
    // Subcommands
    // -----------------------------------------------------------------------

    /// Append a subcommand group and hand it to `configure`.
    ///
    /// Returns `self`, not the group. The group is appended before
    /// `configure` runs and stays appended if it fails.
    pub fn add_subcommand_group<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        configure: F,
    ) -> Result<&mut Self, BuilderError>
    where
        F: FnOnce(&mut SlashCommand) -> Result<(), BuilderError>,
    {
        configure(self.insert_subcommand_group(name, description))?;

        Ok(self)
    }

    /// Append a subcommand and hand it to `configure`.
    ///
    /// Returns `self`, not the subcommand.
    pub fn add_subcommand<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        configure: F,
    ) -> Result<&mut Self, BuilderError>
    where
        F: FnOnce(&mut SlashCommand) -> Result<(), BuilderError>,
    {
        configure(self.insert_subcommand(name, description))?;

        Ok(self)
    }

    /// Append a subcommand group and return it.
    pub fn insert_subcommand_group(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut SlashCommand {
        self.insert_node(name.into(), description.into(), NodeKind::SubcommandGroup)
    }

    /// Append a subcommand and return it.
    pub fn insert_subcommand(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut SlashCommand {
        self.insert_node(name.into(), description.into(), NodeKind::Subcommand)
    }

    fn insert_node(&mut self, name: String, description: String, kind: NodeKind) -> &mut Self {
        let node = Self {
            min_choices: self.min_choices,
            ..Self::with_kind(name, description, kind)
        };

        let index = self.nodes.len();
        self.nodes.push(node);
        self.order.push(Slot::Node(index));

        &mut self.nodes[index]
    }

    // -----------------------------------------------------------------------
    // Leaf options
    // -----------------------------------------------------------------------

    /// Append a caller-built option record as is.
    pub fn add_option(&mut self, option: CommandOption) -> &mut Self {
        let has_choices = option.choices.as_ref().is_some_and(|c| !c.is_empty());

        if !option.kind.supports_choices() && (has_choices || option.autocomplete.is_some()) {
            warn!(
                option = %option.name,
                kind = ?option.kind,
                "choices and autocomplete are ignored on this option type"
            );
        }

        self.order.push(Slot::Option(self.options.len()));
        self.options.push(option);

        self
    }

    pub fn add_string_option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        params: StringOptionParams,
    ) -> Result<&mut Self, BuilderError> {
        let mut option =
            CommandOption::leaf(CommandOptionType::String, name, description, required);

        let choices = self.check_choices(&option.name, params.choices)?;
        option.autocomplete = autocomplete_for(&option.name, params.autocomplete, &choices);
        option.choices = choices;
        option.min_length = params.min_length;
        option.max_length = params.max_length;

        Ok(self.add_option(option))
    }

    pub fn add_integer_option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        params: IntegerOptionParams,
    ) -> Result<&mut Self, BuilderError> {
        self.add_numeric_option(CommandOptionType::Integer, name, description, required, params)
    }

    pub fn add_number_option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        params: NumberOptionParams,
    ) -> Result<&mut Self, BuilderError> {
        self.add_numeric_option(CommandOptionType::Number, name, description, required, params)
    }

    fn add_numeric_option<T>(
        &mut self,
        kind: CommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        params: NumericOptionParams<T>,
    ) -> Result<&mut Self, BuilderError>
    where
        T: Into<CommandOptionValue>,
        Choice<T>: Into<CommandOptionChoice>,
    {
        let mut option = CommandOption::leaf(kind, name, description, required);

        let choices = self.check_choices(&option.name, params.choices)?;
        option.autocomplete = autocomplete_for(&option.name, params.autocomplete, &choices);
        option.choices = choices;
        option.min_value = params.min_value.map(Into::into);
        option.max_value = params.max_value.map(Into::into);

        Ok(self.add_option(option))
    }

    pub fn add_boolean_option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> &mut Self {
        self.add_option(CommandOption::leaf(
            CommandOptionType::Boolean,
            name,
            description,
            required,
        ))
    }

    pub fn add_user_option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> &mut Self {
        self.add_option(CommandOption::leaf(
            CommandOptionType::User,
            name,
            description,
            required,
        ))
    }

    /// Channel option limited to `channel_types`; an empty list allows every
    /// channel type.
    ///
    /// DM and group DM types are kept but logged, Discord never offers them.
    pub fn add_channel_option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        channel_types: impl IntoIterator<Item = ChannelType>,
    ) -> &mut Self {
        let mut option =
            CommandOption::leaf(CommandOptionType::Channel, name, description, required);
        let channel_types: Vec<_> = channel_types.into_iter().collect();

        for kind in channel_types.iter().filter(|kind| kind.is_private()) {
            warn!(option = %option.name, ?kind, "private channel type in channel option");
        }

        option.channel_types = Some(channel_types);

        self.add_option(option)
    }

    pub fn add_role_option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> &mut Self {
        self.add_option(CommandOption::leaf(
            CommandOptionType::Role,
            name,
            description,
            required,
        ))
    }

    pub fn add_mentionable_option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> &mut Self {
        self.add_option(CommandOption::leaf(
            CommandOptionType::Mentionable,
            name,
            description,
            required,
        ))
    }

    pub fn add_attachment_option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> &mut Self {
        self.add_option(CommandOption::leaf(
            CommandOptionType::Attachment,
            name,
            description,
            required,
        ))
    }

    /// Bounds are only checked for non-empty lists; `Some(vec![])` is kept and
    /// sent as `choices: []`.
    fn check_choices<T>(
        &self,
        option: &str,
        choices: Option<Vec<Choice<T>>>,
    ) -> Result<Option<Vec<CommandOptionChoice>>, BuilderError>
    where
        Choice<T>: Into<CommandOptionChoice>,
    {
        let Some(choices) = choices else {
            return Ok(None);
        };

        let count = choices.len();

        if count > MAX_CHOICES {
            return Err(BuilderError::TooManyChoices {
                option: option.to_owned(),
                count,
                max: MAX_CHOICES,
            });
        }

        if count != 0 && count < self.min_choices {
            return Err(BuilderError::TooFewChoices {
                option: option.to_owned(),
                count,
                min: self.min_choices,
            });
        }

        Ok(Some(choices.into_iter().map(Into::into).collect()))
    }

    // -----------------------------------------------------------------------
    // Command metadata
    // -----------------------------------------------------------------------

    /// Where the command can be used. Defaults to everywhere.
    pub fn set_contexts(
        &mut self,
        contexts: impl IntoIterator<Item = InteractionContextType>,
    ) -> &mut Self {
        self.contexts = Some(contexts.into_iter().collect());

        self
    }

    /// Where the command can be installed. Defaults to guilds only.
    pub fn set_integration_types(
        &mut self,
        types: impl IntoIterator<Item = ApplicationIntegrationType>,
    ) -> &mut Self {
        self.integration_types = Some(types.into_iter().collect());

        self
    }

    /// Require members to hold `permission` by default.
    ///
    /// Accepts anything [`PermissionBitField`] resolves: a bitfield,
    /// [`Permissions`], integers, numeric strings or flag names.
    ///
    /// A zero value (`0`, `"0"`, `""`) is sent as `"0"`, which Discord reads
    /// as "administrators only". It is not turned into `null`; use
    /// [`clear_member_permission`](Self::clear_member_permission) for that.
    pub fn set_member_permission<B>(&mut self, permission: B) -> Result<&mut Self, BuilderError>
    where
        B: Resolve<Permissions>,
    {
        let bits = PermissionBitField::try_new(permission)?;
        self.default_member_permissions = MemberPermissions::Required(bits);

        Ok(self)
    }

    /// Drop any permission requirement; the command is sent with
    /// `default_member_permissions: null`.
    pub fn clear_member_permission(&mut self) -> &mut Self {
        self.default_member_permissions = MemberPermissions::Cleared;

        self
    }

    pub fn set_nsfw(&mut self, nsfw: bool) -> &mut Self {
        self.nsfw = nsfw;

        self
    }

    /// Turn this node into a command of the given type.
    ///
    /// Only meaningful on a root. A nested node given a command type no
    /// longer fits in its parent's `options` and is left out of the parent's
    /// document (with a warning) when the parent compiles.
    pub fn set_command_type(&mut self, kind: CommandType) -> &mut Self {
        self.kind = NodeKind::Command(kind);

        self
    }

    #[deprecated(note = "use `set_contexts` instead")]
    pub fn set_dm_permission(&mut self, allow: bool) -> &mut Self {
        self.dm_permission = Some(allow);

        self
    }

    // -----------------------------------------------------------------------
    // Compilation
    // -----------------------------------------------------------------------

    /// Lower this node and everything below it into its document.
    pub fn compile(&self) -> Compiled {
        match self.kind {
            NodeKind::Command(kind) => Compiled::Command(self.compile_command(kind)),
            NodeKind::SubcommandGroup => Compiled::CommandOption(CommandOption::nested(
                CommandOptionType::SubCommandGroup,
                self.name.clone(),
                self.description.clone(),
                self.compile_children(),
            )),
            NodeKind::Subcommand => Compiled::CommandOption(CommandOption::nested(
                CommandOptionType::SubCommand,
                self.name.clone(),
                self.description.clone(),
                self.compile_children(),
            )),
            NodeKind::Unset => {
                warn!(name = %self.name, "node has no command or option type, compiling to {{}}");

                Compiled::Empty(EmptyDocument {})
            }
        }
    }

    /// [`compile`](Self::compile), then convert to a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value, BuilderError> {
        serde_json::to_value(self.compile()).map_err(BuilderError::from)
    }

    fn compile_command(&self, kind: CommandType) -> Command {
        debug!(name = %self.name, options = self.order.len(), "compiling command");

        Command {
            kind,
            integration_types: self
                .integration_types
                .clone()
                .unwrap_or_else(|| vec![ApplicationIntegrationType::GuildInstall]),
            contexts: self
                .contexts
                .clone()
                .unwrap_or_else(|| InteractionContextType::DEFAULTS.to_vec()),
            name: self.name.clone(),
            description: self.description.clone(),
            options: self.compile_children(),
            default_member_permissions: self.default_member_permissions.to_wire(),
            dm_permission: self.dm_permission,
            nsfw: self.nsfw,
        }
    }

    fn compile_children(&self) -> Vec<CommandOption> {
        self.children()
            .filter_map(|child| match child {
                Child::Option(option) => Some(option.clone()),
                Child::Node(node) => {
                    let option = node.compile().into_command_option();

                    if option.is_none() {
                        warn!(
                            parent = %self.name,
                            child = %node.name,
                            "nested node is not a subcommand or group, skipping it"
                        );
                    }

                    option
                }
            })
            .collect()
    }
}

/// A command serializes as its compiled document, so a slice of commands is a
/// bulk-overwrite body.
impl Serialize for SlashCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.compile().serialize(serializer)
    }
}

fn autocomplete_for(
    option: &str,
    requested: Option<bool>,
    choices: &Option<Vec<CommandOptionChoice>>,
) -> Option<bool> {
    match choices {
        Some(choices) if !choices.is_empty() => {
            if requested == Some(true) {
                debug!(option, "choices are set, disabling autocomplete");
            }

            Some(false)
        }
        _ => requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use static_assertions::assert_impl_all;

    assert_impl_all!(SlashCommand: Clone, Send, Sync);
    assert_impl_all!(Compiled: Clone, Send, Sync);

    fn too_many(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("Choice {i}")).collect()
    }

    #[test]
    fn root_defaults() {
        let value = SlashCommand::chat_input("ping", "Check bot latency")
            .to_json()
            .unwrap();

        assert_eq!(
            value,
            json!({
                "type": 1,
                "integration_types": [0],
                "contexts": [0, 1, 2],
                "name": "ping",
                "description": "Check bot latency",
                "options": [],
                "nsfw": false,
            })
        );
    }

    #[test]
    fn root_metadata() {
        let mut command = SlashCommand::chat_input("ban", "Ban a member");
        command
            .set_contexts([InteractionContextType::Guild])
            .set_integration_types([
                ApplicationIntegrationType::GuildInstall,
                ApplicationIntegrationType::UserInstall,
            ])
            .set_nsfw(true)
            .set_member_permission(Permissions::BAN_MEMBERS)
            .unwrap();

        #[allow(deprecated)]
        command.set_dm_permission(false);

        let value = command.to_json().unwrap();
        assert_eq!(value["contexts"], json!([0]));
        assert_eq!(value["integration_types"], json!([0, 1]));
        assert_eq!(value["nsfw"], json!(true));
        assert_eq!(value["default_member_permissions"], json!("4"));
        assert_eq!(value["dm_permission"], json!(false));
    }

    #[test]
    fn member_permission_tri_state() {
        let mut command = SlashCommand::chat_input("a", "b");
        assert_eq!(command.member_permissions(), MemberPermissions::Unspecified);
        assert!(command.to_json().unwrap().get("default_member_permissions").is_none());

        command.set_member_permission("ManageGuild").unwrap();
        assert_eq!(
            command.to_json().unwrap()["default_member_permissions"],
            json!("32")
        );

        command.clear_member_permission();
        let value = command.to_json().unwrap();
        assert_eq!(value.get("default_member_permissions"), Some(&json!(null)));
    }

    #[test]
    fn member_permission_accepts_bitfields_and_raw_values() {
        let mut command = SlashCommand::chat_input("a", "b");
        let mut perms = PermissionBitField::new();
        perms.add(["KICK_MEMBERS", "BAN_MEMBERS"]).unwrap();

        command.set_member_permission(perms).unwrap();
        assert_eq!(command.to_json().unwrap()["default_member_permissions"], json!("6"));

        command.set_member_permission(0u64).unwrap();
        assert_eq!(command.to_json().unwrap()["default_member_permissions"], json!("0"));

        command.set_member_permission("0x20").unwrap();
        assert_eq!(command.to_json().unwrap()["default_member_permissions"], json!("32"));
    }

    #[test]
    fn zero_permission_is_not_cleared() {
        let mut command = SlashCommand::chat_input("a", "b");

        for zero in ["0", "", "-0"] {
            command.set_member_permission(zero).unwrap();
            assert_eq!(command.to_json().unwrap()["default_member_permissions"], json!("0"));
        }

        command.set_member_permission(PermissionBitField::new()).unwrap();
        assert_eq!(
            command.member_permissions(),
            MemberPermissions::Required(PermissionBitField::new())
        );
    }

    #[test]
    fn member_permission_rejects_unknown_names() {
        let mut command = SlashCommand::chat_input("a", "b");
        let err = command.set_member_permission("FLY").unwrap_err();
        assert!(matches!(err, BuilderError::Bits(_)));
        assert_eq!(command.member_permissions(), MemberPermissions::Unspecified);
    }

    #[test]
    fn too_many_choices_fail_before_mutation() {
        let mut command = SlashCommand::chat_input("pick", "Pick one");
        let err = command
            .add_string_option(
                "color",
                "A color",
                false,
                StringOptionParams::new().choices(too_many(26)),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            BuilderError::TooManyChoices { count: 26, max: 25, .. }
        ));
        assert_eq!(command.children().len(), 0);

        let numbers: Vec<i64> = (0..30).collect();
        assert!(command
            .add_integer_option("n", "A number", false, IntegerOptionParams::new().choices(numbers))
            .is_err());
        assert_eq!(command.children().len(), 0);
    }

    #[test]
    fn twenty_five_choices_are_fine() {
        let mut command = SlashCommand::chat_input("pick", "Pick one");
        command
            .add_string_option(
                "color",
                "A color",
                false,
                StringOptionParams::new().choices(too_many(25)),
            )
            .unwrap();
        assert_eq!(command.children().len(), 1);
    }

    #[test]
    fn single_choice_allowed_but_not_in_legacy() {
        let mut command = SlashCommand::chat_input("pick", "Pick one");
        command
            .add_string_option("only", "Only", false, StringOptionParams::new().choices(["One"]))
            .unwrap();

        #[allow(deprecated)]
        let mut legacy = SlashCommand::legacy("pick", "Pick one", None);
        let err = legacy
            .add_string_option("only", "Only", false, StringOptionParams::new().choices(["One"]))
            .unwrap_err();
        assert!(matches!(err, BuilderError::TooFewChoices { count: 1, min: 2, .. }));

        // nested nodes inherit the stricter bound
        let err = legacy
            .insert_subcommand("sub", "Sub")
            .add_number_option("n", "N", false, NumberOptionParams::new().choices([1.5]))
            .unwrap_err();
        assert!(matches!(err, BuilderError::TooFewChoices { .. }));

        // empty lists are never checked
        legacy
            .add_string_option("none", "None", false, StringOptionParams::new().choices(Vec::<&str>::new()))
            .unwrap();
    }

    #[test]
    fn choices_force_autocomplete_off() {
        let mut command = SlashCommand::chat_input("a", "b");
        command
            .add_string_option(
                "with",
                "With choices",
                false,
                StringOptionParams::new().autocomplete(true).choices(["X"]),
            )
            .unwrap()
            .add_string_option(
                "without",
                "Without choices",
                false,
                StringOptionParams::new().autocomplete(true),
            )
            .unwrap()
            .add_integer_option("plain", "Plain", false, IntegerOptionParams::new())
            .unwrap()
            .add_number_option(
                "empty",
                "Empty choices",
                false,
                NumberOptionParams::new()
                    .autocomplete(true)
                    .choices(Vec::<f64>::new()),
            )
            .unwrap();

        let value = command.to_json().unwrap();
        assert_eq!(value["options"][0]["autocomplete"], json!(false));
        assert_eq!(value["options"][1]["autocomplete"], json!(true));
        assert!(value["options"][2].get("autocomplete").is_none());
        assert_eq!(value["options"][3]["autocomplete"], json!(true));
        assert_eq!(value["options"][3]["choices"], json!([]));
    }

    #[test]
    fn numeric_option_fields() {
        let mut command = SlashCommand::chat_input("roll", "Roll a dice");
        command
            .add_integer_option(
                "sides",
                "Number of sides",
                false,
                IntegerOptionParams::new().min_value(2).max_value(100),
            )
            .unwrap()
            .add_number_option(
                "bias",
                "Bias",
                true,
                NumberOptionParams::new().choices([Choice::new("Half", 0.5f64), Choice::from(1.0f64)]),
            )
            .unwrap();

        let value = command.to_json().unwrap();
        assert_eq!(
            value["options"],
            json!([
                {
                    "type": 4,
                    "name": "sides",
                    "description": "Number of sides",
                    "required": false,
                    "min_value": 2,
                    "max_value": 100,
                },
                {
                    "type": 10,
                    "name": "bias",
                    "description": "Bias",
                    "required": true,
                    "autocomplete": false,
                    "choices": [
                        {"name": "Half", "value": 0.5},
                        {"name": "1", "value": 1.0},
                    ],
                },
            ])
        );
    }

    #[test]
    fn simple_leaf_options() {
        let mut command = SlashCommand::chat_input("info", "Info");
        command
            .add_boolean_option("flag", "Flag", false)
            .add_user_option("user", "User", true)
            .add_role_option("role", "Role", false)
            .add_mentionable_option("who", "Who", false)
            .add_attachment_option("file", "File", false)
            .add_channel_option(
                "where",
                "Where",
                false,
                [ChannelType::GuildText, ChannelType::GuildForum],
            )
            .add_channel_option("any", "Any", false, Vec::new());

        let value = command.to_json().unwrap();
        let kinds: Vec<_> = value["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|option| option["type"].as_u64().unwrap())
            .collect();
        assert_eq!(kinds, [5, 6, 8, 9, 11, 7, 7]);
        assert_eq!(value["options"][5]["channel_types"], json!([0, 15]));
        assert_eq!(value["options"][6]["channel_types"], json!([]));
        assert_eq!(
            value["options"][1],
            json!({"type": 6, "name": "user", "description": "User", "required": true})
        );
    }

    #[test]
    fn odd_records_are_kept_as_given() {
        let mut flag = CommandOption::leaf(CommandOptionType::Boolean, "flag", "Flag", false);
        flag.autocomplete = Some(true);
        flag.choices = Some(vec![Choice::from("Yes").into()]);

        let mut command = SlashCommand::chat_input("a", "b");
        command
            .add_option(flag.clone())
            .add_channel_option("dm", "DM", false, [ChannelType::Dm, ChannelType::GuildText]);

        let value = command.to_json().unwrap();
        assert_eq!(value["options"][0], serde_json::to_value(&flag).unwrap());
        assert_eq!(value["options"][1]["channel_types"], json!([1, 0]));
    }

    #[test]
    fn subcommand_group_nesting() {
        let mut command = SlashCommand::chat_input("config", "Configure the bot");
        command
            .add_subcommand_group("role", "Role settings", |group| {
                group
                    .add_subcommand("add", "Add a role", |sub| {
                        sub.add_string_option("name", "Role name", true, StringOptionParams::new())?;
                        Ok(())
                    })?
                    .add_subcommand("remove", "Remove a role", |sub| {
                        sub.add_string_option("name", "Role name", true, StringOptionParams::new())?;
                        Ok(())
                    })?;
                Ok(())
            })
            .unwrap();

        let value = command.to_json().unwrap();
        let group = &value["options"][0];
        assert_eq!(group["type"], json!(2));
        assert_eq!(group["options"].as_array().unwrap().len(), 2);
        assert_eq!(group["options"][0]["name"], json!("add"));
        assert_eq!(group["options"][1]["name"], json!("remove"));
        assert_eq!(group["options"][0]["type"], json!(1));
        assert_eq!(group["options"][0]["options"].as_array().unwrap().len(), 1);
        assert!(group.get("required").is_none());
    }

    #[test]
    fn configure_errors_propagate() {
        let mut command = SlashCommand::chat_input("a", "b");
        let result = command.add_subcommand("sub", "Sub", |sub| {
            sub.add_string_option("x", "X", false, StringOptionParams::new().choices(too_many(40)))?;
            Ok(())
        });

        assert!(matches!(result, Err(BuilderError::TooManyChoices { .. })));
        assert_eq!(command.children().len(), 1);
    }

    #[test]
    fn insert_returns_the_child() {
        let mut command = SlashCommand::chat_input("a", "b");
        let sub = command.insert_subcommand("sub", "Sub");
        sub.add_user_option("who", "Who", false);
        assert_eq!(sub.kind(), NodeKind::Subcommand);

        sub.add_role_option("role", "Role", false);
        command.add_boolean_option("flag", "Flag", false);
        command.insert_subcommand("other", "Other");

        let children: Vec<_> = command.children().collect();
        assert_eq!(children.len(), 3);
        match children[0] {
            Child::Node(node) => {
                assert_eq!(node.name(), "sub");
                assert_eq!(node.children().len(), 2);
            }
            Child::Option(_) => panic!("expected a nested node"),
        }
        assert!(matches!(children[1], Child::Option(option) if option.name == "flag"));
        assert!(matches!(children[2], Child::Node(node) if node.name() == "other"));
    }

    #[test]
    fn standalone_subcommand_compiles_to_option() {
        let mut sub = SlashCommand::with_kind("sub", "Sub", NodeKind::Subcommand);
        sub.add_boolean_option("on", "On", false);

        let option = sub.compile().into_command_option().unwrap();
        assert_eq!(option.kind, CommandOptionType::SubCommand);
        assert_eq!(option.options.map(|o| o.len()), Some(1));
    }

    #[test]
    fn untyped_node_compiles_to_empty_object() {
        let mut node = SlashCommand::new("nothing", "No kind");
        node.add_user_option("who", "Who", false);

        assert!(node.compile().is_empty());
        assert_eq!(node.to_json().unwrap(), json!({}));

        node.set_command_type(CommandType::ChatInput);
        assert!(node.compile().into_command().is_some());
    }

    #[test]
    fn nested_command_roots_are_skipped() {
        let mut command = SlashCommand::chat_input("a", "b");
        command
            .insert_subcommand("odd", "Odd")
            .set_command_type(CommandType::User);
        command.add_boolean_option("flag", "Flag", false);

        let value = command.to_json().unwrap();
        assert_eq!(value["options"].as_array().unwrap().len(), 1);
        assert_eq!(value["options"][0]["name"], json!("flag"));
    }

    #[test]
    fn compile_is_repeatable() {
        let mut command = SlashCommand::chat_input("a", "b");
        command.add_subcommand("s", "S", |_| Ok(())).unwrap();

        assert_eq!(command.compile(), command.compile());
    }

    #[test]
    fn context_menu_commands() {
        let value = SlashCommand::user("High Five").to_json().unwrap();
        assert_eq!(value["type"], json!(2));
        assert_eq!(value["description"], json!(""));

        let value = SlashCommand::message("Bookmark").to_json().unwrap();
        assert_eq!(value["type"], json!(3));
    }

    #[test]
    fn serializes_like_its_document() {
        let commands = [
            SlashCommand::chat_input("a", "A"),
            SlashCommand::chat_input("b", "B"),
        ];
        let value = serde_json::to_value(&commands).unwrap();
        assert_eq!(value[1]["name"], json!("b"));
        assert_eq!(value[0], commands[0].to_json().unwrap());
    }
}
