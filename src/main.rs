//! Prints the bulk-overwrite body for the demo bot's commands.
//!
//! Pipe the output into whatever registers commands, e.g.
//! `PUT /applications/{id}/commands`.

use std::process::ExitCode;

use tracing::{error, info, warn};

use slash_forge::{
    builder::{IntegerOptionParams, StringOptionParams},
    types::{ChannelType, InteractionContextType, Permissions},
    BuilderError, SlashCommand,
};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Settings read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
struct ExportConfig {
    /// `SLASH_FORGE_PRETTY`, default `true`.
    pretty: bool,
    /// `SLASH_FORGE_NSFW`, default `false`.
    nsfw: bool,
}

impl ExportConfig {
    fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            pretty: flag(&lookup, "SLASH_FORGE_PRETTY", true),
            nsfw: flag(&lookup, "SLASH_FORGE_NSFW", false),
        }
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => {
            warn!(key, value = other, default, "unrecognized boolean, using default");
            default
        }
    }
}

// ---------------------------------------------------------------------------
// Slash command definitions
// ---------------------------------------------------------------------------

fn slash_commands(config: &ExportConfig) -> Result<Vec<SlashCommand>, BuilderError> {
    let mut ping = SlashCommand::chat_input("ping", "Check bot latency");
    ping.add_string_option(
        "target",
        "Who should get the pong",
        false,
        StringOptionParams::new().choices(["Everyone", "Admins"]),
    )?;

    let mut roll = SlashCommand::chat_input("roll", "Roll a dice");
    roll.add_integer_option(
        "sides",
        "Number of sides (default: 6)",
        false,
        IntegerOptionParams::new().min_value(2).max_value(100),
    )?;

    let mut count = SlashCommand::chat_input("count", "Count messages in a channel");
    count
        .add_channel_option(
            "channel",
            "Channel to count in (default: this one)",
            false,
            [ChannelType::GuildText, ChannelType::GuildAnnouncement],
        )
        .set_contexts([InteractionContextType::Guild]);

    let mut config_cmd = SlashCommand::chat_input("config", "Configure the bot");
    config_cmd
        .set_contexts([InteractionContextType::Guild])
        .set_member_permission(Permissions::MANAGE_GUILD)?
        .add_subcommand_group("greeting", "Greeting settings", |group| {
            group
                .add_subcommand("set", "Set the greeting channel", |sub| {
                    sub.add_channel_option(
                        "channel",
                        "Where to greet",
                        true,
                        [ChannelType::GuildText],
                    );
                    Ok(())
                })?
                .add_subcommand("clear", "Stop greeting new members", |_| Ok(()))?;
            Ok(())
        })?;

    let mut commands = vec![
        ping,
        SlashCommand::chat_input("uptime", "See how long the bot has been running"),
        roll,
        SlashCommand::chat_input("serverinfo", "Show server information"),
        SlashCommand::chat_input("whoami", "Show info about yourself"),
        count,
        SlashCommand::chat_input("help", "Show available commands"),
        config_cmd,
        SlashCommand::user("Whois"),
    ];

    if config.nsfw {
        for command in &mut commands {
            command.set_nsfw(true);
        }
    }

    Ok(commands)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    // Initialise tracing (respects RUST_LOG env, defaults to info).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    dotenv::dotenv().ok();

    let config = ExportConfig::from_env();

    let commands = match slash_commands(&config) {
        Ok(commands) => commands,
        Err(e) => {
            error!(error = %e, "failed to build commands");
            return ExitCode::FAILURE;
        }
    };

    let body = if config.pretty {
        serde_json::to_string_pretty(&commands)
    } else {
        serde_json::to_string(&commands)
    };

    match body {
        Ok(body) => {
            info!(count = commands.len(), "compiled commands");
            println!("{body}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to serialize commands");
            ExitCode::FAILURE
        }
    }
}
