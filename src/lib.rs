//! Fluent builder for Discord application command registration bodies.
//!
//! Build a [`SlashCommand`] tree, then [`compile`](SlashCommand::compile) it
//! (or serialize it directly) to get the document Discord's command
//! registration endpoints accept. Permission requirements are expressed with
//! the [`bitfield`] module.
//!
//! Sending the documents is left to the caller's HTTP client.

pub mod bitfield;
pub mod builder;
pub mod types;

pub use self::{
    bitfield::{BitField, BitFieldError, PermissionBitField},
    builder::{BuilderError, Compiled, NodeKind, SlashCommand},
};
