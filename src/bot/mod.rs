//! Slash-command surface for Thesaurize.
//!
//! The platform contract is one string in, one string out: a command named
//! [`command::COMMAND_NAME`] with a single required `message` option, whose
//! reply is the rewritten phrase. Platform registration and session handling
//! live outside this crate; [`server`] exposes the contract as a webhook
//! endpoint.

pub mod command;
pub mod server;
