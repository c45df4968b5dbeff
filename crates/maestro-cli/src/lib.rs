//! maestro-cli library
//!
//! This module exports the HTTP client and the resource layer for use by
//! the `maestro` binary and the integration tests.

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub mod logger;
pub(crate) mod project_commands;
pub(crate) mod resources;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
pub use project_commands::ProjectCommands;
pub use resources::{
    Associate, AssociationOutcome, Create, CreateOutcome, CredentialResource, DeleteOutcome, Get,
    JobSource, Modify, MonitorOutcome, OrganizationResource, ProjectResource, ResourceError,
    ResourceResult, ResultPage, Selector, StatusOutcome, StatusSummary, TimeoutResult,
    UpdateOutcome, UpdateResult, WriteOutcome,
};
