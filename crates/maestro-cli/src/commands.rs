use crate::project_commands::ProjectCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
}
