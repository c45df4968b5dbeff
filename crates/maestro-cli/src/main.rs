//! maestro - Maestro orchestration CLI
//!
//! A command-line controller for project entities in a Maestro
//! orchestration service.
//!
//! # Examples
//!
//! ```bash
//! # Trigger an SCM update and wait for it to finish
//! maestro project update my-project --monitor
//!
//! # Check the status of the most recent update
//! maestro project status my-project
//! ```

use maestro_cli::{
    Cli, Client, Commands, Modify, ProjectCommands, ProjectResource, ResourceResult, Selector,
    logger,
};

use maestro_config::{Config, LogLevel};
use maestro_core::{ProjectFields, ScmType};

use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::debug;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    // --verbose wins over the configured level
    let level = if cli.verbose {
        LogLevel(log::LevelFilter::Debug)
    } else {
        config.logging.level
    };
    let colored = config.logging.colored && std::io::stderr().is_terminal();
    if let Err(e) = logger::initialize(level, colored) {
        eprintln!("Error initializing logging: {}", e);
        return ExitCode::FAILURE;
    }

    debug!("maestro {}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Host: explicit flag > config file > default
    let host = cli.host.unwrap_or_else(|| config.api.host.clone());

    let client = match Client::new(&host, Duration::from_secs(config.api.request_timeout_secs)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let projects = ProjectResource::new(client, Duration::from_secs(config.monitor.interval_secs));

    let result = match cli.command {
        Commands::Project { action } => run_project(action, &projects).await,
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_project(action: ProjectCommands, projects: &ProjectResource) -> ResourceResult<Value> {
    match action {
        ProjectCommands::List { name, organization } => {
            let organization = organization.as_deref().map(Selector::parse);
            let page = projects.list(name.as_deref(), organization.as_ref()).await?;
            to_json(&page)
        }

        ProjectCommands::Get {
            project,
            organization,
        } => {
            let selector = Selector::parse(&project);
            let organization = organization.as_deref().map(Selector::parse);
            let project = projects.resolve(&selector, organization.as_ref()).await?;
            to_json(&project)
        }

        ProjectCommands::Create {
            name,
            organization,
            description,
            scm_type,
            scm_url,
            local_path,
            scm_branch,
            scm_credential,
            scm_clean,
            scm_delete_on_update,
            scm_update_on_launch,
            monitor,
            timeout,
        } => {
            let organization = organization.as_deref().map(Selector::parse);
            let scm_credential = resolve_credential(projects, scm_credential.as_deref()).await?;
            let fields = ProjectFields {
                name: Some(name),
                description,
                scm_type: parse_scm_type(scm_type.as_deref())?,
                scm_url,
                local_path,
                scm_branch,
                scm_credential,
                scm_clean: scm_clean.then_some(true),
                scm_delete_on_update: scm_delete_on_update.then_some(true),
                scm_update_on_launch: scm_update_on_launch.then_some(true),
            };
            let outcome = projects
                .create(&fields, organization.as_ref(), monitor, timeout)
                .await?;
            to_json(&outcome)
        }

        ProjectCommands::Modify {
            project,
            name,
            description,
            scm_type,
            scm_url,
            local_path,
            scm_branch,
            scm_credential,
            scm_clean,
            scm_delete_on_update,
            scm_update_on_launch,
        } => {
            let selector = Selector::parse(&project);
            let scm_credential = resolve_credential(projects, scm_credential.as_deref()).await?;
            let fields = ProjectFields {
                name,
                description,
                scm_type: parse_scm_type(scm_type.as_deref())?,
                scm_url,
                local_path,
                scm_branch,
                scm_credential,
                scm_clean,
                scm_delete_on_update,
                scm_update_on_launch,
            };
            let outcome = projects.modify(&selector, &fields).await?;
            to_json(&outcome)
        }

        ProjectCommands::Update {
            project,
            organization,
            monitor,
            timeout,
        } => {
            let selector = Selector::parse(&project);
            let organization = organization.as_deref().map(Selector::parse);
            let outcome = projects
                .update(&selector, organization.as_ref(), monitor, timeout)
                .await?;
            to_json(&outcome)
        }

        ProjectCommands::Status {
            project,
            organization,
            detail,
        } => {
            let selector = Selector::parse(&project);
            let organization = organization.as_deref().map(Selector::parse);
            let outcome = projects
                .status(&selector, organization.as_ref(), detail)
                .await?;
            to_json(&outcome)
        }

        ProjectCommands::Delete {
            project,
            organization,
        } => {
            let selector = Selector::parse(&project);
            let organization = organization.as_deref().map(Selector::parse);
            let outcome = projects.delete(&selector, organization.as_ref()).await?;
            to_json(&outcome)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> ResourceResult<Value> {
    Ok(serde_json::to_value(value)?)
}

fn parse_scm_type(raw: Option<&str>) -> ResourceResult<Option<ScmType>> {
    match raw {
        Some(raw) => Ok(Some(raw.parse()?)),
        None => Ok(None),
    }
}

/// Turn a credential name or id into the id the API wants.
async fn resolve_credential(
    projects: &ProjectResource,
    credential: Option<&str>,
) -> ResourceResult<Option<i64>> {
    match credential {
        Some(credential) => {
            let selector = Selector::parse(credential);
            Ok(Some(projects.credential_id(&selector).await?))
        }
        None => Ok(None),
    }
}
