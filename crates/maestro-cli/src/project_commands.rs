use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects
    List {
        /// Filter by project name
        #[arg(long)]
        name: Option<String>,

        /// Filter by organization (name or id)
        #[arg(long)]
        organization: Option<String>,
    },

    /// Get a project by name or id
    Get {
        /// Project name or id
        project: String,

        /// Organization scoping the name lookup (name or id)
        #[arg(long)]
        organization: Option<String>,
    },

    /// Create a new project
    Create {
        /// Project name
        #[arg(long)]
        name: String,

        /// Organization to file the project under (name or id)
        #[arg(long)]
        organization: Option<String>,

        /// Project description
        #[arg(long)]
        description: Option<String>,

        /// SCM type
        #[arg(long, value_parser = ["manual", "git", "hg", "svn"])]
        scm_type: Option<String>,

        /// SCM repository URL
        #[arg(long)]
        scm_url: Option<String>,

        /// Server-side playbook directory name (manual projects)
        #[arg(long)]
        local_path: Option<String>,

        /// SCM branch to check out
        #[arg(long)]
        scm_branch: Option<String>,

        /// SCM credential (name or id)
        #[arg(long)]
        scm_credential: Option<String>,

        /// Discard local modifications before updating
        #[arg(long)]
        scm_clean: bool,

        /// Delete the local repository before updating
        #[arg(long)]
        scm_delete_on_update: bool,

        /// Update the project whenever a job uses it
        #[arg(long)]
        scm_update_on_launch: bool,

        /// Poll the update the server starts for the new project
        #[arg(long)]
        monitor: bool,

        /// With --monitor, give up after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Modify an existing project
    Modify {
        /// Project name or id
        project: String,

        /// New project name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New SCM type
        #[arg(long, value_parser = ["manual", "git", "hg", "svn"])]
        scm_type: Option<String>,

        /// New SCM repository URL
        #[arg(long)]
        scm_url: Option<String>,

        /// New server-side playbook directory name
        #[arg(long)]
        local_path: Option<String>,

        /// New SCM branch
        #[arg(long)]
        scm_branch: Option<String>,

        /// New SCM credential (name or id)
        #[arg(long)]
        scm_credential: Option<String>,

        /// Discard local modifications before updating
        #[arg(long)]
        scm_clean: Option<bool>,

        /// Delete the local repository before updating
        #[arg(long)]
        scm_delete_on_update: Option<bool>,

        /// Update the project whenever a job uses it
        #[arg(long)]
        scm_update_on_launch: Option<bool>,
    },

    /// Trigger an SCM update for a project
    Update {
        /// Project name or id
        project: String,

        /// Organization scoping the name lookup (name or id)
        #[arg(long)]
        organization: Option<String>,

        /// Poll the launched update until it finishes
        #[arg(long)]
        monitor: bool,

        /// With --monitor, give up after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Print the status of a project's current update
    Status {
        /// Project name or id
        project: String,

        /// Organization scoping the name lookup (name or id)
        #[arg(long)]
        organization: Option<String>,

        /// Print the full job record
        #[arg(long)]
        detail: bool,
    },

    /// Delete a project
    Delete {
        /// Project name or id
        project: String,

        /// Organization scoping the name lookup (name or id)
        #[arg(long)]
        organization: Option<String>,
    },
}
