use maestro_core::{Project, ProjectUpdate, UpdateStatus};

use serde::Serialize;

/// Outcome of a bare update trigger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateResult {
    pub changed: bool,
}

/// Outcome of a create or modify write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteOutcome {
    pub changed: bool,
    pub project: Project,
}

/// The three fields `status` reports unless `--detail` was asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSummary {
    pub elapsed: f64,
    pub failed: bool,
    pub status: UpdateStatus,
}

impl From<&ProjectUpdate> for StatusSummary {
    fn from(job: &ProjectUpdate) -> Self {
        Self {
            elapsed: job.elapsed,
            failed: job.failed,
            status: job.status,
        }
    }
}

/// What the monitor saw when its deadline passed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeoutResult {
    pub timeout_secs: u64,
    pub last_status: Option<UpdateStatus>,
}

/// Result of watching an update job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MonitorOutcome {
    /// The job reached a terminal status; the record is as last fetched
    Finished(ProjectUpdate),
    /// The deadline passed first; the job may still be running remotely
    TimedOut(TimeoutResult),
}

/// Outcome of `project delete`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteOutcome {
    pub changed: bool,
    pub id: i64,
}

/// Outcome of putting a project into an organization's collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationOutcome {
    pub changed: bool,
}

/// Result of `project update`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpdateOutcome {
    Triggered(UpdateResult),
    Monitored(MonitorOutcome),
}

/// Result of `project create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CreateOutcome {
    Written(WriteOutcome),
    Monitored(MonitorOutcome),
}

/// Result of `project status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatusOutcome {
    Detail(ProjectUpdate),
    Summary(StatusSummary),
}
