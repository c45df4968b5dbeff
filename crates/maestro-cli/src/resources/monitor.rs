use crate::resources::error::Result;
use crate::resources::results::{MonitorOutcome, TimeoutResult};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use maestro_core::ProjectUpdate;
use tokio::time::Instant;

/// Source of job records for the polling loop.
///
/// `ProjectResource` implements this through its update resolver; tests
/// substitute a scripted fake so the loop can run without a server.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn poll(&self, project_id: i64) -> Result<ProjectUpdate>;
}

/// Poll `source` until the project's update reaches a terminal status or
/// the deadline passes.
///
/// The first poll always happens, so a timeout of zero still observes the
/// job once. Poll errors propagate immediately; they are never reported
/// as a timeout.
pub async fn run<S: JobSource>(
    source: &S,
    project_id: i64,
    timeout: Option<u64>,
    interval: Duration,
) -> Result<MonitorOutcome> {
    let deadline = timeout.map(|secs| (Instant::now() + Duration::from_secs(secs), secs));
    let mut last_status = None;

    loop {
        let job = source.poll(project_id).await?;

        if last_status != Some(job.status) {
            info!("Project update {} is {}", job.id, job.status);
            last_status = Some(job.status);
        }

        if job.status.is_terminal() {
            return Ok(MonitorOutcome::Finished(job));
        }

        if let Some((deadline, timeout_secs)) = deadline
            && Instant::now() >= deadline
        {
            warn!(
                "Gave up waiting on project {} after {}s",
                project_id, timeout_secs
            );
            return Ok(MonitorOutcome::TimedOut(TimeoutResult {
                timeout_secs,
                last_status,
            }));
        }

        debug!("Waiting {}s before polling again", interval.as_secs());
        tokio::time::sleep(interval).await;
    }
}
