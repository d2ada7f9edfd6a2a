//! The impls and functions
//!
use log::*;
use crate::error::{QueryError, Result};
use crate::utility::{self, JsonFetcher};
use crate::tasks::{ContainerId, Task};

const ENDPOINT: &str = "tasks";
const KEY: &str = "tasks";

/// Get the tasks known to the master, in the order the master lists them.
pub fn get_tasks(
    fetcher: &impl JsonFetcher,
    master: &str,
) -> Result<Vec<Task>>
{
    utility::read_endpoint_key(fetcher, master, ENDPOINT, KEY)
}

/// Get the single task with the given id.
pub fn get_task(
    fetcher: &impl JsonFetcher,
    task_id: &str,
    master: &str,
) -> Result<Task>
{
    let mut matching: Vec<Task> = get_tasks(fetcher, master)?
        .into_iter()
        .filter(|task| task.id.as_deref() == Some(task_id))
        .collect();

    match matching.len() {
        0 => Err(QueryError::new(format!("Unable to find task '{}'", task_id))),
        1 => Ok(matching.remove(0)),
        found => {
            warn!("task id {} matches {} tasks", task_id, found);
            Err(QueryError::new(format!("Found more than one task with id '{}'", task_id)))
        }
    }
}

/// Get the container id of a task.
pub fn get_container_id(
    task: &Task,
) -> Result<ContainerId>
{
    let statuses = task.statuses
        .as_ref()
        .ok_or_else(|| QueryError::new("Unable to obtain status information for task"))?;

    // once set, every status of a task carries the same container id.
    let status = statuses
        .first()
        .ok_or_else(|| QueryError::new("No status updates available for task"))?;

    let container_status = status.container_status
        .as_ref()
        .ok_or_else(|| QueryError::new("Task status does not contain container information"))?;

    match &container_status.container_id {
        Some(container_id) if container_id.value.is_some() => Ok(container_id.clone()),
        _ => Err(QueryError::new("No container found for the specified task. It might still be spinning up. Please try again.")),
    }
}
