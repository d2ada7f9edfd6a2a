//! Module for reading `/tasks` on the master.
//!
//! The `/tasks` endpoint lists the tasks known to the master.
//! Every task carries the status updates it went through; once the container backing
//! the task has been created, each status update carries its container id:
//! `statuses[].container_status.container_id.value`.
//!
//! The `/tasks` endpoint is available on the master, default port 5050.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
