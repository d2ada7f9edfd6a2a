//! Helpers to query the HTTP control endpoints of a Mesos master.
//!
//! Every query is a single blocking GET against `<master>/<endpoint>` through a [utility::JsonFetcher],
//! followed by extraction of the key the caller is interested in:
//! - [agents::get_agents] and [agents::get_agent_address] read `/slaves`.
//! - [tasks::get_tasks] and [tasks::get_task] read `/tasks`.
//! - [tasks::get_container_id] inspects a task that has already been fetched.
//!
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

pub mod error;
pub mod utility;
pub mod agents;
pub mod tasks;

pub use error::{QueryError, Result};
