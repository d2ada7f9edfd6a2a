//! Module for reading `/slaves` on the master.
//!
//! The `/slaves` endpoint lists every agent registered with the master.
//! For each agent, this module uses:
//! - id: the identifier the master assigned to the agent.
//! - pid: the libprocess pid of the agent, `<name>@<host>:<port>`.
//!
//! Everything else the master reports for an agent (resources, attributes, version)
//! is kept untouched in [Agent::other].
//!
//! The `/slaves` endpoint is available on the master, default port 5050.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
