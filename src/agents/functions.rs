//! The impls and functions
//!
use log::*;
use crate::error::{QueryError, Result};
use crate::utility::{self, JsonFetcher};
use crate::agents::Agent;

const ENDPOINT: &str = "slaves";
const KEY: &str = "slaves";

impl Agent {
    /// The `<host>:<port>` part of the pid.
    pub fn address(&self) -> Result<&str> {
        let id = self.id.as_deref().unwrap_or_default();
        let pid = self.pid
            .as_deref()
            .ok_or_else(|| QueryError::new(format!("Missing 'pid' for agent '{}'", id)))?;
        pid.split('@')
            .nth(1)
            .ok_or_else(|| QueryError::new(format!("Malformed pid '{}' for agent '{}'", pid, id)))
    }
}

/// Get the agents registered with the master, in the order the master lists them.
pub fn get_agents(
    fetcher: &impl JsonFetcher,
    master: &str,
) -> Result<Vec<Agent>>
{
    utility::read_endpoint_key(fetcher, master, ENDPOINT, KEY)
}

/// Given a master and an agent id, return the agent address by checking `/slaves` on the master.
///
/// If the master lists an id more than once, the first agent wins.
pub fn get_agent_address(
    fetcher: &impl JsonFetcher,
    agent_id: &str,
    master: &str,
) -> Result<String>
{
    let agents = get_agents(fetcher, master)
        .map_err(|e| QueryError::new(format!("Could not open '/{}' endpoint at '{}': {}", ENDPOINT, master, e)))?;

    match agents.iter().find(|agent| agent.id.as_deref() == Some(agent_id)) {
        Some(agent) => {
            let address = agent.address()?;
            debug!("agent {} found at {}", agent_id, address);
            Ok(address.to_string())
        }
        None => Err(QueryError::new(format!("Unable to find agent '{}'", agent_id))),
    }
}
