//! mesos_query: query the agents and tasks known to a Mesos master.
//!
//! The master is taken from `--master`, or from `MESOS_QUERY_MASTER` (which can be set in `.env`),
//! or defaults to `127.0.0.1:5050`.
//!
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use anyhow::{Context, Result};
use colored::*;
use log::*;
use mesos_query::{agents, tasks, utility};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// master address, host:port or a url
    #[arg(short, long, value_name = "host:port")]
    master: Option<String>,
    /// accept invalid TLS certificates from the master
    #[arg(long)]
    accept_invalid_certs: bool,
    /// write the options that were set to .env
    #[arg(long)]
    write_dotenv: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// list the agents registered with the master
    Agents,
    /// print the host:port of an agent
    AgentAddress {
        agent_id: String,
    },
    /// list the tasks known to the master
    Tasks,
    /// print the container id of a task
    ContainerId {
        task_id: String,
    },
}

fn main() -> Result<()>
{
    env_logger::init();
    dotenv::dotenv().ok();
    let options = Opts::parse();

    let mut changed_options = BTreeMap::new();
    let master = utility::set_master(&options.master, &mut changed_options);
    utility::dotenv_writer(options.write_dotenv, changed_options)?;

    let client = utility::HttpClient::with_invalid_certs(options.accept_invalid_certs)?;
    info!("using master: {}", master);

    match &options.command {
        Command::Agents => {
            let agents = agents::get_agents(&client, &master)?;
            println!("{:50} {:25} {}", "ID".bold(), "Address".bold(), "Hostname".bold());
            for agent in &agents {
                println!("{:50} {:25} {}",
                         agent.id.as_deref().unwrap_or("-"),
                         agent.address().unwrap_or("-"),
                         agent.hostname.as_deref().unwrap_or("-"),
                );
            }
        }
        Command::AgentAddress { agent_id } => {
            let address = agents::get_agent_address(&client, agent_id, &master)?;
            println!("{}", address);
        }
        Command::Tasks => {
            let tasks = tasks::get_tasks(&client, &master)?;
            println!("{:50} {:16} {}", "ID".bold(), "State".bold(), "Agent ID".bold());
            for task in &tasks {
                println!("{:50} {:16} {}",
                         task.id.as_deref().unwrap_or("-"),
                         task.state.as_deref().unwrap_or("-"),
                         task.slave_id.as_deref().unwrap_or("-"),
                );
            }
        }
        Command::ContainerId { task_id } => {
            let task = tasks::get_task(&client, task_id, &master)?;
            let container_id = tasks::get_container_id(&task)
                .with_context(|| format!("Could not get the container id of task '{}'", task_id))?;
            println!("{}", container_id.value.unwrap_or_default());
        }
    }
    Ok(())
}
