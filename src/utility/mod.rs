//! Utilities shared by the endpoint modules.
//!
//! - [JsonFetcher]: the seam between the query helpers and the network.
//! - [HttpClient]: the blocking reqwest implementation of [JsonFetcher].
//! - [read_endpoint_key]: fetch an endpoint and decode the list stored under one key.
//! - [set_master] and [dotenv_writer]: option handling for the binary.
//!
mod functions;
#[cfg(test)]
pub(crate) mod testing;

pub use functions::*;
