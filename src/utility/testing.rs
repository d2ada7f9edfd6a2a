use std::collections::HashMap;
use serde_json::Value;
use crate::error::{QueryError, Result};
use crate::utility::JsonFetcher;

/// Serves fixed bodies per endpoint; endpoints without a body fail like an unreachable master.
#[derive(Default)]
pub struct StaticFetcher {
    bodies: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn new() -> Self { Default::default() }
    pub fn with_body(mut self, endpoint: &str, body: &str) -> Self {
        self.bodies.insert(endpoint.to_string(), body.to_string());
        self
    }
}

impl JsonFetcher for StaticFetcher {
    fn fetch_json(&self, master: &str, endpoint: &str) -> Result<Value> {
        let body = self.bodies
            .get(endpoint)
            .ok_or_else(|| QueryError::new(format!("connection refused: {}/{}", master, endpoint)))?;
        serde_json::from_str(body).map_err(|e| QueryError::new(format!("{}", e)))
    }
}
