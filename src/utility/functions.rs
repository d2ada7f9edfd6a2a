use log::*;
use std::{collections::BTreeMap, env, fs, io::Write, time::Instant};
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::error::{QueryError, Result};

/// The master used when neither `--master` nor `MESOS_QUERY_MASTER` is set.
pub const DEFAULT_MASTER: &str = "127.0.0.1:5050";
pub const ACCEPT_INVALID_CERTS: bool = false;
pub const MASTER_ENV_VAR: &str = "MESOS_QUERY_MASTER";

/// Fetches `<master>/<endpoint>` and returns the decoded JSON body.
///
/// Implementations fail on transport errors and on bodies that are not JSON.
pub trait JsonFetcher {
    fn fetch_json(&self, master: &str, endpoint: &str) -> Result<Value>;
}

pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        HttpClient::with_invalid_certs(ACCEPT_INVALID_CERTS)
    }
    pub fn with_invalid_certs(accept_invalid_certs: bool) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| QueryError::new(format!("Could not create http client: {}", e)))?;
        Ok(HttpClient { client })
    }
}

impl JsonFetcher for HttpClient {
    fn fetch_json(&self, master: &str, endpoint: &str) -> Result<Value> {
        let url = endpoint_url(master, endpoint);
        let response = self.client
            .get(&url)
            .send()
            .map_err(|e| QueryError::new(format!("{}", e)))?;
        if !response.status().is_success() {
            debug!("Non success response: {} = {}", url, response.status());
            return Err(QueryError::new(format!("{} returned {}", url, response.status())));
        }
        debug!("Success response: {} = {}", url, response.status());
        let body = response
            .text()
            .map_err(|e| QueryError::new(format!("could not read body of {}: {}", url, e)))?;
        serde_json::from_str(&body)
            .map_err(|e| QueryError::new(format!("could not parse json from {}: {}", url, e)))
    }
}

/// Builds the url for an endpoint; a master without a scheme is reached over plain http.
pub fn endpoint_url(
    master: &str,
    endpoint: &str,
) -> String
{
    let master = master.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    if master.starts_with("http://") || master.starts_with("https://") {
        format!("{}/{}", master, endpoint)
    } else {
        format!("http://{}/{}", master, endpoint)
    }
}

/// Reads `/<endpoint>` on the master and decodes the list stored under `key`.
///
/// An empty list is a valid result; an absent key is an error.
pub fn read_endpoint_key<T: DeserializeOwned>(
    fetcher: &impl JsonFetcher,
    master: &str,
    endpoint: &str,
    key: &str,
) -> Result<Vec<T>>
{
    debug!("begin http read /{} on {}", endpoint, master);
    let timer = Instant::now();

    let data = fetcher
        .fetch_json(master, endpoint)
        .map_err(|e| QueryError::new(format!("Could not open '/{}' on master: {}", endpoint, e)))?;

    let records = match data {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    }.ok_or_else(|| QueryError::new(format!("Missing '{}' key in data retrieved from master '{}' on '/{}'", key, master, endpoint)))?;

    let records: Vec<T> = serde_json::from_value(records)
        .map_err(|e| QueryError::new(format!("Could not open '/{}' on master: {}", endpoint, e)))?;

    debug!("end http read /{} on {}: {} records, {:?}", endpoint, master, records.len(), timer.elapsed());
    Ok(records)
}

pub fn set_master(
    option: &Option<String>,
    changed_options: &mut BTreeMap<&'static str, String>,
) -> String
{
    // is --master set?
    if let Some(master) = option {
        info!("master argument set: using: {}", master);
        changed_options.insert(MASTER_ENV_VAR, master.to_string());
        return master.to_string();
    }
    // is the environment variable set (via dotenv().ok())?
    match env::var(MASTER_ENV_VAR) {
        Ok(set_var) => {
            info!("master not set: set via .env: {}: {}", MASTER_ENV_VAR, set_var);
            changed_options.insert(MASTER_ENV_VAR, set_var.to_owned());
            set_var
        }
        Err(_e) => {
            info!("master not set: and not set via .env: using DEFAULT_MASTER: {}", DEFAULT_MASTER);
            DEFAULT_MASTER.to_string()
        }
    }
}

pub fn dotenv_writer(
    write_dotenv: bool,
    changed_options: BTreeMap<&'static str, String>,
) -> Result<()>
{
    if changed_options.is_empty() || !write_dotenv {
        return Ok(());
    }
    info!("Writing .env file");
    let mut file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(".env")
        .map_err(|e| QueryError::new(format!("Error writing .env file: {}", e)))?;

    for (key, value) in changed_options {
        file.write_all(format!("{}={}\n", key, value).as_bytes())
            .map_err(|e| QueryError::new(format!("Error writing .env file: {}", e)))?;
        info!("{}={}", key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utility::testing::StaticFetcher;

    #[test]
    fn unit_endpoint_url_adds_scheme() {
        assert_eq!(endpoint_url("10.0.0.1:5050", "slaves"), "http://10.0.0.1:5050/slaves");
    }

    #[test]
    fn unit_endpoint_url_keeps_scheme() {
        assert_eq!(endpoint_url("https://mesos.local:5050/", "/tasks"), "https://mesos.local:5050/tasks");
    }

    #[test]
    fn unit_read_endpoint_key_not_an_object() {
        let fetcher = StaticFetcher::new().with_body("slaves", "[]");
        let result: Result<Vec<Value>> = read_endpoint_key(&fetcher, "10.0.0.1:5050", "slaves", "slaves");
        let error = result.unwrap_err();
        assert!(error.message().contains("Missing 'slaves' key"));
    }

    #[test]
    fn unit_read_endpoint_key_undecodable_records() {
        let fetcher = StaticFetcher::new().with_body("numbers", r#"{"numbers": ["one", "two"]}"#);
        let result: Result<Vec<u64>> = read_endpoint_key(&fetcher, "10.0.0.1:5050", "numbers", "numbers");
        let error = result.unwrap_err();
        assert!(error.message().starts_with("Could not open '/numbers' on master: "));
    }

    #[test]
    fn unit_set_master_from_option() {
        let mut changed_options = BTreeMap::new();
        let master = set_master(&Some("10.0.0.9:5050".to_string()), &mut changed_options);
        assert_eq!(master, "10.0.0.9:5050");
        assert_eq!(changed_options.get(MASTER_ENV_VAR), Some(&"10.0.0.9:5050".to_string()));
    }

    #[test]
    fn unit_set_master_from_environment() {
        env::set_var(MASTER_ENV_VAR, "10.0.0.8:5050");
        let mut changed_options = BTreeMap::new();
        let master = set_master(&None, &mut changed_options);
        env::remove_var(MASTER_ENV_VAR);

        assert_eq!(master, "10.0.0.8:5050");
        assert_eq!(changed_options.get(MASTER_ENV_VAR), Some(&"10.0.0.8:5050".to_string()));
    }

    #[test]
    fn unit_dotenv_writer_nothing_to_write() {
        dotenv_writer(false, BTreeMap::new()).unwrap();
    }
}
