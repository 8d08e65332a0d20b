use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the SQLite file holding `sensor_data`.
    pub database_path: PathBuf,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        Ok(Self {
            database_path: optional("DATABASE_PATH", "sensor_data.db").into(),
            server_host: optional("SERVER_HOST", "0.0.0.0"),
            server_port: optional("SERVER_PORT", "5000")
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_path, PathBuf::from("sensor_data.db"));
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_PATH", "/var/lib/wq/readings.db"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/var/lib/wq/readings.db"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn invalid_port_errors() {
        let err = Config::from_lookup(lookup_from(&[("SERVER_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));
    }

    #[test]
    fn out_of_range_port_errors() {
        assert!(Config::from_lookup(lookup_from(&[("SERVER_PORT", "70000")])).is_err());
    }
}
