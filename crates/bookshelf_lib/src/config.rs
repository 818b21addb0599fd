//! Bookshelf configuration parsing.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlConfig {
    /// The port on which the GraphQL API server should listen.
    #[serde(default = "GraphQlConfig::default_port")]
    pub port: u16,
    /// The HTTP path of the GraphQL endpoint.
    #[serde(default = "GraphQlConfig::default_path")]
    pub path: String,
    /// Serve the GraphiQL IDE on `GET` requests to the GraphQL endpoint. Meant
    /// for development only.
    #[serde(default)]
    pub graphiql: bool,
}

impl GraphQlConfig {
    fn default_port() -> u16 {
        4000
    }

    fn default_path() -> String {
        "/graphql".to_string()
    }
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            port: Self::default_port(),
            path: Self::default_path(),
            graphiql: false,
        }
    }
}

/// A [`serde`]-compatible representation of Bookshelf's YAML configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// GraphQL API configuration.
    #[serde(default)]
    pub graphql: GraphQlConfig,
    /// The port on which the Prometheus exporter should listen. Set it to 0 to
    /// disable the exporter.
    #[serde(default = "Config::default_prometheus_port")]
    pub prometheus_port: u16,
    /// Whether to seed the store with the sample books and authors at startup.
    #[serde(default = "Config::default_sample_data")]
    pub sample_data: bool,
}

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        serde_yaml::from_reader(file).context("invalid config file")
    }

    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("invalid config file")
    }

    fn default_prometheus_port() -> u16 {
        9184
    }

    fn default_sample_data() -> bool {
        true
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql: GraphQlConfig::default(),
            prometheus_port: Self::default_prometheus_port(),
            sample_data: Self::default_sample_data(),
        }
    }
}
