use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
pub struct CliOptions {
    /// Path to a YAML configuration file. Built-in defaults are used when
    /// omitted.
    #[clap(long)]
    pub config: Option<PathBuf>,
    /// Serve the GraphiQL IDE, regardless of the configuration file.
    #[clap(long, env = "BOOKSHELF_GRAPHIQL")]
    pub graphiql: bool,
    /// The port on which the GraphQL API server should listen. Overrides the
    /// configuration file.
    #[clap(long)]
    pub port: Option<u16>,
}

impl CliOptions {
    /// Reads the configuration file, if any, and applies command-line
    /// overrides on top of it.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::read(path)?,
            None => Config::default(),
        };

        if self.graphiql {
            config.graphql.graphiql = true;
        }
        if let Some(port) = self.port {
            config.graphql.port = port;
        }

        Ok(config)
    }
}
