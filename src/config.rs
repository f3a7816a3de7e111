//! Server configuration.

use clap::Parser;

/// Default service port.
pub const DEFAULT_PORT: u16 = 3000;

/// Command-line arguments for the server.
#[derive(Parser, Debug, Clone)]
#[command(name = "blob-image-api")]
#[command(about = "Lists image blobs in an Azure Storage container over HTTP")]
#[command(version)]
pub struct Args {
    /// Host address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Azure Storage connection string.
    #[arg(long, env = "AZURE_STORAGE_CONNECTION_STRING")]
    pub connection_string: String,

    /// Name of the container to enumerate.
    #[arg(long, env = "AZURE_STORAGE_CONTAINER_NAME")]
    pub container: String,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Enable silent mode (minimal logging).
    #[arg(long, short = 's')]
    pub silent: bool,
}

/// Server configuration derived from command-line arguments.
///
/// Read-only after startup; shared between requests via `Arc`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Azure Storage connection string.
    pub connection_string: String,
    /// Name of the container to enumerate.
    pub container: String,
    /// Enable debug logging.
    pub debug: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            connection_string: args.connection_string,
            container: args.container,
            debug: args.debug,
        }
    }
}

impl Config {
    /// Returns the bind address for the service.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_args() -> Args {
        Args {
            host: "0.0.0.0".to_string(),
            port: 8080,
            connection_string: "DefaultEndpointsProtocol=https;AccountName=acct;AccountKey=a2V5".to_string(),
            container: "public".to_string(),
            debug: true,
            silent: false,
        }
    }

    #[test]
    fn config_from_args() {
        let config = Config::from(test_args());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.container, "public");
        assert!(config.debug);
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = Config::from(test_args());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
