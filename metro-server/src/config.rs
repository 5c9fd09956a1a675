//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Error returned when an environment value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The bind address does not parse
    #[error("invalid {var}: {value:?} is not a socket address")]
    InvalidAddress { var: &'static str, value: String },
}

/// Where station data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A prepared catalog file keyed by line code.
    Catalog(PathBuf),

    /// A raw station feed file, converted on load.
    Feed(PathBuf),
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Station data to build the network from.
    pub source: DataSource,

    /// Optional corrections applied on top of the source data.
    pub corrections: Option<PathBuf>,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Page served at `/`.
    pub index_file: PathBuf,
}

impl ServerConfig {
    /// Environment variable for the listen address.
    pub const BIND: &'static str = "METRO_BIND";
    /// Environment variable for a prepared catalog file.
    pub const CATALOG: &'static str = "METRO_CATALOG";
    /// Environment variable for a raw feed file. Takes precedence over the catalog.
    pub const FEED: &'static str = "METRO_FEED";
    /// Environment variable for a corrections file.
    pub const CORRECTIONS: &'static str = "METRO_CORRECTIONS";
    /// Environment variable for the static asset directory.
    pub const STATIC_DIR: &'static str = "METRO_STATIC_DIR";
    /// Environment variable for the index page.
    pub const INDEX_FILE: &'static str = "METRO_INDEX_FILE";

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup, falling back to
    /// defaults for anything unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = match get(Self::BIND) {
            Some(value) => value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidAddress {
                    var: Self::BIND,
                    value,
                })?,
            None => defaults.bind_addr,
        };

        let source = match (get(Self::FEED), get(Self::CATALOG)) {
            (Some(feed), _) => DataSource::Feed(feed.into()),
            (None, Some(catalog)) => DataSource::Catalog(catalog.into()),
            (None, None) => defaults.source,
        };

        Ok(Self {
            bind_addr,
            source,
            corrections: get(Self::CORRECTIONS).map(PathBuf::from),
            static_dir: get(Self::STATIC_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            index_file: get(Self::INDEX_FILE)
                .map(PathBuf::from)
                .unwrap_or(defaults.index_file),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            source: DataSource::Catalog(PathBuf::from("data/catalog.json")),
            corrections: None,
            static_dir: PathBuf::from("frontend/static"),
            index_file: PathBuf::from("frontend/index.html"),
        }
    }
}
