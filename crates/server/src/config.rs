use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use utils::assets::{database_path, public_dir};

/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
///
/// `PORT` is the only setting read from the environment; the bind address,
/// database file and public directory are fixed.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    pub public_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = parse_port(std::env::var("PORT").ok().as_deref());

        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port,
            database_path: database_path(),
            public_dir: public_dir(),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse a `PORT` value, falling back to [`DEFAULT_PORT`].
pub fn parse_port(raw: Option<&str>) -> u16 {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_PORT,
        Some(value) => value.parse::<u16>().unwrap_or_else(|e| {
            tracing::warn!(
                "Invalid PORT value '{}': {}; using {}",
                value,
                e,
                DEFAULT_PORT
            );
            DEFAULT_PORT
        }),
    }
}
