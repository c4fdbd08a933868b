use std::net::{Ipv4Addr, SocketAddrV4};
use std::num::ParseIntError;
use derive_more::{Display, Error};

pub(crate) const DEFAULT_PORT: u16 = 8080;

/// Server configs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Display, Error)]
pub(crate) enum ConfigError {
    #[display("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

impl ServerConfig {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Build the config from the `PORT` env var, falling back to 8080 when it is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    pub(crate) fn from_port_var(port: Option<&str>) -> Result<Self, ConfigError> {
        match port {
            None | Some("") => Ok(Self::default()),
            Some(value) => value
                .parse()
                .map(Self::new)
                .map_err(|source| ConfigError::InvalidPort {
                    value: value.to_string(),
                    source,
                }),
        }
    }

    /// Listen on every interface.
    pub fn bind_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn port_defaults_when_unset_or_empty() {
        assert_eq!(ServerConfig::from_port_var(None).unwrap().port, DEFAULT_PORT);
        assert_eq!(ServerConfig::from_port_var(Some("")).unwrap().port, DEFAULT_PORT);
    }

    #[test]
    fn port_is_read_from_numeric_value() {
        let config = ServerConfig::from_port_var(Some("9090")).unwrap();
        assert_eq!(config, ServerConfig::new(9090));
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9090");
    }

    #[test]
    fn invalid_port_is_rejected() {
        for value in ["abc", "70000", "-1", "80a", "  ", " 9090 "] {
            match ServerConfig::from_port_var(Some(value)) {
                Err(ConfigError::InvalidPort { value: v, .. }) => assert_eq!(v, value),
                other => panic!("expected InvalidPort for {value}, got {other:?}"),
            }
        }
    }
}
