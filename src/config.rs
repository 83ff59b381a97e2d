use std::{
	net::{IpAddr, Ipv4Addr},
	num::NonZeroU32,
};

use tracing::Level;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: NonZeroU32 = match NonZeroU32::new(5) {
	Some(n) => n,
	None => unreachable!(),
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("{name} must be {expected}, got {value:?}")]
	Invalid {
		name: &'static str,
		expected: &'static str,
		value: String,
	},
}

/// Server configuration, read from the environment.
///
/// Call [`dotenvy::dotenv`] beforehand to pick up a `.env` file.
#[derive(Clone, Debug)]
pub struct Config {
	pub host: IpAddr,
	pub port: u16,
	/// PostgreSQL connection string. When absent, posts are kept in memory.
	pub database_url: Option<String>,
	pub max_connections: NonZeroU32,
	pub log_level: Level,
	/// OTLP collector endpoint. When absent, only the fmt layer is installed.
	pub otlp_endpoint: Option<String>,
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Builds the configuration from an arbitrary variable source.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

		Ok(Self {
			host: parse(&var, "HOST", "an ip address")?
				.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
			port: parse(&var, "PORT", "a port number")?.unwrap_or(DEFAULT_PORT),
			database_url: var("DATABASE_URL"),
			max_connections: parse(&var, "DATABASE_MAX_CONNECTIONS", "a positive integer")?
				.unwrap_or(DEFAULT_MAX_CONNECTIONS),
			log_level: parse(&var, "LOG_LEVEL", "a log level")?.unwrap_or(Level::INFO),
			otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
		})
	}
}

fn parse<T: std::str::FromStr>(
	var: impl Fn(&str) -> Option<String>,
	name: &'static str,
	expected: &'static str,
) -> Result<Option<T>, ConfigError> {
	var(name)
		.map(|value| {
			value.trim().parse().map_err(|_| ConfigError::Invalid {
				name,
				expected,
				value,
			})
		})
		.transpose()
}
