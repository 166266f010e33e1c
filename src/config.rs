//! Connection configuration
//!
//! The configuration is opaque to the orchestration core: it is handed to
//! the connector unchanged. Fields mirror the usual FTP client parameters.
//! Config files are JSON5, so comments and trailing commas are allowed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Connection parameters passed through to the transport connector
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectConfig {
	/// Remote host name or address
	pub host: String,

	/// Control connection port
	pub port: u16,

	/// Login user
	pub user: String,

	/// Login password
	pub password: String,

	/// Request a secure (FTPS) session from the connector
	pub secure: bool,
}

impl Default for ConnectConfig {
	fn default() -> Self {
		ConnectConfig {
			host: "localhost".to_string(),
			port: 21,
			user: "anonymous".to_string(),
			password: String::new(),
			secure: false,
		}
	}
}

impl ConnectConfig {
	/// Parse a configuration from a JSON5 string
	pub fn from_str(s: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
		json5::from_str(s).map_err(|e| format!("Invalid connection config: {}", e).into())
	}

	/// Load a configuration from a JSON5 file
	pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error + Send + Sync>> {
		let raw = fs::read_to_string(path)
			.map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
		Self::from_str(&raw)
	}
}


// vim: ts=4
