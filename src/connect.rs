//! Connection bootstrap
//!
//! One connect attempt per call, no automatic reconnect. A failed attempt
//! is classified into the small set of causes a caller can act on (refused,
//! bad credentials, other). A successful attempt is sanity-checked with one
//! listing of the root directory, and the client is handed out only after
//! that listing succeeds, so there is exactly one resolution point.

use std::io;

use crate::batch::Client;
use crate::config::ConnectConfig;
use crate::error::{ConnectionError, TransportError};
use crate::logging::*;
use crate::transport::{Connector, Transport};

/// FTP reply code for rejected credentials
const REPLY_NOT_LOGGED_IN: u32 = 530;

fn classify(err: TransportError, host: &str) -> ConnectionError {
	match err {
		TransportError::Io(ref e) if e.kind() == io::ErrorKind::ConnectionRefused => {
			ConnectionError::Refused { host: host.to_string() }
		}
		TransportError::Remote { code: REPLY_NOT_LOGGED_IN, .. } => ConnectionError::AuthFailed,
		other => ConnectionError::Failed { message: other.to_string() },
	}
}

/// Open a connection and wrap it in an upload [`Client`]
pub async fn connect<C: Connector>(
	connector: &C,
	config: &ConnectConfig,
) -> Result<Client<C::Transport>, ConnectionError> {
	info!("Connecting to {}:{}", config.host, config.port);

	let transport =
		connector.connect(config).await.map_err(|e| classify(e, &config.host))?;

	// One root listing before the session is considered usable
	if let Err(e) = transport.list("/").await {
		warn!("Connected to {} but root listing failed: {}", config.host, e);
		return Err(ConnectionError::SanityListing { source: e });
	}

	debug!("Connection to {} ready", config.host);
	Ok(Client::new(transport))
}

// vim: ts=4
