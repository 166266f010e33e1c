//! Core transport trait defining the remote file-transfer interface
//!
//! All transport implementations must implement this trait to give the
//! upload orchestrator its remote primitives. The orchestration logic
//! depends only on this trait, never on a concrete protocol client.

use async_trait::async_trait;

use crate::config::ConnectConfig;
use crate::error::TransportError;
use crate::types::DirEntry;

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Remote file-transfer primitives consumed by the orchestrator
///
/// Methods take `&self`: a command/response transport serializes calls on
/// its one control connection internally. Each call settles exactly once,
/// with a value or a `TransportError`.
#[async_trait]
pub trait Transport: Send + Sync {
	/// List a remote directory
	///
	/// A missing directory lists as an empty sequence, not an error. The
	/// existence probe relies on this.
	async fn list(&self, path: &str) -> TransportResult<Vec<DirEntry>>;

	/// Upload content to a remote path, overwriting any existing file
	async fn put(&self, content: &[u8], path: &str) -> TransportResult<()>;

	/// Create a remote directory; `recursive` also creates missing
	/// intermediate segments
	async fn mkdir(&self, path: &str, recursive: bool) -> TransportResult<()>;

	/// Delete a single remote file
	async fn delete(&self, path: &str) -> TransportResult<()>;

	/// Remove a remote directory
	async fn rmdir(&self, path: &str, recursive: bool) -> TransportResult<()>;
}

/// Factory opening a transport connection from a configuration
///
/// One call is one connect attempt; there is no automatic reconnect. The
/// bootstrap in [`crate::connect`] classifies the failure and sanity-checks
/// the session before handing it to callers.
#[async_trait]
pub trait Connector {
	type Transport: Transport;

	async fn connect(&self, config: &ConnectConfig) -> TransportResult<Self::Transport>;
}

// vim: ts=4
