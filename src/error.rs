//! Error types for ftpup operations

use std::error::Error;
use std::fmt;
use std::io;

/// Error reported by a single remote transport call
///
/// Every transport primitive (list, put, mkdir, delete, rmdir) fails with
/// this type. The orchestrator never retries a failed call; the first
/// failure of a phase becomes the batch outcome.
#[derive(Debug)]
pub enum TransportError {
	/// I/O error on the underlying connection
	Io(io::Error),

	/// Error reply from the remote server (FTP-style numeric reply code)
	Remote { code: u32, message: String },

	/// Destination path has no parent directory segment
	InvalidPath { path: String },

	/// Generic error message
	Other(String),
}

impl fmt::Display for TransportError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TransportError::Io(e) => write!(f, "I/O error: {}", e),
			TransportError::Remote { code, message } => {
				write!(f, "Remote error {}: {}", code, message)
			}
			TransportError::InvalidPath { path } => {
				write!(f, "Invalid destination path (no parent directory): {}", path)
			}
			TransportError::Other(msg) => write!(f, "{}", msg),
		}
	}
}

impl Error for TransportError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			TransportError::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<io::Error> for TransportError {
	fn from(e: io::Error) -> Self {
		TransportError::Io(e)
	}
}

impl From<String> for TransportError {
	fn from(e: String) -> Self {
		TransportError::Other(e)
	}
}

impl From<&str> for TransportError {
	fn from(e: &str) -> Self {
		TransportError::Other(e.to_string())
	}
}

/// Connection-specific errors, raised only during bootstrap
#[derive(Debug)]
pub enum ConnectionError {
	/// Server refused the connection
	Refused { host: String },

	/// Authentication rejected (reply code 530)
	AuthFailed,

	/// Connection failed for another reason
	Failed { message: String },

	/// Connected, but the sanity listing of the root directory failed
	SanityListing { source: TransportError },
}

impl fmt::Display for ConnectionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConnectionError::Refused { host } => {
				write!(f, "Connection to {} refused", host)
			}
			ConnectionError::AuthFailed => {
				write!(f, "Authentication failed: bad user or password")
			}
			ConnectionError::Failed { message } => {
				write!(f, "Connection failed: {}", message)
			}
			ConnectionError::SanityListing { source } => {
				write!(f, "Root listing after connect failed: {}", source)
			}
		}
	}
}

impl Error for ConnectionError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			ConnectionError::SanityListing { source } => Some(source),
			_ => None,
		}
	}
}

/// Failure of a whole upload batch
///
/// Wraps the first transport error encountered in any of the batch's
/// probe/create/upload phases. The failing stage is not recorded; the
/// caller only learns that the batch did not complete.
#[derive(Debug)]
pub struct BatchError {
	pub source: TransportError,
}

impl fmt::Display for BatchError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Batch upload failed: {}", self.source)
	}
}

impl Error for BatchError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(&self.source)
	}
}

impl From<TransportError> for BatchError {
	fn from(source: TransportError) -> Self {
		BatchError { source }
	}
}

// vim: ts=4
