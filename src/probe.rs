//! Remote directory existence probing and creation
//!
//! Existence is decided by one listing call per directory: non-empty means
//! present, empty means absent. The transport lists a missing directory as
//! an empty sequence, so "absent" covers both missing and legitimately
//! empty directories. The misclassification of an empty directory only
//! costs a redundant recursive mkdir.

use crate::logging::*;
use crate::transport::{Transport, TransportResult};
use crate::types::ProbeStatus;

/// Probe a remote directory with a single listing call
///
/// Transport errors propagate unchanged; the probe is never retried.
pub async fn probe<T: Transport>(transport: &T, path: &str) -> TransportResult<ProbeStatus> {
	let entries = transport.list(path).await?;
	let status = if entries.is_empty() { ProbeStatus::Absent } else { ProbeStatus::Present };
	debug!("Probed {}: {:?} ({} entries)", path, status, entries.len());
	Ok(status)
}

/// Create a remote directory with a single mkdir call
///
/// Only called for directories the probe reported absent, so idempotence of
/// the remote mkdir is not relied upon.
pub async fn ensure_dir<T: Transport>(
	transport: &T,
	path: &str,
	recursive: bool,
) -> TransportResult<()> {
	debug!("Creating directory {} (recursive={})", path, recursive);
	transport.mkdir(path, recursive).await
}

// vim: ts=4
