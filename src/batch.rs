//! Batch upload orchestration
//!
//! The orchestrator turns a list of upload requests into three fully-joined
//! phases of remote calls: probe every unique parent directory once, create
//! the missing ones, then dispatch all uploads. Directory creation is
//! globally serialized ahead of every upload in the batch, not just the
//! uploads that target the created directory. That costs some parallelism
//! but keeps the phase ordering trivial to reason about.
//!
//! Each phase waits for all of its in-flight calls to settle before the
//! phase reports a result, even when one of them has already failed. The
//! underlying transport serializes command/response pairs on one
//! connection; abandoning a sibling call mid-flight would leave that
//! connection in an inconsistent state.

use futures::future;

use crate::error::{BatchError, TransportError};
use crate::logging::*;
use crate::path::{dedup_parents, parent_of};
use crate::probe::{ensure_dir, probe};
use crate::transport::{Transport, TransportResult};
use crate::types::{DirectoryProbe, ProbeStatus, UploadRequest};

/// Collapse a joined phase into its first failure, if any
///
/// Which failure is "first" when several calls fail is the iteration order
/// of the phase, which is good enough: the batch contract only promises a
/// single failure reason, not which one.
fn phase_result<T>(results: Vec<TransportResult<T>>) -> Result<Vec<T>, TransportError> {
	let mut values = Vec::with_capacity(results.len());
	let mut first_err = None;
	for result in results {
		match result {
			Ok(value) => values.push(value),
			Err(e) => {
				if first_err.is_none() {
					first_err = Some(e);
				}
			}
		}
	}
	match first_err {
		Some(e) => Err(e),
		None => Ok(values),
	}
}

/// Upload client owning one transport connection
///
/// All orchestration methods take `&mut self`: two batches can never
/// interleave remote calls on the same connection, by construction.
pub struct Client<T: Transport> {
	transport: T,
}

impl<T: Transport> Client<T> {
	pub fn new(transport: T) -> Self {
		Client { transport }
	}

	/// Access the underlying transport
	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Consume the client and return the transport
	pub fn into_inner(self) -> T {
		self.transport
	}

	/// Upload a batch of requests, creating missing parent directories first
	///
	/// Every unique parent directory is probed exactly once; only the ones
	/// whose listing came back empty are created (recursively). Uploads are
	/// dispatched concurrently once all creations have succeeded. Any
	/// probe or creation failure aborts the batch before a single upload is
	/// attempted; any upload failure becomes the batch failure after the
	/// remaining in-flight uploads have settled (completed siblings are not
	/// rolled back).
	///
	/// Requests whose destination has no parent directory segment are
	/// dropped: not probed, not uploaded, not counted. On success the
	/// result is the number of requests actually dispatched.
	pub async fn upload_batch(&mut self, requests: &[UploadRequest]) -> Result<usize, BatchError> {
		if requests.is_empty() {
			return Ok(0);
		}

		let surviving: Vec<&UploadRequest> = requests
			.iter()
			.filter(|r| {
				let ok = parent_of(&r.dest_path).is_some();
				if !ok {
					warn!("Dropping request with no parent directory: {}", r.dest_path);
				}
				ok
			})
			.collect();

		if surviving.is_empty() {
			return Ok(0);
		}

		let parents = dedup_parents(surviving.iter().map(|r| r.dest_path.as_str()));
		info!(
			"Uploading batch: {} requests across {} directories",
			surviving.len(),
			parents.len()
		);

		// Probe phase: one listing per unique parent, all joined
		let mut probes: Vec<DirectoryProbe> =
			parents.iter().map(|p| DirectoryProbe::new(p.as_str())).collect();
		let statuses = phase_result(
			future::join_all(parents.iter().map(|p| probe(&self.transport, p))).await,
		)?;
		for (record, status) in probes.iter_mut().zip(statuses) {
			record.status = status;
		}

		// Create phase: only directories whose listing was empty
		let missing: Vec<&str> = probes
			.iter()
			.filter(|p| p.status == ProbeStatus::Absent)
			.map(|p| p.path.as_str())
			.collect();
		if !missing.is_empty() {
			debug!("Creating {} missing directories", missing.len());
			phase_result(
				future::join_all(
					missing.iter().map(|p| ensure_dir(&self.transport, *p, true)),
				)
				.await,
			)?;
		}

		// Upload phase: everything at once, independent of target directory
		debug!("Dispatching {} uploads", surviving.len());
		phase_result(
			future::join_all(
				surviving.iter().map(|r| self.transport.put(&r.content, &r.dest_path)),
			)
			.await,
		)?;

		Ok(surviving.len())
	}

	/// Upload a single file, creating its parent directory if missing
	///
	/// Unlike the batch path, a destination without a parent directory is an
	/// explicit error here rather than a silent no-op.
	pub async fn upload_one(&mut self, content: &[u8], dest_path: &str) -> TransportResult<()> {
		let parent = parent_of(dest_path)
			.ok_or_else(|| TransportError::InvalidPath { path: dest_path.to_string() })?;

		if probe(&self.transport, parent).await? == ProbeStatus::Absent {
			ensure_dir(&self.transport, parent, true).await?;
		}
		self.transport.put(content, dest_path).await
	}

	/// Delete a single remote file
	///
	/// Returns the number of files removed (1). With `ignore_errors`, a
	/// failed deletion is swallowed and reported as 0 instead.
	pub async fn delete_file(&mut self, path: &str, ignore_errors: bool) -> TransportResult<usize> {
		match self.transport.delete(path).await {
			Ok(()) => Ok(1),
			Err(e) if ignore_errors => {
				debug!("Ignoring delete failure for {}: {}", path, e);
				Ok(0)
			}
			Err(e) => Err(e),
		}
	}

	/// Remove a directory only if it has entries
	///
	/// Lists the directory first; an empty listing resolves to 0 without
	/// issuing a removal call, otherwise one rmdir runs and the entry count
	/// is returned. Note this is the inverse of the usual remove-only-if-
	/// empty safety rule; it exists to clear out populated directories.
	pub async fn remove_dir_if_non_empty(
		&mut self,
		path: &str,
		recursive: bool,
	) -> TransportResult<usize> {
		let entries = self.transport.list(path).await?;
		if entries.is_empty() {
			return Ok(0);
		}
		self.transport.rmdir(path, recursive).await?;
		Ok(entries.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_phase_result_collects_values() {
		let results: Vec<TransportResult<u32>> = vec![Ok(1), Ok(2), Ok(3)];
		assert_eq!(phase_result(results).unwrap(), vec![1, 2, 3]);
	}

	#[test]
	fn test_phase_result_reports_first_failure() {
		let results: Vec<TransportResult<u32>> =
			vec![Ok(1), Err(TransportError::Other("first".to_string())), Err("second".into())];
		match phase_result(results) {
			Err(TransportError::Other(msg)) => assert_eq!(msg, "first"),
			other => panic!("Expected first error, got {:?}", other),
		}
	}
}

// vim: ts=4
