//! In-memory transport implementation, intended primarily for testing
//!
//! Stores directories and files in hash maps, records every remote call in
//! an operation log, and supports failure injection per operation/path so
//! tests can exercise the orchestrator's partial-failure semantics without
//! a live server.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::config::ConnectConfig;
use crate::error::TransportError;
use crate::transport::{Connector, Transport, TransportResult};
use crate::types::DirEntry;

/// One recorded remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
	List(String),
	Put(String),
	Mkdir { path: String, recursive: bool },
	Delete(String),
	Rmdir { path: String, recursive: bool },
}

/// In-memory [`Transport`] with an operation log and failure injection
pub struct MemoryTransport {
	dirs: Mutex<HashMap<String, Vec<DirEntry>>>,
	files: Mutex<HashMap<String, Vec<u8>>>,
	ops: Mutex<Vec<Op>>,
	failures: Mutex<HashSet<(&'static str, String)>>,
}

impl MemoryTransport {
	/// Create an empty transport with an empty root directory
	pub fn new() -> Self {
		let mut dirs = HashMap::new();
		dirs.insert("/".to_string(), Vec::new());
		MemoryTransport {
			dirs: Mutex::new(dirs),
			files: Mutex::new(HashMap::new()),
			ops: Mutex::new(Vec::new()),
			failures: Mutex::new(HashSet::new()),
		}
	}

	/// Seed a directory with listing entries
	///
	/// A directory seeded with at least one entry probes as present; a
	/// directory never seeded (or seeded empty) probes as absent.
	pub fn seed_dir(&self, path: &str, entries: Vec<DirEntry>) {
		self.dirs.lock().unwrap().insert(path.to_string(), entries);
	}

	/// Seed a file with content, adding it to its parent's listing
	pub fn seed_file(&self, path: &str, content: &[u8]) {
		let size = content.len() as u64;
		self.files.lock().unwrap().insert(path.to_string(), content.to_vec());
		if let Some(idx) = path.rfind('/') {
			let parent = if idx == 0 { "/" } else { &path[..idx] };
			let name = &path[idx + 1..];
			self.dirs
				.lock()
				.unwrap()
				.entry(parent.to_string())
				.or_default()
				.push(DirEntry::file(name, size));
		}
	}

	/// Make the next and all further calls of `op` ("list", "put", "mkdir",
	/// "delete", "rmdir") against `path` fail with a remote error
	pub fn inject_failure(&self, op: &'static str, path: &str) {
		self.failures.lock().unwrap().insert((op, path.to_string()));
	}

	/// Snapshot of the recorded operation log
	pub fn ops(&self) -> Vec<Op> {
		self.ops.lock().unwrap().clone()
	}

	/// Content of an uploaded file, if present
	pub fn file(&self, path: &str) -> Option<Vec<u8>> {
		self.files.lock().unwrap().get(path).cloned()
	}

	/// Whether a directory exists in the store
	pub fn has_dir(&self, path: &str) -> bool {
		self.dirs.lock().unwrap().contains_key(path)
	}

	fn record(&self, op: Op) {
		self.ops.lock().unwrap().push(op);
	}

	fn check_failure(&self, op: &'static str, path: &str) -> TransportResult<()> {
		if self.failures.lock().unwrap().contains(&(op, path.to_string())) {
			return Err(TransportError::Remote {
				code: 550,
				message: format!("Injected {} failure for {}", op, path),
			});
		}
		Ok(())
	}

	fn parent_and_name(path: &str) -> Option<(&str, &str)> {
		let idx = path.rfind('/')?;
		let parent = if idx == 0 { "/" } else { &path[..idx] };
		Some((parent, &path[idx + 1..]))
	}
}

impl Default for MemoryTransport {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Transport for MemoryTransport {
	async fn list(&self, path: &str) -> TransportResult<Vec<DirEntry>> {
		self.record(Op::List(path.to_string()));
		self.check_failure("list", path)?;
		// A missing directory lists as empty, per the transport contract
		Ok(self.dirs.lock().unwrap().get(path).cloned().unwrap_or_default())
	}

	async fn put(&self, content: &[u8], path: &str) -> TransportResult<()> {
		self.record(Op::Put(path.to_string()));
		self.check_failure("put", path)?;
		self.files.lock().unwrap().insert(path.to_string(), content.to_vec());
		if let Some((parent, name)) = Self::parent_and_name(path) {
			let mut dirs = self.dirs.lock().unwrap();
			let listing = dirs.entry(parent.to_string()).or_default();
			listing.retain(|e| e.name != name);
			listing.push(DirEntry::file(name, content.len() as u64));
		}
		Ok(())
	}

	async fn mkdir(&self, path: &str, recursive: bool) -> TransportResult<()> {
		self.record(Op::Mkdir { path: path.to_string(), recursive });
		self.check_failure("mkdir", path)?;
		let mut dirs = self.dirs.lock().unwrap();

		if recursive {
			// Create every missing intermediate segment as well
			let mut partial = String::new();
			for segment in path.split('/').filter(|s| !s.is_empty()) {
				let parent = if partial.is_empty() { "/".to_string() } else { partial.clone() };
				partial.push('/');
				partial.push_str(segment);
				if !dirs.contains_key(&partial) {
					dirs.insert(partial.clone(), Vec::new());
					dirs.entry(parent).or_default().push(DirEntry::dir(segment));
				}
			}
		} else {
			match Self::parent_and_name(path) {
				Some((parent, name)) if dirs.contains_key(parent) => {
					dirs.insert(path.to_string(), Vec::new());
					dirs.get_mut(parent).unwrap().push(DirEntry::dir(name));
				}
				_ => {
					return Err(TransportError::Remote {
						code: 550,
						message: format!("Parent directory missing for {}", path),
					})
				}
			}
		}
		Ok(())
	}

	async fn delete(&self, path: &str) -> TransportResult<()> {
		self.record(Op::Delete(path.to_string()));
		self.check_failure("delete", path)?;
		if self.files.lock().unwrap().remove(path).is_none() {
			return Err(TransportError::Remote {
				code: 550,
				message: format!("No such file: {}", path),
			});
		}
		if let Some((parent, name)) = Self::parent_and_name(path) {
			if let Some(listing) = self.dirs.lock().unwrap().get_mut(parent) {
				listing.retain(|e| e.name != name);
			}
		}
		Ok(())
	}

	async fn rmdir(&self, path: &str, recursive: bool) -> TransportResult<()> {
		self.record(Op::Rmdir { path: path.to_string(), recursive });
		self.check_failure("rmdir", path)?;
		let mut dirs = self.dirs.lock().unwrap();
		let listing = dirs.get(path).cloned().unwrap_or_default();
		if !listing.is_empty() && !recursive {
			return Err(TransportError::Remote {
				code: 550,
				message: format!("Directory not empty: {}", path),
			});
		}
		let prefix = format!("{}/", path);
		dirs.retain(|p, _| p != path && !p.starts_with(&prefix));
		self.files.lock().unwrap().retain(|p, _| !p.starts_with(&prefix));
		if let Some((parent, name)) = Self::parent_and_name(path) {
			if let Some(parent_listing) = dirs.get_mut(parent) {
				parent_listing.retain(|e| e.name != name);
			}
		}
		Ok(())
	}
}

/// Scripted connect outcome for [`MemoryConnector`]
#[derive(Debug, Clone)]
pub enum ConnectOutcome {
	Ready,
	Refused,
	BadCredentials,
	RemoteError(u32),
}

/// [`Connector`] producing a fresh [`MemoryTransport`] per connect call
pub struct MemoryConnector {
	outcome: ConnectOutcome,
	seed: Vec<(String, Vec<DirEntry>)>,
	fail_root_listing: bool,
}

impl MemoryConnector {
	pub fn new(outcome: ConnectOutcome) -> Self {
		MemoryConnector { outcome, seed: Vec::new(), fail_root_listing: false }
	}

	/// Seed every produced transport with a directory listing
	pub fn with_dir(mut self, path: &str, entries: Vec<DirEntry>) -> Self {
		self.seed.push((path.to_string(), entries));
		self
	}

	/// Make the post-connect root listing fail
	pub fn with_failing_root_listing(mut self) -> Self {
		self.fail_root_listing = true;
		self
	}
}

#[async_trait]
impl Connector for MemoryConnector {
	type Transport = MemoryTransport;

	async fn connect(&self, config: &ConnectConfig) -> TransportResult<MemoryTransport> {
		match self.outcome {
			ConnectOutcome::Refused => {
				return Err(TransportError::Io(std::io::Error::new(
					std::io::ErrorKind::ConnectionRefused,
					format!("connect to {}:{} refused", config.host, config.port),
				)))
			}
			ConnectOutcome::BadCredentials => {
				return Err(TransportError::Remote {
					code: 530,
					message: "Not logged in".to_string(),
				})
			}
			ConnectOutcome::RemoteError(code) => {
				return Err(TransportError::Remote {
					code,
					message: "Service not available".to_string(),
				})
			}
			ConnectOutcome::Ready => {}
		}

		let transport = MemoryTransport::new();
		for (path, entries) in &self.seed {
			transport.seed_dir(path, entries.clone());
		}
		if self.fail_root_listing {
			transport.inject_failure("list", "/");
		}
		Ok(transport)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_missing_directory_lists_empty() {
		let transport = MemoryTransport::new();
		let entries = transport.list("/nowhere").await.unwrap();
		assert!(entries.is_empty());
	}

	#[tokio::test]
	async fn test_put_updates_parent_listing() {
		let transport = MemoryTransport::new();
		transport.put(b"data", "/a.txt").await.unwrap();
		assert_eq!(transport.file("/a.txt").unwrap(), b"data");
		let root = transport.list("/").await.unwrap();
		assert_eq!(root.len(), 1);
		assert_eq!(root[0].name, "a.txt");
	}

	#[tokio::test]
	async fn test_recursive_mkdir_creates_intermediates() {
		let transport = MemoryTransport::new();
		transport.mkdir("/a/b/c", true).await.unwrap();
		assert!(transport.has_dir("/a"));
		assert!(transport.has_dir("/a/b"));
		assert!(transport.has_dir("/a/b/c"));
	}

	#[tokio::test]
	async fn test_non_recursive_mkdir_needs_parent() {
		let transport = MemoryTransport::new();
		assert!(transport.mkdir("/a/b", false).await.is_err());
		transport.mkdir("/a", false).await.unwrap();
		transport.mkdir("/a/b", false).await.unwrap();
	}

	#[tokio::test]
	async fn test_injected_failure() {
		let transport = MemoryTransport::new();
		transport.inject_failure("put", "/a.txt");
		match transport.put(b"x", "/a.txt").await {
			Err(TransportError::Remote { code: 550, .. }) => {}
			other => panic!("Expected injected failure, got {:?}", other),
		}
	}

	#[tokio::test]
	async fn test_op_log_records_calls() {
		let transport = MemoryTransport::new();
		transport.list("/").await.unwrap();
		transport.put(b"x", "/f").await.unwrap();
		assert_eq!(
			transport.ops(),
			vec![Op::List("/".to_string()), Op::Put("/f".to_string())]
		);
	}
}

// vim: ts=4
