//! Shared types for upload orchestration
//!
//! These types are protocol-agnostic: the orchestrator only ever sees
//! abstract listing entries and upload requests, never wire-level frames.

use serde::{Deserialize, Serialize};

/// Type of a remote directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
	#[serde(rename = "f")]
	File,
	#[serde(rename = "d")]
	Directory,
	#[serde(rename = "l")]
	Link,
}

/// One entry of a remote directory listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirEntry {
	pub entry_type: EntryType,
	pub name: String,
	pub size: u64,
}

impl DirEntry {
	pub fn file(name: &str, size: u64) -> Self {
		DirEntry { entry_type: EntryType::File, name: name.to_string(), size }
	}

	pub fn dir(name: &str) -> Self {
		DirEntry { entry_type: EntryType::Directory, name: name.to_string(), size: 0 }
	}
}

/// One "upload this content to this remote path" request
///
/// `dest_path` is a slash-delimited absolute remote path whose final segment
/// is the file name; everything before it is the parent directory.
#[derive(Debug, Clone)]
pub struct UploadRequest {
	pub content: Vec<u8>,
	pub dest_path: String,
}

impl UploadRequest {
	pub fn new(content: impl Into<Vec<u8>>, dest_path: impl Into<String>) -> Self {
		UploadRequest { content: content.into(), dest_path: dest_path.into() }
	}
}

/// Existence status of a probed remote directory
///
/// `Present` and `Absent` are decided by one listing call per directory: a
/// non-empty listing means present, an empty one means absent. An existing
/// but empty directory is indistinguishable from a missing one; the worst
/// case is a redundant recursive mkdir.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
	Unknown,
	Present,
	Absent,
}

/// Probe record for one unique parent directory of a batch
///
/// Created at batch start with `Unknown` status; resolved exactly once by
/// the probe phase, never re-probed within the same batch.
#[derive(Debug, Clone)]
pub struct DirectoryProbe {
	pub path: String,
	pub status: ProbeStatus,
}

impl DirectoryProbe {
	pub fn new(path: impl Into<String>) -> Self {
		DirectoryProbe { path: path.into(), status: ProbeStatus::Unknown }
	}
}

// vim: ts=4
