//! Single-Operation Helper Tests
//!
//! Covers the non-batch helpers: single upload with mkdir-if-missing,
//! single file deletion (with and without the ignore-errors mode), and
//! the remove-only-if-non-empty directory helper.

use ftpup::memory::{MemoryTransport, Op};
use ftpup::{Client, DirEntry, TransportError};

/// Present directory: one probe, no mkdir, one put
#[tokio::test]
async fn test_upload_one_existing_directory() {
	let transport = MemoryTransport::new();
	transport.seed_dir("/docs", vec![DirEntry::file("old", 1)]);

	let mut client = Client::new(transport);
	client.upload_one(b"hello", "/docs/new.txt").await.unwrap();

	assert_eq!(
		client.transport().ops(),
		vec![Op::List("/docs".to_string()), Op::Put("/docs/new.txt".to_string())]
	);
	assert_eq!(client.transport().file("/docs/new.txt").unwrap(), b"hello");
}

/// Absent directory: probe, recursive mkdir, then put
#[tokio::test]
async fn test_upload_one_creates_missing_directory() {
	let mut client = Client::new(MemoryTransport::new());
	client.upload_one(b"hello", "/deep/nested/new.txt").await.unwrap();

	assert_eq!(
		client.transport().ops(),
		vec![
			Op::List("/deep/nested".to_string()),
			Op::Mkdir { path: "/deep/nested".to_string(), recursive: true },
			Op::Put("/deep/nested/new.txt".to_string()),
		]
	);
	assert!(client.transport().has_dir("/deep"));
}

/// A destination without a parent directory is an explicit error
#[tokio::test]
async fn test_upload_one_rejects_parentless_destination() {
	let mut client = Client::new(MemoryTransport::new());
	match client.upload_one(b"x", "orphan.txt").await {
		Err(TransportError::InvalidPath { path }) => assert_eq!(path, "orphan.txt"),
		other => panic!("Expected InvalidPath, got {:?}", other),
	}
	assert!(client.transport().ops().is_empty());
}

/// The first failing sub-operation surfaces unchanged
#[tokio::test]
async fn test_upload_one_propagates_probe_failure() {
	let transport = MemoryTransport::new();
	transport.inject_failure("list", "/d");

	let mut client = Client::new(transport);
	assert!(client.upload_one(b"x", "/d/f").await.is_err());
	// Probe failed, so neither creation nor upload ran
	assert_eq!(client.transport().ops(), vec![Op::List("/d".to_string())]);
}

/// Successful deletion reports one removed file
#[tokio::test]
async fn test_delete_file() {
	let transport = MemoryTransport::new();
	transport.seed_file("/d/gone.txt", b"bye");

	let mut client = Client::new(transport);
	assert_eq!(client.delete_file("/d/gone.txt", false).await.unwrap(), 1);
	assert!(client.transport().file("/d/gone.txt").is_none());
}

/// Deletion failure propagates unless the ignore-errors mode is on
#[tokio::test]
async fn test_delete_file_error_handling() {
	let mut client = Client::new(MemoryTransport::new());

	// No such file: plain mode fails, ignore mode reports zero
	assert!(client.delete_file("/missing.txt", false).await.is_err());
	assert_eq!(client.delete_file("/missing.txt", true).await.unwrap(), 0);

	// Ignore mode does not change the outcome of a successful delete
	client.transport().seed_file("/d/f.txt", b"x");
	assert_eq!(client.delete_file("/d/f.txt", true).await.unwrap(), 1);
}

/// An empty directory resolves to 0 with no removal call issued
#[tokio::test]
async fn test_remove_dir_skips_empty_directory() {
	let transport = MemoryTransport::new();
	transport.seed_dir("/empty", Vec::new());

	let mut client = Client::new(transport);
	assert_eq!(client.remove_dir_if_non_empty("/empty", true).await.unwrap(), 0);

	let ops = client.transport().ops();
	assert_eq!(ops, vec![Op::List("/empty".to_string())]);
	// The remove-only-if-non-empty policy leaves the empty directory alone
	assert!(client.transport().has_dir("/empty"));
}

/// A populated directory is removed and its entry count returned
#[tokio::test]
async fn test_remove_dir_removes_populated_directory() {
	let transport = MemoryTransport::new();
	transport.seed_file("/full/a.txt", b"1");
	transport.seed_file("/full/b.txt", b"2");
	transport.seed_file("/full/c.txt", b"3");

	let mut client = Client::new(transport);
	assert_eq!(client.remove_dir_if_non_empty("/full", true).await.unwrap(), 3);

	let ops = client.transport().ops();
	assert_eq!(ops.len(), 2);
	assert_eq!(ops[1], Op::Rmdir { path: "/full".to_string(), recursive: true });
	assert!(!client.transport().has_dir("/full"));
}

/// Listing and removal failures both propagate
#[tokio::test]
async fn test_remove_dir_propagates_failures() {
	let transport = MemoryTransport::new();
	transport.inject_failure("list", "/a");
	transport.seed_file("/b/f", b"x");
	transport.inject_failure("rmdir", "/b");

	let mut client = Client::new(transport);
	assert!(client.remove_dir_if_non_empty("/a", true).await.is_err());
	assert!(client.remove_dir_if_non_empty("/b", true).await.is_err());
}

// vim: ts=4
