//! Destination path handling
//!
//! Extracts the parent directory component from destination paths and
//! reduces a batch of destinations to its distinct parent directories.

use std::collections::HashSet;

/// Return the parent directory component of a destination path
///
/// The parent is everything before the last `/`. Returns `None` when the
/// path has no separator, when the parent would be empty (`/name`), or when
/// the final segment is empty (trailing slash). Such destinations carry no
/// usable parent directory and are excluded from batch processing.
pub fn parent_of(path: &str) -> Option<&str> {
	let idx = path.rfind('/')?;
	if idx == 0 || idx == path.len() - 1 {
		return None;
	}
	Some(&path[..idx])
}

/// Reduce destination paths to their distinct parent directories
///
/// Paths without a parent are dropped. First-seen order is preserved for
/// deterministic iteration, though nothing downstream depends on it.
pub fn dedup_parents<'a, I>(paths: I) -> Vec<String>
where
	I: IntoIterator<Item = &'a str>,
{
	let mut seen = HashSet::new();
	let mut parents = Vec::new();
	for path in paths {
		if let Some(parent) = parent_of(path) {
			if seen.insert(parent) {
				parents.push(parent.to_string());
			}
		}
	}
	parents
}


// vim: ts=4
