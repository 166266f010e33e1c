//! # ftpup - Batch Upload Orchestration
//!
//! ftpup is a client-side orchestration layer over an FTP-style remote
//! file-transfer transport. It takes a batch of "upload this content to
//! this remote path" requests, works out which destination directories are
//! missing with one existence probe per unique directory, creates only
//! those, then dispatches all uploads and reports one aggregate outcome.
//!
//! The wire protocol is not implemented here: any client exposing the
//! [`transport::Transport`] primitives can sit underneath.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ftpup::{Client, UploadRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = Client::new(my_transport);
//!     let uploaded = client
//!         .upload_batch(&[
//!             UploadRequest::new(&b"hello"[..], "/site/a/index.html"),
//!             UploadRequest::new(&b"world"[..], "/site/b/index.html"),
//!         ])
//!         .await?;
//!     println!("Uploaded {} files", uploaded);
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod config;
pub mod connect;
pub mod error;
pub mod logging;
pub mod memory;
pub mod path;
pub mod probe;
pub mod transport;
pub mod types;

// Re-export commonly used types and functions
pub use batch::Client;
pub use config::ConnectConfig;
pub use connect::connect;
pub use error::{BatchError, ConnectionError, TransportError};
pub use transport::{Connector, Transport};
pub use types::{DirEntry, EntryType, ProbeStatus, UploadRequest};

// vim: ts=4
