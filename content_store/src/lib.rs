//! # Content Store
//!
//! The persistence layer of the Triglav Online site. It stands in for a backend: site
//! copy, the news feed, and user accounts live as JSON values in a single local
//! key-value medium, and page code reads and writes them through [`ContentStore`].
//!
//! ## Core Components
//!
//! - **storage**: The key-value seam ([`Storage`]) with in-memory and file-backed media
//! - **store**: [`ContentStore`], the typed accessors over the three content keys
//! - **session**: The signed-in user snapshot and the administrator flag
//! - **config**: TOML configuration for keys, admin credentials and the data file
//!
//! ## Consistency
//!
//! Every operation is a synchronous read-modify-write with no locking. Two writers
//! sharing one medium race, and the last write wins.

pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod store;

pub use config::*;
pub use error::*;
pub use session::*;
pub use storage::*;
pub use store::*;
