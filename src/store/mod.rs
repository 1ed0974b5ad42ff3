//! # Storage Layer
//!
//! This module defines persistence for linkvault. The [`StorageBackend`]
//! trait handles the "how" of storage (filesystem vs memory), while
//! [`GroupStore`] handles the "what": group and bookmark invariants,
//! rewrite-after-mutation persistence, and the liveness sweep entry point.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production file-based storage
//!   - One JSON document per user: `vault-{username}.json`
//!   - Writes go to a temp file and are renamed over the target, so a
//!     crash mid-write leaves the previous document intact
//!
//! - [`mem_backend::MemBackend`]: In-memory storage for testing
//!   - No persistence
//!   - Cloned handles share one logical store, like two `FsBackend`
//!     values pointed at the same directory
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! <root>/
//! ├── vault-alice.json    # alice's groups -> bookmarks mapping
//! └── vault-bob.json
//! ```
//!
//! Each document carries a format version field so a future layout change
//! can be detected instead of silently misread.

pub mod backend;
pub mod fs_backend;
pub mod group_store;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use group_store::GroupStore;
pub use mem_backend::MemBackend;
