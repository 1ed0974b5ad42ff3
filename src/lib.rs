//! # Linkvault Architecture
//!
//! Linkvault is a **UI-agnostic bookmark store**: many users file web links
//! into named groups and get them back by owner, group, tag, or title
//! substring, while a liveness sweep keeps dead URLs out of the data.
//! Connection handling, authentication and wire protocols live in whatever
//! client embeds this crate.
//!
//! ## The layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Façade (api.rs)                                            │
//! │  - The only mutation surface                                │
//! │  - Couples every mutation to a cache invalidation           │
//! └─────────────────────────────────────────────────────────────┘
//!                │ mutations                  │ reads
//!                ▼                            ▼
//! ┌──────────────────────────────┐  ┌─────────────────────────┐
//! │  Registry + GroupStore       │  │  SearchCache (cache.rs) │
//! │  - One store per user        │◀─│  - Flattened per-user   │
//! │  - Persists after mutation   │  │    view, rebuilt lazily │
//! │  - Runs the liveness sweep   │  │    on a miss            │
//! └──────────────────────────────┘  └─────────────────────────┘
//!                │
//!                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - StorageBackend trait                                     │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency rules
//!
//! - The group store exclusively owns its groups; the cache holds a
//!   read-only derived copy and never writes through.
//! - Every successful mutation rewrites the user's backing document and
//!   drops that user's cached view. A failed rewrite is logged and the
//!   in-memory mutation stands.
//! - The sweep probes URLs against a snapshot, joins every probe, and only
//!   then applies removals, so probes never interleave with group edits.
//!
//! ## Module Overview
//!
//! - [`api`]: The façade, entry point for all operations
//! - [`registry`]: Username → store lookup, one mutex per user
//! - [`store`]: Group store, storage trait and backends
//! - [`cache`]: Invalidate-on-write search views
//! - [`sweep`]: Concurrent dead-link probing
//! - [`model`]: Core data types (`Bookmark`, `Group`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod store;
pub mod sweep;
