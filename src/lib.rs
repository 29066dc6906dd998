//! # Cellar Architecture
//!
//! Cellar is a **UI-agnostic wine-collection library**. The bundled binary
//! is just one client; the same core could sit behind a mobile shell or a
//! web API without change.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                             │
//! │  - Parses arguments, renders output, owns exit codes       │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade over commands, returns structured results   │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Business logic and validation, no I/O assumptions       │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - StorageBackend trait over a key-value capability        │
//! │  - FileBackend (production), MemBackend (testing)          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole collection is one JSON array under one storage key. Reads
//! fail soft to an empty collection; write failures propagate. The filter
//! engine ([`filter`]) is a pure function over a snapshot of that
//! collection and never touches storage.
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic per operation
//! - [`store`]: storage capability trait and its implementations
//! - [`filter`]: query + structured filters over the collection
//! - [`model`]: core data types (`Wine`, `WineDetails`, `WineType`)
//! - [`config`]: persisted settings
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod store;
