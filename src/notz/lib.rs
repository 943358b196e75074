//! # Notz Architecture
//!
//! Notz is a **UI-agnostic note-keeping library**. The CLI binary is just one
//! client wired on top of it; the library itself never touches a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, colors output, handles exit codes      │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Manager Layer (manager.rs)                                 │
//! │  - CRUD, filtering, counting, search over the collection    │
//! │  - Returns plain Rust types; never prints, never logs       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract Serializer trait                                │
//! │  - JsonSerializer (production), InMemorySerializer (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Index Contract
//!
//! A note is addressed by its current zero-based position in the manager's
//! sequence. This is deliberate and matches the listing output: the number a
//! user sees next to a note is the number every operation accepts. The flip
//! side is that indices are **not stable across deletions** — removing a note
//! shifts every later note down by one. See [`manager`] for details.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `manager.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`bool`, `Option<Note>`, `Result<()>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Index misses are negative results (`false`/`None`), not errors; only the
//! storage layer produces `Err` values, and those propagate unrecovered.
//!
//! ## Module Overview
//!
//! - [`manager`]: The note collection manager — the core contract
//! - [`model`]: Core data types (`Note`, `NoteUpdate`)
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration for the CLI client
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod manager;
pub mod model;
pub mod store;
