//! # Storage Layer
//!
//! This module defines the persistence abstraction for notz. The
//! [`Serializer`] trait lets the manager work with different storage
//! backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemorySerializer` (no filesystem needed)
//! - Allow **future backends** (other formats, database, etc.) without
//!   changing the manager
//! - Keep the collection logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`json::JsonSerializer`]: Production file-based storage — the whole
//!   collection as one pretty-printed JSON array
//! - [`memory::InMemorySerializer`]: Non-persistent storage for tests
//!
//! ## Contract
//!
//! Both operations move the **entire collection** in one call. A backend
//! must fail with a typed error when the underlying storage is missing,
//! unreadable, or does not deserialize to a note collection; it never
//! returns a partial result.

use crate::error::Result;
use crate::model::Note;

pub mod json;
pub mod memory;

/// Abstract interface for bulk note persistence.
pub trait Serializer {
    /// Read the entire stored collection.
    fn read(&self) -> Result<Vec<Note>>;

    /// Write the entire collection, replacing prior stored state.
    fn write(&self, notes: &[Note]) -> Result<()>;
}
