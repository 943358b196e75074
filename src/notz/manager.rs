//! The note collection manager.
//!
//! [`NoteManager`] owns an ordered sequence of [`Note`] values and an
//! injected [`Serializer`]. All operations are synchronous; nothing here
//! blocks except `load`/`store`, which each perform one bulk call on the
//! serializer.
//!
//! ## Index contract
//!
//! A note's external identifier is its current zero-based position in the
//! sequence. Deleting a note shifts every later note down by one, so indices
//! are only valid until the next mutation that reorders the sequence.
//! Callers holding indices across a delete must re-list.
//!
//! Index misses are reported as negative results (`false` or `None`), never
//! as errors. Only the serializer produces `Err` values.

use crate::error::Result;
use crate::model::{Note, NoteUpdate};
use crate::store::Serializer;

const EMPTY: &str = "No notes stored";
const EMPTY_ACTIVE: &str = "No active notes stored";
const EMPTY_ARCHIVED: &str = "No archived notes stored";

/// Owns the note collection; generic over the storage backend.
///
/// Production wires a `NoteManager<JsonSerializer>`, tests a
/// `NoteManager<InMemorySerializer>`. The manager holds no other state.
pub struct NoteManager<S: Serializer> {
    serializer: S,
    notes: Vec<Note>,
}

impl<S: Serializer> NoteManager<S> {
    pub fn new(serializer: S) -> Self {
        Self {
            serializer,
            notes: Vec::new(),
        }
    }

    // --- CRUD ---

    /// Append a note to the end of the sequence. Always succeeds.
    pub fn add(&mut self, note: Note) -> bool {
        self.notes.push(note);
        true
    }

    /// Remove and return the note at `index`. Every later note shifts down
    /// by one. Returns `None` on an invalid index, leaving the collection
    /// unchanged.
    pub fn delete(&mut self, index: usize) -> Option<Note> {
        if self.is_valid_index(index) {
            Some(self.notes.remove(index))
        } else {
            None
        }
    }

    /// Overwrite title, priority, and category of the note at `index`.
    ///
    /// All three fields are replaced together; on an invalid index or an
    /// absent payload nothing changes and `false` is returned. The archived
    /// flag is never touched by an update.
    pub fn update(&mut self, index: usize, fields: Option<NoteUpdate>) -> bool {
        match (self.notes.get_mut(index), fields) {
            (Some(note), Some(fields)) => {
                note.title = fields.title;
                note.priority = fields.priority;
                note.category = fields.category;
                true
            }
            _ => false,
        }
    }

    /// Mark the note at `index` as archived. Returns `false` on an invalid
    /// index or when the note is already archived; archiving is one-way.
    pub fn archive(&mut self, index: usize) -> bool {
        match self.notes.get_mut(index) {
            Some(note) if !note.archived => {
                note.archived = true;
                true
            }
            _ => false,
        }
    }

    // --- Listing ---

    /// Every note as `"<index>: <note>"` lines, or a sentinel when empty.
    pub fn list_all(&self) -> String {
        if self.notes.is_empty() {
            EMPTY.to_string()
        } else {
            format_list(self.notes.iter().enumerate())
        }
    }

    /// Non-archived notes only, keeping their positions in the full
    /// sequence.
    pub fn list_active(&self) -> String {
        if self.count_active() == 0 {
            EMPTY_ACTIVE.to_string()
        } else {
            format_list(self.notes.iter().enumerate().filter(|(_, n)| !n.archived))
        }
    }

    /// Archived notes only, keeping their positions in the full sequence.
    pub fn list_archived(&self) -> String {
        if self.count_archived() == 0 {
            EMPTY_ARCHIVED.to_string()
        } else {
            format_list(self.notes.iter().enumerate().filter(|(_, n)| n.archived))
        }
    }

    /// Notes whose priority equals `priority`, preceded by a count header.
    ///
    /// An empty collection yields the empty sentinel; a collection with no
    /// matching note names the priority that found nothing.
    pub fn list_by_priority(&self, priority: i32) -> String {
        if self.notes.is_empty() {
            return EMPTY.to_string();
        }

        let mut listing = String::new();
        for (i, note) in self.notes.iter().enumerate() {
            if note.priority == priority {
                listing.push_str(&format!("{}: {}\n", i, note));
            }
        }

        if listing.is_empty() {
            format!("No notes with priority: {}", priority)
        } else {
            format!(
                "{} notes with priority {}: {}",
                self.count_by_priority(priority),
                priority,
                listing
            )
        }
    }

    // --- Counting ---

    pub fn count(&self) -> usize {
        self.notes.len()
    }

    pub fn count_archived(&self) -> usize {
        self.notes.iter().filter(|n| n.archived).count()
    }

    pub fn count_active(&self) -> usize {
        self.notes.iter().filter(|n| !n.archived).count()
    }

    pub fn count_by_priority(&self, priority: i32) -> usize {
        self.notes.iter().filter(|n| n.priority == priority).count()
    }

    // --- Searching ---

    /// The note at `index`, or `None` when out of range.
    pub fn find(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.notes.len()
    }

    /// Case-insensitive substring match on titles.
    ///
    /// Matches render like the list operations, but an empty result is an
    /// empty string, not a sentinel message.
    pub fn search_by_title(&self, term: &str) -> String {
        let term = term.to_lowercase();
        format_list(
            self.notes
                .iter()
                .enumerate()
                .filter(|(_, n)| n.title.to_lowercase().contains(&term)),
        )
    }

    // --- Persistence ---

    /// Replace the in-memory collection with the serializer's stored one.
    ///
    /// On failure the error propagates before any assignment, so the prior
    /// in-memory state is left intact.
    pub fn load(&mut self) -> Result<()> {
        self.notes = self.serializer.read()?;
        Ok(())
    }

    /// Write the in-memory collection, overwriting prior persisted state.
    pub fn store(&self) -> Result<()> {
        self.serializer.write(&self.notes)
    }
}

fn format_list<'a, I>(notes: I) -> String
where
    I: IntoIterator<Item = (usize, &'a Note)>,
{
    notes
        .into_iter()
        .map(|(i, note)| format!("{}: {}", i, note))
        .collect::<Vec<_>>()
        .join("\n")
}
