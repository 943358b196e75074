use super::Serializer;
use crate::error::{NotzError, Result};
use crate::model::Note;
use std::cell::RefCell;

/// In-memory storage for testing and development.
/// Does NOT persist data across processes.
#[derive(Default)]
pub struct InMemorySerializer {
    stored: RefCell<Option<Vec<Note>>>,
}

impl InMemorySerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-seeded stored collection, as if a prior process had
    /// written it.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            stored: RefCell::new(Some(notes)),
        }
    }
}

impl Serializer for InMemorySerializer {
    fn read(&self) -> Result<Vec<Note>> {
        self.stored
            .borrow()
            .clone()
            .ok_or_else(|| NotzError::Store("Nothing has been stored yet".to_string()))
    }

    fn write(&self, notes: &[Note]) -> Result<()> {
        *self.stored.borrow_mut() = Some(notes.to_vec());
        Ok(())
    }
}

/// A serializer whose operations always fail, for exercising error paths.
#[cfg(any(test, feature = "test_utils"))]
pub struct FailingSerializer;

#[cfg(any(test, feature = "test_utils"))]
impl Serializer for FailingSerializer {
    fn read(&self) -> Result<Vec<Note>> {
        Err(NotzError::Store("Backing store unavailable".to_string()))
    }

    fn write(&self, _notes: &[Note]) -> Result<()> {
        Err(NotzError::Store("Backing store unavailable".to_string()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::manager::NoteManager;

    pub struct ManagerFixture {
        pub manager: NoteManager<InMemorySerializer>,
    }

    impl Default for ManagerFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ManagerFixture {
        pub fn new() -> Self {
            Self {
                manager: NoteManager::new(InMemorySerializer::new()),
            }
        }

        pub fn with_note(mut self, title: &str, priority: i32, category: &str) -> Self {
            self.manager
                .add(Note::new(title.to_string(), priority, category.to_string()));
            self
        }

        pub fn with_archived_note(mut self, title: &str, priority: i32, category: &str) -> Self {
            self.manager
                .add(Note::new(title.to_string(), priority, category.to_string()));
            self.manager.archive(self.manager.count() - 1);
            self
        }
    }
}
