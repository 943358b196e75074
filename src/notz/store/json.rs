use super::Serializer;
use crate::error::{NotzError, Result};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed serializer: the whole collection as one JSON array.
///
/// Deserialization is typed — content that is not a JSON array of notes
/// fails with [`NotzError::Serialization`] rather than producing a
/// half-usable collection.
pub struct JsonSerializer {
    path: PathBuf,
}

impl JsonSerializer {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Serializer for JsonSerializer {
    fn read(&self) -> Result<Vec<Note>> {
        let content = fs::read_to_string(&self.path).map_err(NotzError::Io)?;
        let notes: Vec<Note> = serde_json::from_str(&content).map_err(NotzError::Serialization)?;
        Ok(notes)
    }

    fn write(&self, notes: &[Note]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(NotzError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(notes).map_err(NotzError::Serialization)?;
        fs::write(&self.path, content).map_err(NotzError::Io)?;
        Ok(())
    }
}
