use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::PersistenceError;

/// Raw storage for one serialized document. `Ok(None)` means nothing has
/// been stored yet.
pub trait ContentProvider {
    fn get_content(&self) -> Result<Option<String>, PersistenceError>;
    fn set_content(&self, content: &str) -> Result<(), PersistenceError>;
}

pub struct FileContentProvider {
    file_path: PathBuf,
}

impl FileContentProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ContentProvider for FileContentProvider {
    fn get_content(&self) -> Result<Option<String>, PersistenceError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::Read(format!(
                "{}: {}",
                self.file_path.display(),
                err
            ))),
        }
    }

    fn set_content(&self, content: &str) -> Result<(), PersistenceError> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            PersistenceError::Write(format!("{}: {}", self.file_path.display(), e))
        })
    }
}

#[derive(Default)]
struct MemoryContent {
    content: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-process storage. Clones share the same slot, so one handle can be kept
/// to inspect what another wrote.
#[derive(Clone, Default)]
pub struct MemoryContentProvider {
    inner: Arc<Mutex<MemoryContent>>,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        let provider = Self::new();
        provider.lock().content = Some(content.to_string());
        provider
    }

    pub fn content(&self) -> Option<String> {
        self.lock().content.clone()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryContent> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContentProvider for MemoryContentProvider {
    fn get_content(&self) -> Result<Option<String>, PersistenceError> {
        let inner = self.lock();
        if inner.fail_reads {
            return Err(PersistenceError::Read("storage unavailable".to_string()));
        }
        Ok(inner.content.clone())
    }

    fn set_content(&self, content: &str) -> Result<(), PersistenceError> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(PersistenceError::Write("storage unavailable".to_string()));
        }
        inner.content = Some(content.to_string());
        Ok(())
    }
}
