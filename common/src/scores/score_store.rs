use serde::{Deserialize, Serialize};

use crate::config::{ConfigSerializer, ContentProvider, FileContentProvider, YamlConfigSerializer};
use crate::error::PersistenceError;
use crate::games::tictactoe::GameOutcome;
use crate::log;
use super::ScoreRecord;

pub const SCORES_KEY: &str = "tictactoeScores";

/// On-disk shape: the record nested under `SCORES_KEY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredScores {
    #[serde(rename = "tictactoeScores")]
    pub scores: ScoreRecord,
}

/// Owns the score record for the process and mirrors it to storage.
///
/// Storage failures never reach the caller. The in-memory record stays
/// authoritative, the store is marked dirty, and the full record is written
/// again on the next mutation or `flush`.
pub struct ScoreStore<TContentProvider, TSerializer = YamlConfigSerializer>
where
    TContentProvider: ContentProvider,
    TSerializer: ConfigSerializer<StoredScores>,
{
    content_provider: TContentProvider,
    serializer: TSerializer,
    record: ScoreRecord,
    dirty: bool,
}

impl ScoreStore<FileContentProvider, YamlConfigSerializer> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::open(FileContentProvider::new(file_path), YamlConfigSerializer::new())
    }
}

impl<TContentProvider, TSerializer> ScoreStore<TContentProvider, TSerializer>
where
    TContentProvider: ContentProvider,
    TSerializer: ConfigSerializer<StoredScores>,
{
    /// Creates the store and loads whatever is stored.
    pub fn open(content_provider: TContentProvider, serializer: TSerializer) -> Self {
        let mut store = Self {
            content_provider,
            serializer,
            record: ScoreRecord::default(),
            dirty: false,
        };
        store.load();
        store
    }

    /// Re-reads storage. Absent or unreadable content yields a zero record.
    /// While an earlier write is still pending, the in-memory record wins:
    /// it is written again and returned without reading storage.
    pub fn load(&mut self) -> ScoreRecord {
        if self.dirty {
            if let Err(e) = self.flush() {
                log!("Failed to persist pending scores, keeping them in memory: {}", e);
            }
            return self.record;
        }

        self.record = match self.read() {
            Ok(Some(record)) => record,
            Ok(None) => ScoreRecord::default(),
            Err(e) => {
                log!("Failed to load scores, starting from zero: {}", e);
                ScoreRecord::default()
            }
        };
        self.dirty = false;
        self.record
    }

    pub fn record(&self) -> ScoreRecord {
        self.record
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn record_outcome(&mut self, outcome: GameOutcome) -> ScoreRecord {
        self.record = self.record.with_outcome(outcome);
        self.persist();
        self.record
    }

    /// Zeroes every counter. Asking the player first is up to the caller.
    pub fn reset(&mut self) -> ScoreRecord {
        self.record = ScoreRecord::default();
        self.persist();
        log!("Scores reset");
        self.record
    }

    /// Writes the current record, surfacing the error for callers that care.
    pub fn flush(&mut self) -> Result<(), PersistenceError> {
        let result = self.write();
        self.dirty = result.is_err();
        result
    }

    fn persist(&mut self) {
        if let Err(e) = self.flush() {
            log!("Failed to persist scores, keeping them in memory: {}", e);
        }
    }

    fn read(&self) -> Result<Option<ScoreRecord>, PersistenceError> {
        let Some(content) = self.content_provider.get_content()? else {
            return Ok(None);
        };
        let stored = self.serializer.deserialize(&content)?;
        Ok(Some(stored.scores))
    }

    fn write(&self) -> Result<(), PersistenceError> {
        let stored = StoredScores { scores: self.record };
        let content = self.serializer.serialize(&stored)?;
        self.content_provider.set_content(&content)
    }
}
