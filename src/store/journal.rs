//! Append-only journal of subscription records.

use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::types::{SubscriptionId, SubscriptionRecord};

use super::SubscriptionStore;

/// Journal configuration.
#[derive(Clone, Debug)]
pub struct JournalConfig {
    /// Path to the journal file.
    pub path: PathBuf,

    /// Sync to disk after every write. Subscribe actions are rare and each
    /// one is user-visible, so the default is on.
    pub sync_every_write: bool,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./subscriptions.jsonl"),
            sync_every_write: true,
        }
    }
}

/// One journal line: the assigned id plus the record document.
#[derive(serde::Serialize, serde::Deserialize)]
struct JournalLine {
    id: u64,
    #[serde(flatten)]
    record: SubscriptionRecord,
}

/// Append-only JSON-lines sink.
///
/// Each `create` appends one line `{id, push_token, filters, active,
/// created_at}`. The file is held under an exclusive lock for the lifetime
/// of the store; a second opener gets [`StoreError::Locked`]. The next id
/// is recovered by scanning existing lines at open.
pub struct JournalStore {
    config: JournalConfig,
    inner: Mutex<JournalInner>,
}

struct JournalInner {
    file: File,
    next_id: u64,
}

impl JournalStore {
    /// Open or create a journal at the configured path.
    pub fn open(config: JournalConfig) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&config.path)?;

        file.try_lock_exclusive()
            .map_err(|_| StoreError::Locked)?;

        let next_id = Self::recover_next_id(&file)?;
        tracing::debug!(path = %config.path.display(), next_id, "opened subscription journal");

        Ok(Self {
            config,
            inner: Mutex::new(JournalInner { file, next_id }),
        })
    }

    /// Open with defaults at the given path.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(JournalConfig {
            path: path.as_ref().to_path_buf(),
            ..Default::default()
        })
    }

    /// Number of records in the journal.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Read back every record with its assigned id, in append order.
    pub fn read_all(&self) -> Result<Vec<(SubscriptionId, SubscriptionRecord)>> {
        let mut inner = self.inner.lock();
        inner.file.seek(SeekFrom::Start(0))?;

        let mut records = Vec::new();
        let reader = BufReader::new(&inner.file);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: JournalLine = serde_json::from_str(&line)?;
            records.push((SubscriptionId(entry.id), entry.record));
        }
        Ok(records)
    }

    /// Scan existing lines to find the highest assigned id.
    fn recover_next_id(file: &File) -> Result<u64> {
        let mut max_id = 0;
        let mut reader = BufReader::new(file);
        reader.seek(SeekFrom::Start(0))?;
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: JournalLine = serde_json::from_str(&line)?;
            max_id = max_id.max(entry.id);
        }
        Ok(max_id + 1)
    }
}

impl SubscriptionStore for JournalStore {
    fn create(&self, record: &SubscriptionRecord) -> Result<SubscriptionId> {
        let mut inner = self.inner.lock();

        let id = inner.next_id;
        let line = serde_json::to_string(&JournalLine {
            id,
            record: record.clone(),
        })?;

        inner.file.seek(SeekFrom::End(0))?;
        inner.file.write_all(line.as_bytes())?;
        inner.file.write_all(b"\n")?;
        if self.config.sync_every_write {
            inner.file.sync_all()?;
        }

        inner.next_id += 1;
        tracing::debug!(id, "appended subscription to journal");
        Ok(SubscriptionId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{build_record, validate};
    use crate::types::{PushToken, Timestamp};
    use tempfile::TempDir;

    fn make_record(companies: &str) -> SubscriptionRecord {
        let token = PushToken::new("ExponentPushToken[journal]");
        let filters = validate(companies, "new grad", Some(&token)).unwrap();
        build_record(token, filters, Timestamp::now())
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = TempDir::new().unwrap();
        let store = JournalStore::open_at(dir.path().join("subs.jsonl")).unwrap();

        let record = make_record("Google, Meta");
        let id = store.create(&record).unwrap();
        assert_eq!(id, SubscriptionId(1));

        let entries = store.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, id);
        assert_eq!(entries[0].1, record);
    }

    #[test]
    fn test_id_recovery_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("subs.jsonl");

        {
            let store = JournalStore::open_at(&path).unwrap();
            store.create(&make_record("Google")).unwrap();
            store.create(&make_record("Meta")).unwrap();
        }

        let store = JournalStore::open_at(&path).unwrap();
        let id = store.create(&make_record("Anthropic")).unwrap();
        assert_eq!(id, SubscriptionId(3));
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_second_opener_locked_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("subs.jsonl");

        let _held = JournalStore::open_at(&path).unwrap();
        let result = JournalStore::open_at(&path);
        assert!(matches!(result, Err(StoreError::Locked)));
    }

    #[test]
    fn test_corrupt_line_surfaces_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("subs.jsonl");
        std::fs::write(&path, "not json\n").unwrap();

        let result = JournalStore::open_at(&path);
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
