//! Deployment Record Store
//!
//! Holds the in-memory record for one run and persists a full snapshot on
//! every change. The store is mode-agnostic: where a snapshot goes is decided
//! by `plan_save`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::strategy::{plan_save, sequence_path, PersistMode};
use crate::domain::entities::{DeploymentRecord, RecordValue};
use crate::domain::ports::{NoopEventSink, RecordWriter, RunEvent, RunEventSink};
use crate::domain::services::{SequenceError, MAX_SEQUENCE};
use crate::infrastructure::repositories::{decode_record, CodecError};

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("no output path set for the deployment record")]
    OutputPathUnset,

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("failed to access record file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("record file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("key '{key}' not found in {path}")]
    MissingKey { key: String, path: PathBuf },

    #[error("record path {} is not valid UTF-8", .path.display())]
    NonUtf8Path { path: PathBuf },
}

/// Record store for one deployment run
pub struct DeploymentRecordStore<W>
where
    W: RecordWriter,
{
    writer: W,
    mode: PersistMode,
    record: DeploymentRecord,
    output_path: Option<PathBuf>,
    /// Next sequence number to consume (sequenced mode only)
    counter: u32,
    events: Arc<dyn RunEventSink>,
}

impl<W> DeploymentRecordStore<W>
where
    W: RecordWriter,
{
    pub fn new(writer: W, mode: PersistMode) -> Self {
        Self {
            writer,
            mode,
            record: DeploymentRecord::new(),
            output_path: None,
            counter: 1,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn RunEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn mode(&self) -> PersistMode {
        self.mode
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Entries as of the last change
    pub fn current(&self) -> &DeploymentRecord {
        &self.record
    }

    /// Sequence number the next save will consume
    pub fn sequence(&self) -> u32 {
        self.counter
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Set the output path. In sequenced mode this is the unsuffixed base and
    /// numbering restarts at 1.
    pub fn set_output_path(&mut self, path: impl Into<PathBuf>) {
        self.output_path = Some(path.into());
        self.counter = 1;
    }

    /// Upsert `key` and persist a snapshot.
    pub fn record(
        &mut self,
        key: impl Into<String>,
        value: impl Into<RecordValue>,
    ) -> Result<PathBuf, RecordError> {
        let key = key.into();
        let value = value.into();

        debug!(key = %key, value = %value, kind = value.kind(), "record entry");
        self.record.set(key.clone(), value.clone());
        self.events.on_event(RunEvent::RecordChanged { key, value });

        self.save()
    }

    /// Persist the current entries. Returns the path written.
    ///
    /// In sequenced mode each call consumes one sequence number, even when
    /// nothing changed since the previous save.
    pub fn save(&mut self) -> Result<PathBuf, RecordError> {
        let output_path = self
            .output_path
            .as_deref()
            .ok_or(RecordError::OutputPathUnset)?;

        let plan = plan_save(self.mode, &self.record, output_path, self.counter)?;

        self.writer
            .write(&plan.path, &plan.content)
            .map_err(|source| RecordError::Io {
                path: plan.path.clone(),
                source,
            })?;

        let sequence = match self.mode {
            PersistMode::Overwrite => None,
            PersistMode::Sequenced => Some(self.counter),
        };
        self.counter = plan.next_counter;

        info!(
            path = %plan.path.display(),
            entries = self.record.len(),
            mode = %self.mode,
            "saved deployment record"
        );
        self.events.on_event(RunEvent::SnapshotSaved {
            path: plan.path.clone(),
            sequence,
            entries: self.record.len(),
        });

        Ok(plan.path)
    }

    /// Pick up where an earlier run left off.
    ///
    /// Overwrite mode loads the file at the output path. Sequenced mode loads
    /// the highest-numbered snapshot in the trail, gaps allowed, and continues
    /// numbering after it, so earlier snapshots are never rewritten. A
    /// sequenced store with no trail yet seeds from an overwrite-mode file at
    /// the base path, leaving that file in place. Returns the path loaded,
    /// if any.
    pub fn resume(&mut self) -> Result<Option<PathBuf>, RecordError> {
        let output_path = self
            .output_path
            .clone()
            .ok_or(RecordError::OutputPathUnset)?;

        let latest = match self.mode {
            PersistMode::Overwrite => self
                .writer
                .exists(&output_path)
                .then(|| (output_path.clone(), None)),
            PersistMode::Sequenced => match self.latest_snapshot(&output_path)? {
                Some((path, last)) => Some((path, Some(last))),
                None if self.writer.exists(&output_path) => {
                    warn!(
                        path = %output_path.display(),
                        "no snapshots yet, seeding sequenced record from base file"
                    );
                    Some((output_path.clone(), None))
                }
                None => None,
            },
        };

        let Some((path, last)) = latest else {
            return Ok(None);
        };

        self.record = read_record(&self.writer, &path)?;
        if let Some(last) = last {
            self.counter = last + 1;
        }
        debug!(path = %path.display(), entries = self.record.len(), "resumed deployment record");
        Ok(Some(path))
    }

    /// Highest-numbered snapshot on disk. Every slot is checked, a pruned
    /// early snapshot does not hide later ones.
    fn latest_snapshot(&self, base: &Path) -> Result<Option<(PathBuf, u32)>, RecordError> {
        let mut latest = None;
        for n in 1..=MAX_SEQUENCE {
            let path = sequence_path(base, n)?;
            if self.writer.exists(&path) {
                latest = Some((path, n));
            }
        }
        Ok(latest)
    }
}

fn read_record<W: RecordWriter>(writer: &W, path: &Path) -> Result<DeploymentRecord, RecordError> {
    let content = writer.read(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_record(&content).map_err(|source| RecordError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Read one entry back from a persisted record file.
pub fn lookup<W: RecordWriter>(
    writer: &W,
    path: &Path,
    key: &str,
) -> Result<RecordValue, RecordError> {
    let record = read_record(writer, path)?;
    record
        .get(key)
        .cloned()
        .ok_or_else(|| RecordError::MissingKey {
            key: key.to_string(),
            path: path.to_path_buf(),
        })
}
