//! Save strategies
//!
//! Pure functions from (record, output path, counter) to what gets written
//! where, and what the counter becomes. The store applies the plan.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RecordError;
use crate::domain::entities::DeploymentRecord;
use crate::domain::services::append_sequence;
use crate::infrastructure::repositories::encode_record;

/// How snapshots are persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistMode {
    /// Every save replaces the file at the output path
    #[default]
    Overwrite,
    /// Every save writes a new numbered file next to the output path
    Sequenced,
}

impl PersistMode {
    pub const VALID_VALUES: &'static [&'static str] = &["overwrite", "sequenced"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersistMode::Overwrite => "overwrite",
            PersistMode::Sequenced => "sequenced",
        }
    }
}

impl fmt::Display for PersistMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersistMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overwrite" => Ok(PersistMode::Overwrite),
            "sequenced" | "sequence" => Ok(PersistMode::Sequenced),
            other => Err(format!("unknown record mode '{}'", other)),
        }
    }
}

/// One save, fully decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePlan {
    pub path: PathBuf,
    pub content: String,
    pub next_counter: u32,
}

pub fn plan_save(
    mode: PersistMode,
    record: &DeploymentRecord,
    output_path: &Path,
    counter: u32,
) -> Result<SavePlan, RecordError> {
    match mode {
        PersistMode::Overwrite => plan_overwrite(record, output_path, counter),
        PersistMode::Sequenced => plan_sequenced(record, output_path, counter),
    }
}

fn plan_overwrite(
    record: &DeploymentRecord,
    output_path: &Path,
    counter: u32,
) -> Result<SavePlan, RecordError> {
    Ok(SavePlan {
        path: output_path.to_path_buf(),
        content: encode_record(record)?,
        next_counter: counter,
    })
}

fn plan_sequenced(
    record: &DeploymentRecord,
    base: &Path,
    counter: u32,
) -> Result<SavePlan, RecordError> {
    Ok(SavePlan {
        path: sequence_path(base, counter)?,
        content: encode_record(record)?,
        next_counter: counter + 1,
    })
}

/// Snapshot path `n` of the trail rooted at `base`. The base must be UTF-8
/// so the suffix lands exactly where the name says.
pub(super) fn sequence_path(base: &Path, n: u32) -> Result<PathBuf, RecordError> {
    let text = base.to_str().ok_or_else(|| RecordError::NonUtf8Path {
        path: base.to_path_buf(),
    })?;
    Ok(PathBuf::from(append_sequence(text, n)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::SequenceError;

    #[test]
    fn overwrite_keeps_path_and_counter() {
        let plan = plan_save(
            PersistMode::Overwrite,
            &DeploymentRecord::new(),
            Path::new("out/deploy.json"),
            1,
        )
        .unwrap();
        assert_eq!(plan.path, PathBuf::from("out/deploy.json"));
        assert_eq!(plan.next_counter, 1);
    }

    #[test]
    fn sequenced_suffixes_and_advances() {
        let plan = plan_save(
            PersistMode::Sequenced,
            &DeploymentRecord::new(),
            Path::new("out/deploy.json"),
            12,
        )
        .unwrap();
        assert_eq!(plan.path, PathBuf::from("out/deploy.012.json"));
        assert_eq!(plan.next_counter, 13);
    }

    #[test]
    fn sequenced_overflow_is_an_error() {
        let err = plan_save(
            PersistMode::Sequenced,
            &DeploymentRecord::new(),
            Path::new("d.json"),
            1000,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RecordError::Sequence(SequenceError::Overflow { counter: 1000 })
        ));
    }

    #[test]
    fn both_modes_write_the_same_content() {
        let mut record = DeploymentRecord::new();
        record.set("k", 1u64);
        let a = plan_save(PersistMode::Overwrite, &record, Path::new("d.json"), 1).unwrap();
        let b = plan_save(PersistMode::Sequenced, &record, Path::new("d.json"), 1).unwrap();
        assert_eq!(a.content, b.content);
    }

    #[cfg(unix)]
    #[test]
    fn sequenced_rejects_non_utf8_base() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let base = Path::new(OsStr::from_bytes(b"out/dep\xffloy.json"));
        let err = plan_save(PersistMode::Sequenced, &DeploymentRecord::new(), base, 1).unwrap_err();

        assert!(matches!(err, RecordError::NonUtf8Path { ref path } if path == base));
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("overwrite".parse(), Ok(PersistMode::Overwrite));
        assert_eq!("Sequenced".parse(), Ok(PersistMode::Sequenced));
        assert_eq!("sequence".parse(), Ok(PersistMode::Sequenced));
        assert!("append".parse::<PersistMode>().is_err());
    }
}
