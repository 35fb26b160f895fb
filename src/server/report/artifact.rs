//! Persistence of generated report files.
//!
//! Files are named `<prefix>_<timePeriod>_<epochMillis>.<ext>` inside a single reports
//! directory. Stamps come from a process-wide monotonic clock so two files are never given
//! the same name, and files are persisted with a no-clobber atomic rename so an existing
//! report is never overwritten.

use std::{
    io::Write,
    path::PathBuf,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use chrono::Utc;
use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;

use crate::server::error::{report::ReportError, Error};

/// Public URL prefix the reports directory is served under.
pub static REPORTS_URL_PREFIX: &str = "/uploads/reports";

/// Longest time period kept in a file name, in characters.
const MAX_PERIOD_CHARS: usize = 64;

/// Attempts made to find a free file name before giving up.
const MAX_NAME_ATTEMPTS: usize = 16;

/// Kind of generated file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    Workbook,
    Presentation,
}

impl ArtifactKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Workbook => "okr_report",
            Self::Presentation => "okr_presentation",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Workbook => "xlsx",
            Self::Presentation => "pptx",
        }
    }
}

/// A report file written to disk.
#[derive(Clone, Debug)]
pub struct GeneratedArtifact {
    /// Location on disk
    pub path: PathBuf,
    /// Public path under [`REPORTS_URL_PREFIX`]
    pub url: String,
}

/// Directory that generated reports are written to.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    dir: PathBuf,
    last_stamp: Arc<AtomicI64>,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_stamp: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Next epoch-millisecond stamp, strictly greater than any stamp issued before.
    fn next_stamp(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last_stamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);

        now.max(previous + 1)
    }

    /// Writes `bytes` as a new report file and returns its location.
    ///
    /// The reports directory is created when missing. Nothing is written if `cancel` has
    /// been triggered.
    pub fn persist(
        &self,
        kind: ArtifactKind,
        time_period: &str,
        bytes: &[u8],
        cancel: &CancellationToken,
    ) -> Result<GeneratedArtifact, Error> {
        std::fs::create_dir_all(&self.dir)?;

        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(bytes)?;
        staged.as_file().sync_all()?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            if cancel.is_cancelled() {
                return Err(ReportError::Cancelled.into());
            }

            let file_name = artifact_file_name(kind, time_period, self.next_stamp());
            let path = self.dir.join(&file_name);

            match staged.persist_noclobber(&path) {
                Ok(_) => {
                    return Ok(GeneratedArtifact {
                        path,
                        url: format!("{}/{}", REPORTS_URL_PREFIX, file_name),
                    })
                }
                Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => {
                    staged = e.file;
                }
                Err(e) => return Err(e.error.into()),
            }
        }

        Err(ReportError::NameExhausted(self.dir.display().to_string()).into())
    }
}

/// File name for a report, with the time period reduced to `[A-Za-z0-9_-]` and capped at
/// [`MAX_PERIOD_CHARS`] characters.
pub fn artifact_file_name(kind: ArtifactKind, time_period: &str, stamp: i64) -> String {
    format!(
        "{}_{}_{}.{}",
        kind.prefix(),
        sanitize_time_period(time_period),
        stamp,
        kind.extension()
    )
}

fn sanitize_time_period(time_period: &str) -> String {
    time_period
        .chars()
        .take(MAX_PERIOD_CHARS)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
