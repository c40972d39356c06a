//! Sink that logs each submission and appends it to a JSON-lines file

use super::traits::SubmissionSink;
use crate::config::SignupConfig;
use crate::state::FormValues;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One line of the submissions log
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionRecord<'a> {
    id: Uuid,
    submitted_at: DateTime<Utc>,
    values: &'a FormValues,
}

/// Appends accepted records to a local file
#[derive(Debug, Clone)]
pub struct JsonLogSink {
    path: PathBuf,
}

impl JsonLogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &SignupConfig) -> Self {
        Self::new(config.submissions_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SubmissionSink for JsonLogSink {
    fn submit(&mut self, values: &FormValues) -> Result<()> {
        let record = SubmissionRecord {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values,
        };
        tracing::info!(id = %record.id, "Form Data: {values:?}");

        let line = serde_json::to_string(&record)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
