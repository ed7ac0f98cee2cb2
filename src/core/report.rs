use crate::core::markers::Marker;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Mutex;

pub const REPORT_FILE_NAME: &str = "results.jsonl";

static APPEND_LOCK: Mutex<()> = Mutex::new(());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    pub id: String,
    pub name: String,
    pub markers: Vec<String>,
    pub outcome: Outcome,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

impl TestRecord {
    pub fn new(id: &str, name: &str, markers: &[Marker], outcome: Outcome, duration_ms: u64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            markers: markers.iter().map(|m| m.as_str().to_string()).collect(),
            outcome,
            duration_ms,
            screenshot: None,
            error: None,
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }
}

/// Appends one JSON line. Test binaries run cases on parallel threads, so
/// writes are serialised within the process.
pub fn append(path: &Path, record: &TestRecord) -> Result<()> {
    let line = serde_json::to_string(record)?;
    let _guard = APPEND_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub malformed: usize,
    pub failed_ids: Vec<String>,
}

impl Summary {
    pub fn pass_rate(&self) -> f64 {
        let executed = self.passed + self.failed;
        if executed == 0 {
            return 0.0;
        }
        self.passed as f64 / executed as f64 * 100.0
    }
}

/// Counts outcomes; lines that do not parse are counted as malformed.
pub fn summarize(path: &Path) -> Result<Summary> {
    let file = std::fs::File::open(path)?;
    let mut summary = Summary::default();

    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<TestRecord>(&line) {
            Ok(record) => {
                summary.total += 1;
                match record.outcome {
                    Outcome::Passed => summary.passed += 1,
                    Outcome::Skipped => summary.skipped += 1,
                    Outcome::Failed => {
                        summary.failed += 1;
                        summary.failed_ids.push(record.id);
                    }
                }
            }
            Err(e) => {
                tracing::warn!("⚠️ Skipping malformed report line: {}", e);
                summary.malformed += 1;
            }
        }
    }

    Ok(summary)
}
