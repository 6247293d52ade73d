//! JSON-backed daily completion ledger.
//!
//! Keeps one counter per calendar day: the number of work intervals finished
//! that day. The whole ledger is rewritten on every save, through a sibling
//! temp file that is renamed over the target so a crash mid-write leaves the
//! previous copy intact.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::date::DateKey;
use crate::error::LedgerError;

const FORMAT_TAG: &str = "pomodoro-ledger";
const FORMAT_VERSION: u32 = 1;

/// On-disk document.
#[derive(Debug, Serialize, Deserialize)]
struct LedgerFile {
    format: String,
    version: u32,
    entries: Vec<LedgerEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LedgerEntry {
    day: u32,
    month: u32,
    year: i32,
    count: u32,
}

/// Completed work intervals per day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionLedger {
    counts: HashMap<DateKey, u32>,
}

impl CompletionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `source`, falling back to an empty ledger on any failure.
    ///
    /// Always leaves an entry for `today`, at 0 if it was absent.
    pub fn load(source: &Path, today: DateKey) -> Self {
        let mut ledger = match Self::try_load(source) {
            Ok(ledger) => ledger,
            Err(e) if e.is_not_found() => {
                debug!(path = %source.display(), "no ledger yet, starting fresh");
                Self::new()
            }
            Err(e) => {
                warn!(error = %e, "ledger unreadable, starting with an empty ledger");
                Self::new()
            }
        };
        ledger.counts.entry(today).or_insert(0);
        ledger
    }

    /// Read and validate the ledger at `source`.
    ///
    /// # Errors
    /// `Read` if the file cannot be read, `Corrupt` if it is not a valid
    /// ledger document.
    pub fn try_load(source: &Path) -> Result<Self, LedgerError> {
        let content = fs::read_to_string(source).map_err(|e| LedgerError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;
        Self::decode(&content).map_err(|message| LedgerError::Corrupt {
            path: source.to_path_buf(),
            message,
        })
    }

    /// Increment the count for `date`, creating it at 1. Returns the new count.
    pub fn record_completion(&mut self, date: DateKey) -> u32 {
        let count = self.counts.entry(date).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn count_for(&self, date: DateKey) -> u32 {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DateKey, u32)> + '_ {
        self.counts.iter().map(|(date, count)| (*date, *count))
    }

    /// Persist the full ledger to `destination`, replacing prior contents.
    ///
    /// # Errors
    /// Returns an error if the ledger cannot be encoded or the file cannot be
    /// written and renamed into place. The previous file is untouched then.
    pub fn save(&self, destination: &Path) -> Result<(), LedgerError> {
        let content = self.encode()?;

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LedgerError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let tmp_path = temp_path(destination);
        let write_tmp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()
        };
        if let Err(e) = write_tmp() {
            let _ = fs::remove_file(&tmp_path);
            return Err(LedgerError::Write {
                path: tmp_path,
                source: e,
            });
        }

        fs::rename(&tmp_path, destination).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            LedgerError::Write {
                path: destination.to_path_buf(),
                source: e,
            }
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn encode(&self) -> Result<String, LedgerError> {
        let mut dates: Vec<_> = self.counts.keys().copied().collect();
        dates.sort_by_key(DateKey::sort_key);

        let file = LedgerFile {
            format: FORMAT_TAG.to_string(),
            version: FORMAT_VERSION,
            entries: dates
                .into_iter()
                .map(|date| LedgerEntry {
                    day: date.day(),
                    month: date.month(),
                    year: date.year(),
                    count: self.count_for(date),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    fn decode(content: &str) -> Result<Self, String> {
        let file: LedgerFile = serde_json::from_str(content).map_err(|e| e.to_string())?;
        if file.format != FORMAT_TAG {
            return Err(format!("unexpected format tag '{}'", file.format));
        }
        if file.version != FORMAT_VERSION {
            return Err(format!("unsupported version {}", file.version));
        }

        let mut seen = HashSet::new();
        let mut counts = HashMap::with_capacity(file.entries.len());
        for entry in file.entries {
            let date = DateKey::new(entry.day, entry.month, entry.year).map_err(|e| e.to_string())?;
            if !seen.insert(date) {
                return Err(format!("duplicate entry for {date}"));
            }
            counts.insert(date, entry.count);
        }
        Ok(Self { counts })
    }
}

/// `ledger.json` -> `ledger.json.tmp`, in the same directory so the rename
/// stays on one filesystem.
fn temp_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "ledger".into());
    name.push(".tmp");
    destination.with_file_name(name)
}
