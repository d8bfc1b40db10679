//! JSON-file snapshot storage.
//!
//! One document per concern under the data directory: `hydration.json`
//! for the ledger, `reminders.json` for reminder records. Writes go to a
//! temp file first and replace the snapshot by rename.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::ledger::{local_today, HydrationLedger};
use crate::reminder::ReminderSet;

use super::LedgerStore;

const LEDGER_FILE: &str = "hydration.json";
const REMINDERS_FILE: &str = "reminders.json";

/// File-backed [`LedgerStore`] keeping one JSON document per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    ledger_path: PathBuf,
    reminders_path: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `dir`, using the standard file names.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            ledger_path: dir.join(LEDGER_FILE),
            reminders_path: dir.join(REMINDERS_FILE),
        }
    }

    /// Path of the ledger snapshot file.
    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    /// Persist the ledger using an explicit `today` for the day-boundary
    /// filter. `save_ledger` delegates here with the local calendar day.
    pub fn save_ledger_at(&self, ledger: &mut HydrationLedger, today: NaiveDate) -> Result<()> {
        if ledger.roll_if_new_day(today) {
            debug!(path = %self.ledger_path.display(), "pre-save rollover applied");
        }
        write_json(&self.ledger_path, ledger)
    }
}

impl LedgerStore for JsonFileStore {
    fn load_ledger(&self) -> HydrationLedger {
        match read_json::<HydrationLedger>(&self.ledger_path) {
            Ok(Some(mut ledger)) => {
                ledger.normalize();
                ledger
            }
            Ok(None) => HydrationLedger::new(local_today()),
            Err(err) => {
                warn!(
                    path = %self.ledger_path.display(),
                    %err,
                    "unreadable hydration snapshot, starting from defaults"
                );
                HydrationLedger::new(local_today())
            }
        }
    }

    fn save_ledger(&self, ledger: &mut HydrationLedger) -> Result<()> {
        self.save_ledger_at(ledger, local_today())
    }

    fn load_reminders(&self) -> ReminderSet {
        match read_json::<ReminderSet>(&self.reminders_path) {
            Ok(Some(reminders)) => reminders,
            Ok(None) => ReminderSet::default(),
            Err(err) => {
                warn!(
                    path = %self.reminders_path.display(),
                    %err,
                    "unreadable reminder records, starting empty"
                );
                ReminderSet::default()
            }
        }
    }

    fn save_reminders(&self, reminders: &ReminderSet) -> Result<()> {
        write_json(&self.reminders_path, reminders)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&contents)?))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_vec_pretty(value)?;
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, contents)?;
    replace_file(&temp_path, path)?;
    Ok(())
}

/// Replace `destination` with `temp_path` by rename.
///
/// On platforms where rename fails against an existing target (notably
/// Windows), the destination is removed and the rename retried. The temp
/// file is cleaned up if the retry also fails.
fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Snapshot rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
