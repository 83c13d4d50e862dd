use std::path::{Path, PathBuf};

use tracing::warn;

use crate::codec;
use crate::error::{ReadError, WriteError};
use crate::record::SaveRecord;

/// A loaded header waiting to be edited and written back.
///
/// Carries the path from the load step to the save step; saving consumes it.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    loaded: SaveRecord,
    record: SaveRecord,
}

impl Session {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ReadError> {
        let path = path.as_ref().to_path_buf();
        let record = codec::decode_path(&path)?;
        Ok(Self {
            path,
            loaded: record,
            record,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &SaveRecord {
        &self.record
    }

    pub fn set_year(&mut self, year: u16) {
        self.record.year = year;
    }

    pub fn set_local_currency(&mut self, amount: f32) {
        self.record.local_currency = amount;
    }

    pub fn set_foreign_currency(&mut self, amount: f32) {
        self.record.foreign_currency = amount;
    }

    pub fn is_dirty(&self) -> bool {
        self.record != self.loaded
    }

    /// Writes the record back to the file it was loaded from.
    ///
    /// On failure the session is returned unchanged alongside the error.
    pub fn save(self) -> Result<SaveRecord, (Self, WriteError)> {
        match codec::encode_path(&self.path, &self.record) {
            Ok(()) => Ok(self.record),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "save failed");
                Err((self, e))
            }
        }
    }
}
