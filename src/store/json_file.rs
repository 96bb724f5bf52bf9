use crate::domain::ports::Persist;
use crate::domain::roster::Roster;
use crate::utils::error::{RegistrarError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Load/save boundary between the in-memory roster and a flat JSON array on
/// disk. Each record maps to one flat key-value object; the whole file is
/// rewritten on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full file into a fresh roster.
    ///
    /// Missing/unreadable file is a `FileAccess` error, malformed JSON or a
    /// missing key is a `Format` error, and an element that fails the record
    /// constructor is a `RecordValidation` error carrying its index. Any
    /// failure yields no roster at all, never a partial one. File handles are
    /// dropped on every exit path.
    pub fn load<R: Persist>(&self) -> Result<Roster<R>> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let entries: Vec<R::Wire> = serde_json::from_reader(reader)?;

        let records = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                R::from_wire(entry).map_err(|source| RegistrarError::RecordValidation {
                    index,
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<R>>>()?;

        tracing::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(Roster::from(records))
    }

    /// Overwrites the file with the full roster, raw field values as stored.
    /// Best-effort whole-file overwrite; no atomic rename.
    pub fn save<R: Persist>(&self, roster: &Roster<R>) -> Result<()> {
        let entries: Vec<R::Wire> = roster.iter().map(R::to_wire).collect();

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &entries)?;
        writer.flush()?;

        tracing::debug!("Saved {} records to {}", entries.len(), self.path.display());
        Ok(())
    }
}
