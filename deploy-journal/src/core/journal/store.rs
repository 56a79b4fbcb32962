// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Reading and atomically rewriting journal files.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use indexmap::IndexMap;

use super::{Journal, JournalError, Receipt};

impl Journal {
    /// Loads the journal at `path`, or an empty journal if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(data) => Self::parse(&data, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(@grey, "no journal at {}, starting empty", path.display());
                Ok(Self::empty_at(path))
            }
            Err(source) => Err(JournalError::Io {
                path: path.to_owned(),
                source,
            }),
        }
    }

    /// Loads the journal at `path`, which must already exist.
    pub fn load_required(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(data) => Self::parse(&data, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(JournalError::MissingJournal {
                path: path.to_owned(),
            }),
            Err(source) => Err(JournalError::Io {
                path: path.to_owned(),
                source,
            }),
        }
    }

    /// Rewrites the whole journal at `path`.
    ///
    /// The content goes to a temporary file in the same directory which is then renamed over
    /// `path`, so a crash leaves either the old or the new journal, never a torn one.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), JournalError> {
        let path = path.as_ref();
        let io_err = |source| JournalError::Io {
            path: path.to_owned(),
            source,
        };

        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(io_err)?;

        let mut contents =
            serde_json::to_vec_pretty(&self.entries).map_err(JournalError::Serialize)?;
        contents.push(b'\n');

        let mut file = tempfile::Builder::new()
            .prefix(".journal-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(io_err)?;
        file.write_all(&contents).map_err(io_err)?;
        file.as_file().sync_all().map_err(io_err)?;
        file.persist(path).map_err(|err| io_err(err.error))?;

        debug!(@grey, "saved {} journal entries to {}", self.len(), path.display());
        Ok(())
    }

    fn parse(data: &[u8], path: &Path) -> Result<Self, JournalError> {
        let mut entries: IndexMap<String, Receipt> =
            serde_json::from_slice(data).map_err(|source| JournalError::CorruptJournal {
                path: path.to_owned(),
                source,
            })?;
        // The map key is authoritative for the label.
        for (label, receipt) in entries.iter_mut() {
            if receipt.label != *label {
                receipt.label.clone_from(label);
            }
        }
        debug!(@grey, "loaded {} journal entries from {}", entries.len(), path.display());
        Ok(Self {
            entries,
            path: Some(path.to_owned()),
        })
    }
}
