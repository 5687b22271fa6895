//! JSON archive storage.
//!
//! Persists quote records to a single JSON document:
//! - `{"preventivi": [ {cliente, data, file, totale}, ... ]}`
//! - pretty printed, 2-space indent, UTF-8, non-ASCII left unescaped
//!
//! Supports:
//! - Appending a record (load, push, rewrite)
//! - Listing records sorted by date, optionally filtered by client
//! - Looking up a record by its 1-based position in the sorted view
//!
//! No locking. Two processes appending at the same time race and the last
//! writer wins.

pub mod diff;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));
static TOTAL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+,[0-9]{2}$").expect("valid total regex"));

/// One generated or imported quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub cliente: String,
    /// ISO date, `YYYY-MM-DD`. Not validated.
    pub data: String,
    /// Absolute path of the PDF at the time it was archived.
    pub file: String,
    /// Amount in `N,NN` form. Archives written by early versions lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totale: Option<String>,
}

impl QuoteRecord {
    pub fn new(
        cliente: impl Into<String>,
        data: impl Into<String>,
        file: impl Into<String>,
        totale: impl Into<String>,
    ) -> Self {
        QuoteRecord {
            cliente: cliente.into(),
            data: data.into(),
            file: file.into(),
            totale: Some(totale.into()),
        }
    }

    /// Returns human readable notes for fields that don't have the expected shape.
    pub fn shape_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !DATE_SHAPE.is_match(&self.data) {
            warnings.push(format!("date '{}' is not in YYYY-MM-DD form", self.data));
        }
        if let Some(totale) = &self.totale {
            if !TOTAL_SHAPE.is_match(totale) {
                warnings.push(format!("total '{totale}' is not in N,NN form"));
            }
        }
        warnings
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archive {
    #[serde(default)]
    pub preventivi: Vec<QuoteRecord>,
}

/// Handle on one archive file. Cheap to construct, reads the file on every call.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole archive. A missing file is an empty archive.
    pub fn load(&self) -> Result<Archive> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("archive {} not found, starting empty", self.path.display());
                return Ok(Archive::default());
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        serde_json::from_str(&contents).map_err(|source| Error::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// Rewrite the whole archive.
    ///
    /// The document is written to a temp file next to the archive and renamed
    /// over it, so readers never observe a half-written file.
    pub fn save(&self, archive: &Archive) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

        let mut json = serde_json::to_string_pretty(archive).map_err(Error::Encode)?;
        json.push('\n');

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| Error::io(&dir, e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| Error::io(tmp.path(), e))?;
        // temp files are created 0600, keep the mode of the archive being replaced
        if let Ok(existing) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| Error::io(tmp.path(), e))?;
        }
        tmp.persist(&self.path)
            .map_err(|e| Error::io(&self.path, e.error))?;

        Ok(())
    }

    pub fn append(&self, record: QuoteRecord) -> Result<()> {
        for warning in record.shape_warnings() {
            log::warn!("storing record for '{}' anyway: {warning}", record.cliente);
        }

        let mut archive = self.load()?;
        archive.preventivi.push(record);
        self.save(&archive)?;

        log::debug!(
            "archive {} now holds {} records",
            self.path.display(),
            archive.preventivi.len()
        );
        Ok(())
    }

    /// Records sorted by date string, ascending. Equal dates keep archive order.
    ///
    /// The client filter is an exact, case-insensitive match. A blank filter
    /// lists everything.
    pub fn list(&self, cliente: Option<&str>) -> Result<Vec<QuoteRecord>> {
        let archive = self.load()?;
        Ok(sorted_view(archive.preventivi, cliente))
    }

    /// 1-based lookup into the unfiltered sorted view.
    pub fn get_by_position(&self, position: i64) -> Result<Option<QuoteRecord>> {
        if position < 1 {
            return Ok(None);
        }
        let Ok(index) = usize::try_from(position - 1) else {
            return Ok(None);
        };
        let mut records = self.list(None)?;
        if index >= records.len() {
            return Ok(None);
        }
        Ok(Some(records.swap_remove(index)))
    }
}

fn sorted_view(records: Vec<QuoteRecord>, cliente: Option<&str>) -> Vec<QuoteRecord> {
    let mut records: Vec<QuoteRecord> = match cliente.filter(|c| !c.trim().is_empty()) {
        Some(wanted) => {
            let wanted = wanted.to_lowercase();
            records
                .into_iter()
                .filter(|r| r.cliente.to_lowercase() == wanted)
                .collect()
        }
        None => records,
    };
    // sort_by is stable
    records.sort_by(|a, b| a.data.cmp(&b.data));
    records
}
