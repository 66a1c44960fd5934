//! Bridge between country display names and the codes used by the capital
//! distance dataset.
//!
//! The source file is tab-separated with a header row:
//! `statenumber  stateid  countryname  start  end`. A country may appear on
//! several rows (one per period of statehood); the last row for a display name
//! decides its code.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::Result;

/// Rows with fewer columns than this are ignored.
const MIN_FIELDS: usize = 5;
const CODE_FIELD: usize = 1;
const NAME_FIELD: usize = 2;

/// Bidirectional mapping between display names and country codes.
#[derive(Debug, Clone, Default)]
pub struct NameAliasTable {
    codes: HashMap<String, String>,
    names: HashMap<String, Vec<String>>,
}

impl NameAliasTable {
    /// Load aliases from a tab-separated file with a header row.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            names = table.len(),
            "loaded country name aliases"
        );
        Ok(table)
    }

    /// Load aliases from a reader. The first row is a header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut tsv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut table = Self::default();
        for (index, result) in tsv_reader.records().enumerate() {
            let line = index + 2;
            let record = match result {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    warn!(line, error = %err, "skipping unreadable country name row");
                    continue;
                }
            };

            match parse_record(&record) {
                Some((code, name)) => table.insert(name, code),
                None => warn!(line, fields = record.len(), "skipping malformed country name row"),
            }
        }
        Ok(table)
    }

    /// Map `name` to `code`, replacing any earlier mapping for `name`.
    pub fn insert(&mut self, name: &str, code: &str) {
        if let Some(previous) = self.codes.insert(name.to_string(), code.to_string()) {
            if previous == code {
                return;
            }
            if let Some(names) = self.names.get_mut(&previous) {
                names.retain(|existing| existing != name);
                if names.is_empty() {
                    self.names.remove(&previous);
                }
            }
        }
        self.names
            .entry(code.to_string())
            .or_default()
            .push(name.to_string());
    }

    /// Code for a display name.
    pub fn code_of(&self, name: &str) -> Option<&str> {
        self.codes.get(name).map(String::as_str)
    }

    /// Display names currently mapped to `code`, in load order.
    pub fn names_for(&self, code: &str) -> &[String] {
        self.names.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of display names with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

fn parse_record(record: &StringRecord) -> Option<(&str, &str)> {
    if record.len() < MIN_FIELDS {
        return None;
    }
    let code = record.get(CODE_FIELD)?;
    let name = record.get(NAME_FIELD)?;
    if code.is_empty() || name.is_empty() {
        return None;
    }
    Some((code, name))
}
