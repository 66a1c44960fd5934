//! Capital-to-capital distances keyed by country code.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::Result;

/// Number of columns in a capital distance row (`numa,ida,numb,idb,kmdist,midist`).
const FIELD_COUNT: usize = 6;
const CODE_A_FIELD: usize = 1;
const CODE_B_FIELD: usize = 3;
const KM_FIELD: usize = 4;

/// Symmetric distance matrix between capitals.
#[derive(Debug, Clone, Default)]
pub struct CapitalDistanceTable {
    distances: HashMap<String, HashMap<String, u32>>,
}

impl CapitalDistanceTable {
    /// Load capital distances from a CSV file with a header row.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            codes = table.len(),
            "loaded capital distance table"
        );
        Ok(table)
    }

    /// Load capital distances from a reader. The first row is a header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut table = Self::default();
        let mut skipped = 0usize;
        for (index, result) in csv_reader.records().enumerate() {
            // Header is line 1.
            let line = index + 2;
            let record = match result {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    warn!(line, error = %err, "skipping unreadable capital distance row");
                    skipped += 1;
                    continue;
                }
            };

            match parse_record(&record) {
                Some((code_a, code_b, km)) => table.insert(code_a, code_b, km),
                None => {
                    warn!(line, fields = record.len(), "skipping malformed capital distance row");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            debug!(skipped, "capital distance rows ignored");
        }
        Ok(table)
    }

    /// Record `km` under both `a -> b` and `b -> a`.
    pub fn insert(&mut self, a: &str, b: &str, km: u32) {
        self.distances
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), km);
        self.distances
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), km);
    }

    /// Distance between the capitals of two codes, if recorded.
    pub fn distance(&self, a: &str, b: &str) -> Option<u32> {
        self.distances.get(a)?.get(b).copied()
    }

    /// Whether any distance is recorded for `code`.
    pub fn has_code(&self, code: &str) -> bool {
        self.distances.contains_key(code)
    }

    /// Number of codes with at least one recorded distance.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

fn parse_record(record: &StringRecord) -> Option<(&str, &str, u32)> {
    if record.len() != FIELD_COUNT {
        return None;
    }
    let code_a = record.get(CODE_A_FIELD)?;
    let code_b = record.get(CODE_B_FIELD)?;
    if code_a.is_empty() || code_b.is_empty() {
        return None;
    }
    let km = record.get(KM_FIELD)?.parse::<u32>().ok()?;
    Some((code_a, code_b, km))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "numa,ida,numb,idb,kmdist,midist\n";

    fn load(rows: &str) -> CapitalDistanceTable {
        let csv = format!("{HEADER}{rows}");
        CapitalDistanceTable::from_reader(Cursor::new(csv)).expect("in-memory csv loads")
    }

    #[test]
    fn row_is_stored_in_both_directions() {
        let table = load("2,AFG,4,CHN,2389,1484\n");
        assert_eq!(table.distance("AFG", "CHN"), Some(2389));
        assert_eq!(table.distance("CHN", "AFG"), Some(2389));
    }

    #[test]
    fn rows_with_wrong_field_count_are_skipped() {
        let table = load("2,AFG,4,CHN,2389\n2,AFG,770,PAK,380,236,extra\n2,AFG,770,PAK,380,236\n");
        assert_eq!(table.distance("AFG", "CHN"), None);
        assert_eq!(table.distance("PAK", "AFG"), Some(380));
    }

    #[test]
    fn unparsable_or_negative_distance_is_skipped() {
        let table = load("2,AFG,4,CHN,far,1484\n2,AFG,365,RUS,-10,0\n2,AFG,770,PAK,380,236\n");
        assert_eq!(table.distance("AFG", "CHN"), None);
        assert_eq!(table.distance("AFG", "RUS"), None);
        assert_eq!(table.distance("AFG", "PAK"), Some(380));
    }

    #[test]
    fn header_row_is_not_data() {
        let table = load("");
        assert!(table.is_empty());
        assert!(!table.has_code("ida"));
    }

    #[test]
    fn unknown_pair_is_none() {
        let table = load("2,AFG,4,CHN,2389,1484\n");
        assert_eq!(table.distance("AFG", "AFG"), None);
        assert_eq!(table.distance("XXX", "CHN"), None);
    }
}
