//! Land-border adjacency keyed by country display name.
//!
//! Records look like `Country = Neighbor1 91 km; Neighbor2 2,670 km`. Each
//! record only describes the subject country's side of its borders; the
//! reverse direction is whatever the neighbor's own record says.

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;

/// Suffix that terminates every neighbor clause.
const DISTANCE_UNIT: &str = "km";

/// Directed adjacency list with a land-border length on every edge.
#[derive(Debug, Clone, Default)]
pub struct BorderTable {
    borders: HashMap<String, HashMap<String, u32>>,
}

impl BorderTable {
    /// Load the border table from a file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let table = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            countries = table.len(),
            "loaded border table"
        );
        Ok(table)
    }

    /// Load the border table from any buffered reader, one record per line.
    ///
    /// Invalid UTF-8 is replaced rather than failing the whole load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = Self::default();
        for line in reader.split(b'\n') {
            table.ingest(&String::from_utf8_lossy(&line?));
        }
        Ok(table)
    }

    /// Parse an in-memory border listing.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::default();
        for line in text.lines() {
            table.ingest(line);
        }
        table
    }

    fn ingest(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        match parse_record(line) {
            // A repeated subject replaces the earlier record.
            Some((country, neighbors)) => {
                self.borders.insert(country, neighbors);
            }
            None => debug!(record = line, "skipping border record without neighbors"),
        }
    }

    /// Neighbors of `country` mapped to their border length in kilometres.
    pub fn neighbors(&self, country: &str) -> Option<&HashMap<String, u32>> {
        self.borders.get(country)
    }

    /// Whether `country` has its own record in the table.
    pub fn has_country(&self, country: &str) -> bool {
        self.borders.contains_key(country)
    }

    /// Border length for the directed pair `from -> to`, as listed in `from`'s record.
    pub fn border_km(&self, from: &str, to: &str) -> Option<u32> {
        self.borders.get(from)?.get(to).copied()
    }

    /// Iterate over every country with a record.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.borders.keys().map(String::as_str)
    }

    /// Number of countries with a record.
    pub fn len(&self) -> usize {
        self.borders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }

    /// Total number of directed adjacency entries.
    pub fn edge_count(&self) -> usize {
        self.borders.values().map(HashMap::len).sum()
    }
}

fn parse_record(line: &str) -> Option<(String, HashMap<String, u32>)> {
    let (subject, section) = line.split_once('=')?;
    let country = subject.trim();
    let section = section.trim();
    if country.is_empty() || section.is_empty() {
        return None;
    }

    let mut neighbors = HashMap::new();
    for clause in section.split(';') {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }
        match parse_clause(clause) {
            Some((neighbor, distance)) => {
                neighbors.insert(neighbor, distance);
            }
            None => warn!(
                country,
                clause, "skipping border clause without a usable distance"
            ),
        }
    }

    Some((country.to_string(), neighbors))
}

/// Split `Name With Spaces 1,234 km` into the neighbor name and its distance.
///
/// Fractional lengths such as `4.4 km` are rounded to the nearest kilometre.
fn parse_clause(clause: &str) -> Option<(String, u32)> {
    let body = clause
        .strip_suffix(DISTANCE_UNIT)
        .unwrap_or(clause)
        .trim_end();
    let (name, raw_distance) = body.rsplit_once(char::is_whitespace)?;
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return None;
    }

    let distance = parse_distance(raw_distance)?;
    Some((name, distance))
}

/// Parse a non-negative length, allowing `,` as a thousands separator.
fn parse_distance(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    let value = digits.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value.round() as u32)
}
