//! Distance command handler for bordering-country capital distances.

use std::io::{self, Write};

use anyhow::Result;

use roadtrip_cli::output::{write_distance_text, write_json, DistanceReport, OutputFormat};
use roadtrip_lib::Atlas;

/// Print the capital distance between two bordering countries.
///
/// Any failed check (unknown country, no shared border, unresolved code, no
/// capital record) is returned as an error naming the failing step.
pub fn handle_distance_command(
    atlas: &Atlas,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let capital_km = atlas.distance(from, to)?;
    let report = DistanceReport {
        from,
        to,
        capital_km,
    };

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => write_distance_text(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
    }
    out.flush()?;
    Ok(())
}
