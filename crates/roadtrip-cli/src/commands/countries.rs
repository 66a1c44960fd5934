//! Countries command handler: list every routable country name.

use std::io::{self, Write};

use anyhow::Result;

use roadtrip_cli::output::{write_json, OutputFormat};
use roadtrip_lib::Atlas;

pub fn handle_countries_command(atlas: &Atlas, format: OutputFormat) -> Result<()> {
    let countries = atlas.countries();
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for country in &countries {
                writeln!(out, "{country}")?;
            }
        }
        OutputFormat::Json => write_json(&mut out, &countries)?,
    }
    out.flush()?;
    Ok(())
}
