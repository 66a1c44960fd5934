//! Output formatting for query results.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use roadtrip_lib::RoutePlan;

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Capital distance between two bordering countries.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceReport<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub capital_km: u32,
}

/// Render a planned route as a bulleted hop list.
pub fn write_route_text<W: Write>(out: &mut W, plan: &RoutePlan) -> io::Result<()> {
    writeln!(out, "Route from {} to {}:", plan.start, plan.goal)?;
    for hop in &plan.hops {
        writeln!(out, "* {hop}")?;
    }
    Ok(())
}

/// Message shown when no route connects two countries.
pub fn write_no_path_text<W: Write>(out: &mut W, from: &str, to: &str) -> io::Result<()> {
    writeln!(out, "No path found between {from} and {to}.")
}

pub fn write_distance_text<W: Write>(out: &mut W, report: &DistanceReport<'_>) -> io::Result<()> {
    writeln!(
        out,
        "Distance between the capitals of {} and {}: {} km",
        report.from, report.to, report.capital_km
    )
}

/// Serialize any value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
