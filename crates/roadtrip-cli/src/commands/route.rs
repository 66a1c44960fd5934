//! Route command handler for computing paths between countries.

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use roadtrip_cli::output::{write_json, write_no_path_text, write_route_text, OutputFormat};
use roadtrip_lib::{Atlas, Error as RouteError, RouteAlgorithm, RouteHop};

/// JSON body printed when two known countries are not connected.
#[derive(Debug, Serialize)]
struct NoRoute<'a> {
    algorithm: RouteAlgorithm,
    start: &'a str,
    goal: &'a str,
    hops: &'a [RouteHop],
}

/// Handle the route subcommand.
///
/// Unknown countries are errors; a missing route is reported as a normal
/// result.
pub fn handle_route_command(
    atlas: &Atlas,
    format: OutputFormat,
    from: &str,
    to: &str,
    algorithm: RouteAlgorithm,
) -> Result<()> {
    let mut out = io::stdout().lock();
    match atlas.plan_route(from, to, algorithm) {
        Ok(plan) => match format {
            OutputFormat::Json => write_json(&mut out, &plan)?,
            OutputFormat::Text if plan.hops.is_empty() => write_no_path_text(&mut out, from, to)?,
            OutputFormat::Text => write_route_text(&mut out, &plan)?,
        },
        Err(RouteError::RouteNotFound { .. }) => match format {
            OutputFormat::Json => write_json(
                &mut out,
                &NoRoute {
                    algorithm,
                    start: from,
                    goal: to,
                    hops: &[],
                },
            )?,
            OutputFormat::Text => write_no_path_text(&mut out, from, to)?,
        },
        Err(err) => return Err(err.into()),
    }
    out.flush()?;
    Ok(())
}
