//! Interactive console session: repeatedly ask for two countries and print
//! the shortest route between them.

use std::io::{self, BufRead, Write};

use roadtrip_lib::{Atlas, Error as RouteError, RouteAlgorithm};

use crate::output::{write_no_path_text, write_route_text};

/// Keyword that ends the session at either prompt (case-insensitive).
const EXIT_KEYWORD: &str = "EXIT";

const FIRST_PROMPT: &str = "Enter the name of the first country (type EXIT to quit): ";
const SECOND_PROMPT: &str = "Enter the name of the second country (type EXIT to quit): ";
const INVALID_COUNTRY: &str = "Invalid country name. Please enter a valid country name.";

enum Answer {
    Country(String),
    Exit,
}

/// Run the prompt loop until `EXIT` or end of input.
pub fn run_session<R: BufRead, W: Write>(atlas: &Atlas, mut input: R, mut out: W) -> io::Result<()> {
    loop {
        let from = match prompt_country(atlas, &mut input, &mut out, FIRST_PROMPT)? {
            Some(Answer::Country(name)) => name,
            Some(Answer::Exit) => break,
            None => continue,
        };
        let to = match prompt_country(atlas, &mut input, &mut out, SECOND_PROMPT)? {
            Some(Answer::Country(name)) => name,
            Some(Answer::Exit) => break,
            None => continue,
        };

        match atlas.plan_route(&from, &to, RouteAlgorithm::Dijkstra) {
            Ok(plan) if plan.hops.is_empty() => write_no_path_text(&mut out, &from, &to)?,
            Ok(plan) => write_route_text(&mut out, &plan)?,
            Err(RouteError::RouteNotFound { .. }) => write_no_path_text(&mut out, &from, &to)?,
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    out.flush()
}

/// Read one answer. `None` means the name was rejected and the loop restarts.
fn prompt_country<R: BufRead, W: Write>(
    atlas: &Atlas,
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<Answer>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(Some(Answer::Exit));
    }

    let name = line.trim();
    if name.eq_ignore_ascii_case(EXIT_KEYWORD) {
        return Ok(Some(Answer::Exit));
    }
    if !atlas.has_country(name) {
        writeln!(out, "{INVALID_COUNTRY}")?;
        let suggestions = atlas.suggestions(name, 3);
        if !suggestions.is_empty() {
            writeln!(out, "Did you mean: {}?", suggestions.join(", "))?;
        }
        return Ok(None);
    }
    Ok(Some(Answer::Country(name.to_string())))
}
