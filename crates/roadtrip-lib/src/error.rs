use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the roadtrip library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A dataset file could not be located at the resolved path.
    #[error("dataset file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable data directory could be resolved for this platform.
    #[error("failed to resolve a data directory for the country datasets")]
    DataDirUnavailable,

    /// Raised when a country name is absent from the border table.
    #[error("unknown country name: {name}{}", format_suggestions(.suggestions))]
    UnknownCountry {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the border table has no `from -> to` adjacency.
    #[error("{from} does not share a recorded border with {to}")]
    NoSharedBorder { from: String, to: String },

    /// Raised when a country name has no code in the alias table.
    #[error("no country code known for {name}")]
    MissingCountryCode { name: String },

    /// Raised when no capital-to-capital distance is recorded for a pair.
    #[error("no capital distance recorded between {from} and {to}")]
    MissingCapitalDistance { from: String, to: String },

    /// Raised when no route could be found between two countries.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_country_lists_suggestions() {
        let err = Error::UnknownCountry {
            name: "Chna".to_string(),
            suggestions: vec!["China".to_string(), "Chad".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown country name: Chna. Did you mean one of: 'China', 'Chad'?"
        );
    }

    #[test]
    fn unknown_country_without_suggestions_is_plain() {
        let err = Error::UnknownCountry {
            name: "Atlantis".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown country name: Atlantis");
    }
}
