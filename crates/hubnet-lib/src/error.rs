use thiserror::Error;

/// Convenient result alias for the hub network library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a coordinate is non-finite or outside the valid lat/lon range.
    #[error("invalid coordinate ({latitude}, {longitude}); expected lat in [-90, 90] and lon in [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Raised when the network cannot be built because no major hub exists.
    #[error("hub catalog contains no major hubs; at least one is required to build the network")]
    EmptyCatalog,

    /// Raised when a hub identifier or city name could not be found.
    #[error("unknown hub: {name}{}", format_suggestions(.suggestions))]
    UnknownHub {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no path connects the two requested hubs.
    #[error("no path found between {start} and {goal}")]
    NoPathFound { start: String, goal: String },

    /// Raised when the catalog header lacks a required column.
    #[error("invalid hub catalog header: {message}")]
    CatalogHeader { message: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for hub data")]
    ProjectDirsUnavailable,

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Stable error code reported to view-layer consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidCoordinate { .. } => "INVALID_COORDINATE",
            Error::EmptyCatalog => "EMPTY_CATALOG",
            Error::UnknownHub { .. } => "UNKNOWN_HUB",
            Error::NoPathFound { .. } => "NO_PATH",
            Error::CatalogHeader { .. } | Error::Csv(_) => "INVALID_CATALOG",
            Error::ProjectDirsUnavailable | Error::Io(_) => "IO",
        }
    }
}

/// Reason a single catalog record was rejected.
///
/// Record-level failures never abort a load; the loader logs them and keeps
/// going with the next record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The record has fewer fields than the catalog requires.
    #[error("expected {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    /// A required field is present but empty.
    #[error("missing {field}")]
    MissingField { field: &'static str },

    /// A coordinate field could not be parsed as a number.
    #[error("{field} '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },

    /// A coordinate field is non-finite or outside its valid range.
    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: f64 },

    /// The tier column holds something other than `major` or `sub`.
    #[error("unknown tier '{value}'; expected 'major' or 'sub'")]
    UnknownTier { value: String },

    /// A hub for the same region and city was loaded earlier.
    #[error("duplicate hub id {id}")]
    DuplicateHub { id: String },

    /// The CSV reader could not decode the record.
    #[error("malformed record: {message}")]
    Malformed { message: String },
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
