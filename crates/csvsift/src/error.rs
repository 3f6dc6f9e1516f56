//! Error types for loading, querying and presenting CSV data.

use std::io;
use std::path::PathBuf;

use csvsift_seeker::SeekerError;

/// Errors that can occur while running a query.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The CSV file could not be read. The OS error is the source, not part
    /// of the message, so chained reports show it once.
    #[error("cannot read {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV file was read but is not a well-formed table.
    #[error("{}: line {line}: {reason}", path.display())]
    Format {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// A filter or aggregate expression failed to parse or evaluate.
    #[error(transparent)]
    Seeker(#[from] SeekerError),

    /// Results could not be serialized.
    #[error("cannot format output: {0}")]
    Output(String),
}

impl Error {
    /// Create a format error.
    pub fn format(path: impl Into<PathBuf>, line: u64, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Returns the name of the error class, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::File { .. } => "FileError",
            Error::Format { .. } => "FormatError",
            Error::Seeker(err) => match err {
                SeekerError::Syntax { .. }
                | SeekerError::UnknownOperator(_)
                | SeekerError::UnknownAggregate(_) => "SyntaxError",
                SeekerError::MissingField { .. } => "FieldError",
                SeekerError::NonNumeric { .. } => "ValueError",
                SeekerError::EmptyInput { .. } => "EmptyInputError",
            },
            Error::Output(_) => "OutputError",
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Output(err.to_string())
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for Error {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        Error::Output(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Output(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Output(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let file = Error::File {
            path: "missing.csv".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(file.kind(), "FileError");
        assert_eq!(Error::format("a.csv", 3, "bad").kind(), "FormatError");

        let syntax: Error = "nonsense".parse::<csvsift_seeker::Condition>().unwrap_err().into();
        assert_eq!(syntax.kind(), "SyntaxError");

        let unknown: Error = SeekerError::UnknownAggregate("median".into()).into();
        assert_eq!(unknown.kind(), "SyntaxError");

        let field: Error = SeekerError::MissingField {
            column: "colour".into(),
        }
        .into();
        assert_eq!(field.kind(), "FieldError");
    }

    #[test]
    fn messages_name_the_problem() {
        let err = Error::format("products.csv", 4, "expected 4 fields, found 3");
        assert_eq!(
            err.to_string(),
            "products.csv: line 4: expected 4 fields, found 3"
        );

        let err = Error::File {
            path: "missing.csv".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "cannot read missing.csv");
        assert!(std::error::Error::source(&err).is_some());

        let err: Error = SeekerError::MissingField {
            column: "non-exist".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "column \"non-exist\" not found in CSV headers"
        );
    }
}
