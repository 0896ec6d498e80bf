//! Error types for Nue.

use thiserror::Error;

use crate::storage::StorageError;

/// The main error type for interpreting Nue statements.
#[derive(Debug, Error)]
pub enum NueError {
    /// The statement did not match the grammar of its verb.
    #[error("Syntax error at position {position}: {message}")]
    Syntax { position: usize, message: String },

    /// Unknown leading keyword.
    #[error(
        "Invalid command action: '{0}'. Expected: INIT, CREATE, INSERT, FIND, DESCRIBE, LS, SHOW, DROP, DELETE or UPDATE"
    )]
    InvalidAction(String),

    /// A table-level statement ran before any `INIT`.
    #[error("No database initialized. Use \"INIT <database_name>\" to initialize a database.")]
    NoActiveDatabase,

    /// `INIT` named a database the storage layer does not know.
    #[error("Database {0} doesn't exist.")]
    DatabaseNotFound(String),

    /// More than one `<col> as primary_key` entry in `CREATE TABLE`.
    #[error("Unable to specify more than one primary key by table.")]
    MultiplePrimaryKeys,

    /// A required parameter list or name is missing.
    #[error("{0}")]
    MissingParameters(&'static str),

    /// Parameters were given where none are accepted.
    #[error("Unexpected parameters on \"{0}\" instruction.")]
    UnexpectedParameters(&'static str),

    /// `INSERT` mentions `VALUES` but carries no value list.
    #[error("INSERT command requires a VALUES clause with parameters.")]
    MissingValuesClause,

    /// `DELETE`/`UPDATE` (or a `FIND` with an operator) lacks a condition value.
    #[error("You must specify a condition value for WHERE clause.")]
    MissingCondition,

    /// Errors raised by the storage engine, surfaced verbatim.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NueError {
    /// Create a syntax error at the given position.
    pub fn syntax(position: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            message: message.into(),
        }
    }
}

/// Result type alias for Nue operations.
pub type NueResult<T> = Result<T, NueError>;
