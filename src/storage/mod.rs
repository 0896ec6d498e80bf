//! Storage boundary.
//!
//! The interpreter never touches rows itself. It talks to a
//! [`StorageEngine`] (database lifecycle) and to open [`Database`] handles
//! (table operations). [`memory::MemoryEngine`] is the bundled engine.

pub mod filter;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::query::{InsertSpec, QuerySpec, TableSpec};

/// Name of the system catalog database.
pub const CATALOG_DATABASE: &str = "nue";
/// Catalog table holding one row per known database.
pub const CATALOG_TABLE: &str = "database";
/// Primary key column of [`CATALOG_TABLE`].
pub const CATALOG_KEY: &str = "name";

/// Where a database lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The system catalog.
    System,
    /// User databases.
    Data,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::System => write!(f, "system"),
            Scope::Data => write!(f, "data"),
        }
    }
}

/// Errors raised by a storage engine.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database {0} already exists.")]
    DatabaseExists(String),

    #[error("Database {0} doesn't exist.")]
    DatabaseNotFound(String),

    #[error("Table {0} already exists.")]
    TableExists(String),

    #[error("Table {0} doesn't exist.")]
    TableNotFound(String),

    #[error("Column {column} doesn't exist in table {table}.")]
    ColumnNotFound { table: String, column: String },

    #[error("Table {0} has no primary key.")]
    NoPrimaryKey(String),

    #[error("Duplicate value '{value}' for primary key {column}.")]
    DuplicateKey { column: String, value: String },

    #[error("Primary key {0} requires a value.")]
    MissingKey(String),

    #[error("Expected {expected} values, found {found}.")]
    ValueCountMismatch { expected: usize, found: usize },

    #[error("Operator {operator} expects {expected}.")]
    InvalidCondition {
        operator: String,
        expected: &'static str,
    },

    #[error("Invalid LIKE pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// One row: column name to value (`None` is null).
pub type Row = BTreeMap<String, Option<String>>;

/// Schema summary of one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDescription {
    pub name: String,
    pub primary_key: Option<String>,
    pub columns: Vec<String>,
    pub rows: usize,
}

/// Summary of one database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseDescription {
    pub database: String,
    pub created_at: DateTime<Utc>,
    pub tables: Vec<TableDescription>,
}

/// The result of one statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    Message(String),
    Rows(Vec<Row>),
    Affected { affected: usize },
    Table(TableDescription),
    Database(DatabaseDescription),
}

impl Outcome {
    pub fn message(text: impl Into<String>) -> Self {
        Outcome::Message(text.into())
    }

    /// Rows, if this outcome carries any.
    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            Outcome::Rows(rows) => Some(rows),
            _ => None,
        }
    }
}

/// One open database.
#[async_trait]
pub trait Database: Send + Sync {
    /// The database name.
    fn name(&self) -> &str;

    async fn create_table(&self, spec: TableSpec) -> StorageResult<Outcome>;

    async fn drop_table(&self, name: &str) -> StorageResult<Outcome>;

    async fn insert(&self, spec: InsertSpec) -> StorageResult<Outcome>;

    /// Rows matching `spec`, in order.
    async fn find(&self, spec: QuerySpec) -> StorageResult<Outcome>;

    /// Apply `spec.set`/`spec.set_values` to the rows matching `spec.condition`.
    async fn update(&self, spec: QuerySpec) -> StorageResult<Outcome>;

    /// Remove the rows matching `spec.condition`.
    async fn delete(&self, spec: QuerySpec) -> StorageResult<Outcome>;

    async fn describe_table(&self, name: &str) -> StorageResult<Outcome>;

    /// Persist in-memory state.
    async fn save(&self) -> StorageResult<()>;
}

/// Database lifecycle operations.
#[async_trait]
pub trait StorageEngine: Send + Sync + 'static {
    type Db: Database + 'static;

    /// Open an existing database; `None` when it does not exist.
    async fn open(&self, scope: Scope, name: &str) -> StorageResult<Option<Self::Db>>;

    async fn create_database(&self, scope: Scope, name: &str) -> StorageResult<Outcome>;

    async fn drop_database(&self, scope: Scope, name: &str) -> StorageResult<Outcome>;

    /// Describe a data-scope database. `active` is used when it is the one named.
    async fn describe_database(
        &self,
        active: Option<&Self::Db>,
        name: &str,
    ) -> StorageResult<Outcome>;
}
