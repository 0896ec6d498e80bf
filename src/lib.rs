//! # Nue: a small SQL-like statement interpreter
//!
//! Nue reads batches of semicolon-separated statements, classifies each one
//! by its verb, normalizes its parameters and drives a storage engine.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use nue::prelude::*;
//!
//! let interpreter = Interpreter::new(MemoryEngine::new());
//! let mut session = interpreter.session();
//!
//! let response = session
//!     .run_batch("CREATE DATABASE shop; INIT shop; CREATE TABLE users (id as primary_key, name)")
//!     .await;
//! assert!(response.is_ok());
//! ```
//!
//! ## Verbs
//!
//! | Verb               | Function                              |
//! |--------------------|---------------------------------------|
//! | `INIT`             | Select the active database            |
//! | `CREATE`           | Create a database or a table          |
//! | `INSERT`           | Add a row                             |
//! | `FIND`             | Query rows (joins, filters, paging)   |
//! | `DESCRIBE` / `LS`  | Describe a database or a table        |
//! | `SHOW`             | List databases from the catalog       |
//! | `DROP`             | Drop a database or a table            |
//! | `DELETE`           | Remove matching rows                  |
//! | `UPDATE`           | Assign fields on matching rows        |

pub mod ast;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod query;
pub mod response;
pub mod server;
pub mod session;
pub mod storage;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::NueConfig;
    pub use crate::error::*;
    pub use crate::parser::{parse, split_batch};
    pub use crate::query::*;
    pub use crate::response::{BatchFailure, BatchResponse, Status};
    pub use crate::session::{Header, Headers, Interpreter, Session};
    pub use crate::storage::memory::MemoryEngine;
    pub use crate::storage::{Database, Outcome, Row, Scope, StorageEngine, StorageError};
}

/// Parse a single Nue statement.
///
/// # Example
///
/// ```
/// use nue::ast::Statement;
///
/// let stmt = nue::parse("INIT shop").unwrap();
/// assert!(matches!(stmt, Statement::Init(ref init) if init.database == "shop"));
/// ```
pub fn parse(input: &str) -> Result<ast::Statement, error::NueError> {
    parser::parse(input)
}
