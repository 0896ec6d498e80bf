//! Interpreter and per-connection session state.
//!
//! An [`Interpreter`] owns the storage engine and the lazily opened system
//! catalog. Each connection (or CLI invocation) gets its own [`Session`],
//! which remembers the database selected with `INIT`.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::error::NueResult;
use crate::parser;
use crate::query::TableSpec;
use crate::response::BatchResponse;
use crate::storage::{
    Database, Outcome, Scope, StorageEngine, StorageError, CATALOG_DATABASE, CATALOG_KEY,
    CATALOG_TABLE,
};

/// Request headers: name to value.
pub type Headers = HashMap<String, String>;

/// Headers the interpreter acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// Logged before the batch runs.
    HandShake,
    /// Flush the active database and the catalog after the batch.
    Save,
}

impl Header {
    /// Resolve a header name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("handshake") {
            Some(Header::HandShake)
        } else if name.eq_ignore_ascii_case("save") {
            Some(Header::Save)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Header::HandShake => "HandShake",
            Header::Save => "Save",
        }
    }
}

/// Shared interpreter state.
pub struct Interpreter<E: StorageEngine> {
    engine: Arc<E>,
    catalog: Arc<OnceCell<E::Db>>,
}

impl<E: StorageEngine> Clone for Interpreter<E> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            catalog: self.catalog.clone(),
        }
    }
}

impl<E: StorageEngine> Interpreter<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine: Arc::new(engine),
            catalog: Arc::new(OnceCell::new()),
        }
    }

    /// Start a session with no active database.
    pub fn session(&self) -> Session<E> {
        Session {
            engine: self.engine.clone(),
            catalog: self.catalog.clone(),
            active: None,
        }
    }
}

/// State of one client connection.
pub struct Session<E: StorageEngine> {
    pub(crate) engine: Arc<E>,
    catalog: Arc<OnceCell<E::Db>>,
    pub(crate) active: Option<E::Db>,
}

/// Open the system catalog, creating it on first use.
async fn open_catalog<E: StorageEngine>(engine: &E) -> NueResult<E::Db> {
    if let Some(db) = engine.open(Scope::System, CATALOG_DATABASE).await? {
        return Ok(db);
    }

    engine
        .create_database(Scope::System, CATALOG_DATABASE)
        .await?;
    let db = engine
        .open(Scope::System, CATALOG_DATABASE)
        .await?
        .ok_or_else(|| StorageError::DatabaseNotFound(CATALOG_DATABASE.to_string()))?;
    db.create_table(TableSpec {
        name: CATALOG_TABLE.to_string(),
        primary_key: Some(CATALOG_KEY.to_string()),
        columns: vec![],
    })
    .await?;
    info!("Initialized system catalog");
    Ok(db)
}

impl<E: StorageEngine> Session<E> {
    /// Name of the database selected with `INIT`, if any.
    pub fn active_database(&self) -> Option<&str> {
        self.active.as_ref().map(|db| db.name())
    }

    pub(crate) async fn catalog(&self) -> NueResult<&E::Db> {
        self.catalog
            .get_or_try_init(|| open_catalog(self.engine.as_ref()))
            .await
    }

    /// Parse and run a single statement.
    pub async fn execute(&mut self, raw: &str) -> NueResult<Outcome> {
        let statement = parser::parse(raw)?;
        self.dispatch(statement).await
    }

    /// Run every statement of `body` in order, stopping at the first failure.
    pub async fn run_batch(&mut self, body: &str) -> BatchResponse {
        let mut results = Vec::new();
        for (index, raw) in parser::split_batch(body).into_iter().enumerate() {
            match self.execute(raw).await {
                Ok(outcome) => results.push(outcome),
                Err(e) => {
                    warn!("Statement {} failed: {}", index, e);
                    return BatchResponse::failed(results, index, e.to_string());
                }
            }
        }
        BatchResponse::ok(results)
    }

    /// Handle one request: pre-process headers, run the body, post-process headers.
    ///
    /// An absent or empty body yields an `OK` response with no results.
    pub async fn handle_request(&mut self, headers: &Headers, body: Option<&str>) -> BatchResponse {
        let recognized: Vec<(Header, &str)> = headers
            .iter()
            .filter_map(|(name, value)| Header::from_name(name).map(|h| (h, value.as_str())))
            .collect();

        for (header, value) in &recognized {
            if *header == Header::HandShake {
                info!("Handshake: {}", value);
            }
        }

        let response = match body {
            Some(body) if !body.is_empty() => self.run_batch(body).await,
            _ => BatchResponse::ok(vec![]),
        };

        if recognized.iter().any(|(header, _)| *header == Header::Save) {
            if let Err(e) = self.save().await {
                warn!("{} header: flush failed: {}", Header::Save.name(), e);
            }
        }

        response
    }

    /// Flush the active database, if any, then the catalog.
    pub async fn save(&self) -> NueResult<()> {
        if let Some(active) = &self.active {
            active.save().await?;
            debug!("Flushed database {}", active.name());
        }
        self.catalog().await?.save().await?;
        Ok(())
    }
}
