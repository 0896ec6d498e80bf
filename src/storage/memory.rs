//! In-memory storage engine with optional JSON snapshots.
//!
//! Every database is a set of tables held behind a `tokio::sync::RwLock`.
//! When a data directory is configured, [`Database::save`] writes
//! `<data_dir>/<scope>/<name>.json` and [`StorageEngine::open`] reads it back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::filter::{self, Predicate};
use super::{
    Database, DatabaseDescription, Outcome, Row, Scope, StorageEngine, StorageError,
    StorageResult, TableDescription,
};
use crate::ast::ConditionTarget;
use crate::query::{Condition, InsertSpec, QuerySpec, TableSpec};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Table {
    primary_key: Option<String>,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Primary key first, then the plain columns.
    fn all_columns(&self) -> Vec<String> {
        self.primary_key
            .iter()
            .chain(self.columns.iter())
            .cloned()
            .collect()
    }

    fn column(&self, table: &str, name: &str) -> StorageResult<String> {
        filter::resolve_column(&self.all_columns(), table, name).ok_or_else(|| {
            StorageError::ColumnNotFound {
                table: table.to_string(),
                column: name.to_string(),
            }
        })
    }

    fn predicate(&self, table: &str, condition: &Condition) -> StorageResult<Predicate> {
        let column = match &condition.target {
            ConditionTarget::PrimaryKey => self
                .primary_key
                .clone()
                .ok_or_else(|| StorageError::NoPrimaryKey(table.to_string()))?,
            ConditionTarget::Field(name) => self.column(table, name)?,
        };
        Predicate::compile(column, condition.operator, &condition.value)
    }

    /// Fail when two rows share a primary key value.
    fn check_unique(&self, rows: &[Row]) -> StorageResult<()> {
        let Some(pk) = &self.primary_key else {
            return Ok(());
        };
        let mut seen = BTreeSet::new();
        for row in rows {
            if let Some(Some(value)) = row.get(pk) {
                if !seen.insert(filter::canonical(value)) {
                    return Err(StorageError::DuplicateKey {
                        column: pk.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DatabaseState {
    created_at: DateTime<Utc>,
    tables: BTreeMap<String, Table>,
}

impl DatabaseState {
    fn new() -> Self {
        Self {
            created_at: Utc::now(),
            tables: BTreeMap::new(),
        }
    }

    fn table(&self, name: &str) -> StorageResult<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| StorageError::TableNotFound(name.to_string()))
    }

    fn table_mut(&mut self, name: &str) -> StorageResult<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| StorageError::TableNotFound(name.to_string()))
    }

    fn describe(&self, database: &str) -> DatabaseDescription {
        DatabaseDescription {
            database: database.to_string(),
            created_at: self.created_at,
            tables: self
                .tables
                .iter()
                .map(|(name, table)| describe_table(name, table))
                .collect(),
        }
    }
}

fn describe_table(name: &str, table: &Table) -> TableDescription {
    TableDescription {
        name: name.to_string(),
        primary_key: table.primary_key.clone(),
        columns: table.columns.clone(),
        rows: table.rows.len(),
    }
}

type SharedState = Arc<RwLock<DatabaseState>>;

/// The bundled storage engine.
pub struct MemoryEngine {
    data_dir: Option<PathBuf>,
    databases: RwLock<HashMap<(Scope, String), SharedState>>,
}

impl MemoryEngine {
    /// A purely in-memory engine; nothing survives the process.
    pub fn new() -> Self {
        Self {
            data_dir: None,
            databases: RwLock::new(HashMap::new()),
        }
    }

    /// An engine that snapshots databases under `data_dir`.
    pub fn persistent(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
            databases: RwLock::new(HashMap::new()),
        }
    }

    fn snapshot_path(&self, scope: Scope, name: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(scope.to_string()).join(format!("{}.json", name)))
    }

    /// Look a database up in memory, falling back to its snapshot.
    async fn load(&self, scope: Scope, name: &str) -> StorageResult<Option<SharedState>> {
        let key = (scope, name.to_string());
        if let Some(state) = self.databases.read().await.get(&key) {
            return Ok(Some(state.clone()));
        }

        let Some(path) = self.snapshot_path(scope, name) else {
            return Ok(None);
        };
        if !tokio::fs::try_exists(&path).await? {
            return Ok(None);
        }
        let contents = tokio::fs::read_to_string(&path).await?;
        let state: DatabaseState = serde_json::from_str(&contents)?;
        debug!("Loaded snapshot {}", path.display());

        let mut databases = self.databases.write().await;
        let state = databases
            .entry(key)
            .or_insert_with(|| Arc::new(RwLock::new(state)))
            .clone();
        Ok(Some(state))
    }

    fn handle(&self, scope: Scope, name: &str, state: SharedState) -> MemoryDatabase {
        MemoryDatabase {
            name: name.to_string(),
            path: self.snapshot_path(scope, name),
            state,
        }
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageEngine for MemoryEngine {
    type Db = MemoryDatabase;

    async fn open(&self, scope: Scope, name: &str) -> StorageResult<Option<MemoryDatabase>> {
        Ok(self
            .load(scope, name)
            .await?
            .map(|state| self.handle(scope, name, state)))
    }

    async fn create_database(&self, scope: Scope, name: &str) -> StorageResult<Outcome> {
        if self.load(scope, name).await?.is_some() {
            return Err(StorageError::DatabaseExists(name.to_string()));
        }
        let state = Arc::new(RwLock::new(DatabaseState::new()));
        self.databases
            .write()
            .await
            .insert((scope, name.to_string()), state.clone());
        self.handle(scope, name, state).save().await?;
        Ok(Outcome::message(format!("Database {} created.", name)))
    }

    async fn drop_database(&self, scope: Scope, name: &str) -> StorageResult<Outcome> {
        let removed = self
            .databases
            .write()
            .await
            .remove(&(scope, name.to_string()))
            .is_some();

        let mut deleted = false;
        if let Some(path) = self.snapshot_path(scope, name) {
            if tokio::fs::try_exists(&path).await? {
                tokio::fs::remove_file(&path).await?;
                deleted = true;
            }
        }

        if !removed && !deleted {
            return Err(StorageError::DatabaseNotFound(name.to_string()));
        }
        Ok(Outcome::message(format!("Database {} dropped.", name)))
    }

    async fn describe_database(
        &self,
        active: Option<&MemoryDatabase>,
        name: &str,
    ) -> StorageResult<Outcome> {
        let state = match active {
            Some(db) if db.name == name => db.state.clone(),
            _ => self
                .load(Scope::Data, name)
                .await?
                .ok_or_else(|| StorageError::DatabaseNotFound(name.to_string()))?,
        };
        let description = state.read().await.describe(name);
        Ok(Outcome::Database(description))
    }
}

/// An open database of a [`MemoryEngine`].
#[derive(Clone)]
pub struct MemoryDatabase {
    name: String,
    path: Option<PathBuf>,
    state: SharedState,
}

#[async_trait]
impl Database for MemoryDatabase {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_table(&self, spec: TableSpec) -> StorageResult<Outcome> {
        let mut state = self.state.write().await;
        if state.tables.contains_key(&spec.name) {
            return Err(StorageError::TableExists(spec.name));
        }
        let mut columns: Vec<String> = Vec::new();
        for column in spec.columns {
            if Some(&column) != spec.primary_key.as_ref() && !columns.contains(&column) {
                columns.push(column);
            }
        }
        state.tables.insert(
            spec.name.clone(),
            Table {
                primary_key: spec.primary_key,
                columns,
                rows: Vec::new(),
            },
        );
        Ok(Outcome::message(format!("Table {} created.", spec.name)))
    }

    async fn drop_table(&self, name: &str) -> StorageResult<Outcome> {
        let mut state = self.state.write().await;
        if state.tables.remove(name).is_none() {
            return Err(StorageError::TableNotFound(name.to_string()));
        }
        Ok(Outcome::message(format!("Table {} dropped.", name)))
    }

    async fn insert(&self, spec: InsertSpec) -> StorageResult<Outcome> {
        let mut state = self.state.write().await;
        let table = state.table_mut(&spec.table)?;
        let all = table.all_columns();
        let columns = spec.columns.unwrap_or_else(|| all.clone());

        if columns.len() != spec.values.len() {
            return Err(StorageError::ValueCountMismatch {
                expected: columns.len(),
                found: spec.values.len(),
            });
        }

        let mut row: Row = all.iter().map(|c| (c.clone(), None)).collect();
        for (column, value) in columns.iter().zip(spec.values) {
            let key = table.column(&spec.table, column)?;
            row.insert(key, Some(value));
        }

        if let Some(pk) = &table.primary_key {
            let Some(Some(value)) = row.get(pk) else {
                return Err(StorageError::MissingKey(pk.clone()));
            };
            if table.rows.iter().any(|existing| {
                existing
                    .get(pk)
                    .and_then(|v| v.as_deref())
                    .is_some_and(|v| filter::values_equal(v, value))
            }) {
                return Err(StorageError::DuplicateKey {
                    column: pk.clone(),
                    value: value.clone(),
                });
            }
        }

        table.rows.push(row);
        Ok(Outcome::Affected { affected: 1 })
    }

    async fn find(&self, spec: QuerySpec) -> StorageResult<Outcome> {
        let state = self.state.read().await;
        let table = state.table(&spec.table)?;
        let mut keys = table.all_columns();
        let mut rows = table.rows.clone();

        for join in &spec.joins {
            let other = state.table(&join.reference_table)?;
            let (joined, joined_keys) = filter::join_rows(
                rows,
                keys,
                &spec.table,
                join,
                &other.all_columns(),
                &other.rows,
            )?;
            rows = joined;
            keys = joined_keys;
        }

        let resolve = |name: &str| {
            filter::resolve_column(&keys, &spec.table, name).ok_or_else(|| {
                StorageError::ColumnNotFound {
                    table: spec.table.clone(),
                    column: name.to_string(),
                }
            })
        };

        if let Some(condition) = &spec.condition {
            let column = match &condition.target {
                ConditionTarget::PrimaryKey => table
                    .primary_key
                    .clone()
                    .ok_or_else(|| StorageError::NoPrimaryKey(spec.table.clone()))?,
                ConditionTarget::Field(name) => resolve(name)?,
            };
            let predicate = Predicate::compile(column, condition.operator, &condition.value)?;
            rows.retain(|row| predicate.matches(row));
        }

        if let Some(order_by) = &spec.order_by {
            let key = resolve(order_by)?;
            rows.sort_by(|a, b| {
                let ordering = filter::compare_cells(
                    a.get(&key).and_then(|v| v.as_deref()),
                    b.get(&key).and_then(|v| v.as_deref()),
                );
                if spec.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }

        if let Some(columns) = &spec.columns {
            let projection = columns
                .iter()
                .map(|name| Ok::<_, StorageError>((name.clone(), resolve(name)?)))
                .collect::<StorageResult<Vec<_>>>()?;
            rows = rows
                .into_iter()
                .map(|row| {
                    projection
                        .iter()
                        .map(|(label, key)| (label.clone(), row.get(key).cloned().flatten()))
                        .collect()
                })
                .collect();
        }

        if spec.distinct {
            let mut seen = BTreeSet::new();
            rows.retain(|row| seen.insert(row.clone()));
        }

        let rows = rows
            .into_iter()
            .skip(spec.offset.unwrap_or(0))
            .take(spec.limit.unwrap_or(usize::MAX))
            .collect();
        Ok(Outcome::Rows(rows))
    }

    async fn update(&self, spec: QuerySpec) -> StorageResult<Outcome> {
        let mut state = self.state.write().await;
        let table = state.table_mut(&spec.table)?;

        let predicate = spec
            .condition
            .as_ref()
            .map(|condition| table.predicate(&spec.table, condition))
            .transpose()?;
        let assignments = spec
            .set
            .iter()
            .zip(spec.set_values.iter())
            .map(|(field, value)| {
                Ok::<_, StorageError>((table.column(&spec.table, field)?, value.clone()))
            })
            .collect::<StorageResult<Vec<_>>>()?;

        let mut rows = table.rows.clone();
        let mut affected = 0;
        for row in rows.iter_mut() {
            if predicate.as_ref().is_none_or(|p| p.matches(row)) {
                for (key, value) in &assignments {
                    row.insert(key.clone(), Some(value.clone()));
                }
                affected += 1;
            }
        }

        table.check_unique(&rows)?;
        table.rows = rows;
        Ok(Outcome::Affected { affected })
    }

    async fn delete(&self, spec: QuerySpec) -> StorageResult<Outcome> {
        let mut state = self.state.write().await;
        let table = state.table_mut(&spec.table)?;

        let predicate = spec
            .condition
            .as_ref()
            .map(|condition| table.predicate(&spec.table, condition))
            .transpose()?;
        let before = table.rows.len();
        table
            .rows
            .retain(|row| !predicate.as_ref().is_none_or(|p| p.matches(row)));
        Ok(Outcome::Affected {
            affected: before - table.rows.len(),
        })
    }

    async fn describe_table(&self, name: &str) -> StorageResult<Outcome> {
        let state = self.state.read().await;
        let table = state.table(name)?;
        Ok(Outcome::Table(describe_table(name, table)))
    }

    async fn save(&self) -> StorageResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let contents = serde_json::to_string_pretty(&*self.state.read().await)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;
        debug!("Saved database {} to {}", self.name, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Join, JoinKind, Operator};
    use crate::query::ConditionValue;
    use pretty_assertions::assert_eq;

    async fn users_db(engine: &MemoryEngine) -> MemoryDatabase {
        engine.create_database(Scope::Data, "shop").await.unwrap();
        let db = engine.open(Scope::Data, "shop").await.unwrap().unwrap();
        db.create_table(TableSpec {
            name: "users".to_string(),
            primary_key: Some("id".to_string()),
            columns: vec!["name".to_string(), "age".to_string()],
        })
        .await
        .unwrap();
        for (id, name, age) in [("1", "Ann", "34"), ("2", "bob", "9"), ("3", "Cid", "21")] {
            db.insert(InsertSpec {
                table: "users".to_string(),
                columns: None,
                values: vec![id.to_string(), name.to_string(), age.to_string()],
            })
            .await
            .unwrap();
        }
        db
    }

    fn names(outcome: &Outcome) -> Vec<String> {
        outcome
            .rows()
            .unwrap()
            .iter()
            .map(|row| row.get("name").cloned().flatten().unwrap_or_default())
            .collect()
    }

    #[tokio::test]
    async fn test_find_orders_numerically_and_pages() {
        let engine = MemoryEngine::new();
        let db = users_db(&engine).await;

        let mut spec = QuerySpec::table("users");
        spec.order_by = Some("age".to_string());
        spec.ascending = false;
        spec.limit = Some(2);
        spec.offset = Some(1);
        let outcome = db.find(spec).await.unwrap();
        assert_eq!(names(&outcome), vec!["Cid", "bob"]);
    }

    #[tokio::test]
    async fn test_find_by_primary_key_and_like() {
        let engine = MemoryEngine::new();
        let db = users_db(&engine).await;

        let spec = QuerySpec::table("users").filter(Condition {
            target: ConditionTarget::PrimaryKey,
            operator: Operator::In,
            value: ConditionValue::List(vec!["1".to_string(), "3".to_string()]),
        });
        assert_eq!(names(&db.find(spec).await.unwrap()), vec!["Ann", "Cid"]);

        let spec = QuerySpec::table("users").filter_field("name", Operator::Like, "B%");
        assert_eq!(names(&db.find(spec).await.unwrap()), vec!["bob"]);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicates_and_bad_counts() {
        let engine = MemoryEngine::new();
        let db = users_db(&engine).await;

        let err = db
            .insert(InsertSpec {
                table: "users".to_string(),
                columns: Some(vec!["id".to_string(), "name".to_string()]),
                values: vec!["1".to_string(), "Dup".to_string()],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::DuplicateKey { .. }));

        let err = db
            .insert(InsertSpec {
                table: "users".to_string(),
                columns: None,
                values: vec!["4".to_string()],
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::ValueCountMismatch {
                expected: 3,
                found: 1
            }
        ));

        let err = db
            .insert(InsertSpec {
                table: "users".to_string(),
                columns: Some(vec!["name".to_string()]),
                values: vec!["NoKey".to_string()],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::MissingKey(_)));
    }

    #[tokio::test]
    async fn test_primary_key_uniqueness_follows_numeric_equality() {
        let engine = MemoryEngine::new();
        let db = users_db(&engine).await;

        for id in ["01", "1.0"] {
            let err = db
                .insert(InsertSpec {
                    table: "users".to_string(),
                    columns: Some(vec!["id".to_string(), "name".to_string()]),
                    values: vec![id.to_string(), "Dup".to_string()],
                })
                .await
                .unwrap_err();
            assert!(matches!(err, StorageError::DuplicateKey { .. }), "{}", id);
        }

        let spec = QuerySpec::table("users").filter(Condition {
            target: ConditionTarget::PrimaryKey,
            operator: Operator::Eq,
            value: ConditionValue::Scalar("1".to_string()),
        });
        assert_eq!(names(&db.find(spec).await.unwrap()), vec!["Ann"]);

        let mut spec = QuerySpec::table("users").filter_field("id", Operator::Eq, "3");
        spec.set = vec!["id".to_string()];
        spec.set_values = vec!["02".to_string()];
        assert!(matches!(
            db.update(spec).await.unwrap_err(),
            StorageError::DuplicateKey { .. }
        ));
    }

    #[tokio::test]
    async fn test_nan_cell_does_not_match_numbers() {
        let engine = MemoryEngine::new();
        let db = users_db(&engine).await;
        db.insert(InsertSpec {
            table: "users".to_string(),
            columns: None,
            values: vec!["4".to_string(), "Nan".to_string(), "NaN".to_string()],
        })
        .await
        .unwrap();

        let spec = QuerySpec::table("users").filter_field("age", Operator::Eq, "34");
        assert_eq!(names(&db.find(spec).await.unwrap()), vec!["Ann"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_count_rows() {
        let engine = MemoryEngine::new();
        let db = users_db(&engine).await;

        let mut spec = QuerySpec::table("users").filter_field("age", Operator::Gt, "10");
        spec.set = vec!["name".to_string()];
        spec.set_values = vec!["adult".to_string()];
        assert_eq!(
            db.update(spec).await.unwrap(),
            Outcome::Affected { affected: 2 }
        );

        let spec = QuerySpec::table("users").filter_field("name", Operator::Eq, "adult");
        assert_eq!(
            db.delete(spec).await.unwrap(),
            Outcome::Affected { affected: 2 }
        );

        let outcome = db.find(QuerySpec::table("users")).await.unwrap();
        assert_eq!(names(&outcome), vec!["bob"]);
    }

    #[tokio::test]
    async fn test_update_cannot_duplicate_primary_key() {
        let engine = MemoryEngine::new();
        let db = users_db(&engine).await;

        let mut spec = QuerySpec::table("users");
        spec.set = vec!["id".to_string()];
        spec.set_values = vec!["7".to_string()];
        let err = db.update(spec).await.unwrap_err();
        assert!(matches!(err, StorageError::DuplicateKey { .. }));

        let outcome = db.find(QuerySpec::table("users")).await.unwrap();
        assert_eq!(outcome.rows().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_join_project_distinct() {
        let engine = MemoryEngine::new();
        let db = users_db(&engine).await;
        db.create_table(TableSpec {
            name: "orders".to_string(),
            primary_key: Some("oid".to_string()),
            columns: vec!["user_id".to_string()],
        })
        .await
        .unwrap();
        for (oid, user) in [("10", "1"), ("11", "1"), ("12", "3")] {
            db.insert(InsertSpec {
                table: "orders".to_string(),
                columns: None,
                values: vec![oid.to_string(), user.to_string()],
            })
            .await
            .unwrap();
        }

        let mut spec = QuerySpec::table("users");
        spec.joins = vec![Join {
            kind: JoinKind::Inner,
            reference_table: "orders".to_string(),
            first_column: "users.id".to_string(),
            second_column: "orders.user_id".to_string(),
        }];
        spec.columns = Some(vec!["name".to_string()]);
        spec.distinct = true;
        let outcome = db.find(spec).await.unwrap();
        assert_eq!(names(&outcome), vec!["Ann", "Cid"]);
    }

    #[tokio::test]
    async fn test_unknown_column_and_table() {
        let engine = MemoryEngine::new();
        let db = users_db(&engine).await;

        let spec = QuerySpec::table("users").filter_field("nope", Operator::Eq, "1");
        assert!(matches!(
            db.find(spec).await.unwrap_err(),
            StorageError::ColumnNotFound { .. }
        ));
        assert!(matches!(
            db.describe_table("ghost").await.unwrap_err(),
            StorageError::TableNotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_drop_table() {
        let engine = MemoryEngine::new();
        let db = users_db(&engine).await;

        db.drop_table("users").await.unwrap();
        assert!(matches!(
            db.find(QuerySpec::table("users")).await.unwrap_err(),
            StorageError::TableNotFound(_)
        ));
        assert!(matches!(
            db.drop_table("users").await.unwrap_err(),
            StorageError::TableNotFound(_)
        ));
        match engine.describe_database(Some(&db), "shop").await.unwrap() {
            Outcome::Database(description) => assert!(description.tables.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_database_lifecycle() {
        let engine = MemoryEngine::new();
        assert!(engine.open(Scope::Data, "shop").await.unwrap().is_none());
        engine.create_database(Scope::Data, "shop").await.unwrap();
        assert!(matches!(
            engine.create_database(Scope::Data, "shop").await.unwrap_err(),
            StorageError::DatabaseExists(_)
        ));
        // Scopes are separate namespaces
        assert!(engine.open(Scope::System, "shop").await.unwrap().is_none());

        engine.drop_database(Scope::Data, "shop").await.unwrap();
        assert!(matches!(
            engine.drop_database(Scope::Data, "shop").await.unwrap_err(),
            StorageError::DatabaseNotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_snapshot_survives_engine_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let engine = MemoryEngine::persistent(dir.path());
            let db = users_db(&engine).await;
            db.save().await.unwrap();
        }
        assert!(dir.path().join("data").join("shop.json").exists());

        let engine = MemoryEngine::persistent(dir.path());
        let db = engine.open(Scope::Data, "shop").await.unwrap().unwrap();
        match db.describe_table("users").await.unwrap() {
            Outcome::Table(table) => {
                assert_eq!(table.primary_key.as_deref(), Some("id"));
                assert_eq!(table.rows, 3);
            }
            other => panic!("unexpected {:?}", other),
        }

        match engine.describe_database(None, "shop").await.unwrap() {
            Outcome::Database(description) => assert_eq!(description.tables.len(), 1),
            other => panic!("unexpected {:?}", other),
        }
    }
}
