//! Verb dispatch.
//!
//! The extraction functions turn a parsed [`Statement`] into the validated
//! request objects of [`crate::query`]; [`Session::dispatch`] runs them
//! against the session's databases.

use nom::{
    bytes::complete::tag_no_case,
    character::complete::{multispace0, multispace1},
    combinator::all_consuming,
    sequence::{delimited, terminated, tuple},
    IResult,
};
use tracing::{debug, info};

use crate::ast::*;
use crate::error::{NueError, NueResult};
use crate::normalize::{clean, parse_assignments, parse_value_list, split_columns, split_values};
use crate::parser::tokens::{contains_keyword, keyword, word};
use crate::query::{Condition, ConditionValue, InsertSpec, QuerySpec, TableSpec};
use crate::session::Session;
use crate::storage::{
    Database, Outcome, Scope, StorageEngine, CATALOG_KEY, CATALOG_TABLE,
};

/// `<column> as primary_key`
fn primary_key_entry(input: &str) -> IResult<&str, &str> {
    delimited(
        multispace0,
        terminated(
            word,
            tuple((
                multispace1,
                keyword("AS"),
                multispace1,
                tag_no_case("PRIMARY_KEY"),
            )),
        ),
        multispace0,
    )(input)
}

/// Build a [`TableSpec`] from a `CREATE TABLE` parameter list.
pub fn table_spec(name: &str, parameters: &str) -> NueResult<TableSpec> {
    let mut primary_key = None;
    let mut columns = Vec::new();

    for entry in split_columns(parameters) {
        if let Ok((_, key)) = all_consuming(primary_key_entry)(entry.as_str()) {
            if primary_key.is_some() {
                return Err(NueError::MultiplePrimaryKeys);
            }
            primary_key = Some(key.to_string());
        } else {
            let column = clean(&entry);
            if !column.is_empty() {
                columns.push(column);
            }
        }
    }

    Ok(TableSpec {
        name: name.to_string(),
        primary_key,
        columns,
    })
}

/// Build an [`InsertSpec`].
pub fn insert_spec(stmt: &InsertStmt) -> NueResult<InsertSpec> {
    let values = match &stmt.values {
        InsertValues::Bare(text) if contains_keyword(text, "VALUES") => {
            return Err(NueError::MissingValuesClause);
        }
        InsertValues::Bare(text) => split_values(text),
        InsertValues::Clause(text) => {
            let values = split_values(text);
            if values.is_empty() {
                return Err(NueError::MissingValuesClause);
            }
            values
        }
    };

    let columns = stmt.columns.as_deref().map(|raw| {
        split_columns(raw)
            .iter()
            .map(|c| clean(c))
            .filter(|c| !c.is_empty())
            .collect()
    });

    Ok(InsertSpec {
        table: stmt.table.clone(),
        columns,
        values,
    })
}

/// Normalize a `WHERE` clause. A clause without a value is rejected.
pub fn condition(clause: &WhereClause) -> NueResult<Condition> {
    let raw = clause.value.as_deref().ok_or(NueError::MissingCondition)?;
    let value = if clause.operator.takes_list() {
        ConditionValue::List(parse_value_list(raw))
    } else {
        ConditionValue::Scalar(clean(raw))
    };

    Ok(Condition {
        target: clause.target.clone(),
        operator: clause.operator,
        value,
    })
}

/// Build the [`QuerySpec`] of a `FIND`.
pub fn find_spec(stmt: &FindStmt) -> NueResult<QuerySpec> {
    let mut spec = QuerySpec::table(&stmt.table);
    if stmt.columns.trim() != "*" {
        spec.columns = Some(split_columns(&stmt.columns));
    }
    spec.distinct = stmt.distinct;
    spec.joins = stmt.joins.clone();
    spec.condition = stmt.filter.as_ref().map(condition).transpose()?;
    spec.order_by = stmt.order_by.clone();
    spec.ascending = !stmt
        .direction
        .as_deref()
        .is_some_and(|d| d.eq_ignore_ascii_case("DESC"));
    spec.limit = stmt.limit;
    spec.offset = stmt.offset;
    Ok(spec)
}

/// Build the [`QuerySpec`] of a `DELETE`; a condition is mandatory.
pub fn delete_spec(stmt: &DeleteStmt) -> NueResult<QuerySpec> {
    let clause = stmt.filter.as_ref().ok_or(NueError::MissingCondition)?;
    Ok(QuerySpec::table(&stmt.table).filter(condition(clause)?))
}

/// Build the [`QuerySpec`] of an `UPDATE`; a condition is mandatory.
pub fn update_spec(stmt: &UpdateStmt) -> NueResult<QuerySpec> {
    let (set, set_values) = parse_assignments(&stmt.set_clause)?;
    let clause = stmt.filter.as_ref().ok_or(NueError::MissingCondition)?;

    let mut spec = QuerySpec::table(&stmt.table).filter(condition(clause)?);
    spec.set = set;
    spec.set_values = set_values;
    Ok(spec)
}

impl<E: StorageEngine> Session<E> {
    fn require_active(&self) -> NueResult<&E::Db> {
        self.active.as_ref().ok_or(NueError::NoActiveDatabase)
    }

    /// Execute one parsed statement.
    pub async fn dispatch(&mut self, statement: Statement) -> NueResult<Outcome> {
        debug!("Dispatching {} statement", statement.verb());

        match statement {
            Statement::Init(stmt) => self.init(&stmt.database).await,

            Statement::Create(CreateStmt {
                kind: ElementKind::Database,
                name,
                parameters,
            }) => {
                if parameters.is_some() {
                    return Err(NueError::UnexpectedParameters("CREATE DATABASE"));
                }
                self.catalog()
                    .await?
                    .insert(InsertSpec {
                        table: CATALOG_TABLE.to_string(),
                        columns: Some(vec![CATALOG_KEY.to_string()]),
                        values: vec![name.clone()],
                    })
                    .await?;
                let outcome = self.engine.create_database(Scope::Data, &name).await?;
                info!("Created database {}", name);
                Ok(outcome)
            }

            Statement::Create(CreateStmt {
                kind: ElementKind::Table,
                name,
                parameters,
            }) => {
                let db = self.require_active()?;
                let parameters = parameters.ok_or(NueError::MissingParameters(
                    "No parameters specified for create table command.",
                ))?;
                let spec = table_spec(&name, &parameters)?;
                Ok(db.create_table(spec).await?)
            }

            Statement::Insert(stmt) => {
                let db = self.require_active()?;
                Ok(db.insert(insert_spec(&stmt)?).await?)
            }

            Statement::Find(stmt) => {
                let db = self.require_active()?;
                Ok(db.find(find_spec(&stmt)?).await?)
            }

            Statement::Describe(TargetStmt { kind, name }) => {
                let name = name.ok_or(NueError::MissingParameters(
                    "No parameter specified for describe command.",
                ))?;
                match kind {
                    ElementKind::Table => Ok(self.require_active()?.describe_table(&name).await?),
                    ElementKind::Database => Ok(self
                        .engine
                        .describe_database(self.active.as_ref(), &name)
                        .await?),
                }
            }

            Statement::Show(ShowStmt { pattern }) => {
                let mut spec = QuerySpec::table(CATALOG_TABLE);
                if let Some(pattern) = pattern {
                    spec = spec.filter_field(CATALOG_KEY, Operator::Like, clean(&pattern));
                }
                Ok(self.catalog().await?.find(spec).await?)
            }

            Statement::Drop(TargetStmt {
                kind: ElementKind::Database,
                name,
            }) => {
                let name = name.ok_or(NueError::MissingParameters(
                    "No database specified for drop command.",
                ))?;
                self.drop_database(&name).await
            }

            Statement::Drop(TargetStmt {
                kind: ElementKind::Table,
                name,
            }) => {
                let db = self.require_active()?;
                let name = name.ok_or(NueError::MissingParameters(
                    "No table specified for drop command.",
                ))?;
                Ok(db.drop_table(&name).await?)
            }

            Statement::Delete(stmt) => {
                let db = self.require_active()?;
                Ok(db.delete(delete_spec(&stmt)?).await?)
            }

            Statement::Update(stmt) => {
                let db = self.require_active()?;
                Ok(db.update(update_spec(&stmt)?).await?)
            }
        }
    }

    /// Select `database`. On failure the previous selection is kept.
    async fn init(&mut self, database: &str) -> NueResult<Outcome> {
        if let Some(active) = &self.active {
            active.save().await?;
        }
        let db = self
            .engine
            .open(Scope::Data, database)
            .await?
            .ok_or_else(|| NueError::DatabaseNotFound(database.to_string()))?;
        self.active = Some(db);
        info!("Using database {}", database);
        Ok(Outcome::message(format!("Using database: {}", database)))
    }

    async fn drop_database(&mut self, database: &str) -> NueResult<Outcome> {
        self.catalog()
            .await?
            .delete(QuerySpec::table(CATALOG_TABLE).filter_field(
                CATALOG_KEY,
                Operator::Eq,
                database,
            ))
            .await?;
        let outcome = self.engine.drop_database(Scope::Data, database).await?;

        if self.active.as_ref().is_some_and(|db| db.name() == database) {
            self.active = None;
        }
        info!("Dropped database {}", database);
        Ok(outcome)
    }
}
