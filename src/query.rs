//! Normalized requests handed to the storage layer.

use serde::{Deserialize, Serialize};

use crate::ast::{ConditionTarget, Join, Operator};

/// `CREATE TABLE` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    pub primary_key: Option<String>,
    /// Plain columns; never contains the primary key.
    pub columns: Vec<String>,
}

/// `INSERT` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertSpec {
    pub table: String,
    /// `None` inserts positionally against every column of the table.
    pub columns: Option<Vec<String>>,
    pub values: Vec<String>,
}

/// A normalized condition value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Scalar(String),
    /// Only produced for `IN` / `NOT IN`.
    List(Vec<String>),
}

/// `<target> <operator> <value>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub target: ConditionTarget,
    pub operator: Operator,
    pub value: ConditionValue,
}

impl Condition {
    /// The explicit field, or `None` when the condition targets the primary key.
    pub fn field(&self) -> Option<&str> {
        match &self.target {
            ConditionTarget::PrimaryKey => None,
            ConditionTarget::Field(name) => Some(name),
        }
    }
}

/// Request shared by `FIND`, `DELETE` and `UPDATE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub table: String,
    /// `None` means all columns.
    pub columns: Option<Vec<String>>,
    pub distinct: bool,
    pub joins: Vec<Join>,
    pub condition: Option<Condition>,
    pub order_by: Option<String>,
    pub ascending: bool,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    /// `UPDATE` only: fields to assign, parallel to `set_values`.
    pub set: Vec<String>,
    pub set_values: Vec<String>,
}

impl QuerySpec {
    /// An unfiltered query over every column of `table`.
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: None,
            distinct: false,
            joins: vec![],
            condition: None,
            order_by: None,
            ascending: true,
            limit: None,
            offset: None,
            set: vec![],
            set_values: vec![],
        }
    }

    /// Attach a condition.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Attach a `<field> <operator> <scalar>` condition.
    pub fn filter_field(
        self,
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<String>,
    ) -> Self {
        self.filter(Condition {
            target: ConditionTarget::Field(field.into()),
            operator,
            value: ConditionValue::Scalar(value.into()),
        })
    }
}
