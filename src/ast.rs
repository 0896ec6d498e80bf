//! Abstract Syntax Tree for Nue statements.
//!
//! The parser produces one [`Statement`] per statement string. Each variant
//! carries the captures of its verb's grammar, still un-normalized: list
//! and value texts are kept raw so the dispatcher can apply the value rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The leading keyword of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verb {
    Init,
    Create,
    Insert,
    Find,
    Describe,
    Show,
    Drop,
    Delete,
    Update,
}

impl Verb {
    /// Resolve a keyword, case-insensitively. `LS` is an alias of `DESCRIBE`.
    pub fn from_keyword(word: &str) -> Option<Self> {
        let verb = match word.to_ascii_uppercase().as_str() {
            "INIT" => Verb::Init,
            "CREATE" => Verb::Create,
            "INSERT" => Verb::Insert,
            "FIND" => Verb::Find,
            "DESCRIBE" | "LS" => Verb::Describe,
            "SHOW" => Verb::Show,
            "DROP" => Verb::Drop,
            "DELETE" => Verb::Delete,
            "UPDATE" => Verb::Update,
            _ => return None,
        };
        Some(verb)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Verb::Init => "INIT",
            Verb::Create => "CREATE",
            Verb::Insert => "INSERT",
            Verb::Find => "FIND",
            Verb::Describe => "DESCRIBE",
            Verb::Show => "SHOW",
            Verb::Drop => "DROP",
            Verb::Delete => "DELETE",
            Verb::Update => "UPDATE",
        };
        write!(f, "{}", keyword)
    }
}

/// What a `CREATE`, `DESCRIBE` or `DROP` statement targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// `DATABASE` or `DB`
    Database,
    /// `TABLE` or `TB`
    Table,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Database => write!(f, "DATABASE"),
            ElementKind::Table => write!(f, "TABLE"),
        }
    }
}

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Init(InitStmt),
    Create(CreateStmt),
    Insert(InsertStmt),
    Find(FindStmt),
    /// `DESCRIBE` and its `LS` alias.
    Describe(TargetStmt),
    Show(ShowStmt),
    Drop(TargetStmt),
    Delete(DeleteStmt),
    Update(UpdateStmt),
}

impl Statement {
    /// The verb this statement was classified as.
    pub fn verb(&self) -> Verb {
        match self {
            Statement::Init(_) => Verb::Init,
            Statement::Create(_) => Verb::Create,
            Statement::Insert(_) => Verb::Insert,
            Statement::Find(_) => Verb::Find,
            Statement::Describe(_) => Verb::Describe,
            Statement::Show(_) => Verb::Show,
            Statement::Drop(_) => Verb::Drop,
            Statement::Delete(_) => Verb::Delete,
            Statement::Update(_) => Verb::Update,
        }
    }
}

/// `INIT <database>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitStmt {
    pub database: String,
}

/// `CREATE (DATABASE|TABLE) <name> [(<parameters>)]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStmt {
    pub kind: ElementKind,
    pub name: String,
    /// Raw parameter list with surrounding parentheses removed.
    pub parameters: Option<String>,
}

/// `INSERT [INTO] <table> ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStmt {
    pub table: String,
    /// Raw column list; `None` for a positional insert.
    pub columns: Option<String>,
    pub values: InsertValues,
}

/// The value part of an `INSERT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InsertValues {
    /// Contents of a matched `VALUES (...)` clause.
    Clause(String),
    /// Positional text following the table name.
    Bare(String),
}

/// `FIND [DISTINCT] <columns> FROM <table> ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindStmt {
    pub distinct: bool,
    /// `*` or the raw comma-separated column list.
    pub columns: String,
    pub table: String,
    pub joins: Vec<Join>,
    pub filter: Option<WhereClause>,
    pub order_by: Option<String>,
    /// Raw direction keyword (`ASC`/`DESC`) if one was given.
    pub direction: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// `DESCRIBE|LS|DROP (DATABASE|TABLE) [<name>]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetStmt {
    pub kind: ElementKind,
    pub name: Option<String>,
}

/// `SHOW [DATABASES] [LIKE <pattern>]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowStmt {
    /// Raw pattern text.
    pub pattern: Option<String>,
}

/// `DELETE [FROM] <table> [WHERE ...]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteStmt {
    pub table: String,
    pub filter: Option<WhereClause>,
}

/// `UPDATE <table> SET <assignments> [WHERE ...]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStmt {
    pub table: String,
    /// Raw assignment list.
    pub set_clause: String,
    pub filter: Option<WhereClause>,
}

/// `WHERE <field> <operator> [<value>]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhereClause {
    pub target: ConditionTarget,
    pub operator: Operator,
    /// Raw value text: a quoted literal, a parenthesized list or a bare token.
    pub value: Option<String>,
}

/// The left side of a condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionTarget {
    /// The `PRIMARY_KEY` keyword: whatever the table's primary key is.
    PrimaryKey,
    /// A named column.
    Field(String),
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// `=`
    Eq,
    /// `!=` or `<>`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
    /// `IN`
    In,
    /// `NOT IN`
    NotIn,
}

impl Operator {
    /// Whether the operator takes a parenthesized value list.
    pub fn takes_list(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
        };
        write!(f, "{}", token)
    }
}

/// Join kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
}

/// An equality join: `JOIN <reference_table> ON <first_column> = <second_column>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Join {
    #[serde(default)]
    pub kind: JoinKind,
    pub reference_table: String,
    pub first_column: String,
    pub second_column: String,
}
