//! Row-level evaluation for the memory engine: column resolution,
//! predicates, ordering and joins.

use regex::Regex;
use std::borrow::Cow;
use std::cmp::Ordering;

use super::{Row, StorageError, StorageResult};
use crate::ast::{Join, JoinKind, Operator};
use crate::query::ConditionValue;

/// Resolve a column reference against the keys of a row set.
///
/// Tries the exact key, then strips a `<base>.` qualifier, then looks for a
/// single joined column (`<table>.<name>`) with that name.
pub fn resolve_column(keys: &[String], base: &str, name: &str) -> Option<String> {
    if keys.iter().any(|k| k == name) {
        return Some(name.to_string());
    }
    if let Some(bare) = name
        .strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('.'))
    {
        if keys.iter().any(|k| k == bare) {
            return Some(bare.to_string());
        }
    }
    let suffix = format!(".{}", name);
    let mut matches = keys.iter().filter(|k| k.ends_with(&suffix));
    match (matches.next(), matches.next()) {
        (Some(key), None) => Some(key.clone()),
        _ => None,
    }
}

/// A value is numeric when it parses to a finite number. `NaN` and `inf` stay text.
fn numeric(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Compare two values numerically when both are numeric, else as text.
pub fn compare_values(left: &str, right: &str) -> Ordering {
    match (numeric(left), numeric(right)) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or_else(|| left.cmp(right)),
        _ => left.cmp(right),
    }
}

/// Equality under [`compare_values`]: `1`, `01` and `1.0` are the same value.
pub fn values_equal(left: &str, right: &str) -> bool {
    compare_values(left, right) == Ordering::Equal
}

/// A key that is identical for two values exactly when [`values_equal`] holds.
pub fn canonical(value: &str) -> Cow<'_, str> {
    match numeric(value) {
        Some(n) if n == 0.0 => Cow::Borrowed("0"),
        Some(n) => Cow::Owned(n.to_string()),
        None => Cow::Borrowed(value),
    }
}

/// Nulls sort first.
pub fn compare_cells(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) => compare_values(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// Compile a SQL `LIKE` pattern (`%`, `_`) into a case-insensitive regex.
pub fn like_regex(pattern: &str) -> StorageResult<Regex> {
    let mut re = String::from("(?is)^");
    for c in pattern.chars() {
        match c {
            '%' => re.push_str(".*"),
            '_' => re.push('.'),
            other => re.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    re.push('$');
    Ok(Regex::new(&re)?)
}

enum Test {
    Compare(Operator, String),
    Like(Regex, bool),
    Members(Vec<String>, bool),
}

/// A compiled `<column> <operator> <value>` test.
pub struct Predicate {
    column: String,
    test: Test,
}

impl Predicate {
    /// Compile a condition on an already resolved column key.
    pub fn compile(
        column: String,
        operator: Operator,
        value: &ConditionValue,
    ) -> StorageResult<Self> {
        let test = match (operator, value) {
            (Operator::In | Operator::NotIn, ConditionValue::List(items)) => {
                Test::Members(items.clone(), operator == Operator::NotIn)
            }
            (Operator::In | Operator::NotIn, ConditionValue::Scalar(_)) => {
                return Err(StorageError::InvalidCondition {
                    operator: operator.to_string(),
                    expected: "a list of values",
                });
            }
            (_, ConditionValue::List(_)) => {
                return Err(StorageError::InvalidCondition {
                    operator: operator.to_string(),
                    expected: "a single value",
                });
            }
            (Operator::Like | Operator::NotLike, ConditionValue::Scalar(pattern)) => {
                Test::Like(like_regex(pattern)?, operator == Operator::NotLike)
            }
            (_, ConditionValue::Scalar(expected)) => Test::Compare(operator, expected.clone()),
        };
        Ok(Self { column, test })
    }

    /// Null cells never match.
    pub fn matches(&self, row: &Row) -> bool {
        let Some(Some(cell)) = row.get(&self.column) else {
            return false;
        };
        match &self.test {
            Test::Compare(operator, expected) => {
                let ordering = compare_values(cell, expected);
                match operator {
                    Operator::Eq => ordering == Ordering::Equal,
                    Operator::Ne => ordering != Ordering::Equal,
                    Operator::Lt => ordering == Ordering::Less,
                    Operator::Lte => ordering != Ordering::Greater,
                    Operator::Gt => ordering == Ordering::Greater,
                    Operator::Gte => ordering != Ordering::Less,
                    // Compiled into the other variants
                    Operator::Like | Operator::NotLike | Operator::In | Operator::NotIn => false,
                }
            }
            Test::Like(regex, negated) => regex.is_match(cell) != *negated,
            Test::Members(items, negated) => {
                let found = items
                    .iter()
                    .any(|item| values_equal(cell, item));
                found != *negated
            }
        }
    }
}

fn qualify(table: &str, row: &Row) -> Row {
    row.iter()
        .map(|(column, value)| (format!("{}.{}", table, column), value.clone()))
        .collect()
}

fn nulls(keys: &[String]) -> Row {
    keys.iter().map(|k| (k.clone(), None)).collect()
}

/// Join `left` (with column keys `left_keys`) against the rows of `join.reference_table`.
///
/// Joined columns are keyed `<reference_table>.<column>`. Returns the joined
/// rows and the new key set.
pub fn join_rows(
    left: Vec<Row>,
    left_keys: Vec<String>,
    base: &str,
    join: &Join,
    right_columns: &[String],
    right: &[Row],
) -> StorageResult<(Vec<Row>, Vec<String>)> {
    let right_keys: Vec<String> = right_columns
        .iter()
        .map(|c| format!("{}.{}", join.reference_table, c))
        .collect();
    let mut keys = left_keys.clone();
    keys.extend(right_keys.iter().cloned());

    let resolve = |name: &str| {
        resolve_column(&keys, base, name).ok_or_else(|| StorageError::ColumnNotFound {
            table: join.reference_table.clone(),
            column: name.to_string(),
        })
    };
    let first = resolve(&join.first_column)?;
    let second = resolve(&join.second_column)?;

    let right: Vec<Row> = right
        .iter()
        .map(|row| qualify(&join.reference_table, row))
        .collect();
    let mut right_matched = vec![false; right.len()];
    let mut joined = Vec::new();

    for left_row in &left {
        let mut matched = false;
        for (idx, right_row) in right.iter().enumerate() {
            let mut merged = left_row.clone();
            merged.extend(right_row.clone());
            let equal = match (merged.get(&first), merged.get(&second)) {
                (Some(Some(a)), Some(Some(b))) => values_equal(a, b),
                _ => false,
            };
            if equal {
                matched = true;
                right_matched[idx] = true;
                joined.push(merged);
            }
        }
        if !matched && join.kind == JoinKind::Left {
            let mut merged = left_row.clone();
            merged.extend(nulls(&right_keys));
            joined.push(merged);
        }
    }

    if join.kind == JoinKind::Right {
        for (right_row, matched) in right.iter().zip(right_matched) {
            if !matched {
                let mut merged = nulls(&left_keys);
                merged.extend(right_row.clone());
                joined.push(merged);
            }
        }
    }

    Ok((joined, keys))
}
