//! Per-verb statement grammars.

use nom::{
    branch::alt,
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt, recognize, rest, value, verify},
    multi::{many0, separated_list1},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

use super::tokens::*;
use crate::ast::*;

/// `INIT <database>`
pub fn init(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("INIT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, database) = database_name(input)?;

    Ok((
        input,
        Statement::Init(InitStmt {
            database: database.to_string(),
        }),
    ))
}

/// `CREATE (DATABASE|DB|TABLE|TB) <name> [(<parameters>) | <parameters>]`
pub fn create(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("CREATE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, kind) = element_kind(input)?;
    let (input, _) = multispace1(input)?;
    let (input, element) = element_name(kind)(input)?;
    let (input, parameters) = opt(alt((
        preceded(multispace0, parenthesized_inner),
        preceded(multispace1, verify(rest, |s: &str| !s.trim().is_empty())),
    )))(input)?;

    Ok((
        input,
        Statement::Create(CreateStmt {
            kind,
            name: element.to_string(),
            parameters: parameters
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        }),
    ))
}

/// `INSERT [INTO] <table> (<columns>) VALUES (<values>)`,
/// `INSERT [INTO] <table> VALUES (<values>)` or `INSERT [INTO] <table> <values>`
pub fn insert(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("INSERT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = opt(terminated(keyword("INTO"), multispace1))(input)?;
    let (input, table) = identifier(input)?;
    let (input, (columns, values)) = alt((
        map(
            tuple((
                multispace0,
                parenthesized_inner,
                multispace0,
                keyword("VALUES"),
                multispace0,
                parenthesized_inner,
            )),
            |(_, columns, _, _, _, values)| (Some(columns), InsertValues::Clause(values.to_string())),
        ),
        map(
            preceded(
                tuple((multispace1, keyword("VALUES"), multispace0)),
                parenthesized_inner,
            ),
            |values: &str| (None, InsertValues::Clause(values.to_string())),
        ),
        map(
            preceded(multispace1, verify(rest, |s: &str| !s.trim().is_empty())),
            |values: &str| (None, InsertValues::Bare(values.trim().to_string())),
        ),
    ))(input)?;

    Ok((
        input,
        Statement::Insert(InsertStmt {
            table: table.to_string(),
            columns: columns.map(|c: &str| c.trim().to_string()),
            values,
        }),
    ))
}

/// `*` or a comma-separated column list.
fn column_list(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(char('*')),
        recognize(separated_list1(comma, identifier)),
    ))(input)
}

/// `[INNER|LEFT|RIGHT] JOIN <table> ON <a> = <b>`
fn join(input: &str) -> IResult<&str, Join> {
    let (input, kind) = opt(terminated(
        alt((
            value(JoinKind::Inner, keyword("INNER")),
            value(JoinKind::Left, keyword("LEFT")),
            value(JoinKind::Right, keyword("RIGHT")),
        )),
        multispace1,
    ))(input)?;
    let (input, _) = keyword("JOIN")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, reference_table) = identifier(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = keyword("ON")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, first_column) = identifier(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('=')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, second_column) = identifier(input)?;

    Ok((
        input,
        Join {
            kind: kind.unwrap_or_default(),
            reference_table: reference_table.to_string(),
            first_column: first_column.to_string(),
            second_column: second_column.to_string(),
        },
    ))
}

/// `WHERE <field> <operator> [<value>]`
pub fn where_clause(input: &str) -> IResult<&str, WhereClause> {
    let (input, _) = keyword("WHERE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, target) = condition_target(input)?;
    let (input, _) = multispace0(input)?;
    let (input, operator) = operator(input)?;
    let (input, value) = opt(preceded(multispace0, condition_value))(input)?;

    Ok((
        input,
        WhereClause {
            target,
            operator,
            value: value.map(str::to_string),
        },
    ))
}

/// `ORDER BY <field> [ASC|DESC]`
fn order_by(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    let (input, _) = tuple((keyword("ORDER"), multispace1, keyword("BY"), multispace1))(input)?;
    pair(
        identifier,
        opt(preceded(
            multispace1,
            alt((keyword("ASC"), keyword("DESC"))),
        )),
    )(input)
}

/// `FIND [DISTINCT] <columns> FROM <table> [joins] [WHERE] [ORDER BY] [LIMIT] [OFFSET]`
pub fn find(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("FIND")(input)?;
    let (input, distinct) = opt(preceded(multispace1, keyword("DISTINCT")))(input)?;
    let (input, _) = multispace1(input)?;
    let (input, columns) = column_list(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = keyword("FROM")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, table) = identifier(input)?;
    let (input, joins) = many0(preceded(multispace1, join))(input)?;
    let (input, filter) = opt(preceded(multispace1, where_clause))(input)?;
    let (input, order) = opt(preceded(multispace1, order_by))(input)?;
    let (input, limit) = opt(preceded(
        tuple((multispace1, keyword("LIMIT"), multispace1)),
        count,
    ))(input)?;
    let (input, offset) = opt(preceded(
        tuple((multispace1, keyword("OFFSET"), multispace1)),
        count,
    ))(input)?;

    let (order_by, direction) = match order {
        Some((field, direction)) => (Some(field.to_string()), direction.map(str::to_string)),
        None => (None, None),
    };

    Ok((
        input,
        Statement::Find(FindStmt {
            distinct: distinct.is_some(),
            columns: columns.to_string(),
            table: table.to_string(),
            joins,
            filter,
            order_by,
            direction,
            limit,
            offset,
        }),
    ))
}

/// `(DATABASE|DB|TABLE|TB) [<name>]`, shared by `DESCRIBE`, `LS` and `DROP`.
fn target(input: &str) -> IResult<&str, TargetStmt> {
    let (input, kind) = element_kind(input)?;
    let (input, element) = opt(preceded(multispace1, element_name(kind)))(input)?;

    Ok((
        input,
        TargetStmt {
            kind,
            name: element.map(str::to_string),
        },
    ))
}

/// `DESCRIBE|LS (DATABASE|DB|TABLE|TB) [<name>]`
pub fn describe(input: &str) -> IResult<&str, Statement> {
    let (input, _) = alt((keyword("DESCRIBE"), keyword("LS")))(input)?;
    let (input, _) = multispace1(input)?;
    map(target, Statement::Describe)(input)
}

/// `DROP (DATABASE|DB|TABLE|TB) [<name>]`
pub fn drop_element(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("DROP")(input)?;
    let (input, _) = multispace1(input)?;
    map(target, Statement::Drop)(input)
}

/// `SHOW [DATABASES|DBS] [LIKE <pattern>]`
pub fn show(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("SHOW")(input)?;
    let (input, _) = opt(preceded(
        multispace1,
        alt((keyword("DATABASES"), keyword("DBS"))),
    ))(input)?;
    let (input, pattern) = opt(preceded(
        tuple((multispace1, keyword("LIKE"), multispace1)),
        condition_value,
    ))(input)?;

    Ok((
        input,
        Statement::Show(ShowStmt {
            pattern: pattern.map(str::to_string),
        }),
    ))
}

/// `DELETE [FROM] <table> [WHERE ...]`
pub fn delete(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("DELETE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = opt(terminated(keyword("FROM"), multispace1))(input)?;
    let (input, table) = identifier(input)?;
    let (input, filter) = opt(preceded(multispace1, where_clause))(input)?;

    Ok((
        input,
        Statement::Delete(DeleteStmt {
            table: table.to_string(),
            filter,
        }),
    ))
}

/// `UPDATE <table> SET <assignments> [WHERE ...]`
pub fn update(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("UPDATE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, table) = identifier(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = keyword("SET")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, set_clause) =
        verify(take_until_keyword("WHERE"), |s: &str| !s.is_empty())(input)?;
    let (input, filter) = opt(where_clause)(input)?;

    Ok((
        input,
        Statement::Update(UpdateStmt {
            table: table.to_string(),
            set_clause: set_clause.to_string(),
            filter,
        }),
    ))
}
