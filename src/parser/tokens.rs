//! Token-level parsers shared by the statement grammars.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while1},
    character::complete::{char, digit1, multispace0, multispace1, satisfy},
    combinator::{map, map_res, not, value, verify},
    error::{Error, ErrorKind},
    sequence::{delimited, terminated, tuple},
    IResult,
};

use crate::ast::{ConditionTarget, ElementKind, Operator};

/// Characters allowed inside a bare word.
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Match `kw` case-insensitively as a whole word.
pub fn keyword<'a>(kw: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag_no_case(kw), not(satisfy(is_identifier_char)))
}

/// Whether `text` contains `kw` as a whole word, case-insensitively.
pub fn contains_keyword(text: &str, kw: &str) -> bool {
    text.split(|c: char| !is_identifier_char(c))
        .any(|word| word.eq_ignore_ascii_case(kw))
}

fn starts_with_keyword(text: &str, kw: &str) -> bool {
    match text.get(..kw.len()) {
        Some(head) if head.eq_ignore_ascii_case(kw) => text[kw.len()..]
            .chars()
            .next()
            .map_or(true, |c| !is_identifier_char(c)),
        _ => false,
    }
}

/// Parse an identifier (table or column name, possibly qualified like `users.id`).
pub fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| is_identifier_char(c) || c == '.')(input)
}

/// Parse an unqualified name: a table or a column.
///
/// Data statements reach tables through [`identifier`], so table names use
/// the same character set.
pub fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_identifier_char)(input)
}

/// Parse a database name. Databases may also contain `-`.
pub fn database_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| is_identifier_char(c) || c == '-')(input)
}

/// Parse the name of an element of the given kind.
pub fn element_name(kind: ElementKind) -> fn(&str) -> IResult<&str, &str> {
    match kind {
        ElementKind::Database => database_name,
        ElementKind::Table => word,
    }
}

/// Parse `DATABASE|DB` or `TABLE|TB`.
pub fn element_kind(input: &str) -> IResult<&str, ElementKind> {
    alt((
        value(
            ElementKind::Database,
            alt((keyword("DATABASE"), keyword("DB"))),
        ),
        value(ElementKind::Table, alt((keyword("TABLE"), keyword("TB")))),
    ))(input)
}

/// Parse the left side of a condition.
///
/// `PRIMARY_KEY` selects the table's primary key; a backtick-quoted name is
/// always a plain field, so `` `PRIMARY_KEY` `` names a column.
pub fn condition_target(input: &str) -> IResult<&str, ConditionTarget> {
    alt((
        value(
            ConditionTarget::PrimaryKey,
            terminated(tag("PRIMARY_KEY"), not(satisfy(is_identifier_char))),
        ),
        map(
            delimited(char('`'), take_while1(|c: char| c != '`'), char('`')),
            |s: &str| ConditionTarget::Field(s.to_string()),
        ),
        map(identifier, |s: &str| ConditionTarget::Field(s.to_string())),
    ))(input)
}

/// Parse a comparison operator.
pub fn operator(input: &str) -> IResult<&str, Operator> {
    alt((
        // Multi-word operators first
        value(
            Operator::NotIn,
            tuple((keyword("NOT"), multispace1, keyword("IN"))),
        ),
        value(
            Operator::NotLike,
            tuple((keyword("NOT"), multispace1, keyword("LIKE"))),
        ),
        value(Operator::Like, keyword("LIKE")),
        value(Operator::In, keyword("IN")),
        value(Operator::Gte, tag(">=")),
        value(Operator::Lte, tag("<=")),
        value(Operator::Ne, tag("!=")),
        value(Operator::Ne, tag("<>")),
        value(Operator::Eq, tag("=")),
        value(Operator::Gt, tag(">")),
        value(Operator::Lt, tag("<")),
    ))(input)
}

/// Parse a quoted literal, returning it with its quotes.
pub fn quoted_literal(input: &str) -> IResult<&str, &str> {
    let mut chars = input.char_indices();
    let quote = match chars.next() {
        Some((_, c)) if c == '\'' || c == '"' => c,
        _ => return Err(nom::Err::Error(Error::new(input, ErrorKind::Char))),
    };

    let mut escaped = false;
    for (idx, c) in chars {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            let end = idx + c.len_utf8();
            return Ok((&input[end..], &input[..end]));
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::Char)))
}

/// Parse a balanced parenthesized group, returning it with its parentheses.
///
/// Parentheses inside quoted literals do not count.
pub fn parenthesized(input: &str) -> IResult<&str, &str> {
    if !input.starts_with('(') {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Char)));
    }

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (idx, c) in input.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        let end = idx + 1;
                        return Ok((&input[end..], &input[..end]));
                    }
                }
                _ => {}
            },
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::Char)))
}

/// Parse a parenthesized group and return only its contents.
pub fn parenthesized_inner(input: &str) -> IResult<&str, &str> {
    map(parenthesized, |group: &str| &group[1..group.len() - 1])(input)
}

fn is_clause_keyword(word: &str) -> bool {
    ["ORDER", "LIMIT", "OFFSET", "WHERE"]
        .iter()
        .any(|kw| word.eq_ignore_ascii_case(kw))
}

/// Parse a bare (unquoted) value token.
pub fn bare_token(input: &str) -> IResult<&str, &str> {
    verify(
        take_while1(|c: char| !c.is_whitespace() && c != ';'),
        |token: &str| !is_clause_keyword(token),
    )(input)
}

/// Parse a raw condition value: a quoted literal, a parenthesized list or a bare token.
pub fn condition_value(input: &str) -> IResult<&str, &str> {
    alt((quoted_literal, parenthesized, bare_token))(input)
}

/// Parse an unsigned count (`LIMIT` / `OFFSET`).
pub fn count(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |digits: &str| digits.parse::<usize>())(input)
}

/// Take everything up to `kw` (outside quoted literals, preceded by
/// whitespace), returning the text before it with trailing whitespace trimmed.
///
/// Consumes the whole input when `kw` never appears.
pub fn take_until_keyword<'a>(
    kw: &'static str,
) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input: &'a str| {
        let mut quote: Option<char> = None;
        let mut escaped = false;
        let mut after_space = false;

        for (idx, c) in input.char_indices() {
            if let Some(q) = quote {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
            } else if c == '\'' || c == '"' {
                quote = Some(c);
            } else if after_space && starts_with_keyword(&input[idx..], kw) {
                return Ok((&input[idx..], input[..idx].trim_end()));
            }
            after_space = c.is_whitespace();
        }
        Ok(("", input))
    }
}

/// Optional whitespace around a comma.
pub fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}
