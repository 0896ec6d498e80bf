//! Nue statement parser using nom.
//!
//! Classifies one statement by its leading verb and parses it with that
//! verb's grammar into a typed [`Statement`].
//!
//! # Syntax Overview
//!
//! ```text
//! FIND DISTINCT name FROM users WHERE id IN (1, 2) ORDER BY name DESC LIMIT 10
//! ──┬─ ────┬─── ──┬─ ─────┬──── ─────────┬──────── ─────────┬──────── ────┬───
//!   │      │      │       │              │                  │             │
//!   │      │      │       │              │                  │             └── Limit / Offset
//!   │      │      │       │              │                  └── Sort
//!   │      │      │       │              └── Condition
//!   │      │      │       └── Table (joins follow it)
//!   │      │      └── Columns (or *)
//!   │      └── Distinct flag
//!   └── Verb
//! ```

pub mod grammar;
pub mod tokens;


use nom::combinator::all_consuming;

use crate::ast::*;
use crate::error::{NueError, NueResult};
use crate::normalize::split_outside_quotes;

/// Separator between statements of a batch.
pub const STATEMENT_SEPARATOR: char = ';';

/// Split a request body into raw statements.
///
/// Separators inside quoted literals are ignored. Empty statements are kept;
/// they fail to parse like any other malformed statement.
pub fn split_batch(body: &str) -> Vec<&str> {
    split_outside_quotes(body, STATEMENT_SEPARATOR)
}

/// Parse a single statement.
pub fn parse(input: &str) -> NueResult<Statement> {
    let input = input.trim();

    let word_end = input
        .find(|c: char| !tokens::is_identifier_char(c))
        .unwrap_or(input.len());
    let word = &input[..word_end];
    if word.is_empty() {
        return Err(NueError::syntax(0, "Empty statement"));
    }
    let Some(verb) = Verb::from_keyword(word) else {
        return Err(NueError::InvalidAction(word.to_string()));
    };

    let result = match verb {
        Verb::Init => all_consuming(grammar::init)(input),
        Verb::Create => all_consuming(grammar::create)(input),
        Verb::Insert => all_consuming(grammar::insert)(input),
        Verb::Find => all_consuming(grammar::find)(input),
        Verb::Describe => all_consuming(grammar::describe)(input),
        Verb::Show => all_consuming(grammar::show)(input),
        Verb::Drop => all_consuming(grammar::drop_element)(input),
        Verb::Delete => all_consuming(grammar::delete)(input),
        Verb::Update => all_consuming(grammar::update)(input),
    };

    match result {
        Ok((_, statement)) => Ok(statement),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let position = input.len() - e.input.len();
            Err(NueError::syntax(
                position,
                format!("Invalid {} statement near '{}'", verb, snippet(e.input)),
            ))
        }
        Err(nom::Err::Incomplete(_)) => Err(NueError::syntax(
            input.len(),
            format!("Incomplete {} statement", verb),
        )),
    }
}

fn snippet(remaining: &str) -> &str {
    if remaining.is_empty() {
        return "<end>";
    }
    match remaining.char_indices().nth(24) {
        Some((idx, _)) => &remaining[..idx],
        None => remaining,
    }
}
