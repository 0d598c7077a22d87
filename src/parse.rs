//! Reader for the plain-text graph format.
//!
//! ```text
//! A     B     C
//! 0     4     INF
//! INF   0     -2
//! 1     INF   0
//! ```
//!
//! The first non-blank line names the vertices. Every following token is one
//! entry of the weight matrix in row-major order, line breaks carry no meaning.
//! `INF` stands for "no edge".

use std::{
    io::{self, BufRead},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

use crate::graph::{Graph, GraphError, Weight, DEFAULT_CAPACITY, INF};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read graph input")]
    Io(#[from] io::Error),
    #[error("graph input has no line of vertex names")]
    MissingHeader,
    #[error("invalid weight `{token}` on line {line}")]
    InvalidWeight { line: usize, token: String },
    #[error("expected {expected} weight entries, found {found}")]
    EntryCount { expected: usize, found: usize },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// read a graph whose vertex count may not exceed `capacity`
pub fn parse_graph<R: BufRead>(reader: R, capacity: usize) -> Result<Graph, ParseError> {
    let mut names: Option<Vec<String>> = None;
    let mut entries: Vec<Weight> = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace().peekable();
        if tokens.peek().is_none() {
            continue;
        }

        if names.is_none() {
            names = Some(tokens.map(str::to_string).collect());
            continue;
        }

        for token in tokens {
            entries.push(parse_weight(token).ok_or_else(|| ParseError::InvalidWeight {
                line: line_idx + 1,
                token: token.to_string(),
            })?);
        }
    }

    let names = names.ok_or(ParseError::MissingHeader)?;
    let count = names.len();
    if count > capacity {
        return Err(GraphError::CapacityExceeded { count, capacity }.into());
    }
    if entries.len() != count * count {
        return Err(ParseError::EntryCount {
            expected: count * count,
            found: entries.len(),
        });
    }

    // the header holds at least one name, so `count` is never zero
    let rows = entries.chunks(count).collect_vec();
    Ok(Graph::with_capacity(capacity, names, rows)?)
}

pub fn parse_str(input: &str, capacity: usize) -> Result<Graph, ParseError> {
    parse_graph(input.as_bytes(), capacity)
}

fn parse_weight(token: &str) -> Option<Weight> {
    if token.eq_ignore_ascii_case("INF") {
        return Some(INF);
    }
    token.parse().ok()
}

impl FromStr for Graph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s, DEFAULT_CAPACITY)
    }
}
