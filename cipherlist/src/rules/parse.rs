use alloc::string::ToString;
use alloc::vec::Vec;

use super::filter::{self, Filter};
use super::DEFAULT_RULE;
use crate::error::RuleError;

/// What a clause does with the suites its filters match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    /// Select matching suites that are not yet selected, appending them.
    Add,
    /// Keep only the selected suites that match, deselecting the rest.
    /// (`+`)
    Order,
    /// Deselect matching suites.  They may be selected again later.  (`-`)
    Delete,
    /// Remove matching suites for good.  (`!`)
    Kill,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Clause {
    Select { op: Op, filters: Vec<Filter> },
    /// `@STRENGTH`
    SortByStrength,
}

fn is_separator(c: char) -> bool {
    matches!(c, ':' | ',' | ';' | ' ')
}

/// Split a rule string into clauses.
///
/// Nothing is evaluated here; a clause that cannot be understood fails
/// the whole string.
pub(crate) fn parse(rule: &str) -> Result<Vec<Clause>, RuleError> {
    let mut clauses = Vec::new();

    for (idx, token) in rule
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .enumerate()
    {
        if token == "DEFAULT" {
            if idx != 0 {
                return Err(RuleError::MisplacedDefault);
            }
            clauses.extend(parse(DEFAULT_RULE)?);
            continue;
        }

        clauses.push(parse_clause(token)?);
    }

    Ok(clauses)
}

fn parse_clause(token: &str) -> Result<Clause, RuleError> {
    if let Some(command) = token.strip_prefix('@') {
        return match command {
            "STRENGTH" => Ok(Clause::SortByStrength),
            _ => Err(RuleError::UnknownCommand(token.to_string())),
        };
    }

    let (op, rest) = match token.as_bytes()[0] {
        b'!' => (Op::Kill, &token[1..]),
        b'-' => (Op::Delete, &token[1..]),
        b'+' => (Op::Order, &token[1..]),
        _ => (Op::Add, token),
    };

    let mut filters = Vec::new();
    for word in rest.split('+') {
        match word {
            "" => return Err(RuleError::MissingKeyword),
            "DEFAULT" => return Err(RuleError::MisplacedDefault),
            _ => {}
        }

        if let Some(alias) = filter::alias(word) {
            filters.extend_from_slice(alias);
        } else if let Some(suite) = crate::registry::by_name(word) {
            filters.push(Filter::Suite(suite.suite));
        } else {
            return Err(RuleError::UnknownKeyword(word.to_string()));
        }
    }

    Ok(Clause::Select { op, filters })
}
