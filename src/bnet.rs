//! Reading update clauses from the BoolNet `.bnet` format.
//!
//! Only update functions in *disjunctive normal form* are supported (e.g.
//! `v1&!v2 | !v1&v2`), since every conjunction maps directly to one `Clause`. This is
//! a syntactic reader: it does not simplify or validate the Boolean functions.

use crate::{Clause, ClauseMap, IgraphError, ID_REGEX};
use regex::Regex;

lazy_static! {
    /// A single (possibly negated) literal, optionally wrapped in parentheses.
    static ref LITERAL_REGEX: Regex = Regex::new(r"^(!?)\s*([a-zA-Z0-9_{}]+)$").unwrap();
}

/// Read the clauses of all update functions in the given `.bnet` model.
///
/// Comments, blank lines and the `targets, factors` header are skipped. Variables which
/// only appear as regulators do not get an entry in the resulting map.
pub fn clauses_from_bnet(model: &str) -> Result<ClauseMap, IgraphError> {
    let mut result = ClauseMap::new();
    for line in model.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() || line.starts_with("targets,") {
            continue;
        }

        let segments = line.split(',').collect::<Vec<_>>();
        if segments.len() != 2 {
            return Err(IgraphError::validation(format!(
                "Unexpected line: `{}`",
                line
            )));
        }

        let target = segments[0].trim();
        if !ID_REGEX.is_match(target) {
            return Err(IgraphError::validation(format!(
                "Invalid variable name `{}`.",
                target
            )));
        }
        if result.contains_key(target) {
            return Err(IgraphError::validation(format!(
                "Duplicate function declaration for `{}`.",
                target
            )));
        }

        let clauses = clauses_from_dnf(segments[1].trim())?;
        result.insert(target.to_string(), clauses);
    }
    Ok(result)
}

/// **(internal)** One literal of a conjunction.
enum Literal {
    /// `0`, `1`, `false` or `true`, possibly negated.
    Constant(bool),
    /// A regulator and the value it must have.
    Variable(String, u8),
}

/// **(internal)** Split a DNF formula into clauses.
///
/// Constant literals are resolved: a `true` literal is removed from its conjunction
/// and a conjunction with a `false` literal is dropped. Hence `1` yields a single
/// empty clause and `0` yields no clause at all.
fn clauses_from_dnf(function: &str) -> Result<Vec<Clause>, IgraphError> {
    let mut clauses = Vec::new();
    for conjunction in strip_parentheses(function).split('|') {
        let conjunction = strip_parentheses(conjunction);
        if conjunction.is_empty() {
            return Err(IgraphError::validation(format!(
                "Empty conjunction in `{}`.",
                function
            )));
        }
        let mut clause = Clause::new();
        let mut satisfiable = true;
        for literal in conjunction.split('&') {
            match parse_literal(literal, function)? {
                Literal::Constant(true) => {}
                Literal::Constant(false) => satisfiable = false,
                Literal::Variable(name, value) => match clause.insert(name, value) {
                    Some(previous) if previous != value => satisfiable = false,
                    _ => {}
                },
            }
        }
        if satisfiable {
            clauses.push(clause);
        }
    }
    Ok(clauses)
}

/// **(internal)** Parse one literal `x` or `!x`.
fn parse_literal(literal: &str, function: &str) -> Result<Literal, IgraphError> {
    let literal = strip_parentheses(literal);
    let Some(captures) = LITERAL_REGEX.captures(literal) else {
        return Err(IgraphError::validation(format!(
            "Literal `{}` in `{}` is not a variable or its negation. \
            Only DNF functions are supported.",
            literal, function
        )));
    };
    let negated = !captures[1].is_empty();
    let literal = match &captures[2] {
        "1" | "true" => Literal::Constant(!negated),
        "0" | "false" => Literal::Constant(negated),
        name => Literal::Variable(name.to_string(), if negated { 0 } else { 1 }),
    };
    Ok(literal)
}

/// **(internal)** Remove parentheses which wrap the whole `text`.
///
/// `(a) & (b)` is left unchanged, since the first parenthesis does not match the last one.
fn strip_parentheses(text: &str) -> &str {
    let mut text = text.trim();
    while text.starts_with('(') && text.ends_with(')') && wraps_whole(text) {
        text = text[1..text.len() - 1].trim();
    }
    text
}

/// **(internal)** Check that the opening parenthesis at the start of `text` is closed by
/// its last character.
fn wraps_whole(text: &str) -> bool {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == text.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}
