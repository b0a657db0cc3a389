//! Leaf condition matching

use crate::error::{EngineError, Result};
use crate::record::{AttrValue, Record};
use crate::rule::evaluator::Evaluation;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

/// Shape of a leaf condition: identifier, run of comparison characters,
/// remainder. Unanchored, like the rest of the grammar.
static CONDITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*([<>=]+)\s*(.+)").expect("condition pattern is valid"));

/// Comparison operators supported in leaf conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    /// Greater than (>)
    Greater,
    /// Less than (<)
    Less,
    /// Loose equality (=)
    Equal,
}

impl Comparison {
    /// Resolve an operator token. The pattern captures runs of comparison
    /// characters greedily, so `==` or `>=` arrive here as single tokens
    /// and are rejected as unsupported.
    fn from_token(token: &str) -> Result<Comparison> {
        match token {
            ">" => Ok(Comparison::Greater),
            "<" => Ok(Comparison::Less),
            "=" => Ok(Comparison::Equal),
            _ => Err(EngineError::UnsupportedOperator),
        }
    }
}

/// Evaluate a single leaf condition against a record.
///
/// Never fails: a condition that cannot be matched degrades to a false
/// result whose reason is the error's display text.
pub(crate) fn match_condition(condition: &str, record: &Record) -> Evaluation {
    match check_condition(condition, record) {
        Ok(reasons) if reasons.is_empty() => Evaluation::pass(),
        Ok(reasons) => Evaluation::fail(reasons),
        Err(err) => Evaluation::fail(vec![err.to_string()]),
    }
}

fn check_condition(condition: &str, record: &Record) -> Result<Vec<String>> {
    let caps = CONDITION_RE
        .captures(condition)
        .ok_or(EngineError::InvalidCondition)?;

    let attr = caps[1].trim().to_string();
    let comparison = Comparison::from_token(caps[2].trim())?;
    // Literal text keeps no quote characters at all, wherever they sit.
    let raw = caps[3].trim().replace('\'', "");

    let attr_value = record.get(&attr);
    let literal = typed_literal(&raw);

    let mut reasons = Vec::new();
    match comparison {
        Comparison::Greater => {
            if ordering(attr_value, &literal) != Some(Ordering::Greater) {
                reasons.push(format!(
                    "{} is not greater than {}.",
                    display_attr(attr_value),
                    literal
                ));
            }
        }
        Comparison::Less => {
            if ordering(attr_value, &literal) != Some(Ordering::Less) {
                reasons.push(format!(
                    "{} is not less than {}.",
                    display_attr(attr_value),
                    literal
                ));
            }
        }
        Comparison::Equal => {
            // Equality deliberately tests against the literal's string
            // form, not the numeric form the ordered comparisons use.
            if !loosely_equal(attr_value, &raw) {
                reasons.push(format!(
                    "{} is not equal to {}.",
                    display_attr(attr_value),
                    raw
                ));
            }
        }
    }

    Ok(reasons)
}

/// Type the literal: a finite decimal number if it reads as one,
/// otherwise text.
fn typed_literal(raw: &str) -> AttrValue {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => AttrValue::Number(n),
        _ => AttrValue::Text(raw.to_string()),
    }
}

/// Relative order of an attribute value and a literal, if they have one.
///
/// A missing attribute orders against nothing, so both `>` and `<` fail
/// for it. Text coerces to a number when the other side is numeric;
/// text that does not read as a number has no order against a number.
fn ordering(attr: Option<&AttrValue>, literal: &AttrValue) -> Option<Ordering> {
    let attr = attr?;
    match (attr, literal) {
        (AttrValue::Text(a), AttrValue::Text(b)) => Some(a.as_str().cmp(b.as_str())),
        (_, AttrValue::Number(b)) => attr.as_number()?.partial_cmp(b),
        (AttrValue::Number(_), AttrValue::Text(b)) => {
            let b = b.trim().parse::<f64>().ok().filter(|n| n.is_finite())?;
            attr.as_number()?.partial_cmp(&b)
        }
    }
}

/// Loose equality against the literal's string form: text compares
/// verbatim, numbers compare against the string parsed as a number.
/// Missing attributes equal nothing.
fn loosely_equal(attr: Option<&AttrValue>, raw: &str) -> bool {
    match attr {
        None => false,
        Some(AttrValue::Text(a)) => a == raw,
        Some(AttrValue::Number(a)) => match raw.parse::<f64>() {
            Ok(n) => *a == n,
            Err(_) => false,
        },
    }
}

/// Reason-string rendering of an attribute lookup; absent attributes
/// surface as `undefined`.
fn display_attr(attr: Option<&AttrValue>) -> String {
    match attr {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    }
}
