//! Rule evaluator

use crate::record::Record;
use crate::rule::ast::AstNode;
use crate::rule::matcher::match_condition;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating a rule tree: the boolean verdict plus ordered,
/// human-readable reasons for failure. A passing evaluation normally
/// carries no reasons; a passing OR carries the single synthetic reason
/// noting that one branch held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub result: bool,
    pub reasons: Vec<String>,
}

impl Evaluation {
    /// A passing evaluation with no reasons.
    pub fn pass() -> Evaluation {
        Evaluation {
            result: true,
            reasons: Vec::new(),
        }
    }

    /// A failing evaluation carrying the given reasons.
    pub fn fail(reasons: Vec<String>) -> Evaluation {
        Evaluation {
            result: false,
            reasons,
        }
    }
}

/// Evaluate a rule tree (or its absence) against a record.
///
/// Both children of a connective are always evaluated; there is no
/// short-circuit. The reason algebra is part of the engine's contract:
///
/// - AND with a false left: false, left's reasons then right's, even
///   when the right side passed;
/// - AND with a true left: the right child's evaluation verbatim;
/// - OR with any true side: true, with only `"One of the conditions is
///   true."` (per-branch detail is dropped);
/// - OR with both sides false: false, left's reasons then right's.
pub fn evaluate(ast: Option<&AstNode>, record: &Record) -> Evaluation {
    let Some(node) = ast else {
        return Evaluation::fail(vec!["No rule to evaluate.".to_string()]);
    };
    evaluate_node(node, record)
}

fn evaluate_node(node: &AstNode, record: &Record) -> Evaluation {
    match node {
        AstNode::Operand(condition) => match_condition(condition, record),
        AstNode::And(left, right) => {
            let left = evaluate_node(left, record);
            let right = evaluate_node(right, record);
            if !left.result {
                return Evaluation::fail(merge_reasons(left.reasons, right.reasons));
            }
            right
        }
        AstNode::Or(left, right) => {
            let left = evaluate_node(left, record);
            let right = evaluate_node(right, record);
            if left.result || right.result {
                return Evaluation {
                    result: true,
                    reasons: vec!["One of the conditions is true.".to_string()],
                };
            }
            Evaluation::fail(merge_reasons(left.reasons, right.reasons))
        }
    }
}

fn merge_reasons(mut left: Vec<String>, right: Vec<String>) -> Vec<String> {
    left.extend(right);
    left
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AttrValue;
    use crate::rule::parser::parse;

    fn record(entries: &[(&str, AttrValue)]) -> Record {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_absent_ast_is_sentinel_failure() {
        let data = Record::new();
        assert_eq!(
            evaluate(None, &data),
            Evaluation::fail(vec!["No rule to evaluate.".to_string()])
        );
    }

    #[test]
    fn test_and_passes_with_no_reasons() {
        let ast = parse("age > 30 AND department = 'IT'");
        let data = record(&[
            ("age", AttrValue::from(100)),
            ("department", AttrValue::from("IT")),
        ]);
        assert_eq!(evaluate(Some(&ast), &data), Evaluation::pass());
    }

    #[test]
    fn test_and_left_failure_keeps_result_false() {
        let ast = parse("age > 30 AND department = 'IT'");
        let data = record(&[
            ("age", AttrValue::from(10)),
            ("department", AttrValue::from("IT")),
        ]);
        // Right side passes and contributes nothing, but the verdict
        // stays false with the left side's reason.
        assert_eq!(
            evaluate(Some(&ast), &data),
            Evaluation::fail(vec!["10 is not greater than 30.".to_string()])
        );
    }

    #[test]
    fn test_and_both_failures_concatenate_in_order() {
        let ast = parse("age > 30 AND salary > 100000");
        let data = record(&[
            ("age", AttrValue::from(10)),
            ("salary", AttrValue::from(60000)),
        ]);
        assert_eq!(
            evaluate(Some(&ast), &data),
            Evaluation::fail(vec![
                "10 is not greater than 30.".to_string(),
                "60000 is not greater than 100000.".to_string(),
            ])
        );
    }

    #[test]
    fn test_and_with_true_left_takes_right_verbatim() {
        let ast = parse("age > 30 AND salary > 100000");
        let data = record(&[
            ("age", AttrValue::from(40)),
            ("salary", AttrValue::from(60000)),
        ]);
        assert_eq!(
            evaluate(Some(&ast), &data),
            Evaluation::fail(vec!["60000 is not greater than 100000.".to_string()])
        );
    }

    #[test]
    fn test_or_success_collapses_to_synthetic_reason() {
        let ast = parse("age < 18 OR department = 'IT'");
        let data = record(&[
            ("age", AttrValue::from(40)),
            ("department", AttrValue::from("IT")),
        ]);
        assert_eq!(
            evaluate(Some(&ast), &data),
            Evaluation {
                result: true,
                reasons: vec!["One of the conditions is true.".to_string()],
            }
        );
    }

    #[test]
    fn test_or_failure_concatenates_both_sides() {
        let ast = parse("age > 30 OR age < 10");
        let data = record(&[("age", AttrValue::from(20))]);
        assert_eq!(
            evaluate(Some(&ast), &data),
            Evaluation::fail(vec![
                "20 is not greater than 30.".to_string(),
                "20 is not less than 10.".to_string(),
            ])
        );
    }

    #[test]
    fn test_malformed_leaf_degrades_inside_tree() {
        let ast = parse("??? AND age > 30");
        let data = record(&[("age", AttrValue::from(40))]);
        assert_eq!(
            evaluate(Some(&ast), &data),
            Evaluation::fail(vec!["Invalid condition format.".to_string()])
        );
    }

    #[test]
    fn test_evaluation_serializes_to_boundary_shape() {
        let eval = Evaluation::fail(vec!["10 is not greater than 30.".to_string()]);
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "result": false,
                "reasons": ["10 is not greater than 30."],
            })
        );
    }
}
