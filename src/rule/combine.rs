//! Rule combinator

use crate::rule::ast::AstNode;
use crate::rule::parser::parse;

/// Fold an ordered sequence of rule strings into a single AST.
///
/// Missing and empty entries are skipped. The surviving rules are parsed
/// in input order and joined left-associatively under AND, so every rule
/// must hold for the combined rule to hold. An input with nothing to
/// parse yields no AST; the evaluator turns that into its sentinel
/// failure.
pub fn combine_rules(rules: &[Option<String>]) -> Option<AstNode> {
    let mut combined: Option<AstNode> = None;
    for rule in rules.iter().flatten() {
        if rule.is_empty() {
            continue;
        }
        let ast = parse(rule);
        combined = Some(match combined {
            None => ast,
            Some(acc) => AstNode::and(acc, ast),
        });
    }
    combined
}
