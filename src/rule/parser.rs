//! Rule string parser

use crate::rule::ast::AstNode;

/// Parse a rule string into an AST.
///
/// Total function: a string with no top-level connective becomes a single
/// [`AstNode::Operand`] carrying the trimmed text, whatever that text is.
/// Condition validation is deferred to evaluation.
///
/// Connective detection is a literal prefix scan: at every position where
/// the running parenthesis depth is zero, the remaining suffix is tested
/// against `AND` (first) and `OR`. The first hit wins; there is no
/// AND-over-OR precedence. Two known limitations follow from this scheme
/// and are kept for compatibility with existing rule sets:
///
/// - operand text containing `AND`/`OR` at depth zero (e.g. a value like
///   `'ANDY'`) is misread as a connective;
/// - the outer parenthesis strip is blind, so `(a) AND (b)` loses its
///   first `(` and last `)` and parses as one operand.
pub fn parse(rule: &str) -> AstNode {
    let mut rule = rule.trim();

    // Strip exactly one outer parenthesis layer, without re-checking.
    if rule.starts_with('(') && rule.ends_with(')') {
        rule = rule[1..rule.len() - 1].trim();
    }

    let mut depth: i32 = 0;
    for (i, c) in rule.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth != 0 {
            continue;
        }
        let rest = &rule[i..];
        let connective = if rest.starts_with("AND") {
            Some(("AND", AstNode::and as fn(AstNode, AstNode) -> AstNode))
        } else if rest.starts_with("OR") {
            Some(("OR", AstNode::or as fn(AstNode, AstNode) -> AstNode))
        } else {
            None
        };
        if let Some((token, build)) = connective {
            let left = parse(&rule[..i]);
            let right = parse(&rule[i + token.len()..]);
            return build(left, right);
        }
    }

    AstNode::Operand(rule.to_string())
}
