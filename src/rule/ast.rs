//! Abstract syntax tree for eligibility rules

/// AST node for a parsed rule.
///
/// An operand keeps its condition text unparsed; leaf validation happens
/// at evaluation time, so a malformed condition only surfaces when the
/// tree is walked.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Leaf condition like `age > 30`, stored as raw text
    Operand(String),
    /// AND connective over two sub-rules
    And(Box<AstNode>, Box<AstNode>),
    /// OR connective over two sub-rules
    Or(Box<AstNode>, Box<AstNode>),
}

impl AstNode {
    /// Build an AND node over two sub-trees.
    pub fn and(left: AstNode, right: AstNode) -> AstNode {
        AstNode::And(Box::new(left), Box::new(right))
    }

    /// Build an OR node over two sub-trees.
    pub fn or(left: AstNode, right: AstNode) -> AstNode {
        AstNode::Or(Box::new(left), Box::new(right))
    }
}
