//! Eligibility Core - boolean rule engine with failure-reason reporting
//!
//! This crate parses infix eligibility rules like
//! `age > 30 AND department = 'IT'` into an AST, folds any number of
//! independent rules into one tree, and evaluates the tree against a
//! record of attribute values. The result is a boolean verdict together
//! with ordered, human-readable reasons for failure.
//!
//! The engine is purely functional: no shared state, no I/O, no caching.
//! Every call parses fresh, so concurrent evaluations need no
//! coordination. Malformed rules never raise; they degrade to a `false`
//! verdict carrying a descriptive reason.
//!
//! ```
//! use eligibility_core::{evaluate_rules, AttrValue, Record};
//!
//! let mut record = Record::new();
//! record.insert("age".to_string(), AttrValue::from(100));
//! record.insert("department".to_string(), AttrValue::from("IT"));
//!
//! let rules = vec![
//!     Some("(age > 30 AND department = 'IT')".to_string()),
//!     Some("(age > 12)".to_string()),
//! ];
//! let eval = evaluate_rules(&rules, &record);
//! assert!(eval.result);
//! assert!(eval.reasons.is_empty());
//! ```

use serde::Deserialize;

pub mod error;
pub mod record;
pub mod rule;

pub use error::EngineError;
pub use record::{AttrValue, Record};
pub use rule::{combine_rules, evaluate, parse, AstNode, Evaluation};

/// One evaluation request as the surrounding service hands it over:
/// a list of rule strings (entries may be null) and the record to
/// evaluate them against.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalRequest {
    pub rules: Vec<Option<String>>,
    #[serde(default)]
    pub data: Record,
}

impl EvalRequest {
    /// Run this request through the engine.
    pub fn evaluate(&self) -> Evaluation {
        evaluate_rules(&self.rules, &self.data)
    }
}

/// Combine a sequence of rule strings and evaluate the result against a
/// record in one call. This is the engine's whole boundary surface: rule
/// strings and a record in, verdict and reasons out.
pub fn evaluate_rules(rules: &[Option<String>], record: &Record) -> Evaluation {
    let combined = combine_rules(rules);
    evaluate(combined.as_ref(), record)
}
