//! Rule parsing and evaluation module
//!
//! This module handles parsing rule strings like
//! `age > 30 AND department = 'IT'` into an AST and evaluating the tree
//! against a data record, collecting reasons for failure.

mod ast;
mod combine;
mod evaluator;
mod matcher;
pub mod parser;


pub use ast::*;
pub use combine::*;
pub use evaluator::*;
pub use parser::*;
