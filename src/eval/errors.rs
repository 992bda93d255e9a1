//! Evaluation error types
//!
//! This module defines [`EvalError`], which represents arithmetic failures
//! discovered while walking the tree. All evaluation errors are fatal to the
//! evaluation; the caller decides how to report them.

use crate::parser::ast::Span;
use std::fmt;

/// Errors that can occur while evaluating an expression tree
#[derive(Debug, Clone)]
pub enum EvalError {
    /// Division by zero
    DivisionByZero { span: Span },

    /// Integer overflow in an arithmetic operation
    IntegerOverflow { operation: String, span: Span },
}

impl EvalError {
    /// Source span of the operator that failed.
    pub fn span(&self) -> Span {
        match self {
            EvalError::DivisionByZero { span } => *span,
            EvalError::IntegerOverflow { span, .. } => *span,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::DivisionByZero { .. } => write!(f, "Division by zero"),
            EvalError::IntegerOverflow { operation, .. } => {
                write!(f, "Integer overflow in operation: {}", operation)
            }
        }
    }
}

impl std::error::Error for EvalError {}
