//! Tree-walking evaluator for expression trees
//!
//! Walks the tree in post-order: both children of a binary node are reduced
//! to values before the node's own operation is applied. Arithmetic is
//! checked rather than wrapping; comparisons yield `1` or `0`.

pub mod errors;

pub use errors::EvalError;

use crate::parser::ast::{AstNode, BinOp};

/// Evaluate an expression tree to a single integer value.
pub fn eval(node: &AstNode) -> Result<i64, EvalError> {
    match node {
        AstNode::IntLiteral(n, _) => Ok(*n),
        AstNode::BinaryOp {
            op, left, right, ..
        } => {
            let span = node.span();
            let lhs = eval(left)?;
            let rhs = eval(right)?;

            match op {
                BinOp::Add => {
                    lhs.checked_add(rhs).ok_or_else(|| EvalError::IntegerOverflow {
                        operation: format!("{} + {}", lhs, rhs),
                        span,
                    })
                }
                BinOp::Sub => {
                    lhs.checked_sub(rhs).ok_or_else(|| EvalError::IntegerOverflow {
                        operation: format!("{} - {}", lhs, rhs),
                        span,
                    })
                }
                BinOp::Mul => {
                    lhs.checked_mul(rhs).ok_or_else(|| EvalError::IntegerOverflow {
                        operation: format!("{} * {}", lhs, rhs),
                        span,
                    })
                }
                BinOp::Div => {
                    if rhs == 0 {
                        return Err(EvalError::DivisionByZero { span });
                    }
                    lhs.checked_div(rhs).ok_or_else(|| EvalError::IntegerOverflow {
                        operation: format!("{} / {}", lhs, rhs),
                        span,
                    })
                }
                BinOp::Eq => Ok(i64::from(lhs == rhs)),
                BinOp::Ne => Ok(i64::from(lhs != rhs)),
                BinOp::Lt => Ok(i64::from(lhs < rhs)),
                BinOp::Le => Ok(i64::from(lhs <= rhs)),
            }
        }
    }
}
