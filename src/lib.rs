//! # Introduction
//!
//! exprc parses a minimal arithmetic expression language and evaluates the
//! resulting syntax tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Tree → Evaluator
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds the expression tree.
//! 2. [`eval`] — walks the tree bottom-up and reduces it to an integer.
//! 3. [`diagnostics`] — renders caret-annotated error reports against the
//!    original source text.
//!
//! ## Supported language
//!
//! Decimal integer literals, binary `+ - * /`, comparisons `== != < <= > >=`,
//! unary `+`/`-`, and parentheses. Comparisons evaluate to `1` or `0`. The
//! whole input is one expression; there are no variables, function calls, or
//! statements.
//!
//! The library never terminates the process: every failure is returned as a
//! typed error carrying the byte offset where it was detected. The `exprc`
//! binary turns those errors into caret diagnostics on stderr and a non-zero
//! exit status.

pub mod diagnostics;
pub mod eval;
pub mod parser;
