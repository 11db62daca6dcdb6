/*
 * ==========================================================================
 * CONDEX - Boolean Conditions with Claws!
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root for the Condex condition language.
 *
 * Condex evaluates textual boolean conditions — variables combined with
 * `not`, `and`, `or`, and parentheses — against a caller-supplied
 * symbol table mapping variable names to boolean values.
 *
 * Evaluation Pipeline:
 *
 *   Condition String → Scanner → Tokens → Parser → bool
 *
 * The parser evaluates while it parses: no expression tree is built,
 * and each grammar rule carries a textual reconstruction of the
 * sub-expression alongside its boolean value for diagnostics.
 *
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 * Email:    sam@condex-lang.com
 * Website:  https://www.condex-lang.com
 * Github:   https://github.com/samwilcox/condex
 *
 * License:
 * This file is part of the Condex condition language project.
 *
 * Condex is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.condex-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

//! Evaluate boolean conditions against a symbol table.
//!
//! # Grammar
//! ```text
//! expression := and_expr ( "or"  and_expr )*
//! and_expr   := not_expr ( "and" not_expr )*
//! not_expr   := "not" not_expr | primary
//! primary    := "(" expression ")" | VARIABLE
//! ```
//! `not` binds tightest, then `and`, then `or`; `and` and `or` are
//! left-associative. Variable names use the alphabet `[a-z0-9_]`.
//!
//! # Example
//! ```
//! use condex::{evaluate, SymbolTable};
//!
//! let symbols = SymbolTable::from_iter([
//!     ("name1", true),
//!     ("name2", false),
//! ]);
//!
//! assert!(evaluate("name1 and not name2", &symbols).unwrap());
//! assert!(!evaluate("name2 or name1 and name2", &symbols).unwrap());
//! assert!(evaluate("ghost", &symbols).is_err());
//! ```

/// Rustc-style rendering of errors against the condition string.
pub mod diagnostics;

/// The error type shared by the scanner and the parser.
pub mod error;

/// Lexical analysis: tokens, the identifier alphabet, the scanner.
pub mod lexer;

/// The recursive-descent parser and evaluation drivers.
pub mod parser;

/// Source spans for tokens and errors.
pub mod span;

/// The caller-supplied variable mapping.
pub mod symbols;

pub use diagnostics::DiagnosticPrinter;
pub use error::CondexError;
pub use parser::{Evaluation, Parser};
pub use span::Span;
pub use symbols::SymbolTable;

/// Evaluates a condition string against a symbol table.
///
/// This is the main entry point of the crate. A fresh parser is
/// constructed per call, so repeated evaluations are independent and
/// concurrent callers never share scan state.
///
/// # Parameters
/// - `condition`: The condition text, e.g. `"name1 and not name2"`.
/// - `symbols`: The table supplying every variable the condition may
///   reference.
///
/// # Errors
/// - `E_LEX` for a character the scanner cannot classify
/// - `E_REFERENCE` for a variable absent from the table
/// - `E_SYNTAX` for a token of unexpected kind
/// - `E_INCOMPLETE` for an empty condition or a dangling operator
pub fn evaluate(condition: &str, symbols: &SymbolTable) -> Result<bool, CondexError> {
    Parser::new(condition, symbols).evaluate()
}

/// Evaluates a condition string, returning the diagnostic
/// reconstruction of the parsed expression alongside the boolean.
///
/// # Example
/// ```
/// use condex::{explain, SymbolTable};
///
/// let symbols = SymbolTable::from_iter([("name1", true), ("name2", false)]);
/// let evaluation = explain("name1  and ( not name2 )", &symbols).unwrap();
///
/// assert_eq!(evaluation.text, "name1 and (not name2)");
/// assert!(evaluation.value);
/// ```
pub fn explain(condition: &str, symbols: &SymbolTable) -> Result<Evaluation, CondexError> {
    Parser::new(condition, symbols).explain()
}
