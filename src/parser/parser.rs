/*
 * ==========================================================================
 * CONDEX - Boolean Conditions with Claws!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * evaluation drivers used to transform a condition string into a single
 * boolean result for the Condex condition language.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `expressions.rs`  → Condition grammar & operator precedence
 * - `helpers.rs`      → Token pushback and consumption utilities
 *
 * This file serves as the **root coordinator** of the evaluation process.
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

use crate::error::CondexError;
use crate::lexer::token::{Token, TokenKind};
use crate::lexer::Scanner;
use crate::span::Span;
use crate::symbols::SymbolTable;

/// The outcome of evaluating a (sub-)expression.
///
/// Every grammar rule that finds an operand produces one of these: the
/// evaluated boolean alongside a human-readable reconstruction of the
/// sub-expression just parsed. The reconstruction exists purely for
/// diagnostics and debugging; callers that only need the result should
/// use [`Parser::evaluate`] and ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Textual rendering of the parsed sub-expression,
    /// e.g. `"name1 and not name2"`.
    pub text: String,

    /// The evaluated boolean value of that sub-expression.
    pub value: bool,
}

/// The core Condex recursive-descent parser.
///
/// This structure maintains:
/// - The scanner positioned within the condition string
/// - A single-slot pushback buffer for one token of lookahead
///
/// The grammar logic is implemented through extension modules
/// (`expressions`, `helpers`) via additional `impl Parser` blocks.
///
/// A parser borrows its condition and symbol table for exactly one
/// evaluation; there is no internal locking and no state survives the
/// call. Concurrent evaluations each construct their own parser (the
/// crate-level [`crate::evaluate`] does this per call).
pub struct Parser<'a> {
    /// Scanner over the condition string, resolving variables against
    /// the bound symbol table.
    pub(crate) scanner: Scanner<'a>,

    /// The single-slot lookahead buffer. Holds at most one token that a
    /// grammar rule inspected and restored for the next rule.
    pub(crate) pushback: Option<Token>,

    /// Total character length of the condition, kept for error spans.
    pub(crate) source_len: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a condition string and its symbol table.
    ///
    /// # Parameters
    /// - `condition`: The condition text, e.g. `"name1 and not name2"`.
    /// - `symbols`: The table resolving every variable the condition
    ///   may reference.
    ///
    /// # Returns
    /// A parser with a fresh scanner at position `0` and an empty
    /// pushback buffer.
    pub fn new(condition: &'a str, symbols: &'a SymbolTable) -> Self {
        Self {
            scanner: Scanner::new(condition, symbols),
            pushback: None,
            source_len: condition.chars().count(),
        }
    }

    /// Evaluates the condition to a single boolean.
    ///
    /// This is the **main driver** of the recursive-descent evaluator.
    ///
    /// # Behavior
    /// - Drives the full expression grammar over the token stream.
    /// - Requires the entire condition to be consumed: a well-formed
    ///   expression followed by further tokens (e.g. `"name1 name2"`)
    ///   is a syntax error.
    /// - A condition that produced no result at all (empty input, or a
    ///   dangling operator such as `"name1 or"`) fails with the generic
    ///   invalid-condition error.
    ///
    /// # Errors
    /// Lexical, reference, and syntax errors from the scanner and
    /// grammar propagate as-is; see [`CondexError`].
    pub fn evaluate(&mut self) -> Result<bool, CondexError> {
        Ok(self.explain()?.value)
    }

    /// Evaluates the condition, returning the reconstruction alongside
    /// the boolean.
    ///
    /// Identical to [`Parser::evaluate`] except that the diagnostic
    /// rendering of the parsed expression is returned too.
    pub fn explain(&mut self) -> Result<Evaluation, CondexError> {
        let result = self.expression()?;

        let Some(evaluation) = result else {
            return Err(CondexError::incomplete(Span::new(0, self.source_len))
                .with_help("the condition is empty or ends in a dangling operator"));
        };

        // The grammar stops at the first token it cannot use; anything
        // left over means the condition was not a single expression.
        let trailing = self.pop_token()?;
        if trailing.kind != TokenKind::Eof {
            return Err(CondexError::syntax_error(
                format!("unexpected '{}' after the expression", trailing),
                trailing.span,
            ));
        }

        Ok(evaluation)
    }
}
