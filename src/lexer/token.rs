/*
 * ==========================================================================
 * CONDEX - Boolean Conditions with Claws!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types produced by the Condex
 *            scanner and consumed by the condition parser.
 *
 * Author:    Sam Wilcox
 * Email:     sam@condex-lang.com
 * Website:   https://www.condex-lang.com
 * GitHub:    https://github.com/samwilcox/condex
 *
 * License:
 * This file is part of the Condex condition language project.
 *
 * Condex is dual-licensed under the terms of:
 *   - The MIT License
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

use std::fmt;

use crate::span::Span;

/// Represents the **category of a lexical token** in the Condex
/// condition language.
///
/// `TokenKind` identifies how a slice of the condition string should be
/// interpreted by the parser.
///
/// # Evaluation Pipeline Role
/// ```text
/// Condition String → Scanner → TokenKind → Parser → bool
/// ```
///
/// Each token kind directly influences:
/// - Which grammar rule applies next
/// - Operator precedence (`not` > `and` > `or`)
/// - Error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The unary negation keyword `not`.
    Not,

    /// The conjunction keyword `and`.
    And,

    /// The disjunction keyword `or`.
    Or,

    /// An opening parenthesis `(`.
    LeftParen,

    /// A closing parenthesis `)`.
    RightParen,

    /// A variable reference.
    ///
    /// Variable names consist of lowercase letters, digits, and
    /// underscores. The scanner resolves each variable against the
    /// symbol table at scan time, so a `Variable` token always carries
    /// both its name and its boolean value.
    Variable,

    /// End-of-input marker.
    ///
    /// This token is returned by the scanner once the condition string
    /// is exhausted and is used by the parser to determine when input
    /// has been fully consumed. It is never an error by itself.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Not => "not",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Variable => "variable",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{}", text)
    }
}

/// Represents a **single lexical token** produced by the Condex scanner.
///
/// A `Token` is a fully classified unit of the condition string
/// consisting of:
/// - A token category (`TokenKind`)
/// - The variable name and resolved boolean value (variables only)
/// - The source span for error reporting
///
/// # Example Tokens
/// ```text
/// name1  →  { kind: Variable, name: "name1", value: true }
/// and    →  { kind: And }
/// (      →  { kind: LeftParen }
/// ```
///
/// Tokens are immutable once created. The parser consumes each token
/// exactly once, or pushes it back exactly once to be re-consumed by
/// the next grammar rule.
#[derive(Debug, Clone)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The variable name, meaningful only when `kind` is `Variable`.
    /// Empty for every other kind.
    pub name: String,

    /// The variable's boolean value, resolved from the symbol table at
    /// scan time. Meaningful only when `kind` is `Variable`.
    pub value: bool,

    /// The character range this token covers in the condition string.
    pub span: Span,
}

impl Token {
    /// Creates an operator, parenthesis, or end-of-input token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            name: String::new(),
            value: false,
            span,
        }
    }

    /// Creates a variable token carrying its resolved value.
    pub fn variable(name: impl Into<String>, value: bool, span: Span) -> Self {
        Self {
            kind: TokenKind::Variable,
            name: name.into(),
            value,
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// This implementation intentionally prints what the user wrote
    /// (the variable name or the keyword text), rather than the full
    /// internal structure, keeping error messages clean:
    /// ```text
    /// expected ')', found 'name2'
    /// ```
    /// not:
    /// ```text
    /// Token { kind: Variable, name: "name2", ... }
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Variable => write!(f, "{}", self.name),
            _ => write!(f, "{}", self.kind),
        }
    }
}
