/*
 * ==========================================================================
 * CONDEX - Boolean Conditions with Claws!
 * ==========================================================================
 *
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

use std::fmt;

use crate::span::Span;

#[derive(Debug, Clone)]
pub struct CondexError {
    /// Stable error code (E_LEX, E_REFERENCE, E_SYNTAX, E_INCOMPLETE)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary location within the condition string
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl CondexError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Lexical error (a character the scanner cannot classify)
    pub fn lexical_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_LEX", message, span)
    }

    /// Reference error (variable absent from the symbol table)
    pub fn reference_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_REFERENCE", message, span)
    }

    /// Syntax error (a token of unexpected kind where another was required)
    pub fn syntax_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_SYNTAX", message, span)
    }

    /// Incomplete-expression error, raised only by the top-level entry
    /// point when the grammar produced no result at all (empty input or a
    /// dangling operator).
    pub fn incomplete(span: Span) -> Self {
        Self::new("E_INCOMPLETE", "invalid condition", span)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for CondexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for CondexError {}
