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

use crate::error::CondexError;
use crate::lexer::token::Token;
use crate::parser::parser::Parser;

impl<'a> Parser<'a> {
    /// Returns the next token, consuming the pushback buffer first.
    ///
    /// Several grammar rules must inspect the next token's kind to
    /// decide which production applies, then either consume it or
    /// restore it for the next rule. This method is the single point
    /// through which the grammar pulls tokens, so a pushed-back token
    /// is always replayed before the scanner advances.
    ///
    /// # Errors
    /// Propagates scanner failures (lexical errors, unknown variables).
    pub(crate) fn pop_token(&mut self) -> Result<Token, CondexError> {
        match self.pushback.take() {
            Some(token) => Ok(token),
            None => self.scanner.next_token(),
        }
    }

    /// Stores exactly one token to be returned by the next pop.
    ///
    /// # Critical Invariant
    /// At most one token resides in the buffer at a time. The grammar
    /// never needs more than one token of lookahead, so a second push
    /// before a pop indicates a parser bug.
    pub(crate) fn push_back(&mut self, token: Token) {
        debug_assert!(
            self.pushback.is_none(),
            "pushback buffer already holds a token"
        );
        self.pushback = Some(token);
    }
}
