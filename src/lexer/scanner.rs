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
use crate::lexer::alphabet::is_ident_char;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use crate::symbols::SymbolTable;

/// The Condex lexical scanner.
///
/// Converts a condition string into a stream of typed tokens, one call
/// at a time. The scanner borrows the symbol table for the duration of
/// a scan because variables are resolved **at scan time**: a `Variable`
/// token already carries its boolean value, and an unknown variable
/// fails immediately rather than being deferred to evaluation.
pub struct Scanner<'a> {
    chars: Vec<char>,
    current: usize,
    symbols: &'a SymbolTable,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner over a condition string.
    ///
    /// # Parameters
    /// - `condition`: The raw condition text, e.g. `"name1 and not name2"`.
    /// - `symbols`: The symbol table used to resolve variable names.
    ///
    /// # Returns
    /// A scanner with its cursor at position `0`, ready to produce
    /// tokens via `next_token()`.
    pub fn new(condition: &str, symbols: &'a SymbolTable) -> Self {
        Self {
            chars: condition.chars().collect(),
            current: 0,
            symbols,
        }
    }

    /// Scans and returns the next token from the condition string.
    ///
    /// # Behavior
    /// - Skips space and tab characters (the only whitespace Condex
    ///   recognizes).
    /// - At each remaining position, attempts matches in priority
    ///   order: the keywords `or`, `and`, `not` (with a boundary check
    ///   so that `origin` or `android` scan as variable names), then
    ///   `(` and `)`, then the maximal run of identifier characters as
    ///   a variable name.
    /// - Returns a `TokenKind::Eof` token once the input is exhausted.
    ///
    /// # Errors
    /// - `E_LEX` if a character outside the identifier alphabet and
    ///   outside the recognized punctuation is found.
    /// - `E_REFERENCE` if a variable name is not present in the symbol
    ///   table.
    pub fn next_token(&mut self) -> Result<Token, CondexError> {
        while let Some(&ch) = self.chars.get(self.current) {
            match ch {
                ' ' | '\t' => {
                    self.current += 1;
                }

                '(' => {
                    let span = Span::at(self.current);
                    self.current += 1;
                    return Ok(Token::new(TokenKind::LeftParen, span));
                }

                ')' => {
                    let span = Span::at(self.current);
                    self.current += 1;
                    return Ok(Token::new(TokenKind::RightParen, span));
                }

                _ => {
                    if let Some(token) = self.keyword("or", TokenKind::Or) {
                        return Ok(token);
                    }
                    if let Some(token) = self.keyword("and", TokenKind::And) {
                        return Ok(token);
                    }
                    if let Some(token) = self.keyword("not", TokenKind::Not) {
                        return Ok(token);
                    }

                    return self.variable();
                }
            }
        }

        Ok(Token::new(TokenKind::Eof, Span::at(self.current)))
    }

    /// Attempts to match a keyword at the cursor and consume it.
    ///
    /// A keyword only matches when the character following it is absent
    /// or outside the identifier alphabet. End of input counts as a
    /// boundary, so a condition ending in a bare `or` still scans the
    /// keyword (and the parser then reports the dangling operator).
    ///
    /// # Returns
    /// - `Some(token)` if the keyword matched and was consumed
    /// - `None` otherwise, leaving the cursor untouched
    fn keyword(&mut self, word: &str, kind: TokenKind) -> Option<Token> {
        let len = word.len();
        let end = self.current + len;

        if end > self.chars.len() {
            return None;
        }
        if !self.chars[self.current..end].iter().copied().eq(word.chars()) {
            return None;
        }
        if let Some(&next) = self.chars.get(end) {
            if is_ident_char(next) {
                return None;
            }
        }

        let span = Span::new(self.current, end);
        self.current = end;
        Some(Token::new(kind, span))
    }

    /// Consumes the maximal run of identifier characters as a variable
    /// name and resolves it against the symbol table.
    ///
    /// # Errors
    /// - `E_LEX` if the cursor is not on an identifier character at all
    ///   (an uppercase letter or stray punctuation).
    /// - `E_REFERENCE` if the name is not in the symbol table.
    fn variable(&mut self) -> Result<Token, CondexError> {
        let start = self.current;

        while self
            .chars
            .get(self.current)
            .is_some_and(|&ch| is_ident_char(ch))
        {
            self.current += 1;
        }

        if self.current == start {
            let ch = self.chars[start];
            let mut err = CondexError::lexical_error(
                format!("unexpected character '{}'", ch),
                Span::at(start),
            );
            if ch.is_ascii_uppercase() {
                err = err.with_help(
                    "variable names are case-sensitive and use only lowercase \
                     letters, digits, and underscores",
                );
            }
            return Err(err);
        }

        let name: String = self.chars[start..self.current].iter().collect();
        let span = Span::new(start, self.current);

        match self.symbols.get(&name) {
            Some(value) => Ok(Token::variable(name, value, span)),
            None => Err(CondexError::reference_error(
                format!("variable '{}' does not exist", name),
                span,
            )
            .with_help("every variable in a condition must be present in the symbol table")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SymbolTable {
        SymbolTable::from_iter([
            ("name1".to_string(), true),
            ("name2".to_string(), false),
            ("or1".to_string(), true),
            ("android".to_string(), true),
        ])
    }

    fn kinds(condition: &str) -> Vec<TokenKind> {
        let symbols = table();
        let mut scanner = Scanner::new(condition, &symbols);
        let mut out = Vec::new();
        loop {
            let token = scanner.next_token().expect("scan failure");
            let kind = token.kind;
            out.push(kind);
            if kind == TokenKind::Eof {
                return out;
            }
        }
    }

    #[test]
    fn scans_keywords_parens_and_variables() {
        assert_eq!(
            kinds("not (name1 and name2) or name1"),
            vec![
                TokenKind::Not,
                TokenKind::LeftParen,
                TokenKind::Variable,
                TokenKind::And,
                TokenKind::Variable,
                TokenKind::RightParen,
                TokenKind::Or,
                TokenKind::Variable,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keyword_prefix_of_variable_is_a_variable() {
        // "or1" and "android" begin with keywords but continue with
        // identifier characters, so the boundary check must reject the
        // keyword match.
        assert_eq!(kinds("or1"), vec![TokenKind::Variable, TokenKind::Eof]);
        assert_eq!(kinds("android"), vec![TokenKind::Variable, TokenKind::Eof]);
    }

    #[test]
    fn trailing_keyword_is_still_a_keyword() {
        assert_eq!(
            kinds("name1 or"),
            vec![TokenKind::Variable, TokenKind::Or, TokenKind::Eof]
        );
    }

    #[test]
    fn variable_value_is_resolved_at_scan_time() {
        let symbols = table();
        let mut scanner = Scanner::new("name1", &symbols);
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Variable);
        assert_eq!(token.name, "name1");
        assert!(token.value);
        assert_eq!(token.span, Span::new(0, 5));
    }

    #[test]
    fn whitespace_is_space_and_tab_only() {
        assert_eq!(
            kinds(" \t name1\t "),
            vec![TokenKind::Variable, TokenKind::Eof]
        );
    }

    #[test]
    fn unknown_variable_fails_at_scan_time() {
        let symbols = table();
        let mut scanner = Scanner::new("missing", &symbols);
        let err = scanner.next_token().unwrap_err();
        assert_eq!(err.code, "E_REFERENCE");
        assert!(err.message.contains("missing"));
    }

    #[test]
    fn uppercase_is_a_lexical_error() {
        let symbols = table();
        let mut scanner = Scanner::new("Name1", &symbols);
        let err = scanner.next_token().unwrap_err();
        assert_eq!(err.code, "E_LEX");
        assert!(err.help.is_some());
    }

    #[test]
    fn stray_punctuation_is_a_lexical_error() {
        let symbols = table();
        let mut scanner = Scanner::new("name1 % name2", &symbols);
        scanner.next_token().unwrap();
        let err = scanner.next_token().unwrap_err();
        assert_eq!(err.code, "E_LEX");
        assert_eq!(err.span, Span::at(6));
    }

    #[test]
    fn empty_input_yields_eof() {
        let symbols = table();
        let mut scanner = Scanner::new("", &symbols);
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Eof);
    }
}
