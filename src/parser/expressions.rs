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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire Condex condition grammar**.
 *
 * Parsing order follows strict precedence:
 *
 *   expression → or → and → not → primary → variable
 *
 * Evaluation is folded into the parse: no expression tree is built, and
 * each rule returns the boolean value of the sub-expression it parsed
 * together with a textual reconstruction of it.
 *
 * Every rule returns `Result<Option<Evaluation>, CondexError>`:
 *  - `Err(..)`     → lexical, reference, or syntax failure (terminal)
 *  - `Ok(None)`    → "no result": input ended before an operand was
 *                    found here; ordinary control flow, not an error
 *  - `Ok(Some(e))` → an operand was parsed and evaluated
 *
 * "No result" percolates upward and is converted into the generic
 * invalid-condition error only by the top-level driver. A dangling
 * operator therefore invalidates the whole expression even when its
 * left operand parsed correctly.
 *
 * Both operands of `and` / `or` are always fully parsed and evaluated
 * before combination: evaluation is driven purely by successful
 * parsing, never short-circuited by value.
 *
 * ==========================================================================
 */

use crate::error::CondexError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::{Evaluation, Parser};

impl<'a> Parser<'a> {
    /// expression → or
    pub(crate) fn expression(&mut self) -> Result<Option<Evaluation>, CondexError> {
        self.or_expression()
    }

    /// or → and ( "or" and )*
    fn or_expression(&mut self) -> Result<Option<Evaluation>, CondexError> {
        let Some(mut left) = self.and_expression()? else {
            return Ok(None);
        };

        loop {
            let token = self.pop_token()?;
            match token.kind {
                TokenKind::Or => {}
                TokenKind::Eof => return Ok(Some(left)),
                _ => {
                    self.push_back(token);
                    return Ok(Some(left));
                }
            }

            let Some(right) = self.and_expression()? else {
                // Dangling "or": the accumulated left result is
                // discarded and "no result" propagates to the top.
                return Ok(None);
            };

            left = Evaluation {
                text: format!("{} or {}", left.text, right.text),
                value: left.value || right.value,
            };
        }
    }

    /// and → not ( "and" not )*
    fn and_expression(&mut self) -> Result<Option<Evaluation>, CondexError> {
        let Some(mut left) = self.not_expression()? else {
            return Ok(None);
        };

        loop {
            let token = self.pop_token()?;
            match token.kind {
                TokenKind::And => {}
                TokenKind::Eof => return Ok(Some(left)),
                _ => {
                    self.push_back(token);
                    return Ok(Some(left));
                }
            }

            let Some(right) = self.not_expression()? else {
                return Ok(None);
            };

            left = Evaluation {
                text: format!("{} and {}", left.text, right.text),
                value: left.value && right.value,
            };
        }
    }

    /// not → "not" not | primary
    ///
    /// Recursing on itself (rather than on primary) supports chained
    /// negation: `not not name1`.
    fn not_expression(&mut self) -> Result<Option<Evaluation>, CondexError> {
        let token = self.pop_token()?;
        match token.kind {
            TokenKind::Eof => return Ok(None),
            TokenKind::Not => {}
            _ => {
                self.push_back(token);
                return self.primary_expression();
            }
        }

        let Some(inner) = self.not_expression()? else {
            return Ok(None);
        };

        Ok(Some(Evaluation {
            text: format!("not {}", inner.text),
            value: !inner.value,
        }))
    }

    /// primary → "(" expression ")" | variable
    fn primary_expression(&mut self) -> Result<Option<Evaluation>, CondexError> {
        let token = self.pop_token()?;
        match token.kind {
            TokenKind::Eof => return Ok(None),
            TokenKind::LeftParen => {}
            _ => {
                self.push_back(token);
                return self.var_expression();
            }
        }

        let Some(inner) = self.expression()? else {
            return Ok(None);
        };

        let closing = self.pop_token()?;
        if closing.kind != TokenKind::RightParen {
            return Err(CondexError::syntax_error(
                format!("expected ')', found '{}'", closing),
                closing.span,
            )
            .with_help("every '(' needs a matching ')'"));
        }

        // The group propagates the inner expression's value unchanged;
        // the parentheses only affect the reconstruction.
        Ok(Some(Evaluation {
            text: format!("({})", inner.text),
            value: inner.value,
        }))
    }

    /// variable → VARIABLE
    ///
    /// The base case of the grammar. End of input here means "nothing
    /// left to parse" and yields no result rather than an error.
    fn var_expression(&mut self) -> Result<Option<Evaluation>, CondexError> {
        let token = self.pop_token()?;
        match token.kind {
            TokenKind::Eof => Ok(None),
            TokenKind::Variable => Ok(Some(Evaluation {
                value: token.value,
                text: token.name,
            })),
            _ => Err(CondexError::syntax_error(
                format!("expected a variable, found '{}'", token),
                token.span,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parser::Parser;
    use crate::symbols::SymbolTable;

    fn table() -> SymbolTable {
        SymbolTable::from_iter([("name1", true), ("name2", false), ("name3", true)])
    }

    fn eval(condition: &str) -> bool {
        let symbols = table();
        Parser::new(condition, &symbols)
            .evaluate()
            .unwrap_or_else(|err| panic!("{}: {}", condition, err))
    }

    fn explain(condition: &str) -> (String, bool) {
        let symbols = table();
        let evaluation = Parser::new(condition, &symbols).explain().unwrap();
        (evaluation.text, evaluation.value)
    }

    fn fails_with(condition: &str, code: &str) {
        let symbols = table();
        let err = Parser::new(condition, &symbols).evaluate().unwrap_err();
        assert_eq!(err.code, code, "{}: {}", condition, err);
    }

    #[test]
    fn single_variable() {
        assert!(eval("name1"));
        assert!(!eval("name2"));
    }

    #[test]
    fn negation_and_chained_negation() {
        assert!(!eval("not name1"));
        assert!(eval("not name2"));
        assert!(eval("not not name1"));
        assert!(!eval("not not not name1"));
    }

    #[test]
    fn conjunction_and_disjunction() {
        assert!(!eval("name1 and name2"));
        assert!(eval("name1 and name3"));
        assert!(eval("name1 or name2"));
        assert!(!eval("name2 or name2"));
    }

    #[test]
    fn and_binds_tighter_than_or() {
        // Parsed as name2 or (name1 and name2).
        assert!(!eval("name2 or name1 and name2"));
        assert!(eval("name1 and name2 or name3"));
    }

    #[test]
    fn not_binds_tighter_than_and() {
        assert!(eval("name1 and not name2"));
        assert!(!eval("not name1 and name3"));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert!(eval("name1 and not (name1 and name2)"));
        assert!(!eval("(name2 or name1) and name2"));
    }

    #[test]
    fn redundant_parentheses_are_transparent() {
        assert_eq!(eval("((((name1))))"), eval("name1"));
        assert_eq!(eval("((((name2))))"), eval("name2"));
        assert_eq!(eval("(not (name1 and (name2)))"), eval("not (name1 and name2)"));
    }

    #[test]
    fn left_associative_chains() {
        assert!(!eval("name1 and name3 and name2"));
        assert!(eval("name2 or name2 or name3"));
    }

    #[test]
    fn reconstruction_mirrors_the_parse() {
        assert_eq!(explain("name1"), ("name1".to_string(), true));
        assert_eq!(
            explain(" name1  and not\tname2 "),
            ("name1 and not name2".to_string(), true)
        );
        assert_eq!(
            explain("((name1 or name2))"),
            ("((name1 or name2))".to_string(), true)
        );
    }

    #[test]
    fn dangling_operators_yield_no_result() {
        fails_with("name1 or", "E_INCOMPLETE");
        fails_with("name1 and not", "E_INCOMPLETE");
        fails_with("not", "E_INCOMPLETE");
        fails_with("", "E_INCOMPLETE");
        fails_with("  \t ", "E_INCOMPLETE");
    }

    #[test]
    fn leading_operator_is_a_syntax_error() {
        fails_with("and name1", "E_SYNTAX");
        fails_with("or name1", "E_SYNTAX");
    }

    #[test]
    fn adjacent_variables_are_a_syntax_error() {
        fails_with("name1 name2", "E_SYNTAX");
    }

    #[test]
    fn unbalanced_parentheses_fail() {
        fails_with("(name1 and name2", "E_SYNTAX");
        fails_with("name1)", "E_SYNTAX");
        fails_with("()", "E_SYNTAX");
    }

    #[test]
    fn unknown_variable_fails_regardless_of_structure() {
        fails_with("ghost", "E_REFERENCE");
        fails_with("name1 or ghost", "E_REFERENCE");
        fails_with("not (ghost and name1)", "E_REFERENCE");
    }

    #[test]
    fn no_short_circuit_for_unknown_variables() {
        // name1 alone decides the disjunction, but the right operand is
        // still scanned and must resolve.
        fails_with("name1 or ghost", "E_REFERENCE");
        fails_with("name2 and ghost", "E_REFERENCE");
    }

    #[test]
    fn repeated_evaluation_is_idempotent() {
        let symbols = table();
        let first = Parser::new("name1 and not name2", &symbols).evaluate().unwrap();
        let second = Parser::new("name1 and not name2", &symbols).evaluate().unwrap();
        assert_eq!(first, second);
    }
}
