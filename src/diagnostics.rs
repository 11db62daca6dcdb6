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

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for Condex errors.
///
/// This printer:
/// - Formats errors with their stable code and position
/// - Displays the offending condition string
/// - Highlights the exact error span using carets (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified for single-line conditions and designed to remain
/// readable without color.
pub struct DiagnosticPrinter {
    /// The condition string that was being evaluated.
    ///
    /// Stored so the offending span can be rendered beneath the
    /// error header.
    condition: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given condition string.
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
        }
    }

    /// Renders a formatted diagnostic for the given error.
    ///
    /// # Output Example
    /// ```text
    /// error[E_REFERENCE]: variable 'ghost' does not exist
    ///   --> condition:11
    ///    |
    ///    | name1 and ghost
    ///    |           ^^^^^
    /// help: every variable in a condition must be present in the symbol table
    /// ```
    pub fn render(&self, error: &CondexError) -> String {
        let span = error.span;

        // Columns are reported 1-based in diagnostics.
        let mut out = format!(
            "error[{}]: {}\n  --> condition:{}\n",
            error.code,
            error.message,
            span.start + 1
        );

        out.push_str("   |\n");
        out.push_str(&format!("   | {}\n", self.condition));

        // Caret underline covering the error span. An end-of-input
        // span still gets one caret just past the text.
        let underline = format!("{}{}", " ".repeat(span.start), "^".repeat(span.width()));
        out.push_str(&format!("   | {}\n", underline));

        if let Some(help) = &error.help {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }

    /// Prints a formatted diagnostic to stderr.
    pub fn print(&self, error: &CondexError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolTable;

    #[test]
    fn renders_a_caret_under_the_offending_span() {
        let symbols = SymbolTable::from_iter([("name1", true)]);
        let condition = "name1 and ghost";
        let err = crate::evaluate(condition, &symbols).unwrap_err();

        let rendered = DiagnosticPrinter::new(condition).render(&err);

        assert!(rendered.starts_with("error[E_REFERENCE]"));
        assert!(rendered.contains("   | name1 and ghost\n"));
        assert!(rendered.contains("   |           ^^^^^\n"));
        assert!(rendered.contains("help:"));
    }

    #[test]
    fn end_of_input_errors_still_get_a_caret() {
        let symbols = SymbolTable::from_iter([("name1", true), ("name2", false)]);
        let condition = "(name1 and name2";
        let err = crate::evaluate(condition, &symbols).unwrap_err();

        let rendered = DiagnosticPrinter::new(condition).render(&err);
        assert!(rendered.contains('^'));
    }
}
