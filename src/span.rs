/*
 * ==========================================================================
 * CONDEX - Boolean Conditions with Claws!
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Defines the source span type used to locate tokens and errors
 *            within a condition string.
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

/// A half-open character range `[start, end)` into a condition string.
///
/// Conditions are always a single line, so a span is a pair of character
/// offsets rather than a line/column pair. Spans are attached to every
/// token during scanning and carried into errors, allowing diagnostics
/// to point a caret at the exact characters that caused a failure.
///
/// # Example
/// ```text
/// name1 and name2
/// ^^^^^              Span { start: 0, end: 5 }
///       ^^^          Span { start: 6, end: 9 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Offset of the first character covered by this span.
    pub start: usize,

    /// Offset one past the last character covered by this span.
    pub end: usize,
}

impl Span {
    /// Creates a span covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a span covering the single character at `pos`.
    pub fn at(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }

    /// Number of characters covered. Never less than one when rendered,
    /// so an end-of-input span still gets a visible caret.
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_covers_a_single_character() {
        assert_eq!(Span::at(3), Span::new(3, 4));
        assert_eq!(Span::at(3).width(), 1);
    }

    #[test]
    fn width_is_never_zero() {
        // An end-of-input span is empty but must still render a caret.
        assert_eq!(Span::new(5, 5).width(), 1);
        assert_eq!(Span::new(2, 7).width(), 5);
    }
}
