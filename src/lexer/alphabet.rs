/*
 * ==========================================================================
 * CONDEX - Boolean Conditions with Claws!
 * ==========================================================================
 *
 * File:      alphabet.rs
 * Purpose:   Defines the identifier alphabet for Condex variable names.
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

/// Determines whether a character belongs to the **identifier alphabet**
/// of the Condex condition language.
///
/// This function is used exclusively by the scanner, both to consume the
/// maximal run of characters forming a variable name and to detect the
/// boundary after the `and` / `or` / `not` keywords.
///
/// # Parameters
/// - `ch`: The character under the scan cursor.
///
/// # Returns
/// - `true` if the character may appear in a variable name.
/// - `false` otherwise.
///
/// # Language Rules
/// - Lowercase letters `a`–`z`
/// - Digits `0`–`9`
/// - Underscore `_`
///
/// Uppercase letters are deliberately excluded: variable names are
/// case-sensitive and always lowercase, so `Name1` is a lexical error
/// rather than an alias for `name1`.
pub fn is_ident_char(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '_')
}
