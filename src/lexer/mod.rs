/*
 * ==========================================================================
 * CONDEX - Boolean Conditions with Claws!
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for Condex lexical analysis.
 *
 * This module wires together the lexer sub-modules:
 *   - Token definitions
 *   - The identifier alphabet
 *   - The scanner itself
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

/// Token categories and the token type itself.
pub mod token;

/// The identifier alphabet (`[a-z0-9_]`) shared by variable scanning
/// and keyword boundary detection.
pub mod alphabet;

/// The scanner: condition string in, typed tokens out.
pub mod scanner;

/// Re-export the main lexer types so callers can use
/// `crate::lexer::{Scanner, Token, TokenKind}`.
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
