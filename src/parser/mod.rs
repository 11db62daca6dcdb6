/*
 * ==========================================================================
 * CONDEX - Boolean Conditions with Claws!
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Condex recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic and evaluation drivers
 *   - The condition grammar
 *   - Token pushback utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct and the `Evaluation` result pair
/// - Exposes the `evaluate()` / `explain()` drivers
pub mod parser;

/// Expression-level parsing:
/// - expression → or → and → not → primary → variable
/// - evaluation folded into the parse, no expression tree
pub mod expressions;

/// Shared parser helpers:
/// - single-slot token pushback
/// - token popping through the lookahead buffer
pub mod helpers;

/// Re-export the public parser types so callers can use
/// `crate::parser::{Parser, Evaluation}`.
pub use parser::{Evaluation, Parser};
