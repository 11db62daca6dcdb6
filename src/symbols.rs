/*
 * ==========================================================================
 * CONDEX - Boolean Conditions with Claws!
 * ==========================================================================
 *
 * File:      symbols.rs
 * Purpose:   Defines the symbol table supplying boolean values for the
 *            variables referenced by a condition.
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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A mapping from variable name to boolean value.
///
/// The symbol table is the only external data the evaluator reads. It
/// is supplied by the caller — typically derived from feature flags,
/// request attributes, or detection results — and is read-only for the
/// duration of one evaluation.
///
/// Lookup is exact-match and case-sensitive. Names are conceptually
/// restricted to the identifier alphabet `[a-z0-9_]`; a key outside
/// that alphabet can never be referenced by a valid condition.
///
/// # JSON
/// Tables often originate as JSON objects, so `SymbolTable` derives
/// serde support and offers [`SymbolTable::from_json`]:
/// ```
/// use condex::SymbolTable;
///
/// let symbols = SymbolTable::from_json(r#"{"name1": true, "name2": false}"#).unwrap();
/// assert_eq!(symbols.get("name1"), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable {
    values: HashMap<String, bool>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a symbol table from a JSON object of booleans.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Defines or overwrites a variable.
    pub fn insert(&mut self, name: impl Into<String>, value: bool) {
        self.values.insert(name.into(), value);
    }

    /// Looks up a variable's value.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Returns true if the variable is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of defined variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no variables are defined.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, bool>> for SymbolTable {
    fn from(values: HashMap<String, bool>) -> Self {
        Self { values }
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        let mut symbols = SymbolTable::new();
        symbols.insert("name1", true);

        assert_eq!(symbols.get("name1"), Some(true));
        assert_eq!(symbols.get("Name1"), None);
        assert_eq!(symbols.get("name1 "), None);
    }

    #[test]
    fn builds_from_json_object() {
        let symbols = SymbolTable::from_json(r#"{"a": true, "b": false}"#).unwrap();
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols.get("a"), Some(true));
        assert_eq!(symbols.get("b"), Some(false));
        assert!(!symbols.contains("c"));
    }

    #[test]
    fn rejects_non_boolean_json_values() {
        assert!(SymbolTable::from_json(r#"{"a": 1}"#).is_err());
        assert!(SymbolTable::from_json(r#"["a"]"#).is_err());
    }

    #[test]
    fn round_trips_through_serde() {
        let symbols = SymbolTable::from_iter([("flag", true)]);
        let json = serde_json::to_string(&symbols).unwrap();
        assert_eq!(SymbolTable::from_json(&json).unwrap(), symbols);
    }
}
