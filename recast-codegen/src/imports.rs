//! Python import collection.

use std::collections::BTreeSet;

use indexmap::{IndexMap, IndexSet};

/// Tracks Python imports and deduplicates them.
///
/// Modules keep insertion order; symbols within a module are sorted.
///
/// # Example
///
/// ```
/// use recast_codegen::imports::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("dataclasses", "field");
/// imports.add("dataclasses", "dataclass");
/// imports.add_module("msgspec");
///
/// assert_eq!(
///     imports.render(),
///     ["import msgspec", "from dataclasses import dataclass, field"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// `import module`
    modules: IndexSet<String>,
    /// `from module import symbol, ...`
    symbols: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `from module import symbol`.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.symbols
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a plain `import module`.
    pub fn add_module(&mut self, module: &str) {
        self.modules.insert(module.to_string());
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        self.modules.extend(other.modules.iter().cloned());
        for (module, symbols) in &other.symbols {
            let entry = self.symbols.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.symbols
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.symbols.is_empty()
    }

    /// Render import statements: plain imports first, then `from` imports.
    pub fn render(&self) -> Vec<String> {
        let plain = self.modules.iter().map(|module| format!("import {}", module));
        let from = self.symbols.iter().map(|(module, symbols)| {
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            format!("from {} import {}", module, symbols.join(", "))
        });
        plain.chain(from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates() {
        let mut imports = ImportCollector::new();
        imports.add("pydantic", "BaseModel");
        imports.add("pydantic", "BaseModel");
        imports.add_module("msgspec");
        imports.add_module("msgspec");

        assert_eq!(
            imports.render(),
            ["import msgspec", "from pydantic import BaseModel"]
        );
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut first = ImportCollector::new();
        first.add("dataclasses", "dataclass");

        let mut second = ImportCollector::new();
        second.add("attrs", "define");
        second.add("dataclasses", "field");

        first.merge(&second);

        assert!(first.has_symbol("dataclasses", "field"));
        assert_eq!(
            first.render(),
            [
                "from dataclasses import dataclass, field",
                "from attrs import define",
            ]
        );
    }

    #[test]
    fn test_empty() {
        let imports = ImportCollector::new();
        assert!(imports.is_empty());
        assert!(imports.render().is_empty());
    }
}
