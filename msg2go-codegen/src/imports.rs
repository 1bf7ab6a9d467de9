//! Import aggregation.

use indexmap::{IndexMap, IndexSet};

/// Packages and the symbols used from each of them.
///
/// Adding a package or symbol that is already present is a no-op, so
/// translators can declare their imports independently and the union stays
/// free of duplicates. Symbols keep first-seen order; [`ImportSet::sorted`]
/// yields packages ordered by path for deterministic output.
///
/// # Example
///
/// ```
/// use msg2go_codegen::ImportSet;
///
/// let mut imports = ImportSet::new();
/// imports.add("gioui.org/widget/material", "Label");
/// imports.add("gioui.org/unit", "Sp");
/// imports.add("gioui.org/widget/material", "Label");
///
/// let packages: Vec<&str> = imports.sorted().map(|(pkg, _)| pkg).collect();
/// assert_eq!(packages, ["gioui.org/unit", "gioui.org/widget/material"]);
/// assert_eq!(imports.symbols("gioui.org/widget/material").count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    packages: IndexMap<String, IndexSet<String>>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol used from a package.
    pub fn add(&mut self, package: &str, symbol: &str) -> &mut Self {
        let symbols = self.packages.entry(package.to_string()).or_default();
        if !symbols.contains(symbol) {
            symbols.insert(symbol.to_string());
        }
        self
    }

    /// Add several symbols used from a package.
    pub fn add_all<'a>(&mut self, package: &str, symbols: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for symbol in symbols {
            self.add(package, symbol);
        }
        self
    }

    /// Add a package without naming specific symbols.
    pub fn add_package(&mut self, package: &str) -> &mut Self {
        if !self.packages.contains_key(package) {
            self.packages.insert(package.to_string(), IndexSet::new());
        }
        self
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: &ImportSet) -> &mut Self {
        for (package, symbols) in &other.packages {
            self.add_package(package);
            self.add_all(package, symbols.iter().map(String::as_str));
        }
        self
    }

    /// Check if a package is imported.
    pub fn has_package(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    /// Check if a specific symbol is recorded for a package.
    pub fn has_symbol(&self, package: &str, symbol: &str) -> bool {
        self.packages
            .get(package)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Symbols recorded for a package, in first-seen order.
    pub fn symbols(&self, package: &str) -> impl Iterator<Item = &str> {
        self.packages
            .get(package)
            .into_iter()
            .flat_map(|symbols| symbols.iter().map(String::as_str))
    }

    /// Packages sorted by path, each with its symbols in first-seen order.
    pub fn sorted(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        let mut packages: Vec<_> = self
            .packages
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        packages.sort_by(|a, b| a.0.cmp(b.0));
        packages.into_iter()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Get the number of packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Total number of recorded symbols across all packages.
    pub fn symbol_count(&self) -> usize {
        self.packages.values().map(IndexSet::len).sum()
    }
}
