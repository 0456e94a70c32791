//! Accumulated tables ready for emission

use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Everything the emitter writes, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    /// Every distinct category value
    pub entities: BTreeSet<String>,
    /// One table per distinct category name, in first-declaration order
    pub categories: Vec<CategoryTable>,
    /// One table per distinct relation name, in first-declaration order
    pub relations: Vec<RelationTable>,
}

impl Database {
    pub fn category(&self, name: &str) -> Option<&CategoryTable> {
        self.categories.iter().find(|table| table.name == name)
    }

    pub fn relation(&self, name: &str) -> Option<&RelationTable> {
        self.relations.iter().find(|table| table.name() == name)
    }
}

/// Values collected for one category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    pub name: String,
    /// Distinct type tags of the specs sharing this name, in declaration order
    pub type_tags: Vec<String>,
    /// Values in input order, duplicates kept
    pub values: Vec<String>,
}

/// Pairs collected for one relation name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationTable {
    /// Left value -> right value. A later pair overwrites the value of an
    /// earlier one with the same left value; the key keeps its first position.
    Functional { name: String, entries: IndexMap<String, String> },
    /// Every pair in input order, duplicates kept
    SetValued { name: String, pairs: Vec<(String, String)> },
}

impl RelationTable {
    /// Fold pairs into a functional table, last write wins
    pub fn functional(name: impl Into<String>, pairs: Vec<(String, String)>) -> Self {
        let mut entries = IndexMap::with_capacity(pairs.len());
        for (left, right) in pairs {
            entries.insert(left, right);
        }
        Self::Functional { name: name.into(), entries }
    }

    pub fn set_valued(name: impl Into<String>, pairs: Vec<(String, String)>) -> Self {
        Self::SetValued { name: name.into(), pairs }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Functional { name, .. } | Self::SetValued { name, .. } => name,
        }
    }

    pub fn is_functional(&self) -> bool {
        matches!(self, Self::Functional { .. })
    }

    /// Number of entries (functional) or pairs (set-valued)
    pub fn len(&self) -> usize {
        match self {
            Self::Functional { entries, .. } => entries.len(),
            Self::SetValued { pairs, .. } => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Right value of `left` in a functional table
    pub fn lookup(&self, left: &str) -> Option<&str> {
        match self {
            Self::Functional { entries, .. } => entries.get(left).map(String::as_str),
            Self::SetValued { .. } => None,
        }
    }

    /// Whether the pair is present
    pub fn contains(&self, left: &str, right: &str) -> bool {
        match self {
            Self::Functional { entries, .. } => entries.get(left).is_some_and(|r| r == right),
            Self::SetValued { pairs, .. } => pairs.iter().any(|(l, r)| l == left && r == right),
        }
    }
}
