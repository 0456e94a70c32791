use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed `predicate(arg, ...)` line of a fact file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    /// Text before the first `(`
    pub predicate: String,
    /// Cleaned arguments in source order
    pub args: Vec<String>,
}

impl Fact {
    /// Create a fact from a predicate and its arguments
    pub fn new(predicate: impl Into<String>, args: Vec<String>) -> Self {
        Self { predicate: predicate.into(), args }
    }

    /// Number of arguments
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Argument at `index`, if present
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.predicate, self.args.join(","))
    }
}

/// A run of consecutive argument positions: `count` arguments from `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgRange {
    /// First argument position
    pub start: usize,
    /// Maximum number of positions to take
    pub count: usize,
}

impl ArgRange {
    /// Create a range of `count` positions beginning at `start`
    pub const fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// A single position
    pub const fn single(index: usize) -> Self {
        Self::new(index, 1)
    }

    /// Number of positions actually available in a fact of the given arity.
    ///
    /// This is `min(count, arity - start)`, and zero when `start` lies past the
    /// last argument.
    pub fn available(&self, arity: usize) -> usize {
        self.count.min(arity.saturating_sub(self.start))
    }
}

impl fmt::Display for ArgRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.count)
    }
}

/// A unary membership predicate populated from one argument position.
///
/// Every fact whose predicate equals [`CategorySpec::predicate`] contributes its
/// argument at [`CategorySpec::arg_index`] to the category named
/// [`CategorySpec::name`]. Values also become entities whose identifiers carry
/// [`CategorySpec::type_tag`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Name of the emitted definition, e.g. `city:<c,t>`
    pub name: String,
    /// Type suffix of entity identifiers, e.g. `c` in `austin:c`
    pub type_tag: String,
    /// Predicate whose facts feed this category
    pub predicate: String,
    /// Argument position holding the entity name
    pub arg_index: usize,
}

impl CategorySpec {
    /// Create a category spec
    pub fn new(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        predicate: impl Into<String>,
        arg_index: usize,
    ) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            predicate: predicate.into(),
            arg_index,
        }
    }
}

/// A pairwise association populated from two argument ranges.
///
/// A matching fact contributes the cross product of the arguments in `arg1`
/// and `arg2`. Functional relations map each left value to a single right
/// value; the others are plain sets of pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationSpec {
    /// Name of the emitted definition, e.g. `loc:<lo,<lo,t>>`
    pub name: String,
    /// Predicate whose facts feed this relation
    pub predicate: String,
    /// Positions of the left-hand values
    pub arg1: ArgRange,
    /// Positions of the right-hand values
    pub arg2: ArgRange,
    /// Whether each left value maps to exactly one right value
    #[serde(default)]
    pub functional: bool,
}

impl RelationSpec {
    /// Create a relation spec
    pub fn new(
        name: impl Into<String>,
        predicate: impl Into<String>,
        arg1: ArgRange,
        arg2: ArgRange,
        functional: bool,
    ) -> Self {
        Self { name: name.into(), predicate: predicate.into(), arg1, arg2, functional }
    }

    /// Number of pairs a fact with `arity` arguments contributes
    pub fn pair_count(&self, arity: usize) -> usize {
        self.arg1.available(arity) * self.arg2.available(arity)
    }
}
