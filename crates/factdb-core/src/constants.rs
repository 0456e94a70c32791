//! Core constants used throughout the converter
//!
//! Fact syntax and the built-in GeoQuery geobase tables live here so the
//! parser and the default schema share one definition.

/// Fact line syntax
pub mod syntax {
    /// Separates the predicate from its argument list
    pub const OPEN_PAREN: char = '(';

    /// Separates arguments
    pub const ARG_SEPARATOR: char = ',';

    /// Punctuation removed from both ends of every argument
    pub const STRIP_CHARS: &[char] = &['\'', '.', ')', ']', '['];
}

/// Built-in GeoQuery geobase tables
pub mod geobase {
    /// Count that takes every remaining argument, used for list-valued slots
    pub const REST: usize = 1000;

    /// `(name, type_tag, predicate, arg_index)`
    pub const CATEGORIES: &[(&str, &str, &str, usize)] = &[
        ("state:<s,t>", "s", "state", 0),
        ("city:<c,t>", "c", "city", 2),
        ("capital:<c,t>", "c", "state", 2),
        ("lake:<l,t>", "l", "lake", 0),
        ("river:<r,t>", "r", "river", 0),
        ("mountain:<m,t>", "m", "mountain", 2),
    ];

    /// `(name, predicate, (arg1_start, arg1_count), (arg2_start, arg2_count), functional)`
    pub const RELATIONS: &[(&str, &str, (usize, usize), (usize, usize), bool)] = &[
        ("loc:<lo,<lo,t>>", "city", (2, 1), (0, 1), false),
        ("loc:<lo,<lo,t>>", "river", (0, 1), (2, REST), false),
        ("loc:<lo,<lo,t>>", "mountain", (2, 1), (0, 1), false),
        ("loc:<lo,<lo,t>>", "lake", (0, 1), (2, REST), false),
        ("next_to:<lo,<lo,t>>", "border", (0, 1), (2, REST), false),
        ("capital2:<s,<c,t>>", "state", (0, 1), (2, 1), false),
        ("population:<lo,<i,t>>", "state", (0, 1), (3, 1), false),
        ("capital:<s,c>", "state", (0, 1), (2, 1), true),
        ("area:<lo,i>", "state", (0, 1), (4, 1), true),
        ("area:<lo,i>", "lake", (0, 1), (2, 1), true),
        ("population:<lo,i>", "state", (0, 1), (3, 1), true),
        ("population:<lo,i>", "city", (0, 1), (3, 1), true),
        ("elevation:<lo,i>", "mountain", (2, 1), (3, 1), true),
        ("elevation:<lo,<i,t>>", "mountain", (2, 1), (3, 1), false),
        ("len:<r,i>", "river", (0, 1), (1, 1), true),
    ];
}

/// Output syntax of the emitted database
pub mod output {
    /// Name of the global entity list
    pub const ENTITIES: &str = "entities";

    /// Suffix of the membership/lookup dictionary of a table
    pub const DICTIONARY_SUFFIX: &str = "-dictionary";

    /// Suffix of the value array of a functional relation
    pub const ARRAY_SUFFIX: &str = "-array";
}
